//! Services behind the profile pages of the signed-in user.

use crate::backend::UserApi;
use crate::domain::auth::AuthenticatedUser;
use crate::domain::user::User;
use crate::dto::profile::ProfilePageData;
use crate::forms::profile::EditProfileForm;
use crate::services::ServiceResult;

/// Loads the current user's account together with their bookings.
pub async fn load_profile<A>(api: &A, user: &AuthenticatedUser) -> ServiceResult<ProfilePageData>
where
    A: UserApi + ?Sized,
{
    let profile = api.get_profile(user).await?;
    let mut with_bookings = api.get_user_bookings(user, profile.id).await?;

    let mut bookings = std::mem::take(&mut with_bookings.bookings);
    bookings.sort_by(|a, b| b.booking_date.cmp(&a.booking_date));

    Ok(ProfilePageData {
        user: with_bookings,
        bookings,
    })
}

/// Loads the account shown in the edit form.
pub async fn load_account<A>(api: &A, user: &AuthenticatedUser) -> ServiceResult<User>
where
    A: UserApi + ?Sized,
{
    Ok(api.get_profile(user).await?)
}

/// Applies the edit form. Returns the new email when it changed so the
/// session can follow it.
pub async fn update_profile<A>(
    api: &A,
    user: &AuthenticatedUser,
    form: EditProfileForm,
) -> ServiceResult<Option<String>>
where
    A: UserApi + ?Sized,
{
    let account = api.get_profile(user).await?;
    let update = form.into_update(&account.email)?;

    api.update_user(user, account.id, &update)
        .await
        .map_err(|err| {
            log::error!("Failed to update profile of {}: {err}", account.email);
            err
        })?;

    Ok(update.email)
}

/// Permanently deletes the current user's account.
pub async fn delete_account<A>(api: &A, user: &AuthenticatedUser) -> ServiceResult<()>
where
    A: UserApi + ?Sized,
{
    let account = api.get_profile(user).await?;

    api.delete_user(user, account.id).await.map_err(|err| {
        log::error!("Failed to delete account {}: {err}", account.email);
        err
    })?;

    log::info!("Account {} deleted by its owner", account.email);
    Ok(())
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;
    use crate::backend::mock::MockBackend;
    use crate::backend::BackendError;
    use crate::domain::booking::Booking;
    use crate::domain::flight::SeatClass;
    use crate::domain::types::BookingId;
    use crate::domain::user::Role;
    use crate::services::ServiceError;
    use crate::services::test_support::{customer, user};

    fn booking(id: i64, day: u32) -> Booking {
        Booking {
            id: BookingId::new(id).unwrap(),
            confirmation_code: Some(format!("JK{id:04}")),
            seat_class: SeatClass::Economy,
            passengers: 1,
            seat_number: None,
            booking_date: NaiveDate::from_ymd_opt(2025, 5, day)
                .and_then(|d| d.and_hms_opt(9, 0, 0)),
            flight: None,
            user_email: None,
        }
    }

    #[actix_web::test]
    async fn profile_lists_newest_bookings_first() {
        let mut api = MockBackend::new();
        api.expect_get_profile()
            .returning(|_| Ok(user(4, Role::User)));
        api.expect_get_user_bookings()
            .withf(|_, id| id.get() == 4)
            .returning(|_, _| {
                let mut account = user(4, Role::User);
                account.bookings = vec![booking(1, 2), booking(2, 20), booking(3, 11)];
                Ok(account)
            });

        let data = load_profile(&api, &customer()).await.unwrap();

        let ids: Vec<i64> = data.bookings.iter().map(|b| b.id.get()).collect();
        assert_eq!(ids, vec![2, 3, 1]);
        assert!(data.user.bookings.is_empty());
    }

    #[actix_web::test]
    async fn expired_token_maps_to_session_expired() {
        let mut api = MockBackend::new();
        api.expect_get_profile()
            .returning(|_| Err(BackendError::Unauthorized("expired".into())));

        let result = load_profile(&api, &customer()).await;

        assert!(matches!(result, Err(ServiceError::SessionExpired)));
    }

    #[actix_web::test]
    async fn unchanged_profile_is_not_sent() {
        let mut api = MockBackend::new();
        api.expect_get_profile()
            .returning(|_| Ok(user(4, Role::User)));
        api.expect_update_user().never();

        let form = EditProfileForm {
            email: "user4@example.com".into(),
            ..Default::default()
        };

        let result = update_profile(&api, &customer(), form).await;
        assert!(matches!(result, Err(ServiceError::Form(_))));
    }

    #[actix_web::test]
    async fn changed_email_is_returned() {
        let mut api = MockBackend::new();
        api.expect_get_profile()
            .returning(|_| Ok(user(4, Role::User)));
        api.expect_update_user()
            .withf(|_, id, update| {
                id.get() == 4 && update.email.as_deref() == Some("new@example.com")
            })
            .times(1)
            .returning(|_, _, _| Ok(()));

        let form = EditProfileForm {
            email: "new@example.com".into(),
            ..Default::default()
        };

        let email = update_profile(&api, &customer(), form).await.unwrap();
        assert_eq!(email.as_deref(), Some("new@example.com"));
    }

    #[actix_web::test]
    async fn delete_account_targets_own_id() {
        let mut api = MockBackend::new();
        api.expect_get_profile()
            .returning(|_| Ok(user(4, Role::User)));
        api.expect_delete_user()
            .withf(|_, id| id.get() == 4)
            .times(1)
            .returning(|_, _| Ok(()));

        delete_account(&api, &customer()).await.unwrap();
    }
}
