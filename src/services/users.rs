//! Admin user management.

use crate::backend::UserApi;
use crate::domain::auth::AuthenticatedUser;
use crate::domain::types::UserId;
use crate::domain::user::{Role, User};
use crate::dto::admin::{UsersPageData, UsersQuery};
use crate::pagination::{PageState, Paginated};
use crate::services::{ServiceResult, ensure_role};

/// Loads the user list filtered by role and clamped to an existing page.
pub async fn load_users<A>(
    api: &A,
    user: &AuthenticatedUser,
    query: UsersQuery,
) -> ServiceResult<UsersPageData>
where
    A: UserApi + ?Sized,
{
    ensure_role(user, Role::Admin)?;

    let role = query
        .role
        .as_deref()
        .map(str::trim)
        .filter(|role| !role.is_empty())
        .map(Role::try_from)
        .transpose()?;

    let users: Vec<User> = api
        .list_users(user)
        .await?
        .into_iter()
        .filter(|account| role.is_none_or(|role| account.role == role))
        .collect();

    let state = PageState::with_default_size(users.len(), query.page.unwrap_or(1));

    Ok(UsersPageData {
        users: Paginated::from_filtered(&users, &state),
        role,
    })
}

pub async fn delete_user<A>(api: &A, user: &AuthenticatedUser, user_id: i64) -> ServiceResult<()>
where
    A: UserApi + ?Sized,
{
    ensure_role(user, Role::Admin)?;

    let user_id = UserId::new(user_id)?;
    let account = api.get_user(user, user_id).await?;

    api.delete_user(user, user_id).await.map_err(|err| {
        log::error!("Failed to delete user {} ({user_id}): {err}", account.email);
        err
    })?;

    log::info!("User {} ({user_id}) deleted by {}", account.email, user.email);
    Ok(())
}
