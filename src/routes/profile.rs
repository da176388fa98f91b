use actix_web::{HttpRequest, Responder, get, post, web};
use actix_web_flash_messages::{FlashMessage, IncomingFlashMessages};
use tera::Tera;

use crate::backend::HttpBackend;
use crate::domain::auth::AuthenticatedUser;
use crate::forms::profile::EditProfileForm;
use crate::models::auth::{establish, teardown};
use crate::routes::{base_context, error_redirect, redirect, render_template};
use crate::services::profile as profile_service;

#[get("/profile")]
pub async fn show_profile(
    req: HttpRequest,
    user: AuthenticatedUser,
    api: web::Data<HttpBackend>,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    match profile_service::load_profile(api.get_ref(), &user).await {
        Ok(data) => {
            let mut context = base_context(&flash_messages, Some(&user), "profile");
            context.insert("user", &data.user);
            context.insert("bookings", &data.bookings);
            render_template(&tera, "profile/index.html", &context)
        }
        Err(err) => error_redirect(&req, err, "/home"),
    }
}

#[get("/profile/edit")]
pub async fn edit_profile(
    req: HttpRequest,
    user: AuthenticatedUser,
    api: web::Data<HttpBackend>,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    match profile_service::load_account(api.get_ref(), &user).await {
        Ok(account) => {
            let mut context = base_context(&flash_messages, Some(&user), "profile");
            context.insert("user", &account);
            render_template(&tera, "profile/edit.html", &context)
        }
        Err(err) => error_redirect(&req, err, "/profile"),
    }
}

#[post("/profile/edit")]
pub async fn update_profile(
    req: HttpRequest,
    user: AuthenticatedUser,
    api: web::Data<HttpBackend>,
    web::Form(form): web::Form<EditProfileForm>,
) -> impl Responder {
    match profile_service::update_profile(api.get_ref(), &user, form).await {
        Ok(new_email) => {
            if let Some(email) = new_email {
                let refreshed = AuthenticatedUser::new(email, user.role, user.token.clone());
                if let Err(err) = establish(&req, &refreshed) {
                    log::error!("Failed to refresh session of {}: {err}", user.email);
                }
            }
            FlashMessage::success("Profile updated successfully!").send();
            redirect("/profile")
        }
        Err(err) => error_redirect(&req, err, "/profile/edit"),
    }
}

#[post("/profile/delete")]
pub async fn delete_profile(
    req: HttpRequest,
    user: AuthenticatedUser,
    api: web::Data<HttpBackend>,
) -> impl Responder {
    match profile_service::delete_account(api.get_ref(), &user).await {
        Ok(()) => {
            teardown(&req);
            FlashMessage::success("Your account has been deleted.").send();
            redirect("/login")
        }
        Err(err) => error_redirect(&req, err, "/profile/edit"),
    }
}
