use actix_web::{HttpRequest, Responder, get, post, web};
use actix_web_flash_messages::{FlashMessage, IncomingFlashMessages};
use tera::Tera;

use crate::domain::auth::AuthenticatedUser;
use crate::models::auth::teardown;
use crate::routes::{base_context, redirect, render_template};

#[get("/")]
pub async fn index() -> impl Responder {
    redirect("/home")
}

#[get("/home")]
pub async fn home(
    user: Option<AuthenticatedUser>,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    let context = base_context(&flash_messages, user.as_ref(), "home");
    render_template(&tera, "main/index.html", &context)
}

#[post("/logout")]
pub async fn logout(req: HttpRequest, user: Option<AuthenticatedUser>) -> impl Responder {
    if let Some(user) = user {
        log::info!("User {} signed out", user.email);
    }
    teardown(&req);
    FlashMessage::info("You have been logged out.").send();
    redirect("/home")
}
