use actix_web::{HttpRequest, HttpResponse, Responder, get, post, web};
use actix_web_flash_messages::{FlashMessage, IncomingFlashMessages};
use tera::Tera;

use crate::backend::HttpBackend;
use crate::domain::auth::AuthenticatedUser;
use crate::forms::auth::{LoginForm, RegisterForm};
use crate::models::auth::establish;
use crate::routes::{base_context, error_redirect, redirect, render_template};
use crate::services::auth as auth_service;

#[get("/login")]
pub async fn show_login(
    user: Option<AuthenticatedUser>,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    if user.is_some() {
        return redirect("/home");
    }
    let context = base_context(&flash_messages, None, "login");
    render_template(&tera, "auth/login.html", &context)
}

#[post("/login")]
pub async fn login(
    req: HttpRequest,
    api: web::Data<HttpBackend>,
    web::Form(form): web::Form<LoginForm>,
) -> impl Responder {
    match auth_service::login(api.get_ref(), form).await {
        Ok(user) => match establish(&req, &user) {
            Ok(()) => {
                FlashMessage::success("Login successful.").send();
                redirect("/home")
            }
            Err(err) => {
                log::error!("Failed to store session for {}: {err}", user.email);
                HttpResponse::InternalServerError().finish()
            }
        },
        Err(err) => error_redirect(&req, err, "/login"),
    }
}

#[get("/register")]
pub async fn show_register(
    user: Option<AuthenticatedUser>,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    if user.is_some() {
        return redirect("/home");
    }
    let context = base_context(&flash_messages, None, "register");
    render_template(&tera, "auth/register.html", &context)
}

#[post("/register")]
pub async fn register(
    req: HttpRequest,
    api: web::Data<HttpBackend>,
    web::Form(form): web::Form<RegisterForm>,
) -> impl Responder {
    match auth_service::register(api.get_ref(), form).await {
        Ok(message) => {
            FlashMessage::success(
                message.unwrap_or_else(|| "Registration successful. Please log in.".to_string()),
            )
            .send();
            redirect("/login")
        }
        Err(err) => error_redirect(&req, err, "/register"),
    }
}
