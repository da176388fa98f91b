//! HTTP handlers and the helpers they share.

use actix_web::http::header;
use actix_web::{HttpRequest, HttpResponse};
use actix_web_flash_messages::{FlashMessage, IncomingFlashMessages, Level};
use serde::Serialize;
use tera::{Context, Tera};

use crate::domain::auth::AuthenticatedUser;
use crate::middleware::LOGIN_PATH;
use crate::models::auth::teardown;
use crate::services::ServiceError;

pub mod admin;
pub mod auth;
pub mod flights;
pub mod main;
pub mod profile;

/// Maps a flash level to the Bootstrap alert class used by the templates.
pub fn alert_level_to_str(level: &Level) -> &'static str {
    match level {
        Level::Error => "danger",
        Level::Warning => "warning",
        Level::Success => "success",
        _ => "info",
    }
}

pub fn redirect(location: &str) -> HttpResponse {
    HttpResponse::SeeOther()
        .insert_header((header::LOCATION, location))
        .finish()
}

pub fn render_template(tera: &Tera, template: &str, context: &Context) -> HttpResponse {
    match tera.render(template, context) {
        Ok(body) => HttpResponse::Ok()
            .content_type("text/html; charset=utf-8")
            .body(body),
        Err(err) => {
            log::error!("Failed to render template '{template}': {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

/// Context every page template starts from: alerts, the signed-in user and
/// the navigation key of the page.
pub fn base_context(
    flash_messages: &IncomingFlashMessages,
    user: Option<&AuthenticatedUser>,
    current_page: &str,
) -> Context {
    let alerts = flash_messages
        .iter()
        .map(|f| (f.content(), alert_level_to_str(&f.level())))
        .collect::<Vec<_>>();

    let mut context = Context::new();
    context.insert("alerts", &alerts);
    context.insert("current_user", &user);
    context.insert("current_page", current_page);
    context
}

/// `path?query`, or just `path` when `query` serializes to nothing.
pub fn with_query<T: Serialize>(path: &str, query: &T) -> String {
    match serde_html_form::to_string(query) {
        Ok(query) if !query.is_empty() => format!("{path}?{query}"),
        Ok(_) => path.to_string(),
        Err(err) => {
            log::warn!("Failed to encode query for {path}: {err}");
            path.to_string()
        }
    }
}

/// Flashes the error and redirects.
///
/// A rejected token ends the session and goes to the login page, a missing
/// role goes home, everything else returns to `back`.
pub fn error_redirect(req: &HttpRequest, err: ServiceError, back: &str) -> HttpResponse {
    match err {
        ServiceError::SessionExpired => {
            teardown(req);
            FlashMessage::warning(err.user_message()).send();
            redirect(LOGIN_PATH)
        }
        ServiceError::Unauthorized => {
            FlashMessage::error(err.user_message()).send();
            redirect("/home")
        }
        ServiceError::Form(message) => {
            FlashMessage::error(message).send();
            redirect(back)
        }
        err => {
            log::error!("Request to {} failed: {err}", req.path());
            FlashMessage::error(err.user_message()).send();
            redirect(back)
        }
    }
}
