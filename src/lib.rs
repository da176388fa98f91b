#[cfg(feature = "server")]
use actix_cors::Cors;
#[cfg(feature = "server")]
use actix_files::Files;
#[cfg(feature = "server")]
use actix_identity::IdentityMiddleware;
#[cfg(feature = "server")]
use actix_session::{SessionMiddleware, storage::CookieSessionStore};
#[cfg(feature = "server")]
use actix_web::cookie::Key;
#[cfg(feature = "server")]
use actix_web::{App, HttpServer, middleware as actix_middleware, web};
#[cfg(feature = "server")]
use actix_web_flash_messages::{FlashMessagesFramework, storage::CookieMessageStore};
#[cfg(feature = "server")]
use tera::Tera;

#[cfg(feature = "server")]
use crate::backend::HttpBackend;
#[cfg(feature = "server")]
use crate::middleware::RedirectUnauthorized;
#[cfg(feature = "server")]
use crate::models::config::ServerConfig;

pub mod domain;
pub mod dto;
pub mod forms;
pub mod pagination;

#[cfg(feature = "server")]
pub mod backend;
#[cfg(feature = "server")]
mod error_conversions;
#[cfg(feature = "server")]
pub mod middleware;
#[cfg(feature = "server")]
pub mod models;
#[cfg(feature = "server")]
pub mod routes;
#[cfg(feature = "server")]
pub mod services;

/// Registers every page handler on `cfg`.
///
/// Public pages render for anonymous visitors too; the rest extract an
/// [`domain::auth::AuthenticatedUser`] and are sent to the login page by
/// [`RedirectUnauthorized`] when there is none.
#[cfg(feature = "server")]
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    use crate::routes::{admin, auth, flights, main, profile};

    cfg.service(
        web::scope("")
            .wrap(RedirectUnauthorized)
            .service(main::index)
            .service(main::home)
            .service(main::logout)
            .service(auth::show_login)
            .service(auth::login)
            .service(auth::show_register)
            .service(auth::register)
            .service(profile::show_profile)
            .service(profile::edit_profile)
            .service(profile::update_profile)
            .service(profile::delete_profile)
            .service(flights::search_flights)
            .service(flights::list_flights)
            .service(flights::show_flight)
            .service(flights::book_flight)
            .service(admin::dashboard)
            .service(admin::users)
            .service(admin::delete_user)
            .service(admin::flights)
            .service(admin::new_flight)
            .service(admin::add_flight)
            .service(admin::edit_flight)
            .service(admin::update_flight)
            .service(admin::delete_flight)
            .service(admin::bookings)
            .service(admin::cancel_booking),
    );
}

/// Builds and runs the Actix-Web HTTP server using the provided configuration.
#[cfg(feature = "server")]
pub async fn run(server_config: ServerConfig) -> std::io::Result<()> {
    let api = HttpBackend::new(&server_config.api_base_url, server_config.api_timeout())
        .map_err(|e| std::io::Error::other(format!("Failed to build API client: {e}")))?;

    log::info!("Using booking API at {}", api.base_url());

    // Keys and stores for identity, sessions, and flash messages.
    let secret_key = Key::from(server_config.secret.as_bytes());

    let message_store = CookieMessageStore::builder(secret_key.clone()).build();
    let message_framework = FlashMessagesFramework::builder(message_store).build();

    let tera = Tera::new(&server_config.templates_dir)
        .map_err(|e| std::io::Error::other(format!("Template parsing error(s): {e}")))?;

    let bind_address = (server_config.address.clone(), server_config.port);

    HttpServer::new(move || {
        App::new()
            .wrap(Cors::permissive())
            .wrap(message_framework.clone())
            .wrap(IdentityMiddleware::default())
            .wrap(
                SessionMiddleware::builder(CookieSessionStore::default(), secret_key.clone())
                    .cookie_secure(false) // set to true in prod
                    .cookie_domain(Some(server_config.domain.clone()))
                    .build(),
            )
            .wrap(actix_middleware::Compress::default())
            .wrap(actix_middleware::Logger::default())
            .service(Files::new("/assets", "./assets"))
            .configure(configure_routes)
            .app_data(web::Data::new(tera.clone()))
            .app_data(web::Data::new(api.clone()))
            .app_data(web::Data::new(server_config.clone()))
    })
    .bind(bind_address)?
    .run()
    .await
}
