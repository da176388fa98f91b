use actix_web::{HttpRequest, Responder, get, post, web};
use actix_web_flash_messages::{FlashMessage, IncomingFlashMessages};
use tera::Tera;

use crate::backend::HttpBackend;
use crate::domain::auth::AuthenticatedUser;
use crate::domain::user::Role;
use crate::dto::admin::{BookingsQuery, ReturnTo, UsersQuery};
use crate::dto::flights::FlightsQuery;
use crate::forms::flights::FlightForm;
use crate::routes::{base_context, error_redirect, redirect, render_template, with_query};
use crate::services::{
    bookings as bookings_service, ensure_role, flights as flights_service, users as users_service,
};

#[get("/admin")]
pub async fn dashboard(
    req: HttpRequest,
    user: AuthenticatedUser,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    if let Err(err) = ensure_role(&user, Role::Admin) {
        return error_redirect(&req, err, "/home");
    }
    let context = base_context(&flash_messages, Some(&user), "admin");
    render_template(&tera, "admin/index.html", &context)
}

#[get("/admin/users")]
pub async fn users(
    req: HttpRequest,
    query: web::Query<UsersQuery>,
    user: AuthenticatedUser,
    api: web::Data<HttpBackend>,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    match users_service::load_users(api.get_ref(), &user, query.into_inner()).await {
        Ok(data) => {
            let mut context = base_context(&flash_messages, Some(&user), "admin");
            context.insert("users", &data.users);
            context.insert("role", &data.role.map(|role| role.as_str()));
            render_template(&tera, "admin/users.html", &context)
        }
        Err(err) => error_redirect(&req, err, "/admin"),
    }
}

#[post("/admin/users/{user_id}/delete")]
pub async fn delete_user(
    req: HttpRequest,
    user_id: web::Path<i64>,
    user: AuthenticatedUser,
    api: web::Data<HttpBackend>,
    web::Form(return_to): web::Form<ReturnTo>,
) -> impl Responder {
    let back = with_query("/admin/users", &return_to);

    match users_service::delete_user(api.get_ref(), &user, user_id.into_inner()).await {
        Ok(()) => {
            FlashMessage::success("User deleted.").send();
            redirect(&back)
        }
        Err(err) => error_redirect(&req, err, &back),
    }
}

#[get("/admin/flights")]
pub async fn flights(
    req: HttpRequest,
    query: web::Query<FlightsQuery>,
    user: AuthenticatedUser,
    api: web::Data<HttpBackend>,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    match flights_service::load_admin_flights(api.get_ref(), &user, query.into_inner()).await {
        Ok(data) => {
            let mut context = base_context(&flash_messages, Some(&user), "admin");
            context.insert("flights", &data.flights);
            context.insert("search_query", &data.search_query);
            render_template(&tera, "admin/flights.html", &context)
        }
        Err(err) => error_redirect(&req, err, "/admin"),
    }
}

#[get("/admin/flights/add")]
pub async fn new_flight(
    req: HttpRequest,
    user: AuthenticatedUser,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    if let Err(err) = ensure_role(&user, Role::Admin) {
        return error_redirect(&req, err, "/home");
    }
    let mut context = base_context(&flash_messages, Some(&user), "admin");
    context.insert("form", &FlightForm::default());
    context.insert("action", "/admin/flights/add");
    render_template(&tera, "admin/flight_form.html", &context)
}

#[post("/admin/flights/add")]
pub async fn add_flight(
    req: HttpRequest,
    user: AuthenticatedUser,
    api: web::Data<HttpBackend>,
    web::Form(form): web::Form<FlightForm>,
) -> impl Responder {
    match flights_service::add_flight(api.get_ref(), &user, form).await {
        Ok(()) => {
            FlashMessage::success("Flight added successfully!").send();
            redirect("/admin/flights")
        }
        Err(err) => error_redirect(&req, err, "/admin/flights/add"),
    }
}

#[get("/admin/flights/{flight_id}/edit")]
pub async fn edit_flight(
    req: HttpRequest,
    flight_id: web::Path<i64>,
    user: AuthenticatedUser,
    api: web::Data<HttpBackend>,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    let flight_id = flight_id.into_inner();

    match flights_service::load_flight_editor(api.get_ref(), &user, flight_id).await {
        Ok(data) => {
            let mut context = base_context(&flash_messages, Some(&user), "admin");
            context.insert("flight", &data.flight);
            context.insert("form", &data.form);
            context.insert("action", &format!("/admin/flights/{flight_id}/edit"));
            render_template(&tera, "admin/flight_form.html", &context)
        }
        Err(err) => error_redirect(&req, err, "/admin/flights"),
    }
}

#[post("/admin/flights/{flight_id}/edit")]
pub async fn update_flight(
    req: HttpRequest,
    flight_id: web::Path<i64>,
    user: AuthenticatedUser,
    api: web::Data<HttpBackend>,
    web::Form(form): web::Form<FlightForm>,
) -> impl Responder {
    let flight_id = flight_id.into_inner();
    let back = format!("/admin/flights/{flight_id}/edit");

    match flights_service::update_flight(api.get_ref(), &user, flight_id, form).await {
        Ok(()) => {
            FlashMessage::success("Flight updated successfully!").send();
            redirect("/admin/flights")
        }
        Err(err) => error_redirect(&req, err, &back),
    }
}

#[post("/admin/flights/{flight_id}/delete")]
pub async fn delete_flight(
    req: HttpRequest,
    flight_id: web::Path<i64>,
    user: AuthenticatedUser,
    api: web::Data<HttpBackend>,
    web::Form(return_to): web::Form<ReturnTo>,
) -> impl Responder {
    let back = with_query("/admin/flights", &return_to);

    match flights_service::delete_flight(api.get_ref(), &user, flight_id.into_inner()).await {
        Ok(()) => {
            FlashMessage::success("Flight deleted.").send();
            redirect(&back)
        }
        Err(err) => error_redirect(&req, err, &back),
    }
}

#[get("/admin/bookings")]
pub async fn bookings(
    req: HttpRequest,
    query: web::Query<BookingsQuery>,
    user: AuthenticatedUser,
    api: web::Data<HttpBackend>,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    match bookings_service::load_bookings(api.get_ref(), &user, query.into_inner()).await {
        Ok(data) => {
            let mut context = base_context(&flash_messages, Some(&user), "admin");
            context.insert("bookings", &data.bookings);
            render_template(&tera, "admin/bookings.html", &context)
        }
        Err(err) => error_redirect(&req, err, "/admin"),
    }
}

#[post("/admin/bookings/{booking_id}/cancel")]
pub async fn cancel_booking(
    req: HttpRequest,
    booking_id: web::Path<i64>,
    user: AuthenticatedUser,
    api: web::Data<HttpBackend>,
    web::Form(return_to): web::Form<ReturnTo>,
) -> impl Responder {
    let back = with_query("/admin/bookings", &return_to);

    match bookings_service::cancel_booking(api.get_ref(), &user, booking_id.into_inner()).await {
        Ok(()) => {
            FlashMessage::success("Booking cancelled.").send();
            redirect(&back)
        }
        Err(err) => error_redirect(&req, err, &back),
    }
}
