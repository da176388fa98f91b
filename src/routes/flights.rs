use actix_web::{HttpRequest, Responder, get, post, web};
use actix_web_flash_messages::{FlashMessage, IncomingFlashMessages};
use tera::Tera;

use crate::backend::HttpBackend;
use crate::domain::auth::AuthenticatedUser;
use crate::dto::flights::FlightsQuery;
use crate::forms::flights::{BookFlightForm, SearchFlightForm};
use crate::routes::{base_context, error_redirect, redirect, render_template};
use crate::services::{bookings as bookings_service, flights as flights_service};

#[get("/flights")]
pub async fn list_flights(
    req: HttpRequest,
    query: web::Query<FlightsQuery>,
    user: Option<AuthenticatedUser>,
    api: web::Data<HttpBackend>,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    match flights_service::list_flights(api.get_ref(), query.into_inner()).await {
        Ok(data) => {
            let mut context = base_context(&flash_messages, user.as_ref(), "flights");
            context.insert("flights", &data.flights);
            context.insert("search_query", &data.search_query);
            render_template(&tera, "flights/index.html", &context)
        }
        Err(err) => error_redirect(&req, err, "/home"),
    }
}

#[get("/flights/{flight_id}")]
pub async fn show_flight(
    req: HttpRequest,
    flight_id: web::Path<i64>,
    user: Option<AuthenticatedUser>,
    api: web::Data<HttpBackend>,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    match flights_service::flight_details(api.get_ref(), flight_id.into_inner()).await {
        Ok(data) => {
            let mut context = base_context(&flash_messages, user.as_ref(), "flights");
            context.insert("flight", &data.flight);
            context.insert("duration", &data.duration);
            context.insert("seat_classes", &data.seat_classes);
            render_template(&tera, "flights/show.html", &context)
        }
        Err(err) => error_redirect(&req, err, "/flights"),
    }
}

#[get("/search-flights")]
pub async fn search_flights(
    query: web::Query<SearchFlightForm>,
    user: Option<AuthenticatedUser>,
    api: web::Data<HttpBackend>,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    let form = query.into_inner();
    let data = flights_service::search_flights(api.get_ref(), form).await;

    let mut context = base_context(&flash_messages, user.as_ref(), "search");
    context.insert("form", &data.form);
    context.insert("results", &data.results);
    context.insert("show_results", &data.show_results);
    context.insert("show_empty", &data.show_empty);
    context.insert("seat_classes", &data.seat_classes);
    render_template(&tera, "flights/search.html", &context)
}

#[post("/flights/{flight_id}/book")]
pub async fn book_flight(
    req: HttpRequest,
    flight_id: web::Path<i64>,
    user: AuthenticatedUser,
    api: web::Data<HttpBackend>,
    web::Form(form): web::Form<BookFlightForm>,
) -> impl Responder {
    let flight_id = flight_id.into_inner();
    let back = format!("/flights/{flight_id}");

    match bookings_service::book_flight(api.get_ref(), &user, flight_id, form).await {
        Ok(booking) => {
            let message = match booking.and_then(|booking| booking.confirmation_code) {
                Some(code) => format!("Flight booked. Confirmation code: {code}."),
                None => "Flight booked.".to_string(),
            };
            FlashMessage::success(message).send();
            redirect("/profile")
        }
        Err(err) => error_redirect(&req, err, &back),
    }
}
