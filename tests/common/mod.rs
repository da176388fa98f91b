//! In-process stand-in for the booking REST API.

#![allow(dead_code)]

use actix_web::{App, HttpRequest, HttpResponse, HttpServer, web};
use serde_json::{Value, json};

pub const ADMIN_TOKEN: &str = "admin-jwt";
pub const USER_TOKEN: &str = "user-jwt";

pub fn flight_json(id: i64, number: &str, from: &str, to: &str) -> Value {
    json!({
        "id": id,
        "flightNumber": number,
        "airline": "Vietnam Airlines",
        "departure": from,
        "destination": to,
        "departureTime": format!("2025-06-{:02}T10:00:00", id),
        "price": 100 + id,
    })
}

pub fn user_json(id: i64, role: &str) -> Value {
    json!({
        "id": id,
        "name": format!("User {id}"),
        "email": format!("user{id}@example.com"),
        "role": role,
    })
}

fn bearer(req: &HttpRequest) -> Option<&str> {
    req.headers()
        .get("Authorization")
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "))
}

fn unauthorized() -> HttpResponse {
    HttpResponse::Unauthorized().json(json!({"statusCode": 401, "message": "Token expired"}))
}

async fn login(body: web::Json<Value>) -> HttpResponse {
    match (body["email"].as_str(), body["password"].as_str()) {
        (Some("admin@jktravel.io"), Some("secret1")) => HttpResponse::Ok().json(json!({
            "statusCode": 200,
            "token": ADMIN_TOKEN,
            "role": "ADMIN",
        })),
        (Some("user1@example.com"), Some("secret1")) => HttpResponse::Ok().json(json!({
            "statusCode": 200,
            "token": USER_TOKEN,
            "role": "USER",
        })),
        _ => HttpResponse::BadRequest()
            .json(json!({"statusCode": 400, "message": "Invalid credentials"})),
    }
}

async fn register(body: web::Json<Value>) -> HttpResponse {
    if body["email"] == "taken@example.com" {
        return HttpResponse::BadRequest()
            .json(json!({"statusCode": 400, "message": "Email already exists"}));
    }
    HttpResponse::Ok().json(json!({"statusCode": 200, "message": "User registered"}))
}

async fn all_flights() -> HttpResponse {
    let mut flights: Vec<Value> = (1..=6)
        .map(|id| flight_json(id, &format!("VN{id:03}"), "Hanoi", "Da Nang"))
        .collect();
    flights.push(flight_json(7, "JQ456", "Hanoi", "Ho Chi Minh City"));
    HttpResponse::Ok().json(json!({"statusCode": 200, "flightList": flights}))
}

async fn get_flight(path: web::Path<i64>) -> HttpResponse {
    let id = path.into_inner();
    if id > 7 {
        return HttpResponse::NotFound()
            .json(json!({"statusCode": 404, "message": "Flight not found"}));
    }
    let mut flight = flight_json(id, &format!("VN{id:03}"), "Hanoi", "Da Nang");
    flight["arrivalTime"] = json!(format!("2025-06-{:02}T11:15:00", id));
    HttpResponse::Ok().json(json!({"statusCode": 200, "flight": flight}))
}

/// Answers in the legacy nested shape.
async fn search_flights(body: web::Json<Value>) -> HttpResponse {
    let flights = if body["departureId"] == "HAN" && body["destinationId"] == "SGN" {
        vec![flight_json(7, "JQ456", "HAN", "SGN")]
    } else {
        Vec::new()
    };
    HttpResponse::Ok().json(json!({"data": {"statusCode": 200, "flights": flights}}))
}

async fn me(req: HttpRequest) -> HttpResponse {
    match bearer(&req) {
        Some(ADMIN_TOKEN) => {
            HttpResponse::Ok().json(json!({"statusCode": 200, "user": user_json(100, "ADMIN")}))
        }
        Some(USER_TOKEN) => {
            HttpResponse::Ok().json(json!({"statusCode": 200, "user": user_json(1, "USER")}))
        }
        _ => unauthorized(),
    }
}

async fn all_users(req: HttpRequest) -> HttpResponse {
    if bearer(&req) != Some(ADMIN_TOKEN) {
        return unauthorized();
    }
    let users: Vec<Value> = (1..=7).map(|id| user_json(id, "USER")).collect();
    HttpResponse::Ok().json(json!({"statusCode": 200, "userList": users}))
}

async fn get_user(req: HttpRequest, path: web::Path<i64>) -> HttpResponse {
    if bearer(&req) != Some(ADMIN_TOKEN) {
        return unauthorized();
    }
    match path.into_inner() {
        404 => HttpResponse::NotFound()
            .json(json!({"statusCode": 404, "message": "User not found"})),
        id => HttpResponse::Ok().json(json!({"statusCode": 200, "user": user_json(id, "USER")})),
    }
}

async fn user_bookings(req: HttpRequest, path: web::Path<i64>) -> HttpResponse {
    if bearer(&req).is_none() {
        return unauthorized();
    }
    let mut user = user_json(path.into_inner(), "USER");
    user["bookings"] = json!([{
        "id": 9,
        "bookingConfirmationCode": "JK0009",
        "seatClass": "Business",
        "numOfPassengers": 2,
        "bookingDate": "2025-05-01T09:00:00",
        "flight": flight_json(3, "VN003", "Hanoi", "Da Nang"),
    }]);
    HttpResponse::Ok().json(json!({"statusCode": 200, "user": user}))
}

async fn delete_user(req: HttpRequest) -> HttpResponse {
    if bearer(&req) != Some(ADMIN_TOKEN) {
        return unauthorized();
    }
    HttpResponse::Ok().json(json!({"statusCode": 200, "message": "User deleted"}))
}

async fn book_flight(req: HttpRequest, body: web::Json<Value>) -> HttpResponse {
    if bearer(&req).is_none() {
        return unauthorized();
    }
    HttpResponse::Ok().json(json!({
        "statusCode": 200,
        "booking": {
            "id": 10,
            "bookingConfirmationCode": "JK0010",
            "seatClass": body["seatClass"],
            "numOfPassengers": body["numOfPassengers"],
        },
    }))
}

async fn cancel_booking(path: web::Path<i64>) -> HttpResponse {
    if path.into_inner() == 404 {
        return HttpResponse::NotFound()
            .json(json!({"statusCode": 404, "message": "Booking not found"}));
    }
    HttpResponse::Ok().json(json!({"statusCode": 200, "message": "Booking cancelled"}))
}

/// Starts the fake API on an ephemeral port and returns its base URL.
pub async fn spawn_backend() -> String {
    let server = HttpServer::new(|| {
        App::new()
            .route("/auth/login", web::post().to(login))
            .route("/auth/register", web::post().to(register))
            .route("/flights/all", web::get().to(all_flights))
            .route("/flights/search", web::post().to(search_flights))
            .route("/flights/{id}", web::get().to(get_flight))
            .route("/users/me", web::get().to(me))
            .route("/users/all", web::get().to(all_users))
            .route("/users/{id}", web::get().to(get_user))
            .route("/users/{id}/bookings", web::get().to(user_bookings))
            .route("/users/delete/{id}", web::delete().to(delete_user))
            .route("/bookings/book-flight/{flight}/{user}", web::post().to(book_flight))
            .route("/bookings/cancel/{id}", web::delete().to(cancel_booking))
    })
    .workers(1)
    .bind(("127.0.0.1", 0))
    .expect("bind fake backend");

    let addr = server.addrs()[0];
    actix_web::rt::spawn(server.run());
    format!("http://{addr}")
}
