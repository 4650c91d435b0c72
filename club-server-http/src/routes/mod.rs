//! Route table for the club site.
//!
//! - `GET /`, `/teams`, `/about` - static pages
//! - `GET|POST /register` - student registration
//! - `GET|POST /login`, `GET /logout` - admin session
//! - `GET /admin`, `POST /delete/{id}` - registration management
//! - `GET|POST /Addplayer`, `GET /Performance` - player roster
//! - `GET|POST /contact` - contact form
//! - `/static/*` - assets from the static directory

use std::path::Path;

use axum::{
    Router,
    extract::Request,
    http::{StatusCode, header},
    middleware::{self, Next},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use log::info;
use tower_http::services::ServeDir;

use crate::{AppState, views};

mod admin;
mod auth;
mod contact;
mod pages;
mod players;
mod registration;

pub fn router(state: AppState, static_dir: &Path) -> Router {
    Router::new()
        .route("/", get(pages::index))
        .route("/teams", get(pages::teams))
        .route("/about", get(pages::about))
        .route(
            "/register",
            get(registration::show_form).post(registration::submit),
        )
        .route("/login", get(auth::show_form).post(auth::submit))
        .route("/logout", get(auth::logout))
        .route("/admin", get(admin::list_registrations))
        .route("/delete/{id}", post(admin::delete_registration))
        .route("/Addplayer", get(players::show_form).post(players::submit))
        .route("/Performance", get(players::performance))
        .route("/contact", get(contact::show_form).post(contact::submit))
        .nest_service("/static", ServeDir::new(static_dir))
        .fallback(not_found)
        .layer(middleware::from_fn(log_request))
        .with_state(state)
}

/// A `302 Found` redirect.
pub(crate) struct Found(pub &'static str);

impl IntoResponse for Found {
    fn into_response(self) -> Response {
        (StatusCode::FOUND, [(header::LOCATION, self.0)]).into_response()
    }
}

async fn not_found() -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        views::error_page(StatusCode::NOT_FOUND, "The page you asked for does not exist."),
    )
}

async fn log_request(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let path = request.uri().path().to_string();
    let response = next.run(request).await;
    info!("{} {} -> {}", method, path, response.status().as_u16());
    response
}
