use axum::Json;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde::Serialize;

pub const WELCOME_MESSAGE: &str = "Welcome to Polyglot API!";

#[derive(Serialize)]
pub struct WelcomeResponse {
    pub message: String,
}

pub async fn root_handler() -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(WelcomeResponse {
            message: WELCOME_MESSAGE.to_string(),
        }),
    )
}
