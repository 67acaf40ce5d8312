use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use crate::application::services::ProcessingError;

const PROCESSING_ERROR_PREFIX: &str = "There was an error processing the file: ";
const STORAGE_ERROR_DETAIL: &str = "temporary storage is unavailable";

#[derive(Serialize)]
pub struct ErrorResponse {
    pub message: String,
}

pub fn status_for(error: &ProcessingError) -> StatusCode {
    match error {
        ProcessingError::Validation(_) => StatusCode::BAD_REQUEST,
        ProcessingError::Decode(_) => StatusCode::UNPROCESSABLE_ENTITY,
        ProcessingError::Engine(_) => StatusCode::BAD_GATEWAY,
        ProcessingError::Encode(_) | ProcessingError::Storage(_) => {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}

pub fn error_response(error: &ProcessingError) -> Response {
    let message = match error {
        ProcessingError::Validation(message) => message.clone(),
        // Store errors carry server paths; the full chain is only logged.
        ProcessingError::Storage(_) => {
            format!("{}{}", PROCESSING_ERROR_PREFIX, STORAGE_ERROR_DETAIL)
        }
        other => format!("{}{}", PROCESSING_ERROR_PREFIX, other),
    };

    (status_for(error), Json(ErrorResponse { message })).into_response()
}
