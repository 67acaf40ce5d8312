use std::convert::Infallible;

use axum::body::Body;
use axum::extract::multipart::MultipartRejection;
use axum::extract::{Multipart, State};
use axum::http::{HeaderValue, StatusCode, header};
use axum::response::{IntoResponse, Response};
use bytes::Bytes;

use crate::application::services::{Delivery, DeliveryStrategy, ProcessingError, StagedDownload};
use crate::domain::TranslationResult;
use crate::presentation::state::AppState;

use super::error::error_response;
use super::translation_form::read_translation_form;

const STREAM_CHUNK_BYTES: usize = 64 * 1024;

/// `POST /process`: translated audio as a file download.
#[tracing::instrument(skip(state, multipart))]
pub async fn process_handler(
    State(state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Response {
    translate(state, multipart, DeliveryStrategy::StagedFile).await
}

/// `POST /process_memory`: translated audio streamed from memory.
#[tracing::instrument(skip(state, multipart))]
pub async fn process_memory_handler(
    State(state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Response {
    translate(state, multipart, DeliveryStrategy::StreamedMemory).await
}

async fn translate(
    state: AppState,
    multipart: Result<Multipart, MultipartRejection>,
    strategy: DeliveryStrategy,
) -> Response {
    let form = match multipart {
        Ok(multipart) => read_translation_form(multipart).await,
        Err(rejection) => Err(ProcessingError::Validation(format!(
            "Expected a multipart form: {}",
            rejection.body_text()
        ))),
    };

    let request = match form {
        Ok(request) => request,
        Err(e) => {
            tracing::warn!(error = %e, "Rejected translation form");
            return error_response(&e);
        }
    };

    match state.translation_service.handle(request, strategy).await {
        Ok(Delivery::StagedFile(download)) => download_response(download),
        Ok(Delivery::StreamedMemory(result)) => streamed_response(result),
        Err(e) => error_response(&e),
    }
}

fn download_response(download: StagedDownload) -> Response {
    let mut response = Response::builder()
        .status(StatusCode::OK)
        .header(header::CONTENT_TYPE, download.media_type)
        .header(header::CONTENT_LENGTH, download.content_length);

    let disposition = format!(
        "attachment; filename=\"{}\"",
        download.file_name.replace('"', "")
    );
    if let Ok(value) = HeaderValue::from_str(&disposition) {
        response = response.header(header::CONTENT_DISPOSITION, value);
    }

    response
        .body(Body::from_stream(download.body))
        .unwrap_or_else(|_| StatusCode::INTERNAL_SERVER_ERROR.into_response())
}

/// Streams the buffer from its first byte in fixed-size chunks.
fn streamed_response(result: TranslationResult) -> Response {
    let audio = result.audio_bytes;
    let content_length = audio.len();
    let chunks: Vec<Result<Bytes, Infallible>> = (0..content_length)
        .step_by(STREAM_CHUNK_BYTES)
        .map(|start| Ok(audio.slice(start..(start + STREAM_CHUNK_BYTES).min(content_length))))
        .collect();

    Response::builder()
        .status(StatusCode::OK)
        .header(header::CONTENT_TYPE, result.media_type)
        .header(header::CONTENT_LENGTH, content_length)
        .body(Body::from_stream(futures::stream::iter(chunks)))
        .unwrap_or_else(|_| StatusCode::INTERNAL_SERVER_ERROR.into_response())
}
