use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use snip_core::{ShortenerError, StorageError};
use snip_shortener::Severity;
use tracing::{debug, error};

use crate::model::ErrorResponse;

pub type Result<T> = std::result::Result<T, AppError>;

#[derive(Debug)]
pub enum AppError {
    /// The request could not be decoded or failed validation.
    BadRequest(String),
    Shortener(ShortenerError),
}

impl From<ShortenerError> for AppError {
    fn from(error: ShortenerError) -> Self {
        AppError::Shortener(error)
    }
}

/// Returns the HTTP status reported for a shortener error.
pub fn status_code(error: &ShortenerError) -> StatusCode {
    match error {
        ShortenerError::NotFound(_) => StatusCode::NOT_FOUND,
        ShortenerError::InvalidCode(_) => StatusCode::BAD_REQUEST,
        ShortenerError::Storage(StorageError::Conflict(_)) => StatusCode::CONFLICT,
        ShortenerError::Storage(StorageError::Unavailable(_) | StorageError::Timeout(_)) => {
            StatusCode::SERVICE_UNAVAILABLE
        }
        ShortenerError::Encoding(_)
        | ShortenerError::Storage(_)
        | ShortenerError::Consistency(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::BadRequest(message) => {
                debug!(%message, "rejected request");
                (StatusCode::BAD_REQUEST, message)
            }
            AppError::Shortener(error) => {
                let status = status_code(&error);
                match Severity::of(&error) {
                    Severity::Expected | Severity::Client => {
                        debug!(%error, %status, "request failed");
                        (status, error.to_string())
                    }
                    Severity::Server => {
                        error!(%error, %status, "request failed");
                        let message = status
                            .canonical_reason()
                            .unwrap_or("internal error")
                            .to_lowercase();
                        (status, message)
                    }
                }
            }
        };

        (status, Json(ErrorResponse { error: message })).into_response()
    }
}
