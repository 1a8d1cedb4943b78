//! Response-side error handling.
//!
//! # Responsibilities
//! - Map handler failures to HTTP status codes
//! - Render every error as the same JSON shape: `{"error": "...", "status": 400}`
//! - Keep the status the framework chose for extractor rejections
//!
//! # Design Decisions
//! - Client errors are logged at debug, they are expected traffic
//! - Rejection messages come from the framework's own `body_text()`

use axum::{
    extract::{
        multipart::{MultipartError, MultipartRejection},
        rejection::{JsonRejection, PathRejection, QueryRejection, StringRejection},
    },
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::entity::ParseError;

/// Error returned by route handlers.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    BadRequest(String),

    #[error("{0}")]
    NotFound(String),

    #[error("unsupported media type, expected {expected}")]
    UnsupportedMediaType { expected: &'static str },

    #[error("{0}")]
    Unprocessable(String),

    #[error("invalid bracketed names: {0}")]
    Bracketed(#[from] ParseError),

    /// An extractor rejected the request before the handler ran.
    #[error("{message}")]
    Rejected { status: StatusCode, message: String },
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::BadRequest(_) | AppError::Bracketed(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::UnsupportedMediaType { .. } => StatusCode::UNSUPPORTED_MEDIA_TYPE,
            AppError::Unprocessable(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::Rejected { status, .. } => *status,
        }
    }
}

/// JSON body of every error response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
    pub status: u16,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(status = %status, error = %self, "Request failed");
        } else {
            tracing::debug!(status = %status, error = %self, "Request rejected");
        }

        let body = ErrorBody {
            error: self.to_string(),
            status: status.as_u16(),
        };
        (status, Json(body)).into_response()
    }
}

macro_rules! from_rejection {
    ($($rejection:ty),* $(,)?) => {
        $(
            impl From<$rejection> for AppError {
                fn from(rejection: $rejection) -> Self {
                    AppError::Rejected {
                        status: rejection.status(),
                        message: rejection.body_text(),
                    }
                }
            }
        )*
    };
}

from_rejection!(
    JsonRejection,
    PathRejection,
    QueryRejection,
    StringRejection,
    MultipartRejection,
    MultipartError,
);
