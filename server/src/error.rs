//! Translation of request failures into HTTP responses.
//!
//! `ApiError::into_response` and `panic_response` are the only places a
//! failure becomes a status code. NotFound is a bare 404; everything else is
//! a 500 carrying `{"error", "innerException"}` with messages only.

use std::any::Any;
use std::error::Error as _;

use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use crate::store::StoreError;

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error(transparent)]
    Store(#[from] StoreError),

    #[error("failed to read request body")]
    Body(#[from] JsonRejection),

    #[error("failed to read item id from path")]
    Path(#[from] PathRejection),
}

/// JSON body of every 500 response.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorBody {
    pub error: String,
    pub inner_exception: Option<String>,
}

impl ErrorBody {
    fn into_500(self) -> Response {
        (StatusCode::INTERNAL_SERVER_ERROR, Json(self)).into_response()
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if let ApiError::Store(StoreError::NotFound(id)) = &self {
            tracing::debug!(id, "item not found");
            return StatusCode::NOT_FOUND.into_response();
        }

        let body = ErrorBody {
            error: self.to_string(),
            inner_exception: self.source().map(ToString::to_string),
        };
        tracing::error!(error = %body.error, inner = ?body.inner_exception, "request failed");
        body.into_500()
    }
}

/// Response for a handler that panicked. Used by `CatchPanicLayer`.
pub fn panic_response(payload: Box<dyn Any + Send + 'static>) -> Response {
    let message = if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else {
        "request handler panicked".to_string()
    };
    tracing::error!(error = %message, "handler panicked");
    ErrorBody {
        error: message,
        inner_exception: None,
    }
    .into_500()
}
