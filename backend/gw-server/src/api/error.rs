//! REST API error types
//!
//! Every failure leaves the gateway as `{"status":"error","message":...}`.
//! Only malformed input is a 400; anything that went wrong talking to the
//! node, including a rejected transaction, is a 500.

use gw_node::NodeError;

use std::panic::Location;

use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use error_location::ErrorLocation;
use serde::Serialize;
use thiserror::Error;

/// JSON error envelope
#[derive(Debug, Serialize)]
pub struct ApiErrorResponse {
    pub status: &'static str,
    pub message: String,
}

#[derive(Debug, Error)]
pub enum ApiError {
    /// Malformed or missing request input (400)
    #[error("Bad request: {message} {location}")]
    BadRequest {
        message: String,
        location: ErrorLocation,
    },

    /// Node or pipeline failure (500)
    #[error("Internal error [{code}]: {message} {location}")]
    Internal {
        message: String,
        code: &'static str,
        location: ErrorLocation,
    },
}

impl ApiError {
    #[track_caller]
    pub fn bad_request<S: Into<String>>(message: S) -> Self {
        Self::BadRequest {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn internal<S: Into<String>>(message: S) -> Self {
        Self::Internal {
            message: message.into(),
            code: "INTERNAL_ERROR",
            location: ErrorLocation::from(Location::caller()),
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            Self::BadRequest { .. } => StatusCode::BAD_REQUEST,
            Self::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        log::error!("{}", self);

        let status = self.status();
        let message = match self {
            ApiError::BadRequest { message, .. } | ApiError::Internal { message, .. } => message,
        };

        (
            status,
            Json(ApiErrorResponse {
                status: "error",
                message,
            }),
        )
            .into_response()
    }
}

/// Node failures keep their message (rejection code and log included)
impl From<NodeError> for ApiError {
    #[track_caller]
    fn from(e: NodeError) -> Self {
        ApiError::Internal {
            message: e.message(),
            code: e.error_code(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<JsonRejection> for ApiError {
    #[track_caller]
    fn from(e: JsonRejection) -> Self {
        ApiError::BadRequest {
            message: format!("Invalid request body: {}", e.body_text()),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, ApiError>;
