use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;
use tracing::{error, warn};

use common::types::ErrorBody;
use service::errors::ServiceError;
use service::session::SessionError;

/// Single boundary between business errors and HTTP responses.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Service(#[from] ServiceError),
    #[error(transparent)]
    Session(#[from] SessionError),
    #[error("{0}")]
    BadRequest(String),
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::BadRequest(format!("Invalid JSON body: {}", rejection.body_text()))
    }
}

const INTERNAL: &str = "Internal server error";

impl ApiError {
    /// Status code and client-facing message; internal detail never leaves the process.
    fn parts(&self) -> (StatusCode, String) {
        match self {
            ApiError::BadRequest(m) => (StatusCode::BAD_REQUEST, m.clone()),
            ApiError::Service(e) => {
                let status = match e {
                    ServiceError::Validation(_) | ServiceError::Duplicate(_) => StatusCode::BAD_REQUEST,
                    ServiceError::NotFound(_) => StatusCode::NOT_FOUND,
                    ServiceError::Model(models::errors::ModelError::Validation(_)) => StatusCode::BAD_REQUEST,
                    ServiceError::Db(_) | ServiceError::Storage(_) | ServiceError::Model(_) => {
                        StatusCode::INTERNAL_SERVER_ERROR
                    }
                };
                (status, e.public_message().unwrap_or_else(|| INTERNAL.to_string()))
            }
            ApiError::Session(e) => match e {
                SessionError::MissingToken => (StatusCode::BAD_REQUEST, "Missing session token".into()),
                SessionError::InvalidToken(_) => (StatusCode::UNAUTHORIZED, "Invalid or expired session token".into()),
                SessionError::Encoding(_) | SessionError::Catalog(_) => (StatusCode::INTERNAL_SERVER_ERROR, INTERNAL.into()),
            },
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = self.parts();
        if status.is_server_error() {
            error!(error = %self, status = status.as_u16(), "request failed");
        } else {
            warn!(error = %self, status = status.as_u16(), "request rejected");
        }
        (status, Json(ErrorBody { error: message })).into_response()
    }
}

#[derive(Debug, Error)]
pub enum StartupError {
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("route catalog unavailable: {0}")]
    Catalog(String),
    #[error(transparent)]
    Any(#[from] anyhow::Error),
}
