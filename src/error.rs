use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use log::error;
use serde_json::json;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("{0}")]
    Validation(String),

    #[error("User not authenticated")]
    Unauthenticated,

    #[error("Upstream request failed: {0}")]
    UpstreamUnavailable(String),

    #[error("Upstream response shape mismatch: {0}")]
    UpstreamShapeMismatch(String),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Storage error: {0}")]
    Storage(#[from] sqlx::Error),

    #[error("Session token error: {0}")]
    Session(#[from] jsonwebtoken::errors::Error),
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        // Decode failures are a shape problem, everything else is the
        // upstream being unreachable or unhealthy.
        if err.is_decode() {
            Error::UpstreamShapeMismatch(err.to_string())
        } else {
            Error::UpstreamUnavailable(err.to_string())
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::UpstreamShapeMismatch(err.to_string())
    }
}

impl From<std::env::VarError> for Error {
    fn from(err: std::env::VarError) -> Self {
        Error::Configuration(err.to_string())
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        // Validation and auth errors surface their message; upstream and
        // internal errors are logged in full and answered with a static
        // public message.
        let (status, message) = match self {
            Error::Validation(msg) => (StatusCode::BAD_REQUEST, msg),
            Error::Unauthenticated => (
                StatusCode::UNAUTHORIZED,
                "User not authenticated".to_string(),
            ),
            Error::UpstreamUnavailable(ref detail) => {
                error!("upstream unavailable: {detail}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Failed to retrieve playlists".to_string(),
                )
            }
            Error::UpstreamShapeMismatch(ref detail) => {
                error!("upstream shape mismatch: {detail}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Failed to retrieve playlists".to_string(),
                )
            }
            Error::Configuration(ref detail) => {
                error!("configuration error: {detail}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
            Error::Storage(ref e) => {
                error!("storage error: {e:?}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
            Error::Session(ref e) => {
                error!("session token error: {e:?}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
        };

        let body = Json(json!({ "error": message }));
        (status, body).into_response()
    }
}
