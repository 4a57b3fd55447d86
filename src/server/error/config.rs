use axum::response::{IntoResponse, Response};
use thiserror::Error;

use crate::server::error::InternalServerError;

/// Startup configuration problems, reported before the server binds
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    MissingEnvVar(String),
    #[error("STREAMER_MODE must be one of true/false/1/0/yes/no/on/off, got {0:?}")]
    InvalidStreamerMode(String),
    #[error("TOOLTIP_TIMEOUT_MS must be a whole number of milliseconds, got {value:?}: {reason}")]
    InvalidTooltipTimeout { value: String, reason: String },
    #[error("BIND_ADDRESS must be an ip:port socket address, got {value:?}: {reason}")]
    InvalidBindAddress { value: String, reason: String },
}

impl IntoResponse for ConfigError {
    fn into_response(self) -> Response {
        InternalServerError(self).into_response()
    }
}
