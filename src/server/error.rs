//! Error types for the Lootledger server application.
//!
//! Domain errors (authentication, configuration, guild lookups, form validation) are defined in
//! their own modules and aggregated into [`Error`]. Every error renders as an HTML page through
//! its `IntoResponse` implementation; anything without a specific mapping is logged and shown
//! as a generic 500 page.

pub mod auth;
pub mod config;
pub mod guild;
pub mod validation;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use dioxus_logger::tracing;
use thiserror::Error;

use crate::{
    server::error::{
        auth::AuthError, config::ConfigError, guild::GuildError, validation::ValidationError,
    },
    view::error::render_error_page,
};

/// Main error type for the Lootledger server application.
///
/// Uses `thiserror`'s `#[from]` attribute so the `?` operator converts domain and library
/// errors automatically.
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error (missing or invalid environment variables).
    #[error(transparent)]
    ConfigError(#[from] ConfigError),
    /// Authentication error (no session user, not a member of the guild).
    #[error(transparent)]
    AuthError(#[from] AuthError),
    /// A guild, instance, item or member referenced by the URL does not exist.
    #[error(transparent)]
    GuildError(#[from] GuildError),
    /// Submitted form failed validation, nothing was written.
    #[error(transparent)]
    ValidationError(#[from] ValidationError),
    /// Parse error (failed to parse a value from string or other format).
    #[error("Failed to parse value: {0:?}")]
    ParseError(String),
    /// Internal error indicating a bug in Lootledger's code.
    #[error("Internal error with Lootledger's code, this indicates a bug: {0:?}")]
    InternalError(String),
    /// Database error (query failures, connection issues, constraint violations).
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),
    /// Session error (session retrieval, storage, serialization).
    #[error(transparent)]
    SessionError(#[from] tower_sessions::session::Error),
    /// Redis session store error (connection, command execution).
    #[error(transparent)]
    SessionRedisError(#[from] tower_sessions_redis_store::fred::prelude::Error),
    /// HTTP client construction error.
    #[error(transparent)]
    HttpClientError(#[from] reqwest::Error),
    /// I/O error while binding or serving the listener.
    #[error(transparent)]
    IoError(#[from] std::io::Error),
}

/// Maps domain errors to their own responses, everything else becomes a 500 page.
impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Self::ConfigError(err) => err.into_response(),
            Self::AuthError(err) => err.into_response(),
            Self::GuildError(err) => err.into_response(),
            Self::ValidationError(err) => err.into_response(),
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper type for converting any displayable error into a 500 Internal Server Error response.
///
/// The full error is logged, the client only sees a generic message.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        render_error_page(
            StatusCode::INTERNAL_SERVER_ERROR,
            "Internal server error",
            vec!["Something went wrong on our end, please try again.".to_string()],
        )
    }
}
