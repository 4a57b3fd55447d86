use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use dioxus_logger::tracing;
use thiserror::Error;

use crate::view::error::render_error_page;

/// Lookups of URL-addressed records which found nothing within the guild.
#[derive(Error, Debug)]
pub enum GuildError {
    #[error("Guild ID {0} not found")]
    GuildNotFound(i32),
    #[error("Instance {0:?} not found for the guild's expansion")]
    InstanceNotFound(String),
    #[error("Item ID {0} not found for the guild's expansion")]
    ItemNotFound(i32),
    #[error("Member ID {0} not found in guild")]
    MemberNotFound(i32),
}

impl IntoResponse for GuildError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        let title = match self {
            Self::GuildNotFound(_) => "Guild not found",
            Self::InstanceNotFound(_) => "Instance not found",
            Self::ItemNotFound(_) => "Item not found",
            Self::MemberNotFound(_) => "Member not found",
        };

        render_error_page(StatusCode::NOT_FOUND, title, vec![self.to_string()])
    }
}
