use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use dioxus_logger::tracing;
use thiserror::Error;

use crate::view::error::render_error_page;

#[derive(Error, Debug)]
pub enum AuthError {
    #[error("User ID is not present in session")]
    UserNotInSession,
    #[error("User ID {user_id} is not a member of guild ID {guild_id}")]
    NotGuildMember { guild_id: i32, user_id: i32 },
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        match self {
            Self::UserNotInSession => {
                tracing::debug!("{}", self);

                render_error_page(
                    StatusCode::FORBIDDEN,
                    "Not logged in",
                    vec!["You need to be logged in to view this page.".to_string()],
                )
            }
            Self::NotGuildMember { guild_id, user_id } => {
                tracing::debug!(guild_id = %guild_id, user_id = %user_id, "{}", self);

                render_error_page(
                    StatusCode::FORBIDDEN,
                    "Not a member",
                    vec!["You're not a member of that guild.".to_string()],
                )
            }
        }
    }
}
