//! Helpers shared by the guild page handlers.
//!
//! Every handler resolves the session user into a [`GuildContext`](crate::server::model::guild::GuildContext)
//! first, builds the page layout from it and redirects with a flash message when the member lacks
//! the permission a page requires.

pub mod guild_context;
pub mod permission;
