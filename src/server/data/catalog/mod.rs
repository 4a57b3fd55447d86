//! Item catalog repositories: instances, item sources, items and the guild's item notes.

pub mod guild_item;
pub mod instance;
pub mod item;
