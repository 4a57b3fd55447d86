//! Character and character item list repositories.

pub mod character;
pub mod character_item;
