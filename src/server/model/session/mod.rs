//! Session data models and utilities.
//!
//! Type-safe wrappers for data kept in the (Redis-backed) session: the logged in user ID and
//! the flash message shown on the next page render.

pub mod flash;
pub mod user;
