//! Server application models and type definitions.
//!
//! Application state, database model aliases, the per-request guild context with its
//! permissions & visibility policy, typed session data and parsed form input.

pub mod app;
pub mod assignment;
pub mod db;
pub mod guild;
pub mod note;
pub mod permission;
pub mod session;
pub mod visibility;
