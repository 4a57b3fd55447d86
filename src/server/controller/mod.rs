//! HTTP controller endpoints for the guild pages.
//!
//! Handlers resolve the guild context from the session, call into the services and either render
//! a page or redirect with a flash message. Permission failures redirect, every other error is
//! rendered through [`Error`](crate::server::error::Error)'s `IntoResponse` implementation.

pub mod assignment;
pub mod audit_log;
pub mod item;
pub mod member;
pub mod util;
