//! Service layer for business logic.
//!
//! Services combine repositories into the operations behind each page: resolving the guild
//! context of a request, assembling catalog listings, reconciling loot assignments, editing
//! item notes, reading the audit log and fetching item tooltips. Multi-step writes run inside
//! a single database transaction.

pub mod assignment;
pub mod audit;
pub mod catalog;
pub mod guild;
pub mod member;
pub mod note;
pub mod tooltip;
