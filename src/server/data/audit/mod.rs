//! Audit trail repositories.
//!
//! Every change to loot lists or item notes writes an audit log row, bulk submissions
//! additionally group their rows under a batch.

pub mod audit_log;
pub mod batch;
