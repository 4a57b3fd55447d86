//! Utility functions and helpers for server operations.
//!
//! Indexed form parsing for the bulk editors, slug generation for canonical URLs and the date
//! window applied to backdated loot receipts.

pub mod form;
pub mod slug;
pub mod time;
