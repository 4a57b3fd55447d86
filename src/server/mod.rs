//! Server side of Lootledger.
//!
//! HTTP routing, sessions, database access and the services behind the guild pages: item
//! notes & priorities, recipe listings, mass loot assignment, the audit log and tooltip
//! lookups.

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
pub mod util;
