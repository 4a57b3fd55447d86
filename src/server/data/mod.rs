//! Data access layer repositories.
//!
//! Repositories wrap SeaORM queries for a single table each and are generic over
//! [`sea_orm::ConnectionTrait`] so they run equally against the pool or inside a transaction.
//! They are grouped by domain: guild membership, the item catalog, characters with their item
//! lists, and the audit trail.

pub mod audit;
pub mod catalog;
pub mod character;
pub mod guild;
