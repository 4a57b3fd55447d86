//! Fixture helpers used during test execution.
//!
//! - `loot` - Guilds, members, the item catalog, characters & their loot lists, audit rows
//! - `tooltip` - Mock tooltip endpoints on the mockito server

pub mod loot;
pub mod tooltip;
