//! Loot schema fixture utilities.
//!
//! Each helper inserts a single record with plausible defaults and returns the stored model.
//! Parents are never created implicitly, insert the guild, items & characters a row refers to
//! first.

pub mod audit;
pub mod catalog;
pub mod character;
pub mod guild;

use crate::TestSetup;

impl TestSetup {
    pub fn loot<'a>(&'a mut self) -> LootFixtures<'a> {
        LootFixtures { setup: self }
    }
}

pub struct LootFixtures<'a> {
    setup: &'a mut TestSetup,
}
