//! Test environment for Lootledger.
//!
//! Provides an in-memory SQLite database with the loot schema, a mockito server standing in for
//! the tooltip service, an in-memory session and fixture helpers for inserting guild data.

pub mod builder;
pub mod error;
pub mod fixtures;
pub mod setup;

pub use builder::TestBuilder;
pub use error::TestError;
pub use setup::{TestAppState, TestSetup};

pub mod prelude {
    pub use crate::{
        test_setup_with_loot_tables, test_setup_with_tables, TestBuilder, TestError, TestSetup,
    };
}
