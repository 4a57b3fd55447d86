//! Declarative test builder.
//!
//! Configure tables & mock endpoints up front, everything is created during the final
//! [`TestBuilder::build`] call. Records are inserted afterwards through the fixtures on
//! [`TestSetup`].

use mockito::Mock;
use sea_orm::{sea_query::TableCreateStatement, DbBackend, EntityTrait, Schema};

use crate::{error::TestError, setup::loot_tables, TestSetup};

/// Builder for declarative test initialization.
pub struct TestBuilder {
    tables: Vec<TableCreateStatement>,
    include_loot_tables: bool,

    mock_builders: Vec<Box<dyn FnOnce(&mut mockito::ServerGuard) -> Mock>>,
    tooltip_endpoints: Vec<(i32, String, usize)>, // (item_id, tooltip, expected_requests)
}

impl TestBuilder {
    pub fn new() -> Self {
        Self {
            tables: Vec::new(),
            include_loot_tables: false,
            mock_builders: Vec::new(),
            tooltip_endpoints: Vec::new(),
        }
    }

    /// Create every table of the loot schema
    pub fn with_loot_tables(mut self) -> Self {
        self.include_loot_tables = true;
        self
    }

    /// Add a single entity table, executed after the loot tables
    ///
    /// ```ignore
    /// let test = TestBuilder::new()
    ///     .with_table(entity::prelude::Guild)
    ///     .build()
    ///     .await?;
    /// ```
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Serve `tooltip` for `item_id`, expecting `expected_requests` calls
    pub fn with_tooltip_endpoint(
        mut self,
        item_id: i32,
        tooltip: impl Into<String>,
        expected_requests: usize,
    ) -> Self {
        self.tooltip_endpoints
            .push((item_id, tooltip.into(), expected_requests));
        self
    }

    /// Add a custom mock endpoint with direct access to the mockito server
    pub fn with_mock_endpoint<F>(mut self, setup: F) -> Self
    where
        F: FnOnce(&mut mockito::ServerGuard) -> Mock + 'static,
    {
        self.mock_builders.push(Box::new(setup));
        self
    }

    /// Creates the configured tables, then the mock endpoints.
    ///
    /// Custom endpoints are registered before tooltip endpoints so tests can queue an error
    /// response ahead of a successful one for the same path.
    ///
    /// # Returns
    /// - `Ok(TestSetup)` - Test environment with mocks kept alive for [`TestSetup::assert_mocks`]
    /// - `Err(TestError::DbErr)` - Connection or table creation failed
    pub async fn build(self) -> Result<TestSetup, TestError> {
        let mut setup = TestSetup::new().await?;

        let mut all_tables = Vec::new();
        if self.include_loot_tables {
            all_tables.extend(loot_tables());
        }
        all_tables.extend(self.tables);
        setup.with_tables(all_tables).await?;

        let mut mocks = Vec::new();

        for builder in self.mock_builders {
            mocks.push(builder(&mut setup.server));
        }

        for (item_id, tooltip, expected) in self.tooltip_endpoints {
            mocks.push(
                setup
                    .tooltip()
                    .create_tooltip_endpoint(item_id, &tooltip, expected),
            );
        }

        setup.mocks = mocks;

        Ok(setup)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
