use std::sync::Arc;

use mockito::{Mock, Server, ServerGuard};
use sea_orm::{
    sea_query::TableCreateStatement, ConnectionTrait, Database, DatabaseConnection, DbBackend,
    Schema,
};
use tower_sessions::{MemoryStore, Session};

use crate::error::TestError;

pub struct TestAppState {
    pub db: DatabaseConnection,
}

pub struct TestSetup {
    pub server: ServerGuard,
    pub state: TestAppState,
    pub session: Session,
    pub mocks: Vec<Mock>,
}

impl TestSetup {
    /// Convert the test state into any type constructible from the database connection & the
    /// mock server's URL, used as the tooltip base URL.
    ///
    /// This allows conversion to `AppState` without a circular dependency on the main crate.
    ///
    /// # Example
    /// ```ignore
    /// let state: AppState = test.state();
    /// ```
    pub fn state<T>(&self) -> T
    where
        T: From<(DatabaseConnection, String)>,
    {
        T::from((self.state.db.clone(), self.server.url()))
    }
}

impl TestSetup {
    pub async fn new() -> Result<Self, TestError> {
        let mock_server = Server::new_async().await;

        let store = Arc::new(MemoryStore::default());
        let session = Session::new(None, store, None);

        let db = Database::connect("sqlite::memory:").await?;

        Ok(TestSetup {
            server: mock_server,
            state: TestAppState { db },
            session,
            mocks: Vec::new(),
        })
    }

    pub async fn with_tables(&self, stmts: Vec<TableCreateStatement>) -> Result<(), TestError> {
        for stmt in stmts {
            self.state.db.execute(&stmt).await?;
        }

        Ok(())
    }

    /// Assert all mock endpoints were called as expected.
    ///
    /// # Panics
    /// Panics if any mock endpoint was not called the expected number of times
    pub fn assert_mocks(&self) {
        for mock in &self.mocks {
            mock.assert();
        }
    }
}

/// Every table of the loot schema, parents before children
pub fn loot_tables() -> Vec<TableCreateStatement> {
    let schema = Schema::new(DbBackend::Sqlite);

    vec![
        schema.create_table_from_entity(entity::prelude::Guild),
        schema.create_table_from_entity(entity::prelude::Role),
        schema.create_table_from_entity(entity::prelude::Member),
        schema.create_table_from_entity(entity::prelude::Raid),
        schema.create_table_from_entity(entity::prelude::Instance),
        schema.create_table_from_entity(entity::prelude::ItemSource),
        schema.create_table_from_entity(entity::prelude::Item),
        schema.create_table_from_entity(entity::prelude::ItemItemSource),
        schema.create_table_from_entity(entity::prelude::GuildItem),
        schema.create_table_from_entity(entity::prelude::Character),
        schema.create_table_from_entity(entity::prelude::Batch),
        schema.create_table_from_entity(entity::prelude::CharacterItem),
        schema.create_table_from_entity(entity::prelude::AuditLog),
    ]
}

#[macro_export]
macro_rules! test_setup_with_tables {
    // Pattern 1: No entities provided
    () => {{
        TestSetup::new().await
    }};

    // Pattern 2: Entities provided
    ($($entity:expr),+ $(,)?) => {{
        async {
            let setup = TestSetup::new().await?;

            let schema = sea_orm::Schema::new(sea_orm::DbBackend::Sqlite);
            let stmts = vec![
                $(schema.create_table_from_entity($entity),)+
            ];
            setup.with_tables(stmts).await?;

            Ok::<_, $crate::error::TestError>(setup)
        }.await
    }};
}

#[macro_export]
macro_rules! test_setup_with_loot_tables {
    () => {{
        async {
            let setup = TestSetup::new().await?;
            setup.with_tables($crate::setup::loot_tables()).await?;

            Ok::<_, $crate::error::TestError>(setup)
        }.await
    }};
}
