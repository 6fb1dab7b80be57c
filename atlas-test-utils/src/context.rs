//! Test context returned by [`TestBuilder`](crate::TestBuilder).

use std::sync::Arc;

use mockito::{Mock, Server, ServerGuard};
use sea_orm::{sea_query::TableCreateStatement, ConnectionTrait, Database, DatabaseConnection};
use tower_sessions::{MemoryStore, Session};

use crate::{constant::TEST_USER_AGENT, error::TestError};

/// A configured test environment.
///
/// ```ignore
/// let mut test = TestBuilder::new()
///     .with_atlas_tables()
///     .with_alpha_endpoint("FRA", vec![country_json("FRA", "France")], 1)
///     .build()
///     .await?;
///
/// let user = test.user().insert_user("Ada", "ada@example.com").await?;
/// let state: AppState = test.to_app_state();
///
/// test.assert_mocks();
/// ```
pub struct TestContext {
    /// In-memory SQLite database
    pub db: DatabaseConnection,
    /// Country client pointed at the mock server
    pub country_client: country_api::Client,
    /// Session backed by an in-memory store
    pub session: Session,

    /// Mock REST Countries server
    pub(crate) server: ServerGuard,
    /// Endpoints to verify in [`assert_mocks`](Self::assert_mocks)
    pub(crate) mocks: Vec<Mock>,
}

impl TestContext {
    /// Converts the database and country client into application state.
    ///
    /// Keeps this crate free of a dependency on the main crate:
    ///
    /// ```ignore
    /// let state: AppState = test.to_app_state();
    /// ```
    pub fn to_app_state<T>(&self) -> T
    where
        T: From<(DatabaseConnection, country_api::Client)>,
    {
        T::from((self.db.clone(), self.country_client.clone()))
    }

    /// Asserts every endpoint registered through the builder was called as expected.
    ///
    /// # Panics
    /// Panics if any endpoint was called a different number of times than expected.
    pub fn assert_mocks(&self) {
        for mock in &self.mocks {
            mock.assert();
        }
    }

    pub(crate) async fn new() -> Result<Self, TestError> {
        let server = Server::new_async().await;

        let country_client = country_api::Client::builder()
            .base_url(&server.url())
            .user_agent(TEST_USER_AGENT)
            .build()?;

        let store = Arc::new(MemoryStore::default());
        let session = Session::new(None, store, None);

        let db = Database::connect("sqlite::memory:").await?;

        Ok(TestContext {
            db,
            country_client,
            session,
            server,
            mocks: Vec::new(),
        })
    }

    pub(crate) async fn with_tables(
        &self,
        stmts: Vec<TableCreateStatement>,
    ) -> Result<(), TestError> {
        for stmt in stmts {
            self.db.execute(&stmt).await?;
        }

        Ok(())
    }
}
