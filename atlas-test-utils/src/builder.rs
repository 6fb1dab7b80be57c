//! Declarative test setup.
//!
//! Builder methods only queue work; everything runs in [`TestBuilder::build`], in order:
//! tables, then custom mock endpoints, then the REST Countries shortcuts.

use mockito::{Mock, ServerGuard};
use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};
use serde_json::Value;

use crate::{error::TestError, TestContext};

type MockBuilder = Box<dyn FnOnce(&mut ServerGuard) -> Mock>;

/// Builder for a [`TestContext`].
pub struct TestBuilder {
    tables: Vec<TableCreateStatement>,
    include_atlas_tables: bool,

    mock_builders: Vec<MockBuilder>,

    // (path segment, countries, expected requests)
    alpha_endpoints: Vec<(String, Vec<Value>, usize)>,
    region_endpoints: Vec<(String, Vec<Value>, usize)>,
    name_endpoints: Vec<(String, Vec<Value>, usize)>,
    all_endpoints: Vec<(Vec<Value>, usize)>,
    // (path, status, expected requests)
    upstream_errors: Vec<(String, usize, usize)>,
}

impl TestBuilder {
    pub fn new() -> Self {
        Self {
            tables: Vec::new(),
            include_atlas_tables: false,
            mock_builders: Vec::new(),
            alpha_endpoints: Vec::new(),
            region_endpoints: Vec::new(),
            name_endpoints: Vec::new(),
            all_endpoints: Vec::new(),
            upstream_errors: Vec::new(),
        }
    }

    /// Creates the `atlas_user` and `atlas_favorite` tables.
    pub fn with_atlas_tables(mut self) -> Self {
        self.include_atlas_tables = true;
        self
    }

    /// Creates the table of an entity.
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Registers a custom endpoint on the mock server.
    ///
    /// Custom endpoints are created before the shortcuts below, so mockito matches them
    /// first when both cover the same path.
    pub fn with_mock_endpoint<F>(mut self, setup: F) -> Self
    where
        F: FnOnce(&mut ServerGuard) -> Mock + 'static,
    {
        self.mock_builders.push(Box::new(setup));
        self
    }

    /// Answers `GET /alpha/{code}` with `countries`.
    pub fn with_alpha_endpoint(
        mut self,
        code: impl Into<String>,
        countries: Vec<Value>,
        expected_requests: usize,
    ) -> Self {
        self.alpha_endpoints
            .push((code.into(), countries, expected_requests));
        self
    }

    /// Answers `GET /region/{region}` with `countries`.
    pub fn with_region_endpoint(
        mut self,
        region: impl Into<String>,
        countries: Vec<Value>,
        expected_requests: usize,
    ) -> Self {
        self.region_endpoints
            .push((region.into(), countries, expected_requests));
        self
    }

    /// Answers `GET /name/{name}` with `countries`.
    pub fn with_name_endpoint(
        mut self,
        name: impl Into<String>,
        countries: Vec<Value>,
        expected_requests: usize,
    ) -> Self {
        self.name_endpoints
            .push((name.into(), countries, expected_requests));
        self
    }

    /// Answers `GET /all` with `countries`, whatever the field list.
    pub fn with_all_endpoint(mut self, countries: Vec<Value>, expected_requests: usize) -> Self {
        self.all_endpoints.push((countries, expected_requests));
        self
    }

    /// Answers `GET {path}` with an upstream error status.
    pub fn with_upstream_error(
        mut self,
        path: impl Into<String>,
        status: usize,
        expected_requests: usize,
    ) -> Self {
        self.upstream_errors
            .push((path.into(), status, expected_requests));
        self
    }

    /// Creates the configured environment.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Ready to use environment
    /// - `Err(TestError::DbErr)` - Database connection or table creation failed
    /// - `Err(TestError::CountryApiError)` - Country client could not be built
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut test = TestContext::new().await?;

        let mut tables = Vec::new();

        if self.include_atlas_tables {
            let schema = Schema::new(sea_orm::DbBackend::Sqlite);
            tables.push(schema.create_table_from_entity(entity::prelude::AtlasUser));
            tables.push(schema.create_table_from_entity(entity::prelude::AtlasFavorite));
        }

        tables.extend(self.tables);
        test.with_tables(tables).await?;

        let mut mocks = Vec::new();

        for builder in self.mock_builders {
            mocks.push(builder(&mut test.server));
        }

        for (code, countries, expected) in self.alpha_endpoints {
            let path = format!("/alpha/{code}");
            mocks.push(test.country().create_countries_endpoint(&path, &countries, expected));
        }

        for (region, countries, expected) in self.region_endpoints {
            let path = format!("/region/{region}");
            mocks.push(test.country().create_countries_endpoint(&path, &countries, expected));
        }

        for (name, countries, expected) in self.name_endpoints {
            let path = format!("/name/{name}");
            mocks.push(test.country().create_countries_endpoint(&path, &countries, expected));
        }

        for (countries, expected) in self.all_endpoints {
            mocks.push(test.country().create_all_endpoint(&countries, expected));
        }

        for (path, status, expected) in self.upstream_errors {
            mocks.push(test.country().create_error_endpoint(&path, status, expected));
        }

        test.mocks = mocks;

        Ok(test)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
