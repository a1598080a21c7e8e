//! Declarative test builder.
//!
//! This module provides the `TestBuilder` API for configuring test environments before execution.
//! The builder pattern allows chaining multiple configuration methods together, with all operations
//! queued and executed during the final `build()` call.

use mockito::Mock;
use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};

use crate::{error::TestError, TestContext};

/// Builder for declarative test initialization.
///
/// Provides an interface for setting up test environments with database tables,
/// mock fixtures, and HTTP endpoints. Methods can be chained together and finalized
/// with `build()` to create a complete test setup.
pub struct TestBuilder {
    // Tables to create
    tables: Vec<TableCreateStatement>,
    include_tables: bool,

    // Database fixtures: student emails and daily emissions of unlinked calculations
    students: Vec<String>,
    calculations: Vec<f64>,

    // Mock endpoints to create
    mock_builders: Vec<Box<dyn FnOnce(&mut mockito::ServerGuard) -> Mock>>,

    // Email endpoint shortcuts: expected requests, and (status, expected requests) for failures
    email_endpoints: Vec<usize>,
    failing_email_endpoints: Vec<(usize, usize)>,
}

impl TestBuilder {
    /// Create a new TestBuilder.
    ///
    /// Initializes an empty builder with no tables, fixtures, or mock endpoints configured.
    pub fn new() -> Self {
        Self {
            tables: Vec::new(),
            include_tables: false,
            students: Vec::new(),
            calculations: Vec::new(),
            mock_builders: Vec::new(),
            email_endpoints: Vec::new(),
            failing_email_endpoints: Vec::new(),
        }
    }

    /// Add every application table to the test database.
    ///
    /// Creates Student, Calculation and EmailReport, in foreign key order.
    pub fn with_tables(mut self) -> Self {
        self.include_tables = true;
        self
    }

    /// Add a single entity table to the test database.
    ///
    /// Generates a CREATE TABLE statement for the entity, which will be executed during `build()`.
    /// Chain multiple calls to add multiple tables.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use ecocalc_test_utils::TestBuilder;
    /// use entity::prelude::*;
    ///
    /// # async fn example() -> Result<(), ecocalc_test_utils::TestError> {
    /// let test = TestBuilder::new()
    ///     .with_table(Student)
    ///     .build()
    ///     .await?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Insert mock student into database.
    ///
    /// # Arguments
    /// - `email` - Normalized email of the student
    pub fn with_mock_student(mut self, email: &str) -> Self {
        self.students.push(email.to_string());
        self
    }

    /// Insert mock calculation, not linked to any student, into database.
    ///
    /// # Arguments
    /// - `daily_emissions` - Daily emissions of the stored record, used by averages
    pub fn with_mock_calculation(mut self, daily_emissions: f64) -> Self {
        self.calculations.push(daily_emissions);
        self
    }

    /// Add mock email provider endpoint that accepts every message.
    ///
    /// Creates a mock HTTP endpoint at `POST /emails` answering with a message ID. The mock
    /// will verify it was called exactly `expected_requests` times.
    pub fn with_email_endpoint(mut self, expected_requests: usize) -> Self {
        self.email_endpoints.push(expected_requests);
        self
    }

    /// Add mock email provider endpoint that rejects every message.
    ///
    /// # Arguments
    /// - `status` - Non-2xx HTTP status the endpoint answers with
    /// - `expected_requests` - Number of times this endpoint should be called
    pub fn with_failing_email_endpoint(mut self, status: usize, expected_requests: usize) -> Self {
        self.failing_email_endpoints.push((status, expected_requests));
        self
    }

    /// Add a custom mock endpoint with full control.
    ///
    /// Allows complete customization of mock endpoint behavior by providing direct access
    /// to the mockito ServerGuard. Use this for endpoints not covered by helper methods.
    pub fn with_mock_endpoint<F>(mut self, setup: F) -> Self
    where
        F: FnOnce(&mut mockito::ServerGuard) -> Mock + 'static,
    {
        self.mock_builders.push(Box::new(setup));
        self
    }

    /// Build the test setup by creating all configured tables, fixtures, and mock endpoints.
    ///
    /// Executes all queued operations in the following order:
    /// 1. Creates database tables (application tables if specified, then custom tables)
    /// 2. Inserts database fixtures (students, calculations)
    /// 3. Creates mock HTTP endpoints (custom endpoints, email endpoints)
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Fully configured test environment ready for use
    /// - `Err(TestError::DbErr)` - Database table creation or fixture insertion failed
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut setup = TestContext::new().await?;

        // 1. Create tables
        let mut all_tables = Vec::new();

        if self.include_tables {
            let schema = Schema::new(sea_orm::DbBackend::Sqlite);
            all_tables.extend(vec![
                schema.create_table_from_entity(entity::prelude::Student),
                schema.create_table_from_entity(entity::prelude::Calculation),
                schema.create_table_from_entity(entity::prelude::EmailReport),
            ]);
        }

        all_tables.extend(self.tables);
        setup.with_tables(all_tables).await?;

        // 2. Insert database fixtures
        for email in self.students {
            setup.student().insert_mock_student(&email).await?;
        }

        for daily_emissions in self.calculations {
            setup
                .calculation()
                .insert_mock_calculation(daily_emissions)
                .await?;
        }

        // 3. Create mock endpoints
        // Custom endpoints are created first so mockito matches them before the shortcuts
        let mut mocks = Vec::new();

        for builder in self.mock_builders {
            mocks.push(builder(&mut setup.server));
        }

        for expected in self.email_endpoints {
            mocks.push(setup.email().create_email_endpoint(expected));
        }

        for (status, expected) in self.failing_email_endpoints {
            mocks.push(setup.email().create_failing_email_endpoint(status, expected));
        }

        // Store mocks in setup so they live as long as the test
        setup.mocks = mocks;

        Ok(setup)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
