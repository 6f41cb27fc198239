//! Camp Signups Test Utils
//!
//! Shared testing utilities for the camp signups server. This crate offers a builder for
//! creating test contexts backed by in-memory SQLite databases, plus factories that insert
//! campers, activities and signups with sensible defaults.
//!
//! # Overview
//!
//! - **TestBuilder**: Fluent builder for configuring which tables exist
//! - **TestContext**: Test environment holding the database connection
//! - **TestError**: Errors that can occur during test setup
//! - **factory**: Insert entities with defaults, overriding only what a test cares about
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::{builder::TestBuilder, factory};
//!
//! #[tokio::test]
//! async fn lists_campers() -> Result<(), TestError> {
//!     let test = TestBuilder::new().with_camp_tables().build().await?;
//!     let db = test.db.as_ref().unwrap();
//!
//!     let camper = factory::create_camper(db).await?;
//!     // Perform database operations...
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
