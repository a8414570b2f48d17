//! Student Records Test Utils
//!
//! Provides shared testing utilities for building unit and integration tests for the student
//! records service. This crate offers an in-memory stand-in for the MongoDB student collection
//! together with a builder pattern for creating seeded test contexts.
//!
//! # Overview
//!
//! The test utilities consist of these components:
//! - **MemoryCollection**: In-memory student collection with fault injection
//! - **TestBuilder**: Fluent builder for configuring test environments
//! - **TestContext**: Test environment containing the seeded collection
//! - **TestError**: Error types that can occur during collection operations
//! - **factory / fixture**: Student documents with sensible defaults
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::{builder::TestBuilder, fixture};
//!
//! #[tokio::test]
//! async fn test_student_operations() -> Result<(), TestError> {
//!     let test = TestBuilder::new()
//!         .with_student(fixture::student::entity())
//!         .build()
//!         .await?;
//!
//!     let students = test.collection.find(|_| true).await?;
//!     // Perform assertions...
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod collection;
pub mod context;
pub mod error;
pub mod factory;
pub mod fixture;
