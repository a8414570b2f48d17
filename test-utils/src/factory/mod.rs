//! Factory methods for creating test data.
//!
//! This module provides factory methods for inserting student documents with sensible
//! defaults into a `MemoryCollection`, reducing boilerplate in tests.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), TestError> {
//!     let collection = MemoryCollection::new();
//!
//!     // Create with defaults
//!     let student = factory::student::create_student(&collection).await?;
//!
//!     // Create a spread of students
//!     let students = factory::helpers::create_students(
//!         &collection,
//!         &[("Asha", 20, "IN"), ("Liam", 17, "IE")],
//!     )
//!     .await?;
//!
//!     Ok(())
//! }
//! ```

pub mod helpers;
pub mod student;

pub use student::{create_student, StudentFactory};
