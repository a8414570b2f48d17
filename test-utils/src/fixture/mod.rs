//! Test fixtures providing reusable test data without collection insertion.
//!
//! This module contains fixture functions that create student documents for use in unit
//! tests and as default values for factories. Unlike factories, fixtures do NOT insert data
//! into a collection.
//!
//! # Example
//!
//! ```rust,ignore
//! use test_utils::fixture;
//!
//! let student = fixture::student::entity();
//!
//! let minor = fixture::student::entity_builder()
//!     .age(15)
//!     .build();
//! ```

pub mod student;
