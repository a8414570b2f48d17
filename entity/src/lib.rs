//! Stored document shapes for the student records collection.
//!
//! These types mirror the documents persisted in MongoDB one to one and are shared by the
//! service crate and the `test-utils` crate. They carry no business logic; conversion into
//! domain models happens at the repository boundary of the service.

pub mod prelude;
pub mod student;
