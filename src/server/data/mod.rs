//! Storage layer for student documents.
//!
//! Defines the `StudentStore` trait the service layer depends on, and the MongoDB-backed
//! `StudentRepository` implementing it. Stores accept domain parameter types, perform at
//! most one database round trip per call, and return domain models so the service layer
//! never touches BSON documents.

pub mod student;


use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;

use crate::server::{
    error::store::StoreError,
    model::student::{Student, StudentFilter, StudentSummary, UpdateStudentParam},
};

/// Operations on the student collection.
///
/// Implementations must be safe to share between concurrently running handlers; the
/// application holds a single instance behind an `Arc` for its whole lifetime.
#[async_trait]
pub trait StudentStore: Send + Sync {
    /// Returns the `name`/`age` projection of every student matching `filter`, in the
    /// store's natural order.
    async fn list(&self, filter: &StudentFilter) -> Result<Vec<StudentSummary>, StoreError>;

    /// Finds a student by identifier.
    async fn find_by_id(&self, id: ObjectId) -> Result<Option<Student>, StoreError>;

    /// Inserts a new student document and returns its assigned identifier.
    async fn insert(&self, student: entity::student::Model) -> Result<ObjectId, StoreError>;

    /// Merges the supplied fields into the student with the given identifier.
    ///
    /// Returns `false` if no student matched.
    async fn update(&self, id: ObjectId, changes: &UpdateStudentParam)
        -> Result<bool, StoreError>;

    /// Deletes the student with the given identifier.
    ///
    /// Returns `false` if no student matched.
    async fn delete(&self, id: ObjectId) -> Result<bool, StoreError>;
}
