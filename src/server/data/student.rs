//! Student data repository for MongoDB operations
//!
//! Provides the `StudentRepository`, the MongoDB implementation of `StudentStore`, along
//! with the builders for the list filter, list projection and partial-update documents.

use async_trait::async_trait;
use entity::student::field;
use futures::TryStreamExt;
use mongodb::{
    bson::{doc, oid::ObjectId, Document},
    Collection,
};

use crate::server::{
    data::StudentStore,
    error::store::StoreError,
    model::student::{Student, StudentFilter, StudentSummary, UpdateStudentParam},
};

/// Builds the query document for a list request.
///
/// `country` becomes an exact match on `address.country` and `min_age` an inclusive
/// `$gte` bound on `age`. An empty filter yields an empty document, matching every
/// student.
pub fn filter_document(filter: &StudentFilter) -> Document {
    let mut query = Document::new();

    if let Some(country) = &filter.country {
        query.insert(field::ADDRESS_COUNTRY, country.as_str());
    }
    if let Some(min_age) = filter.min_age {
        query.insert(field::AGE, doc! { "$gte": min_age });
    }

    query
}

/// Projection keeping only `name` and `age` and suppressing `_id`.
pub fn summary_projection() -> Document {
    let mut projection = Document::new();
    projection.insert(field::NAME, 1);
    projection.insert(field::AGE, 1);
    projection.insert(field::ID, 0);
    projection
}

/// Builds the `$set` update for a partial update, one dotted path per supplied field.
///
/// Address fields are set individually (`address.city`, `address.country`) so supplying
/// one never clears the other.
pub fn update_document(changes: &UpdateStudentParam) -> Document {
    let mut set = Document::new();

    if let Some(name) = &changes.name {
        set.insert(field::NAME, name.as_str());
    }
    if let Some(age) = changes.age {
        set.insert(field::AGE, age);
    }
    if let Some(city) = &changes.city {
        set.insert(field::ADDRESS_CITY, city.as_str());
    }
    if let Some(country) = &changes.country {
        set.insert(field::ADDRESS_COUNTRY, country.as_str());
    }

    doc! { "$set": set }
}

fn id_filter(id: ObjectId) -> Document {
    let mut query = Document::new();
    query.insert(field::ID, id);
    query
}

/// Repository providing MongoDB operations for student management.
///
/// Holds a handle to the student collection. The handle is internally pooled and cheap
/// to clone, so one repository is created at startup and shared by every request.
#[derive(Clone)]
pub struct StudentRepository {
    collection: Collection<entity::student::Model>,
}

impl StudentRepository {
    /// Creates a new StudentRepository instance
    ///
    /// # Arguments
    /// - `collection` - Handle to the student collection
    ///
    /// # Returns
    /// - `StudentRepository` - new repository instance
    pub fn new(collection: Collection<entity::student::Model>) -> Self {
        Self { collection }
    }
}

#[async_trait]
impl StudentStore for StudentRepository {
    async fn list(&self, filter: &StudentFilter) -> Result<Vec<StudentSummary>, StoreError> {
        let summaries: Vec<entity::prelude::StudentSummary> = self
            .collection
            .clone_with_type::<entity::prelude::StudentSummary>()
            .find(filter_document(filter))
            .projection(summary_projection())
            .await?
            .try_collect()
            .await?;

        Ok(summaries
            .into_iter()
            .map(StudentSummary::from_entity)
            .collect())
    }

    async fn find_by_id(&self, id: ObjectId) -> Result<Option<Student>, StoreError> {
        let student = self.collection.find_one(id_filter(id)).await?;

        Ok(student.map(Student::from_entity))
    }

    async fn insert(&self, student: entity::student::Model) -> Result<ObjectId, StoreError> {
        let result = self.collection.insert_one(student).await?;

        result
            .inserted_id
            .as_object_id()
            .ok_or(StoreError::UnexpectedInsertedId(result.inserted_id))
    }

    async fn update(
        &self,
        id: ObjectId,
        changes: &UpdateStudentParam,
    ) -> Result<bool, StoreError> {
        let result = self
            .collection
            .update_one(id_filter(id), update_document(changes))
            .await?;

        Ok(result.matched_count > 0)
    }

    async fn delete(&self, id: ObjectId) -> Result<bool, StoreError> {
        let result = self.collection.delete_one(id_filter(id)).await?;

        Ok(result.deleted_count > 0)
    }
}
