use mongodb::bson::oid::ObjectId;

use crate::server::{
    data::StudentStore,
    error::AppError,
    model::student::{
        CreateStudentParam, Student, StudentFilter, StudentId, StudentSummary, UpdateStudentParam,
    },
};

/// Message returned when a partial update supplies no fields.
pub const NO_FIELDS_MESSAGE: &str = "No valid fields provided for update.";

pub struct StudentService<'a> {
    store: &'a dyn StudentStore,
}

impl<'a> StudentService<'a> {
    pub fn new(store: &'a dyn StudentStore) -> Self {
        Self { store }
    }

    /// Lists the `name`/`age` projection of students matching the filter
    pub async fn list(&self, filter: StudentFilter) -> Result<Vec<StudentSummary>, AppError> {
        let students = self.store.list(&filter).await?;

        tracing::debug!(
            country = ?filter.country,
            min_age = ?filter.min_age,
            count = students.len(),
            "Listed students"
        );

        Ok(students)
    }

    /// Gets a student by ID
    pub async fn get_by_id(&self, id: ObjectId) -> Result<Option<Student>, AppError> {
        Ok(self.store.find_by_id(id).await?)
    }

    /// Creates a new student and returns its assigned ID
    pub async fn create(&self, param: CreateStudentParam) -> Result<StudentId, AppError> {
        let id = self.store.insert(param.into_entity()).await?;

        tracing::info!(%id, "Created student");

        Ok(StudentId(id))
    }

    /// Merges the supplied fields into a student
    ///
    /// Rejects an update that supplies no fields before reaching the store, so the
    /// stored record is left untouched.
    ///
    /// # Returns
    /// - `Ok(true)` - The student was found and updated
    /// - `Ok(false)` - No student has the given ID
    /// - `Err(AppError::BadRequest)` - No field was supplied
    /// - `Err(AppError::StoreErr)` - Store failure
    pub async fn update(&self, id: ObjectId, param: UpdateStudentParam) -> Result<bool, AppError> {
        if param.is_empty() {
            return Err(AppError::BadRequest(NO_FIELDS_MESSAGE.to_string()));
        }

        let matched = self.store.update(id, &param).await?;

        if matched {
            tracing::info!(%id, "Updated student");
        }

        Ok(matched)
    }

    /// Deletes a student
    /// Returns true if deleted, false if not found
    pub async fn delete(&self, id: ObjectId) -> Result<bool, AppError> {
        let deleted = self.store.delete(id).await?;

        if deleted {
            tracing::info!(%id, "Deleted student");
        }

        Ok(deleted)
    }
}
