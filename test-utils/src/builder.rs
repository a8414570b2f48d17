use entity::student::Model;

use crate::{context::TestContext, error::TestError};

/// Builder for creating test contexts with a pre-seeded student collection.
///
/// Provides a fluent interface for configuring test environments. Add documents with
/// `with_student()`, then call `build()` to create the configured test context.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::{builder::TestBuilder, fixture};
///
/// let test = TestBuilder::new()
///     .with_student(fixture::student::entity())
///     .with_student(fixture::student::entity_builder().age(17).build())
///     .build()
///     .await?;
/// ```
pub struct TestBuilder {
    /// Documents to insert during `build()`, in the order they were added.
    students: Vec<Model>,
}

impl TestBuilder {
    /// Creates a new test builder with no documents configured.
    ///
    /// # Returns
    /// - New `TestBuilder` instance with an empty seed list
    pub fn new() -> Self {
        Self {
            students: Vec::new(),
        }
    }

    /// Adds a student document to seed the collection with.
    ///
    /// Documents without an `_id` receive a fresh identifier on insertion.
    ///
    /// # Arguments
    /// - `student` - Document to insert when `build()` is called
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_student(mut self, student: Model) -> Self {
        self.students.push(student);
        self
    }

    /// Adds several student documents to seed the collection with.
    pub fn with_students(mut self, students: impl IntoIterator<Item = Model>) -> Self {
        self.students.extend(students);
        self
    }

    /// Builds the test context and inserts every configured document.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Test context with the seeded collection
    /// - `Err(TestError::DuplicateKey)` - Two seeded documents share an `_id`
    pub async fn build(self) -> Result<TestContext, TestError> {
        let setup = TestContext::new();

        for student in self.students {
            setup.collection.insert_one(student).await?;
        }

        Ok(setup)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
