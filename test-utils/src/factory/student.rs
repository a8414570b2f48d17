//! Student factory for creating test student documents.
//!
//! This module provides factory methods for inserting student documents with sensible
//! defaults, reducing boilerplate in tests. The factory supports customization through a
//! builder pattern.

use entity::student::{Address, Model};

use crate::{collection::MemoryCollection, error::TestError, factory::helpers::next_id};

/// Factory for creating test students with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::student::StudentFactory;
///
/// let student = StudentFactory::new(&collection)
///     .name("Asha")
///     .age(20)
///     .country("IN")
///     .build()
///     .await?;
/// ```
pub struct StudentFactory<'a> {
    collection: &'a MemoryCollection,
    name: String,
    age: i64,
    city: String,
    country: String,
}

impl<'a> StudentFactory<'a> {
    /// Creates a new StudentFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Student {id}"` where id is auto-incremented
    /// - age: `18`
    /// - city: `"City {id}"`
    /// - country: `"Country {id}"`
    ///
    /// # Arguments
    /// - `collection` - Collection the document is inserted into
    ///
    /// # Returns
    /// - `StudentFactory` - New factory instance with defaults
    pub fn new(collection: &'a MemoryCollection) -> Self {
        let id = next_id();
        Self {
            collection,
            name: format!("Student {}", id),
            age: 18,
            city: format!("City {}", id),
            country: format!("Country {}", id),
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn age(mut self, age: i64) -> Self {
        self.age = age;
        self
    }

    pub fn city(mut self, city: impl Into<String>) -> Self {
        self.city = city.into();
        self
    }

    pub fn country(mut self, country: impl Into<String>) -> Self {
        self.country = country.into();
        self
    }

    /// Inserts the student document into the collection.
    ///
    /// # Returns
    /// - `Ok(Model)` - The inserted document with its assigned `_id`
    /// - `Err(TestError)` - Insertion failed
    pub async fn build(self) -> Result<Model, TestError> {
        let mut student = Model {
            id: None,
            name: self.name,
            age: self.age,
            address: Address {
                city: self.city,
                country: self.country,
            },
        };

        let id = self.collection.insert_one(student.clone()).await?;
        student.id = Some(id);

        Ok(student)
    }
}

/// Creates a student with default values.
///
/// # Arguments
/// - `collection` - Collection the document is inserted into
///
/// # Returns
/// - `Ok(Model)` - The inserted document
/// - `Err(TestError)` - Insertion failed
pub async fn create_student(collection: &MemoryCollection) -> Result<Model, TestError> {
    StudentFactory::new(collection).build().await
}
