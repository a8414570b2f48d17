//! Student fixtures for creating in-memory test documents.

use bson::oid::ObjectId;
use entity::student::{Address, Model};

/// Default test student name.
pub const DEFAULT_NAME: &str = "Asha";

/// Default test student age.
pub const DEFAULT_AGE: i64 = 20;

/// Default test student city.
pub const DEFAULT_CITY: &str = "Pune";

/// Default test student country.
pub const DEFAULT_COUNTRY: &str = "IN";

/// Creates a student document with default values and no `_id`.
///
/// # Default Values
/// - name: `"Asha"`
/// - age: `20`
/// - address: `{ city: "Pune", country: "IN" }`
///
/// # Returns
/// - `student::Model` - In-memory student document
pub fn entity() -> Model {
    entity_builder().build()
}

/// Creates a builder for a student document starting from the default values.
pub fn entity_builder() -> StudentEntityBuilder {
    StudentEntityBuilder {
        id: None,
        name: DEFAULT_NAME.to_string(),
        age: DEFAULT_AGE,
        city: DEFAULT_CITY.to_string(),
        country: DEFAULT_COUNTRY.to_string(),
    }
}

/// Builder for in-memory student documents.
pub struct StudentEntityBuilder {
    id: Option<ObjectId>,
    name: String,
    age: i64,
    city: String,
    country: String,
}

impl StudentEntityBuilder {
    pub fn id(mut self, id: ObjectId) -> Self {
        self.id = Some(id);
        self
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

    pub fn build(self) -> Model {
        Model {
            id: self.id,
            name: self.name,
            age: self.age,
            address: Address {
                city: self.city,
                country: self.country,
            },
        }
    }
}
