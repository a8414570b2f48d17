//! Student domain models and parameters.
//!
//! Provides the domain model returned by lookups, the projected summary returned by list
//! queries, and the parameter types for the create, list and partial-update operations.
//! Entity documents are converted into these models at the repository boundary and the
//! models are converted into DTOs at the controller boundary.

use crate::model::student::{
    AddressDto, CreatedStudentDto, ListStudentsQuery, StudentDto, StudentSummaryDto,
    UpdateStudentDto,
};

/// Student address.
#[derive(Debug, Clone, PartialEq)]
pub struct Address {
    pub city: String,
    pub country: String,
}

/// Full student record without its identifier.
#[derive(Debug, Clone, PartialEq)]
pub struct Student {
    pub name: String,
    pub age: i64,
    pub address: Address,
}

impl Student {
    /// Converts a stored document into the domain model.
    pub fn from_entity(entity: entity::student::Model) -> Self {
        Self {
            name: entity.name,
            age: entity.age,
            address: Address {
                city: entity.address.city,
                country: entity.address.country,
            },
        }
    }

    pub fn into_dto(self) -> StudentDto {
        StudentDto {
            name: self.name,
            age: self.age,
            address: AddressDto {
                city: self.address.city,
                country: self.address.country,
            },
        }
    }
}

/// `name` and `age` projection of a student returned by list queries.
#[derive(Debug, Clone, PartialEq)]
pub struct StudentSummary {
    pub name: String,
    pub age: i64,
}

impl StudentSummary {
    pub fn from_entity(entity: entity::student::Summary) -> Self {
        Self {
            name: entity.name,
            age: entity.age,
        }
    }

    pub fn into_dto(self) -> StudentSummaryDto {
        StudentSummaryDto {
            name: self.name,
            age: self.age,
        }
    }
}

/// Identifier assigned to a newly inserted student.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StudentId(pub mongodb::bson::oid::ObjectId);

impl StudentId {
    pub fn into_dto(self) -> CreatedStudentDto {
        CreatedStudentDto {
            id: self.0.to_hex(),
        }
    }
}

/// Parameters for creating a new student. Every field is mandatory.
#[derive(Debug, Clone)]
pub struct CreateStudentParam {
    pub name: String,
    pub age: i64,
    pub address: Address,
}

impl CreateStudentParam {
    /// Converts the parameters into a document ready for insertion (no `_id`).
    pub fn into_entity(self) -> entity::student::Model {
        entity::student::Model {
            id: None,
            name: self.name,
            age: self.age,
            address: entity::student::Address {
                city: self.address.city,
                country: self.address.country,
            },
        }
    }
}

impl From<StudentDto> for CreateStudentParam {
    fn from(dto: StudentDto) -> Self {
        Self {
            name: dto.name,
            age: dto.age,
            address: Address {
                city: dto.address.city,
                country: dto.address.country,
            },
        }
    }
}

/// Filters applied by the list operation, combined with logical AND.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StudentFilter {
    /// Exact match on `address.country`.
    pub country: Option<String>,
    /// Inclusive lower bound on `age`.
    pub min_age: Option<i64>,
}

impl From<ListStudentsQuery> for StudentFilter {
    /// An empty `country` query value is treated as if it were not given.
    fn from(query: ListStudentsQuery) -> Self {
        Self {
            country: query.country.filter(|country| !country.is_empty()),
            min_age: query.age,
        }
    }
}

/// Field-level merge set for a partial update.
///
/// Each field is `Some` only when the client supplied it, so zero and empty values are
/// applied like any other value. Fields left `None` keep their stored value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UpdateStudentParam {
    pub name: Option<String>,
    pub age: Option<i64>,
    pub city: Option<String>,
    pub country: Option<String>,
}

impl UpdateStudentParam {
    /// Whether no field was supplied.
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.age.is_none() && self.city.is_none() && self.country.is_none()
    }
}

impl From<UpdateStudentDto> for UpdateStudentParam {
    fn from(dto: UpdateStudentDto) -> Self {
        let address = dto.address.unwrap_or_default();

        Self {
            name: dto.name,
            age: dto.age,
            city: address.city,
            country: address.country,
        }
    }
}
