use bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

/// Default name of the collection holding student documents.
pub const COLLECTION_NAME: &str = "students";

/// Document field paths used when building filters, projections and `$set` updates.
pub mod field {
    pub const ID: &str = "_id";
    pub const NAME: &str = "name";
    pub const AGE: &str = "age";
    pub const ADDRESS_CITY: &str = "address.city";
    pub const ADDRESS_COUNTRY: &str = "address.country";
}

/// A student document as persisted: `{_id, name, age, address: {city, country}}`.
///
/// `id` is `None` before insertion and is skipped during serialization so the
/// database assigns the identifier.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Model {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub name: String,
    pub age: i64,
    pub address: Address,
}

/// Embedded address sub-document.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Address {
    pub city: String,
    pub country: String,
}

/// Projection of a student document returned by list queries (`name` and `age` only).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    pub name: String,
    pub age: i64,
}

impl From<&Model> for Summary {
    fn from(model: &Model) -> Self {
        Self {
            name: model.name.clone(),
            age: model.age,
        }
    }
}
