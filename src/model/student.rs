use serde::{Deserialize, Deserializer, Serialize};
use utoipa::{IntoParams, ToSchema};

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct AddressDto {
    pub city: String,
    pub country: String,
}

/// Full student record, used both as the create payload and the get-by-id response.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
#[schema(example = json!({"name": "Asha", "age": 20, "address": {"city": "Pune", "country": "IN"}}))]
pub struct StudentDto {
    pub name: String,
    pub age: i64,
    pub address: AddressDto,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct StudentSummaryDto {
    pub name: String,
    pub age: i64,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct StudentListDto {
    pub data: Vec<StudentSummaryDto>,
}

/// Identifier of a newly created student as a 24 character hex string.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct CreatedStudentDto {
    pub id: String,
}

/// Partial address for updates; absent or `null` fields are left unchanged.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, Default, ToSchema)]
pub struct UpdateAddressDto {
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub country: Option<String>,
}

/// Partial student for updates; absent or `null` fields are left unchanged.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, Default, ToSchema)]
#[schema(example = json!({"age": 21}))]
pub struct UpdateStudentDto {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub age: Option<i64>,
    #[serde(default)]
    pub address: Option<UpdateAddressDto>,
}

#[derive(Deserialize, Debug, Default, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListStudentsQuery {
    /// Only students whose `address.country` equals this value. Ignored when empty.
    pub country: Option<String>,
    /// Only students whose age is greater than or equal to this value. Ignored when empty.
    #[serde(default, deserialize_with = "deserialize_optional_i64_from_string")]
    pub age: Option<i64>,
}

/// Parses an optional integer query value, treating an empty value as absent.
fn deserialize_optional_i64_from_string<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::Error;

    match Option::<String>::deserialize(deserializer)? {
        Some(value) if !value.is_empty() => value.parse::<i64>().map(Some).map_err(D::Error::custom),
        _ => Ok(None),
    }
}
