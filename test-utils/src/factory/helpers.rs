//! Shared helper utilities for factory methods.

use entity::student::Model;

use crate::{collection::MemoryCollection, error::TestError};

/// Counter for generating unique values in tests.
///
/// This atomic counter ensures each factory-created document gets distinct default
/// field values.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates one student per `(name, age, country)` tuple.
///
/// Convenience for list-filter tests that need a spread of ages and countries.
///
/// # Arguments
/// - `collection` - Collection to insert into
/// - `rows` - Name, age and country of each student, in insertion order
///
/// # Returns
/// - `Ok(Vec<Model>)` - Inserted documents with their assigned `_id`
/// - `Err(TestError)` - Insertion failed
pub async fn create_students(
    collection: &MemoryCollection,
    rows: &[(&str, i64, &str)],
) -> Result<Vec<Model>, TestError> {
    let mut created = Vec::with_capacity(rows.len());

    for (name, age, country) in rows {
        let student = crate::factory::student::StudentFactory::new(collection)
            .name(*name)
            .age(*age)
            .country(*country)
            .build()
            .await?;
        created.push(student);
    }

    Ok(created)
}
