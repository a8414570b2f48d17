use super::*;

/// Tests the list query without any filter.
///
/// Verifies that an empty filter produces an empty query document, which
/// matches every student in the collection.
///
/// Expected: `{}`
#[test]
fn builds_empty_query_without_filters() {
    let query = filter_document(&StudentFilter::default());

    assert_eq!(query, Document::new());
}

/// Tests the country filter.
///
/// Verifies that the country is matched exactly against the nested
/// `address.country` path.
///
/// Expected: `{"address.country": "IN"}`
#[test]
fn matches_country_on_nested_path() {
    let query = filter_document(&StudentFilter {
        country: Some("IN".to_string()),
        min_age: None,
    });

    assert_eq!(query, doc! { "address.country": "IN" });
}

/// Tests the age filter.
///
/// Verifies that the age is used as an inclusive lower bound.
///
/// Expected: `{"age": {"$gte": 18}}`
#[test]
fn bounds_age_inclusively() {
    let query = filter_document(&StudentFilter {
        country: None,
        min_age: Some(18),
    });

    assert_eq!(query, doc! { "age": { "$gte": 18_i64 } });
}

/// Tests combining both filters.
///
/// Verifies that both conditions end up in the same query document, which
/// MongoDB evaluates as a logical AND.
///
/// Expected: `{"address.country": "IN", "age": {"$gte": 18}}`
#[test]
fn combines_country_and_age() {
    let query = filter_document(&StudentFilter {
        country: Some("IN".to_string()),
        min_age: Some(18),
    });

    assert_eq!(
        query,
        doc! { "address.country": "IN", "age": { "$gte": 18_i64 } }
    );
}

/// Tests a zero age bound.
///
/// Verifies that `age=0` is still applied as a filter rather than being
/// treated as absent.
#[test]
fn keeps_zero_age_bound() {
    let query = filter_document(&StudentFilter {
        country: None,
        min_age: Some(0),
    });

    assert_eq!(query, doc! { "age": { "$gte": 0_i64 } });
}

/// Tests the list projection.
///
/// Verifies that only `name` and `age` are returned and `_id` is suppressed.
#[test]
fn projects_name_and_age_only() {
    assert_eq!(summary_projection(), doc! { "name": 1, "age": 1, "_id": 0 });
}
