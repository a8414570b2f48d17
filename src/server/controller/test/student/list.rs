use super::*;

/// Tests listing without query parameters.
///
/// Verifies that every student is returned with only `name` and `age`.
///
/// Expected: 200 with `{data: [{name, age}, ...]}`
#[tokio::test]
async fn lists_projected_students() -> Result<(), AppError> {
    let test = TestBuilder::new().build().await?;
    factory::helpers::create_students(&test.collection, &[("Asha", 20, "IN"), ("Liam", 17, "IE")])
        .await?;

    let (status, body) = send_json(app(&test.collection), empty_request(Method::GET, "/students")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({ "data": [{ "name": "Asha", "age": 20 }, { "name": "Liam", "age": 17 }] })
    );

    Ok(())
}

/// Tests the `age` query parameter.
///
/// Expected: 200 with only students aged 18 or over
#[tokio::test]
async fn filters_by_age() -> Result<(), AppError> {
    let test = TestBuilder::new().build().await?;
    factory::helpers::create_students(
        &test.collection,
        &[("Asha", 20, "IN"), ("Liam", 17, "IE"), ("Ravi", 18, "IN")],
    )
    .await?;

    let (status, body) = send_json(
        app(&test.collection),
        empty_request(Method::GET, "/students?age=18"),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({ "data": [{ "name": "Asha", "age": 20 }, { "name": "Ravi", "age": 18 }] })
    );

    Ok(())
}

/// Tests the `country` and `age` query parameters together.
///
/// Expected: 200 with the intersection of both filters
#[tokio::test]
async fn combines_country_and_age() -> Result<(), AppError> {
    let test = TestBuilder::new().build().await?;
    factory::helpers::create_students(
        &test.collection,
        &[("Asha", 20, "IN"), ("Liam", 25, "IE"), ("Ravi", 16, "IN")],
    )
    .await?;

    let (status, body) = send_json(
        app(&test.collection),
        empty_request(Method::GET, "/students?country=IN&age=18"),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "data": [{ "name": "Asha", "age": 20 }] }));

    Ok(())
}

/// Tests an empty `country` query value.
///
/// Expected: 200 with every student, as if the filter were absent
#[tokio::test]
async fn ignores_empty_country() -> Result<(), AppError> {
    let test = TestBuilder::new().build().await?;
    factory::helpers::create_students(&test.collection, &[("Asha", 20, "IN"), ("Liam", 17, "IE")])
        .await?;

    let (status, body) = send_json(
        app(&test.collection),
        empty_request(Method::GET, "/students?country="),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"].as_array().map(Vec::len), Some(2));

    Ok(())
}

/// Tests a filter matching nothing.
///
/// Expected: 200 with an empty `data` array
#[tokio::test]
async fn returns_empty_data_when_nothing_matches() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_student(fixture::student::entity())
        .build()
        .await?;

    let (status, body) = send_json(
        app(&test.collection),
        empty_request(Method::GET, "/students?country=FR"),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "data": [] }));

    Ok(())
}

/// Tests an empty `age` query value.
///
/// Expected: 200 with every student, as if the filter were absent
#[tokio::test]
async fn ignores_empty_age() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_students([
            fixture::student::entity(),
            fixture::student::entity_builder().name("Liam").age(17).build(),
        ])
        .build()
        .await?;

    let (status, body) = send_json(
        app(&test.collection),
        empty_request(Method::GET, "/students?country=&age="),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({ "data": [{ "name": "Asha", "age": 20 }, { "name": "Liam", "age": 17 }] })
    );

    Ok(())
}

/// Tests a non-numeric `age` query value.
///
/// Verifies that the query rejection is reported with the JSON error body.
///
/// Expected: 400 with `{error: <message>}`
#[tokio::test]
async fn rejects_non_numeric_age() -> Result<(), AppError> {
    let test = TestBuilder::new().build().await?;

    let (status, body) = send_json(
        app(&test.collection),
        empty_request(Method::GET, "/students?age=old"),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].is_string());

    Ok(())
}

/// Tests a store failure while listing.
///
/// Verifies that the failure is reported with a real 500 status and that the
/// underlying fault message is not exposed to the client.
///
/// Expected: 500 with a generic error body
#[tokio::test]
async fn reports_store_failure_as_server_error() -> Result<(), AppError> {
    let test = TestBuilder::new().build().await?;
    test.collection.fail_with("auth failed for user admin").await;

    let (status, body) = send_json(app(&test.collection), empty_request(Method::GET, "/students")).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({ "error": "Internal server error" }));

    Ok(())
}
