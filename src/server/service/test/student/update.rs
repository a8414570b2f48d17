use super::*;

/// Tests updating a single field.
///
/// Verifies that only `age` changes while `name` and `address` keep their
/// stored values.
///
/// Expected: Ok(true) and only `age` modified
#[tokio::test]
async fn merges_only_supplied_fields() -> Result<(), AppError> {
    let test = TestBuilder::new().build().await?;
    let created = factory::StudentFactory::new(&test.collection)
        .name("Asha")
        .age(20)
        .city("Pune")
        .country("IN")
        .build()
        .await?;
    let id = created.id.unwrap();

    let service = StudentService::new(&test.collection);
    let updated = service
        .update(
            id,
            UpdateStudentParam {
                age: Some(21),
                ..Default::default()
            },
        )
        .await?;

    assert!(updated);
    let stored = test.collection.find_one(&id).await?.unwrap();
    assert_eq!(stored.age, 21);
    assert_eq!(stored.name, "Asha");
    assert_eq!(stored.address, created.address);

    Ok(())
}

/// Tests updating one address field.
///
/// Expected: city changed, country untouched
#[tokio::test]
async fn merges_single_address_field() -> Result<(), AppError> {
    let test = TestBuilder::new().build().await?;
    let created = factory::StudentFactory::new(&test.collection)
        .city("Pune")
        .country("IN")
        .build()
        .await?;
    let id = created.id.unwrap();

    let service = StudentService::new(&test.collection);
    service
        .update(
            id,
            UpdateStudentParam {
                city: Some("Mumbai".to_string()),
                ..Default::default()
            },
        )
        .await?;

    let stored = test.collection.find_one(&id).await?.unwrap();
    assert_eq!(stored.address.city, "Mumbai");
    assert_eq!(stored.address.country, "IN");

    Ok(())
}

/// Tests that a zero age is applied.
///
/// Expected: stored age becomes 0
#[tokio::test]
async fn applies_zero_age() -> Result<(), AppError> {
    let test = TestBuilder::new().build().await?;
    let created = factory::student::create_student(&test.collection).await?;
    let id = created.id.unwrap();

    let service = StudentService::new(&test.collection);
    let updated = service
        .update(
            id,
            UpdateStudentParam {
                age: Some(0),
                ..Default::default()
            },
        )
        .await?;

    assert!(updated);
    assert_eq!(test.collection.find_one(&id).await?.unwrap().age, 0);

    Ok(())
}

/// Tests an update without any field.
///
/// Verifies that the request is rejected and the stored record is unchanged.
///
/// Expected: Err(AppError::BadRequest)
#[tokio::test]
async fn rejects_empty_update() -> Result<(), AppError> {
    let test = TestBuilder::new().build().await?;
    let created = factory::student::create_student(&test.collection).await?;
    let id = created.id.unwrap();

    let service = StudentService::new(&test.collection);
    let result = service.update(id, UpdateStudentParam::default()).await;

    match result {
        Err(AppError::BadRequest(msg)) => assert_eq!(msg, NO_FIELDS_MESSAGE),
        other => panic!("expected BadRequest, got {:?}", other),
    }
    assert_eq!(test.collection.find_one(&id).await?, Some(created));

    Ok(())
}

/// Tests that an empty update is rejected before reaching the store.
///
/// Verifies that validation happens first even when the store is failing.
///
/// Expected: Err(AppError::BadRequest)
#[tokio::test]
async fn rejects_empty_update_without_store_round_trip() -> Result<(), AppError> {
    let test = TestBuilder::new().build().await?;
    test.collection.fail_with("store unavailable").await;

    let service = StudentService::new(&test.collection);
    let result = service
        .update(ObjectId::new(), UpdateStudentParam::default())
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}

/// Tests updating a student that does not exist.
///
/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_for_unknown_id() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_student(fixture::student::entity())
        .build()
        .await?;

    let service = StudentService::new(&test.collection);
    let updated = service
        .update(
            ObjectId::new(),
            UpdateStudentParam {
                name: Some("Nobody".to_string()),
                ..Default::default()
            },
        )
        .await?;

    assert!(!updated);

    Ok(())
}
