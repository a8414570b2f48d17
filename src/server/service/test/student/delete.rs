use super::*;

/// Tests deleting a student.
///
/// Verifies that the first delete removes the document and a repeated delete
/// reports that nothing matched.
///
/// Expected: Ok(true) then Ok(false)
#[tokio::test]
async fn deletes_student_once() -> Result<(), AppError> {
    let test = TestBuilder::new().build().await?;
    let created = factory::student::create_student(&test.collection).await?;
    let other = factory::student::create_student(&test.collection).await?;
    let id = created.id.unwrap();

    let service = StudentService::new(&test.collection);

    assert!(service.delete(id).await?);
    assert!(!service.delete(id).await?);

    assert!(test.collection.find_one(&id).await?.is_none());
    assert!(test.collection.find_one(&other.id.unwrap()).await?.is_some());

    Ok(())
}
