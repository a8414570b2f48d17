use super::*;

/// Tests deleting the same student twice.
///
/// Expected: Ok(true) then Ok(false), with the document gone
#[tokio::test]
async fn deletes_once() -> Result<(), AppError> {
    let Some(collection) = test_collection().await? else {
        return Ok(());
    };
    let repo = StudentRepository::new(collection.clone());
    let ids = seed(&repo, &[("Asha", 20, "IN"), ("Liam", 17, "IE")]).await?;

    assert!(repo.delete(ids[0]).await?);
    assert!(!repo.delete(ids[0]).await?);

    assert!(repo.find_by_id(ids[0]).await?.is_none());
    assert!(repo.find_by_id(ids[1]).await?.is_some());

    collection.drop().await?;

    Ok(())
}
