use super::*;
use crate::server::router::OPENAPI_PATH;

/// Tests the generated OpenAPI document.
///
/// Verifies that both student paths are documented with every method.
///
/// Expected: 200 with `/students` (get, post) and `/students/{id}` (get, patch, delete)
#[tokio::test]
async fn documents_student_routes() -> Result<(), AppError> {
    let test = TestBuilder::new().build().await?;

    let (status, body) = send_json(app(&test.collection), empty_request(Method::GET, OPENAPI_PATH)).await;

    assert_eq!(status, StatusCode::OK);

    let paths = &body["paths"];
    assert!(paths["/students"]["get"].is_object());
    assert!(paths["/students"]["post"].is_object());
    for method in ["get", "patch", "delete"] {
        assert!(
            paths["/students/{id}"][method].is_object(),
            "missing {} /students/{{id}}",
            method
        );
    }

    Ok(())
}
