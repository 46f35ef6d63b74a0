//! Tests for release creation.

use super::common::*;
use crate::release::mutator::create_release;

fn created(id: u64, req: CreateReleaseRequest) -> Result<ForgeResponse<Release>> {
    respond(
        StatusCode::CREATED,
        Release {
            id,
            tag_name: req.tag_name,
            name: Some(req.name),
            body: Some(req.body),
            draft: req.draft,
            prerelease: req.prerelease,
        },
    )
}

#[test_log::test(tokio::test)]
async fn create_defaults_name_to_tag() {
    let mut mock_forge = MockForge::new();
    mock_forge
        .expect_create_release()
        .times(1)
        .withf(|_, req| {
            req.tag_name == TEST_TAG
                && req.name == TEST_TAG
                && !req.draft
                && !req.prerelease
        })
        .returning(|_, req| created(10, req));

    let forge = create_test_forge(mock_forge);
    let req = test_request().build().unwrap();

    let outcome = create_release(&forge, &req).await.unwrap();

    assert_eq!(outcome.action, ReleaseAction::Created);
    assert_eq!(outcome.release.name(), "v1.0.0");
    assert_eq!(outcome.to_string(), "Release 'v1.0.0' created with ID '10'.");
}

#[test_log::test(tokio::test)]
async fn create_draft_is_never_prerelease() {
    let mut mock_forge = MockForge::new();
    mock_forge
        .expect_create_release()
        .times(1)
        .withf(|_, req| req.draft && !req.prerelease)
        .returning(|_, req| created(11, req));

    let forge = create_test_forge(mock_forge);
    let req = test_request()
        .name("First")
        .body("notes")
        .draft(true)
        .prerelease(true)
        .build()
        .unwrap();

    let outcome = create_release(&forge, &req).await.unwrap();

    assert!(outcome.release.draft);
    assert!(!outcome.release.prerelease);
    assert_eq!(outcome.release.name(), "First");
    assert_eq!(outcome.to_string(), "Draft 'v1.0.0' created with ID '11'.");
}

#[test_log::test(tokio::test)]
async fn create_prerelease() {
    let mut mock_forge = MockForge::new();
    mock_forge
        .expect_create_release()
        .returning(|_, req| created(12, req));

    let forge = create_test_forge(mock_forge);
    let req = test_request().prerelease(true).build().unwrap();

    let outcome = create_release(&forge, &req).await.unwrap();

    assert_eq!(
        outcome.to_string(),
        "Prerelease 'v1.0.0' created with ID '12'."
    );
}

#[test_log::test(tokio::test)]
async fn create_requires_created_status() {
    let mut mock_forge = MockForge::new();
    mock_forge.expect_create_release().returning(|_, req| {
        respond(
            StatusCode::OK,
            Release {
                id: 1,
                tag_name: req.tag_name,
                ..Default::default()
            },
        )
    });

    let forge = create_test_forge(mock_forge);
    let req = test_request().build().unwrap();

    let err = create_release(&forge, &req).await.unwrap_err();

    assert!(matches!(err, GhrelError::RemoteError(_)));
    assert_eq!(
        err.to_string(),
        "Unable to create the release 'v1.0.0'. 200 OK"
    );
}

#[test_log::test(tokio::test)]
async fn create_fails_on_rejected_request() {
    let mut mock_forge = MockForge::new();
    mock_forge.expect_create_release().returning(|_, _| {
        Ok(ForgeResponse::status_only(StatusCode::UNPROCESSABLE_ENTITY))
    });

    let forge = create_test_forge(mock_forge);
    let req = test_request().draft(true).build().unwrap();

    let err = create_release(&forge, &req).await.unwrap_err();

    assert_eq!(
        err.to_string(),
        "Unable to create the draft 'v1.0.0'. 422 Unprocessable Entity"
    );
}

#[test_log::test(tokio::test)]
async fn create_fails_on_transport_error() {
    let mut mock_forge = MockForge::new();
    mock_forge
        .expect_create_release()
        .returning(|_, _| Err(GhrelError::remote("connection reset")));

    let forge = create_test_forge(mock_forge);
    let req = test_request().build().unwrap();

    let err = create_release(&forge, &req).await.unwrap_err();

    assert!(matches!(err, GhrelError::RemoteError(_)));
    assert_eq!(
        err.to_string(),
        "Unable to create release 'v1.0.0'. connection reset"
    );
}
