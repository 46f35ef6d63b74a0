//! Tests for the find-or-create flow.

use super::common::*;
use crate::release::manager::manage_release;

#[test_log::test(tokio::test)]
async fn manage_updates_existing_release() {
    let mut mock_forge = MockForge::new();
    mock_forge
        .expect_list_releases()
        .times(1)
        .returning(|_| respond(StatusCode::OK, vec![test_release(5, true, false)]));
    mock_forge.expect_create_release().never();
    mock_forge
        .expect_update_release()
        .times(1)
        .withf(|_, req| req.id == 5 && !req.draft)
        .returning(|_, req| {
            respond(
                StatusCode::OK,
                Release {
                    id: req.id,
                    tag_name: req.tag_name,
                    name: req.name,
                    body: req.body,
                    draft: req.draft,
                    prerelease: req.prerelease,
                },
            )
        });

    let forge = create_test_forge(mock_forge);
    let req = test_request().build().unwrap();

    let outcome = manage_release(&forge, &req).await.unwrap();

    assert_eq!(outcome.action, ReleaseAction::Updated);
    assert_eq!(outcome.to_string(), "Release 'v1.0.0(5)' updated.");
}

#[test_log::test(tokio::test)]
async fn manage_creates_missing_release() {
    let mut mock_forge = MockForge::new();
    mock_forge
        .expect_list_releases()
        .times(1)
        .returning(|_| respond(StatusCode::OK, vec![]));
    mock_forge.expect_update_release().never();
    mock_forge
        .expect_create_release()
        .times(1)
        .returning(|_, req| {
            respond(
                StatusCode::CREATED,
                Release {
                    id: 99,
                    tag_name: req.tag_name,
                    name: Some(req.name),
                    body: Some(req.body),
                    draft: req.draft,
                    prerelease: req.prerelease,
                },
            )
        });

    let forge = create_test_forge(mock_forge);
    let req = test_request().draft(true).build().unwrap();

    let outcome = manage_release(&forge, &req).await.unwrap();

    assert_eq!(outcome.action, ReleaseAction::Created);
    assert_eq!(outcome.to_string(), "Draft 'v1.0.0' created with ID '99'.");
}

#[test_log::test(tokio::test)]
async fn manage_propagates_listing_errors() {
    let mut mock_forge = MockForge::new();
    mock_forge.expect_list_releases().returning(|_| {
        Ok(ForgeResponse::status_only(StatusCode::UNAUTHORIZED))
    });
    mock_forge.expect_create_release().never();
    mock_forge.expect_update_release().never();

    let forge = create_test_forge(mock_forge);
    let req = test_request().build().unwrap();

    let err = manage_release(&forge, &req).await.unwrap_err();

    assert_eq!(
        err.to_string(),
        "Unable to get the releases. 401 Unauthorized"
    );
}

#[test_log::test(tokio::test)]
async fn manage_in_dry_run_makes_no_writes() {
    let mut mock_forge = MockForge::new();
    mock_forge
        .expect_list_releases()
        .returning(|_| respond(StatusCode::OK, vec![]));
    mock_forge.expect_create_release().never();

    let forge = ForgeManager::new(Box::new(mock_forge), true);
    let req = test_request().build().unwrap();

    let outcome = manage_release(&forge, &req).await.unwrap();

    assert_eq!(outcome.action, ReleaseAction::Created);
    assert_eq!(outcome.release.name(), TEST_TAG);
}
