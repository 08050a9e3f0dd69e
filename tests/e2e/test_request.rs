use crate::e2e::helpers;

use std::sync::atomic::Ordering;

use helpers::TestContext;
use pretty_assertions::assert_eq;
use reqwest::header::{HeaderValue, AUTHORIZATION};
use reqwest::{Method, StatusCode};
use test_context::test_context;

use career_advisor_client::domain::skill::SkillService;
use career_advisor_client::infrastructure::session::{SessionStore, ACCESS_TOKEN_KEY};
use career_advisor_client::{ClientError, RequestOptions};

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_not_refresh_when_the_request_succeeds(ctx: &TestContext) {
    ctx.seed_session(3600);
    let skills = SkillService::new(ctx.client.clone());

    let catalog = skills.list_skills().await.unwrap();

    assert!(!catalog.is_empty());
    assert_eq!(ctx.backend.skills_calls.load(Ordering::SeqCst), 1);
    assert_eq!(ctx.backend.refresh_calls.load(Ordering::SeqCst), 0);
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_refresh_and_retry_once_on_an_expired_token(ctx: &TestContext) {
    ctx.seed_session(-120);
    let stale_access = ctx.store.get(ACCESS_TOKEN_KEY).unwrap();
    let skills = SkillService::new(ctx.client.clone());

    let catalog = skills.list_skills().await.unwrap();

    assert!(!catalog.is_empty());
    // Original request, one refresh, one retry. Nothing else.
    assert_eq!(ctx.backend.skills_calls.load(Ordering::SeqCst), 2);
    assert_eq!(ctx.backend.refresh_calls.load(Ordering::SeqCst), 1);
    assert_ne!(ctx.store.get(ACCESS_TOKEN_KEY), Some(stale_access));
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_return_the_second_401_without_a_third_attempt(ctx: &TestContext) {
    ctx.seed_session(3600);
    ctx.backend.reject_all_bearers.store(true, Ordering::SeqCst);

    let response = ctx
        .client
        .request(Method::GET, "/skills/", RequestOptions::default())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(ctx.backend.skills_calls.load(Ordering::SeqCst), 2);
    assert_eq!(ctx.backend.refresh_calls.load(Ordering::SeqCst), 1);
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_hand_back_the_original_401_when_refresh_fails(ctx: &TestContext) {
    ctx.seed_session_with_refresh(-120, false);

    let response = ctx
        .client
        .request(Method::GET, "/skills/", RequestOptions::default())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    // No retry happened, and the failed refresh tore the session down.
    assert_eq!(ctx.backend.skills_calls.load(Ordering::SeqCst), 1);
    assert_eq!(ctx.backend.refresh_calls.load(Ordering::SeqCst), 1);
    assert_eq!(ctx.store.get(ACCESS_TOKEN_KEY), None);
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_map_an_unrecoverable_401_to_unauthenticated(ctx: &TestContext) {
    // No session at all: the request goes out with an empty bearer, the
    // refresh fails locally, and the typed helper reports Unauthenticated.
    let skills = SkillService::new(ctx.client.clone());

    let error = skills.list_skills().await.unwrap_err();

    assert!(matches!(error, ClientError::Unauthenticated(_)));
    assert_eq!(ctx.backend.skills_calls.load(Ordering::SeqCst), 1);
    assert_eq!(ctx.backend.refresh_calls.load(Ordering::SeqCst), 0);
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_let_caller_headers_take_precedence(ctx: &TestContext) {
    ctx.seed_session(3600);

    let mut options = RequestOptions::default();
    options
        .headers
        .insert(AUTHORIZATION, HeaderValue::from_static("Bearer garbage"));

    let response = ctx
        .client
        .request(Method::GET, "/skills/", options)
        .await
        .unwrap();

    // The caller's (bad) Authorization header rode along on the original
    // request and on the retry, so both were rejected despite a perfectly
    // good stored token.
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(ctx.backend.skills_calls.load(Ordering::SeqCst), 2);
    assert_eq!(ctx.backend.refresh_calls.load(Ordering::SeqCst), 1);
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_surface_backend_error_messages(ctx: &TestContext) {
    ctx.seed_session(3600);
    let skills = SkillService::new(ctx.client.clone());

    let error = skills.add_skill(99, 10).await.unwrap_err();

    match error {
        ClientError::Request { status, message } => {
            assert_eq!(status, 400);
            assert_eq!(message, "unknown skill");
        }
        other => panic!("expected Request error, got {:?}", other),
    }
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_tolerate_concurrent_refreshes(ctx: &TestContext) {
    ctx.seed_session(-120);
    let skills = SkillService::new(ctx.client.clone());

    let (catalog, mine) = futures::future::join(skills.list_skills(), skills.my_skills()).await;

    assert!(!catalog.unwrap().is_empty());
    assert!(mine.unwrap().is_empty());

    // No de-duplication is promised; each caller may refresh on its own,
    // but nobody loops.
    let refreshes = ctx.backend.refresh_calls.load(Ordering::SeqCst);
    assert!((1..=2).contains(&refreshes), "got {} refreshes", refreshes);
}
