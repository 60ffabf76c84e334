//! API Integration Tests
//!
//! Full-router tests over the in-memory stores; no external services required.
//!
//! Run with: cargo test -p integration-tests --test api_tests

use axum::http::StatusCode;
use integration_tests::{StreamFixture, TestApp};
use serde_json::json;

// ============================================================================
// Health Check Tests
// ============================================================================

#[tokio::test]
async fn test_health_check() {
    let app = TestApp::new().unwrap();
    let response = app.get("/health", None).await.unwrap();
    let body = response.expect_status(StatusCode::OK).unwrap();
    assert_eq!(body["status"], "healthy");
}

#[tokio::test]
async fn test_health_ready() {
    let app = TestApp::new().unwrap();
    let response = app.get("/health/ready", None).await.unwrap();
    let body = response.expect_status(StatusCode::OK).unwrap();
    assert_eq!(body["checks"]["cache_store"], "healthy");
}

#[tokio::test]
async fn test_health_not_ready_when_cache_down() {
    let app = TestApp::new().unwrap();
    app.cache.set_unavailable(true);

    let response = app.get("/health/ready", None).await.unwrap();
    let body = response.expect_status(StatusCode::SERVICE_UNAVAILABLE).unwrap();
    assert_eq!(body["status"], "not_ready");
    assert_eq!(body["checks"]["primary_store"], "healthy");
}

// ============================================================================
// Initialize / Tag Tests
// ============================================================================

#[tokio::test]
async fn test_initialize_reports_language() {
    let app = TestApp::new().unwrap();
    let response = app.post("/api/initialize", None, None).await.unwrap();
    let body = response.expect_status(StatusCode::OK).unwrap();
    assert_eq!(body, &json!({ "language": "rust" }));
}

#[tokio::test]
async fn test_initialize_is_idempotent() {
    let app = TestApp::new().unwrap();
    let fixture = StreamFixture::seed(&app.primary);
    app.primary
        .add_reaction(fixture.viewer.id, fixture.livestream.id, "fire");
    app.primary.add_viewer(fixture.viewer.id, fixture.livestream.id);

    app.initialize().await.unwrap();
    let first = app.cache.snapshot();
    app.initialize().await.unwrap();
    let second = app.cache.snapshot();

    assert_eq!(first, second);
}

#[tokio::test]
async fn test_single_tag_listing() {
    let app = TestApp::new().unwrap();
    app.primary.add_tag("game");
    app.initialize().await.unwrap();

    let response = app.get("/api/tag", None).await.unwrap();
    let body = response.expect_status(StatusCode::OK).unwrap();
    assert_eq!(body, &json!({ "tags": [{ "id": 1, "name": "game" }] }));
}

#[tokio::test]
async fn test_tag_listing_is_newest_first() {
    let app = TestApp::new().unwrap();
    for name in ["game", "music", "talk"] {
        app.primary.add_tag(name);
    }
    app.initialize().await.unwrap();

    let response = app.get("/api/tag", None).await.unwrap();
    let body = response.expect_status(StatusCode::OK).unwrap();
    assert_eq!(
        body,
        &json!({ "tags": [
            { "id": 3, "name": "talk" },
            { "id": 2, "name": "music" },
            { "id": 1, "name": "game" }
        ] })
    );
}

// ============================================================================
// Auth Tests
// ============================================================================

#[tokio::test]
async fn test_reaction_requires_token() {
    let app = TestApp::new().unwrap();
    let fixture = StreamFixture::seed(&app.primary);
    app.initialize().await.unwrap();

    let response = app
        .post(&fixture.path("reaction"), None, Some(json!({ "emoji_name": "fire" })))
        .await
        .unwrap();
    response.expect_status(StatusCode::UNAUTHORIZED).unwrap();

    let response = app
        .get(&fixture.path("statistics"), Some("not-a-token"))
        .await
        .unwrap();
    response.expect_status(StatusCode::UNAUTHORIZED).unwrap();
    assert_eq!(response.error_code(), Some("INVALID_TOKEN"));
}

// ============================================================================
// Reaction Tests
// ============================================================================

#[tokio::test]
async fn test_post_reaction_shape() {
    let app = TestApp::new().unwrap();
    let fixture = StreamFixture::seed(&app.primary);
    app.initialize().await.unwrap();
    let token = app.token_for(fixture.viewer.id).unwrap();

    let response = app
        .post(&fixture.path("reaction"), Some(&token), Some(json!({ "emoji_name": "fire" })))
        .await
        .unwrap();
    let body = response.expect_status(StatusCode::CREATED).unwrap();

    assert_eq!(body["emoji_name"], "fire");
    assert_eq!(body["user"]["name"], "viewer");
    assert_eq!(body["livestream"]["id"], fixture.livestream.id);
    assert_eq!(body["livestream"]["owner"]["name"], "streamer");
    assert_eq!(
        body["livestream"]["tags"],
        json!([{ "id": fixture.tag.id, "name": "game" }])
    );
    assert!(body["id"].is_i64());
    assert!(body["created_at"].is_i64());
}

#[tokio::test]
async fn test_reaction_totals_agree_across_paths() {
    let app = TestApp::new().unwrap();
    let fixture = StreamFixture::seed(&app.primary);
    app.initialize().await.unwrap();
    let token = app.token_for(fixture.viewer.id).unwrap();

    app.post(&fixture.path("reaction"), Some(&token), Some(json!({ "emoji_name": "fire" })))
        .await
        .unwrap()
        .expect_status(StatusCode::CREATED)
        .unwrap();

    let stream = app.get(&fixture.path("statistics"), Some(&token)).await.unwrap();
    let stream = stream.expect_status(StatusCode::OK).unwrap().clone();
    let user = app
        .get("/api/user/streamer/statistics", Some(&token))
        .await
        .unwrap();
    let user = user.expect_status(StatusCode::OK).unwrap().clone();

    assert_eq!(stream["total_reactions"], 1);
    assert_eq!(user["total_reactions"], 1);
    assert_eq!(user["favorite_emoji"], "fire");
}

#[tokio::test]
async fn test_n_reactions_raise_counter_and_leaderboard_by_n() {
    let app = TestApp::new().unwrap();
    let fixture = StreamFixture::seed(&app.primary);
    let other = app.primary.add_livestream(fixture.viewer.id, "other");
    app.primary.add_reaction(fixture.owner.id, other.id, "wave");
    app.primary.add_reaction(fixture.owner.id, other.id, "wave");
    app.initialize().await.unwrap();
    let token = app.token_for(fixture.viewer.id).unwrap();

    let before = app.get(&fixture.path("statistics"), Some(&token)).await.unwrap();
    assert_eq!(before.body["total_reactions"], 0);
    assert_eq!(before.body["rank"], 2);

    for _ in 0..3 {
        app.post(&fixture.path("reaction"), Some(&token), Some(json!({ "emoji_name": "clap" })))
            .await
            .unwrap()
            .expect_status(StatusCode::CREATED)
            .unwrap();
    }

    let after = app.get(&fixture.path("statistics"), Some(&token)).await.unwrap();
    assert_eq!(after.body["total_reactions"], 3);
    assert_eq!(after.body["rank"], 1);
}

#[tokio::test]
async fn test_list_reactions_with_limit() {
    let app = TestApp::new().unwrap();
    let fixture = StreamFixture::seed(&app.primary);
    for emoji in ["one", "two", "three"] {
        app.primary
            .add_reaction(fixture.viewer.id, fixture.livestream.id, emoji);
    }
    app.initialize().await.unwrap();
    let token = app.token_for(fixture.viewer.id).unwrap();

    let all = app.get(&fixture.path("reaction"), Some(&token)).await.unwrap();
    let all = all.expect_status(StatusCode::OK).unwrap().clone();
    assert_eq!(all.as_array().map(Vec::len), Some(3));
    assert_eq!(all[0]["emoji_name"], "three");

    let limited = app
        .get(&format!("{}?limit=1", fixture.path("reaction")), Some(&token))
        .await
        .unwrap();
    let limited = limited.expect_status(StatusCode::OK).unwrap();
    assert_eq!(limited.as_array().map(Vec::len), Some(1));
}

#[tokio::test]
async fn test_reaction_with_empty_emoji_is_rejected() {
    let app = TestApp::new().unwrap();
    let fixture = StreamFixture::seed(&app.primary);
    app.initialize().await.unwrap();
    let token = app.token_for(fixture.viewer.id).unwrap();

    let response = app
        .post(&fixture.path("reaction"), Some(&token), Some(json!({ "emoji_name": "" })))
        .await
        .unwrap();
    response.expect_status(StatusCode::BAD_REQUEST).unwrap();
    assert_eq!(response.error_code(), Some("VALIDATION_ERROR"));
}

// ============================================================================
// Bad Input / Not Found Tests
// ============================================================================

#[tokio::test]
async fn test_non_integer_parameters() {
    let app = TestApp::new().unwrap();
    let fixture = StreamFixture::seed(&app.primary);
    app.initialize().await.unwrap();
    let token = app.token_for(fixture.viewer.id).unwrap();

    let response = app
        .get("/api/livestream/abc/statistics", Some(&token))
        .await
        .unwrap();
    response.expect_status(StatusCode::BAD_REQUEST).unwrap();
    assert_eq!(response.error_code(), Some("INVALID_PATH_PARAMETER"));

    let response = app
        .get(&format!("{}?limit=many", fixture.path("reaction")), Some(&token))
        .await
        .unwrap();
    response.expect_status(StatusCode::BAD_REQUEST).unwrap();
    assert_eq!(response.error_code(), Some("INVALID_QUERY_PARAMETER"));
}

#[tokio::test]
async fn test_missing_entities_are_named() {
    let app = TestApp::new().unwrap();
    let fixture = StreamFixture::seed(&app.primary);
    app.initialize().await.unwrap();
    let token = app.token_for(fixture.viewer.id).unwrap();

    let response = app
        .get("/api/livestream/999/statistics", Some(&token))
        .await
        .unwrap();
    response.expect_status(StatusCode::NOT_FOUND).unwrap();
    assert_eq!(response.error_code(), Some("UNKNOWN_LIVESTREAM"));

    let response = app
        .get("/api/user/nobody/statistics", Some(&token))
        .await
        .unwrap();
    response.expect_status(StatusCode::NOT_FOUND).unwrap();
    assert_eq!(response.error_code(), Some("UNKNOWN_USER"));
}

// ============================================================================
// Statistics Tests
// ============================================================================

#[tokio::test]
async fn test_empty_stream_statistics_are_zero() {
    let app = TestApp::new().unwrap();
    let owner = app.primary.add_user("streamer");
    let livestream = app.primary.add_livestream(owner.id, "quiet");
    app.initialize().await.unwrap();
    let token = app.token_for(owner.id).unwrap();

    let response = app
        .get(&format!("/api/livestream/{}/statistics", livestream.id), Some(&token))
        .await
        .unwrap();
    let body = response.expect_status(StatusCode::OK).unwrap();
    assert_eq!(
        body,
        &json!({
            "rank": 1,
            "viewers_count": 0,
            "total_reactions": 0,
            "total_reports": 0,
            "max_tip": 0
        })
    );
}

#[tokio::test]
async fn test_user_rank_ties_favor_larger_name() {
    let app = TestApp::new().unwrap();
    let fan = app.primary.add_user("fan");
    let anna = app.primary.add_user("anna");
    let zoe = app.primary.add_user("zoe");
    let anna_stream = app.primary.add_livestream(anna.id, "a");
    let zoe_stream = app.primary.add_livestream(zoe.id, "z");
    app.primary.add_reaction(fan.id, anna_stream.id, "fire");
    app.primary.add_reaction(fan.id, zoe_stream.id, "fire");
    app.initialize().await.unwrap();
    let token = app.token_for(fan.id).unwrap();

    let zoe_stats = app.get("/api/user/zoe/statistics", Some(&token)).await.unwrap();
    let anna_stats = app.get("/api/user/anna/statistics", Some(&token)).await.unwrap();

    assert_eq!(zoe_stats.body["rank"], 1);
    assert_eq!(anna_stats.body["rank"], 2);
}

// ============================================================================
// Viewer / Live Comment / Report Tests
// ============================================================================

#[tokio::test]
async fn test_enter_comment_and_report_flow() {
    let app = TestApp::new().unwrap();
    let fixture = StreamFixture::seed(&app.primary);
    app.initialize().await.unwrap();
    let viewer_token = app.token_for(fixture.viewer.id).unwrap();
    let owner_token = app.token_for(fixture.owner.id).unwrap();

    app.post(&fixture.path("enter"), Some(&viewer_token), None)
        .await
        .unwrap()
        .expect_status(StatusCode::CREATED)
        .unwrap();

    let comment = app
        .post(
            &fixture.path("livecomment"),
            Some(&viewer_token),
            Some(json!({ "comment": "nice run", "tip": 500 })),
        )
        .await
        .unwrap();
    let comment_id = comment.expect_status(StatusCode::CREATED).unwrap()["id"]
        .as_i64()
        .unwrap();
    assert_eq!(comment.body["tip"], 500);

    let report = app
        .post(
            &fixture.path(&format!("livecomment/{comment_id}/report")),
            Some(&owner_token),
            None,
        )
        .await
        .unwrap();
    let report = report.expect_status(StatusCode::CREATED).unwrap();
    assert_eq!(report["reporter"]["name"], "streamer");
    assert_eq!(report["livecomment"]["comment"], "nice run");

    let stats = app
        .get(&fixture.path("statistics"), Some(&viewer_token))
        .await
        .unwrap();
    let stats = stats.expect_status(StatusCode::OK).unwrap();
    assert_eq!(stats["viewers_count"], 1);
    assert_eq!(stats["total_reports"], 1);
    assert_eq!(stats["max_tip"], 500);

    let user = app
        .get("/api/user/streamer/statistics", Some(&viewer_token))
        .await
        .unwrap();
    let user = user.expect_status(StatusCode::OK).unwrap();
    assert_eq!(user["viewers_count"], 1);
    assert_eq!(user["total_livecomments"], 1);
    assert_eq!(user["total_tip"], 500);
}

#[tokio::test]
async fn test_report_on_other_livestream_comment() {
    let app = TestApp::new().unwrap();
    let fixture = StreamFixture::seed(&app.primary);
    let other = app.primary.add_livestream(fixture.owner.id, "other");
    let comment = app
        .primary
        .add_livecomment(fixture.viewer.id, other.id, "elsewhere", 0);
    app.initialize().await.unwrap();
    let token = app.token_for(fixture.owner.id).unwrap();

    let response = app
        .post(
            &fixture.path(&format!("livecomment/{}/report", comment.id)),
            Some(&token),
            None,
        )
        .await
        .unwrap();
    response.expect_status(StatusCode::NOT_FOUND).unwrap();
    assert_eq!(response.error_code(), Some("UNKNOWN_LIVECOMMENT"));
}
