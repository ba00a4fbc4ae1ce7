mod helpers;

use axum::http::StatusCode;
use helpers::{api_path, setup_test_app};
use uuid::Uuid;
use vidgate_core::models::{Video, VideoResponse};
use vidgate_core::VideoRepository;

#[tokio::test]
async fn health_check_works() {
    let app = setup_test_app().await;

    let response = app.client().get("/health").await;

    response.assert_status(StatusCode::OK);
    let body: serde_json::Value = response.json();
    assert_eq!(body.get("status").and_then(|v| v.as_str()), Some("ok"));
}

#[tokio::test]
async fn create_video_requires_token() {
    let app = setup_test_app().await;

    let response = app.client().post(&api_path("/videos")).await;

    response.assert_status(StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn create_video_returns_empty_record_owned_by_caller() {
    let app = setup_test_app().await;
    let actor = Uuid::new_v4();
    let token = app.token_for(actor);

    let response = app
        .client()
        .post(&api_path("/videos"))
        .add_header("Authorization", format!("Bearer {}", token))
        .await;

    response.assert_status(StatusCode::OK);
    let body: VideoResponse = response.json();
    assert_eq!(body.owner_id, actor);
    assert!(body.video_url.is_none());

    let stored = app.state.repository.get(body.id).await.unwrap();
    assert!(stored.is_some());
}

#[tokio::test]
async fn get_video_round_trips_a_created_record() {
    let app = setup_test_app().await;
    let actor = Uuid::new_v4();
    let token = app.token_for(actor);

    let record = Video::new(actor);
    app.state.repository.insert(record.clone()).await.unwrap();

    let response = app
        .client()
        .get(&api_path(&format!("/videos/{}", record.id)))
        .add_header("Authorization", format!("Bearer {}", token))
        .await;

    response.assert_status(StatusCode::OK);
    let body: VideoResponse = response.json();
    assert_eq!(body.id, record.id);
    assert_eq!(body.owner_id, actor);
    assert!(body.video_url.is_none());
}

#[tokio::test]
async fn get_missing_video_returns_not_found() {
    let app = setup_test_app().await;
    let token = app.token_for(Uuid::new_v4());

    let response = app
        .client()
        .get(&api_path(&format!("/videos/{}", Uuid::new_v4())))
        .add_header("Authorization", format!("Bearer {}", token))
        .await;

    response.assert_status(StatusCode::NOT_FOUND);
    let body: serde_json::Value = response.json();
    assert_eq!(body.get("code").and_then(|v| v.as_str()), Some("NOT_FOUND"));
}

#[tokio::test]
async fn garbage_bearer_token_is_rejected() {
    let app = setup_test_app().await;

    let response = app
        .client()
        .get(&api_path(&format!("/videos/{}", Uuid::new_v4())))
        .add_header("Authorization", "Bearer not-a-jwt")
        .await;

    response.assert_status(StatusCode::UNAUTHORIZED);
}
