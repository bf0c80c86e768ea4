//! Input rejection that happens before any storage access

use axum::http::{Method, StatusCode};
use serde_json::json;
use uuid::Uuid;

use crate::common::TestApp;

async fn authed(app: &TestApp, method: Method, uri: &str, body: serde_json::Value) -> StatusCode {
    let token = app.token_for(Uuid::new_v4());
    app.send(method, uri, Some(&token), Some(body)).await.status
}

#[tokio::test]
async fn test_personal_record_order_must_be_weight_or_reps() {
    let app = TestApp::lazy();
    let token = app.token_for(Uuid::new_v4());

    for uri in [
        "/lift/history/pr/volume",
        "/lift/pr/Squat/WEIGHT",
        "/lift/pr/group/Legs/id",
    ] {
        let response = app.send(Method::GET, uri, Some(&token), None).await;
        assert_eq!(response.status, StatusCode::BAD_REQUEST, "{}", uri);
        assert_eq!(response.error_code(), "VALIDATION_ERROR");
    }
}

#[tokio::test]
async fn test_lift_limits() {
    let app = TestApp::lazy();
    let workout_id = Uuid::new_v4();

    let zero_reps = json!({
        "exercise_name": "Squat", "weight_lifted": 100.0, "reps": 0, "workout_id": workout_id
    });
    assert_eq!(
        authed(&app, Method::POST, "/lift", zero_reps).await,
        StatusCode::BAD_REQUEST
    );

    let negative_weight = json!({
        "exercise_name": "Squat", "weight_lifted": -1.0, "reps": 5, "workout_id": workout_id
    });
    assert_eq!(
        authed(&app, Method::POST, "/lift", negative_weight).await,
        StatusCode::BAD_REQUEST
    );

    let too_many_reps = json!({ "reps": 1001 });
    assert_eq!(
        authed(&app, Method::PATCH, &format!("/lift/{}", Uuid::new_v4()), too_many_reps).await,
        StatusCode::BAD_REQUEST
    );
}

#[tokio::test]
async fn test_workout_inputs() {
    let app = TestApp::lazy();

    assert_eq!(
        authed(&app, Method::POST, "/workout", json!({ "start_time": -1 })).await,
        StatusCode::BAD_REQUEST
    );

    assert_eq!(
        authed(
            &app,
            Method::POST,
            "/workout/complete",
            json!({ "start_time": 0, "exercise_name": "Squat", "weight_lifted": 60.0, "reps": 0 })
        )
        .await,
        StatusCode::BAD_REQUEST
    );

    assert_eq!(
        authed(
            &app,
            Method::POST,
            &format!("/workout/{}/lifts", Uuid::new_v4()),
            json!({ "lifts": [] })
        )
        .await,
        StatusCode::BAD_REQUEST
    );
}

#[tokio::test]
async fn test_catalog_names() {
    let app = TestApp::lazy();

    assert_eq!(
        authed(&app, Method::POST, "/category", json!({ "name": "ab" })).await,
        StatusCode::BAD_REQUEST
    );
    assert_eq!(
        authed(&app, Method::POST, "/muscle_group", json!({ "group_name": "Legs; --" })).await,
        StatusCode::BAD_REQUEST
    );
    assert_eq!(
        authed(
            &app,
            Method::POST,
            "/exercise",
            json!({ "name": "Squat", "muscle_group": "" })
        )
        .await,
        StatusCode::BAD_REQUEST
    );
}

#[tokio::test]
async fn test_signup_rejects_short_password() {
    let app = TestApp::lazy();

    let response = app
        .send(
            Method::POST,
            "/accounts",
            None,
            Some(json!({
                "name": "Arnold",
                "email": "arnold@example.com",
                "password": "12345",
                "weight": 100.0,
                "body_fat": 10.0
            })),
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.error_code(), "VALIDATION_ERROR");
}
