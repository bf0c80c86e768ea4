//! End-to-end flows against a real database
//!
//! Run with `TEST_DATABASE_URL` set and `--ignored`.

use axum::http::{Method, StatusCode};
use serde_json::{json, Value};
use uuid::Uuid;

use crate::common::{unique_name, TestApp};

const START_MS: i64 = 1_700_000_000_000;
const HOUR_MS: i64 = 60 * 60 * 1000;

struct Athlete {
    id: Uuid,
    token: String,
}

/// Sign up and log in through the public routes
async fn sign_up_and_login(app: &TestApp) -> Athlete {
    let email = format!("athlete_{}@lifttrack.test", Uuid::new_v4().simple());
    let password = "correct-horse";

    let signup = app
        .send(
            Method::POST,
            "/accounts",
            None,
            Some(json!({
                "name": "Test Athlete",
                "email": email,
                "password": password,
                "weight": 82.5,
                "body_fat": 14.0
            })),
        )
        .await;
    assert_eq!(signup.status, StatusCode::CREATED, "{}", signup.body);
    assert!(signup.body.get("password_hash").is_none());

    let login = app
        .send(
            Method::POST,
            "/user/login",
            None,
            Some(json!({ "email": email, "password": password })),
        )
        .await;
    assert_eq!(login.status, StatusCode::OK, "{}", login.body);

    let id: Uuid = login.body["user"]["id"].as_str().unwrap().parse().unwrap();
    let token = login.body["access_token"].as_str().unwrap().to_string();
    assert!(login.body["access_token_expires_at"].is_string());

    Athlete { id, token }
}

/// Muscle group plus exercise, named uniquely for this run
async fn seed_exercise(app: &TestApp, token: &str) -> (String, String) {
    let group = unique_name("Group");
    let exercise = unique_name("Lift");

    let created = app
        .send(
            Method::POST,
            "/muscle_group",
            Some(token),
            Some(json!({ "group_name": group })),
        )
        .await;
    assert_eq!(created.status, StatusCode::CREATED, "{}", created.body);

    let created = app
        .send(
            Method::POST,
            "/exercise",
            Some(token),
            Some(json!({ "name": exercise, "muscle_group": group })),
        )
        .await;
    assert_eq!(created.status, StatusCode::CREATED, "{}", created.body);

    (group, exercise)
}

#[tokio::test]
#[ignore = "requires TEST_DATABASE_URL"]
async fn test_signup_login_and_account_access() {
    let app = TestApp::with_database().await.unwrap();
    let athlete = sign_up_and_login(&app).await;

    let own = app
        .send(
            Method::GET,
            &format!("/accounts/{}", athlete.id),
            Some(&athlete.token),
            None,
        )
        .await;
    assert_eq!(own.status, StatusCode::OK);
    assert_eq!(own.body["id"], athlete.id.to_string());

    let listed = app
        .send(Method::GET, "/accounts?page_size=5", Some(&athlete.token), None)
        .await;
    assert_eq!(listed.status, StatusCode::OK);
    assert!(listed.body.as_array().unwrap().len() <= 5);
}

#[tokio::test]
#[ignore = "requires TEST_DATABASE_URL"]
async fn test_login_failures_are_uniform() {
    let app = TestApp::with_database().await.unwrap();
    let email = format!("uniform_{}@lifttrack.test", Uuid::new_v4().simple());

    let signup = app
        .send(
            Method::POST,
            "/accounts",
            None,
            Some(json!({
                "name": "Uniform",
                "email": email,
                "password": "right-password",
                "weight": 70.0,
                "body_fat": 20.0
            })),
        )
        .await;
    assert_eq!(signup.status, StatusCode::CREATED);

    let duplicate = app
        .send(
            Method::POST,
            "/accounts",
            None,
            Some(json!({
                "name": "Uniform",
                "email": email.to_uppercase(),
                "password": "right-password",
                "weight": 70.0,
                "body_fat": 20.0
            })),
        )
        .await;
    assert_eq!(duplicate.status, StatusCode::CONFLICT);

    let wrong_password = app
        .send(
            Method::POST,
            "/user/login",
            None,
            Some(json!({ "email": email, "password": "wrong-password" })),
        )
        .await;
    let unknown_email = app
        .send(
            Method::POST,
            "/user/login",
            None,
            Some(json!({ "email": "nobody@lifttrack.test", "password": "wrong-password" })),
        )
        .await;

    assert_eq!(wrong_password.status, StatusCode::UNAUTHORIZED);
    assert_eq!(wrong_password.error_code(), "INVALID_CREDENTIALS");
    assert_eq!(wrong_password.body, unknown_email.body);
    assert_eq!(wrong_password.status, unknown_email.status);
}

#[tokio::test]
#[ignore = "requires TEST_DATABASE_URL"]
async fn test_complete_workout_and_personal_records() {
    let app = TestApp::with_database().await.unwrap();
    let athlete = sign_up_and_login(&app).await;
    let (group, exercise) = seed_exercise(&app, &athlete.token).await;

    let complete = app
        .send(
            Method::POST,
            "/workout/complete",
            Some(&athlete.token),
            Some(json!({
                "start_time": START_MS,
                "exercise_name": exercise,
                "weight_lifted": 100.0,
                "reps": 5
            })),
        )
        .await;
    assert_eq!(complete.status, StatusCode::CREATED, "{}", complete.body);

    let workout = &complete.body["workout"];
    let start = chrono::DateTime::parse_from_rfc3339(workout["start_time"].as_str().unwrap())
        .unwrap();
    let finish = chrono::DateTime::parse_from_rfc3339(workout["finish_time"].as_str().unwrap())
        .unwrap();
    assert_eq!(start.timestamp_millis(), START_MS);
    assert_eq!(finish.timestamp_millis(), START_MS + HOUR_MS);

    let workout_id = workout["id"].as_str().unwrap().to_string();

    let batch = app
        .send(
            Method::POST,
            &format!("/workout/{}/lifts", workout_id),
            Some(&athlete.token),
            Some(json!({ "lifts": [
                { "exercise_name": exercise, "weight_lifted": 120.0, "reps": 2 },
                { "exercise_name": exercise, "weight_lifted": 60.0, "reps": 15 }
            ]})),
        )
        .await;
    assert_eq!(batch.status, StatusCode::CREATED, "{}", batch.body);
    assert_eq!(batch.body.as_array().unwrap().len(), 2);

    let detail = app
        .send(
            Method::GET,
            &format!("/workout/{}", workout_id),
            Some(&athlete.token),
            None,
        )
        .await;
    assert_eq!(detail.status, StatusCode::OK);
    assert_eq!(detail.body["lifts"].as_array().unwrap().len(), 3);

    let by_weight = app
        .send(
            Method::GET,
            &format!("/lift/pr/{}/weight", exercise),
            Some(&athlete.token),
            None,
        )
        .await;
    assert_eq!(by_weight.status, StatusCode::OK);
    assert_eq!(by_weight.body[0]["weight_lifted"], json!(120.0));

    let by_reps = app
        .send(
            Method::GET,
            &format!("/lift/pr/group/{}/reps", group),
            Some(&athlete.token),
            None,
        )
        .await;
    assert_eq!(by_reps.status, StatusCode::OK);
    assert_eq!(by_reps.body[0]["reps"], json!(15));

    let overall = app
        .send(Method::GET, "/lift/history/pr/weight", Some(&athlete.token), None)
        .await;
    assert_eq!(overall.status, StatusCode::OK);
    assert_eq!(overall.body[0]["weight_lifted"], json!(120.0));
}

#[tokio::test]
#[ignore = "requires TEST_DATABASE_URL"]
async fn test_complete_workout_rolls_back_on_failure() {
    let app = TestApp::with_database().await.unwrap();
    let athlete = sign_up_and_login(&app).await;

    // Unknown exercise fails the lift insert after the workout insert
    let response = app
        .send(
            Method::POST,
            "/workout/complete",
            Some(&athlete.token),
            Some(json!({
                "start_time": START_MS,
                "exercise_name": unique_name("Missing"),
                "weight_lifted": 100.0,
                "reps": 5
            })),
        )
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);

    let history = app
        .send(Method::GET, "/workout/history", Some(&athlete.token), None)
        .await;
    assert_eq!(history.status, StatusCode::OK);
    assert_eq!(history.body, Value::Array(vec![]));
}

#[tokio::test]
#[ignore = "requires TEST_DATABASE_URL"]
async fn test_workouts_are_private_to_their_owner() {
    let app = TestApp::with_database().await.unwrap();
    let owner = sign_up_and_login(&app).await;
    let stranger = sign_up_and_login(&app).await;

    let created = app
        .send(
            Method::POST,
            "/workout",
            Some(&owner.token),
            Some(json!({ "start_time": START_MS })),
        )
        .await;
    assert_eq!(created.status, StatusCode::CREATED);
    assert!(created.body["finish_time"].is_null());
    let uri = format!("/workout/{}", created.body["id"].as_str().unwrap());

    let peek = app.send(Method::GET, &uri, Some(&stranger.token), None).await;
    assert_eq!(peek.status, StatusCode::NOT_FOUND);

    let early = app
        .send(
            Method::PATCH,
            &uri,
            Some(&owner.token),
            Some(json!({ "finish_time": START_MS - 1 })),
        )
        .await;
    assert_eq!(early.status, StatusCode::BAD_REQUEST);

    let finished = app
        .send(
            Method::PATCH,
            &uri,
            Some(&owner.token),
            Some(json!({ "finish_time": START_MS + HOUR_MS })),
        )
        .await;
    assert_eq!(finished.status, StatusCode::OK);

    let hijack = app.send(Method::DELETE, &uri, Some(&stranger.token), None).await;
    assert_eq!(hijack.status, StatusCode::NOT_FOUND);

    let deleted = app.send(Method::DELETE, &uri, Some(&owner.token), None).await;
    assert_eq!(deleted.status, StatusCode::OK);

    let gone = app.send(Method::GET, &uri, Some(&owner.token), None).await;
    assert_eq!(gone.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
#[ignore = "requires TEST_DATABASE_URL"]
async fn test_account_deletion_is_self_only() {
    let app = TestApp::with_database().await.unwrap();
    let owner = sign_up_and_login(&app).await;
    let stranger = sign_up_and_login(&app).await;
    let uri = format!("/accounts/{}", owner.id);

    let hijack = app.send(Method::DELETE, &uri, Some(&stranger.token), None).await;
    assert_eq!(hijack.status, StatusCode::FORBIDDEN);

    let deleted = app.send(Method::DELETE, &uri, Some(&owner.token), None).await;
    assert_eq!(deleted.status, StatusCode::OK, "{}", deleted.body);
    assert_eq!(deleted.body["id"], owner.id.to_string());
    assert!(deleted.body.get("password_hash").is_none());

    // The token outlives the account, the row does not
    let gone = app.send(Method::GET, &uri, Some(&owner.token), None).await;
    assert_eq!(gone.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
#[ignore = "requires TEST_DATABASE_URL"]
async fn test_catalog_maintenance() {
    let app = TestApp::with_database().await.unwrap();
    let athlete = sign_up_and_login(&app).await;
    let token = Some(athlete.token.as_str());

    // Categories
    let category = app
        .send(
            Method::POST,
            "/category",
            token,
            Some(json!({ "name": unique_name("Barbell") })),
        )
        .await;
    assert_eq!(category.status, StatusCode::CREATED, "{}", category.body);
    let category_id = category.body["id"].as_i64().unwrap();
    let category_uri = format!("/category/{}", category_id);

    let renamed_to = unique_name("Plate");
    let renamed = app
        .send(
            Method::PATCH,
            &category_uri,
            token,
            Some(json!({ "name": renamed_to })),
        )
        .await;
    assert_eq!(renamed.status, StatusCode::OK);
    assert_eq!(renamed.body["name"], json!(renamed_to));

    let fetched = app.send(Method::GET, &category_uri, token, None).await;
    assert_eq!(fetched.body["name"], json!(renamed_to));

    let listed = app.send(Method::GET, "/category", token, None).await;
    assert!(listed
        .body
        .as_array()
        .unwrap()
        .iter()
        .any(|c| c["id"] == json!(category_id)));

    // Two groups, one exercise in each
    let (group_a, exercise_a) = seed_exercise(&app, &athlete.token).await;
    let (group_b, exercise_b) = seed_exercise(&app, &athlete.token).await;

    let categorized = app
        .send(
            Method::POST,
            "/exercise",
            token,
            Some(json!({
                "name": unique_name("Curl"),
                "muscle_group": group_b,
                "category": category_id
            })),
        )
        .await;
    assert_eq!(categorized.status, StatusCode::CREATED, "{}", categorized.body);
    let categorized_uri = format!("/exercise/{}", categorized.body["name"].as_str().unwrap());

    // Renaming A leaves B alone and carries A's exercise along
    let group_a2 = unique_name("Group");
    let moved = app
        .send(
            Method::PATCH,
            &format!("/muscle_group/{}", group_a),
            token,
            Some(json!({ "group_name": group_a2 })),
        )
        .await;
    assert_eq!(moved.status, StatusCode::OK, "{}", moved.body);
    assert_eq!(moved.body["group_name"], json!(group_a2));

    let old_a = app
        .send(Method::GET, &format!("/muscle_group/{}", group_a), token, None)
        .await;
    assert_eq!(old_a.status, StatusCode::NOT_FOUND);

    let untouched = app
        .send(Method::GET, &format!("/muscle_group/{}", group_b), token, None)
        .await;
    assert_eq!(untouched.status, StatusCode::OK);
    assert_eq!(untouched.body["group_name"], json!(group_b));

    let followed = app
        .send(Method::GET, &format!("/exercise/{}", exercise_a), token, None)
        .await;
    assert_eq!(followed.body["muscle_group"], json!(group_a2));

    let stayed = app
        .send(Method::GET, &format!("/exercise/{}", exercise_b), token, None)
        .await;
    assert_eq!(stayed.body["muscle_group"], json!(group_b));

    let in_a2 = app
        .send(Method::GET, &format!("/exercise/group/{}", group_a2), token, None)
        .await;
    assert_eq!(in_a2.body.as_array().unwrap().len(), 1);

    // A group with exercises filed under it cannot be deleted
    let blocked = app
        .send(Method::DELETE, &format!("/muscle_group/{}", group_a2), token, None)
        .await;
    assert_eq!(blocked.status, StatusCode::BAD_REQUEST);

    // Rename and regroup exercise A, then delete it
    let exercise_a2 = unique_name("Lift");
    let updated = app
        .send(
            Method::PATCH,
            &format!("/exercise/{}", exercise_a),
            token,
            Some(json!({ "name": exercise_a2, "muscle_group": group_b })),
        )
        .await;
    assert_eq!(updated.status, StatusCode::OK, "{}", updated.body);
    assert_eq!(updated.body["name"], json!(exercise_a2));
    assert_eq!(updated.body["muscle_group"], json!(group_b));

    let deleted = app
        .send(Method::DELETE, &format!("/exercise/{}", exercise_a2), token, None)
        .await;
    assert_eq!(deleted.status, StatusCode::OK);

    let missing = app
        .send(Method::GET, &format!("/exercise/{}", exercise_a2), token, None)
        .await;
    assert_eq!(missing.status, StatusCode::NOT_FOUND);

    // Emptied group can go now
    let dropped = app
        .send(Method::DELETE, &format!("/muscle_group/{}", group_a2), token, None)
        .await;
    assert_eq!(dropped.status, StatusCode::OK);

    // Deleting a category uncategorizes its exercises
    let removed = app.send(Method::DELETE, &category_uri, token, None).await;
    assert_eq!(removed.status, StatusCode::OK);

    let uncategorized = app.send(Method::GET, &categorized_uri, token, None).await;
    assert!(uncategorized.body["category"].is_null());

    let gone = app.send(Method::GET, &category_uri, token, None).await;
    assert_eq!(gone.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
#[ignore = "requires TEST_DATABASE_URL"]
async fn test_lift_update_and_delete() {
    let app = TestApp::with_database().await.unwrap();
    let athlete = sign_up_and_login(&app).await;
    let stranger = sign_up_and_login(&app).await;
    let token = Some(athlete.token.as_str());
    let (_, exercise) = seed_exercise(&app, &athlete.token).await;

    let workout = app
        .send(
            Method::POST,
            "/workout",
            token,
            Some(json!({ "start_time": START_MS })),
        )
        .await;
    assert_eq!(workout.status, StatusCode::CREATED);

    let created = app
        .send(
            Method::POST,
            "/lift",
            token,
            Some(json!({
                "exercise_name": exercise,
                "weight_lifted": 90.0,
                "reps": 5,
                "workout_id": workout.body["id"]
            })),
        )
        .await;
    assert_eq!(created.status, StatusCode::CREATED, "{}", created.body);
    let uri = format!("/lift/{}", created.body["id"].as_str().unwrap());

    let fetched = app.send(Method::GET, &uri, token, None).await;
    assert_eq!(fetched.status, StatusCode::OK);
    assert_eq!(fetched.body["reps"], json!(5));

    let peek = app.send(Method::GET, &uri, Some(&stranger.token), None).await;
    assert_eq!(peek.status, StatusCode::NOT_FOUND);

    // Only the supplied field changes
    let patched = app
        .send(Method::PATCH, &uri, token, Some(json!({ "reps": 8 })))
        .await;
    assert_eq!(patched.status, StatusCode::OK, "{}", patched.body);
    assert_eq!(patched.body["reps"], json!(8));
    assert_eq!(patched.body["weight_lifted"], json!(90.0));

    let overflow = app
        .send(Method::PATCH, &uri, token, Some(json!({ "weight_lifted": 1e40 })))
        .await;
    assert_eq!(overflow.status, StatusCode::BAD_REQUEST);
    assert_eq!(overflow.error_code(), "VALIDATION_ERROR");

    let unchanged = app.send(Method::GET, &uri, token, None).await;
    assert_eq!(unchanged.body["weight_lifted"], json!(90.0));

    // Referenced exercises cannot be deleted
    let in_use = app
        .send(Method::DELETE, &format!("/exercise/{}", exercise), token, None)
        .await;
    assert_eq!(in_use.status, StatusCode::BAD_REQUEST);

    let hijack = app.send(Method::DELETE, &uri, Some(&stranger.token), None).await;
    assert_eq!(hijack.status, StatusCode::NOT_FOUND);

    let deleted = app.send(Method::DELETE, &uri, token, None).await;
    assert_eq!(deleted.status, StatusCode::OK);
    assert_eq!(deleted.body["reps"], json!(8));

    let gone = app.send(Method::GET, &uri, token, None).await;
    assert_eq!(gone.status, StatusCode::NOT_FOUND);
}
