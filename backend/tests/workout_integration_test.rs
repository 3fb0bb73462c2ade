//! Integration tests for workout endpoints
//!
//! Covers creation atomicity, ownership-scoped deletion, and the
//! cascade behavior of the schema.

mod common;

use axum::http::StatusCode;
use serde_json::json;
use workout_tracker_backend::repositories::UserRepository;

async fn workout_count(pool: &sqlx::PgPool, user_id: uuid::Uuid) -> i64 {
    sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM workouts WHERE user_id = $1")
        .bind(user_id)
        .fetch_one(pool)
        .await
        .unwrap()
}

async fn exercise_count(pool: &sqlx::PgPool, user_id: uuid::Uuid) -> i64 {
    sqlx::query_scalar::<_, i64>(
        r#"
        SELECT COUNT(*)
        FROM exercises e
        JOIN workouts w ON e.workout_id = w.id
        WHERE w.user_id = $1
        "#,
    )
    .bind(user_id)
    .fetch_one(pool)
    .await
    .unwrap()
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_create_and_list_workout() {
    let app = common::TestApp::new().await;
    let user = app.create_test_user().await;

    let body = json!({
        "date": "2024-01-15",
        "notes": "Push day",
        "exercises": [
            {"exercise_name": "Bench Press", "weight": 135.0, "reps": 10, "sets": 3},
            {"exercise_name": "Overhead Press", "weight": 95.0, "reps": 8, "sets": 3}
        ]
    });
    let (status, response) = app
        .post_auth("/api/workouts", &body.to_string(), &user.token)
        .await;
    assert_eq!(status, StatusCode::CREATED, "create failed: {}", response);

    let (status, response) = app.get_auth("/api/workouts", &user.token).await;
    assert_eq!(status, StatusCode::OK);

    let workouts: serde_json::Value = serde_json::from_str(&response).unwrap();
    let workouts = workouts.as_array().unwrap();
    assert_eq!(workouts.len(), 1);
    assert_eq!(workouts[0]["date"], "2024-01-15");
    assert_eq!(workouts[0]["notes"], "Push day");
    assert_eq!(workouts[0]["exercises"].as_array().unwrap().len(), 2);
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_create_workout_without_exercises_persists_nothing() {
    let app = common::TestApp::new().await;
    let user = app.create_test_user().await;

    let body = json!({
        "date": "2024-01-15",
        "exercises": []
    });
    let (status, _) = app
        .post_auth("/api/workouts", &body.to_string(), &user.token)
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    // The store is unchanged
    assert_eq!(workout_count(&app.pool, user.user_id).await, 0);
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_create_workout_without_date_is_bad_request() {
    let app = common::TestApp::new().await;
    let user = app.create_test_user().await;

    let body = json!({
        "exercises": [
            {"exercise_name": "Squat", "weight": 225.0, "reps": 5, "sets": 5}
        ]
    });
    let (status, _) = app
        .post_auth("/api/workouts", &body.to_string(), &user.token)
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(workout_count(&app.pool, user.user_id).await, 0);
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_create_workout_with_invalid_entry_persists_nothing() {
    let app = common::TestApp::new().await;
    let user = app.create_test_user().await;

    let body = json!({
        "date": "2024-01-15",
        "exercises": [
            {"exercise_name": "Squat", "weight": 225.0, "reps": 5, "sets": 5},
            {"exercise_name": "Deadlift", "weight": -10.0, "reps": 5, "sets": 1}
        ]
    });
    let (status, _) = app
        .post_auth("/api/workouts", &body.to_string(), &user.token)
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    // Neither the workout nor the valid first entry was persisted
    assert_eq!(workout_count(&app.pool, user.user_id).await, 0);
    assert_eq!(exercise_count(&app.pool, user.user_id).await, 0);
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_workouts_ordered_by_date_descending() {
    let app = common::TestApp::new().await;
    let user = app.create_test_user().await;

    for date in ["2024-01-10", "2024-03-05", "2024-02-20"] {
        let body = json!({
            "date": date,
            "exercises": [
                {"exercise_name": "Row", "weight": 100.0, "reps": 10, "sets": 3}
            ]
        });
        let (status, _) = app
            .post_auth("/api/workouts", &body.to_string(), &user.token)
            .await;
        assert_eq!(status, StatusCode::CREATED);
    }

    let (_, response) = app.get_auth("/api/workouts", &user.token).await;
    let workouts: serde_json::Value = serde_json::from_str(&response).unwrap();
    let dates: Vec<&str> = workouts
        .as_array()
        .unwrap()
        .iter()
        .map(|w| w["date"].as_str().unwrap())
        .collect();

    assert_eq!(dates, vec!["2024-03-05", "2024-02-20", "2024-01-10"]);
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_delete_workout_leaves_no_trace() {
    let app = common::TestApp::new().await;
    let user = app.create_test_user().await;

    let body = json!({
        "date": "2024-01-15",
        "exercises": [
            {"exercise_name": "Bench Press", "weight": 135.0, "reps": 10, "sets": 3},
            {"exercise_name": "Dip", "weight": 0.0, "reps": 12, "sets": 3}
        ]
    });
    let (_, response) = app
        .post_auth("/api/workouts", &body.to_string(), &user.token)
        .await;
    let created: serde_json::Value = serde_json::from_str(&response).unwrap();
    let workout_id = created["workout_id"].as_str().unwrap().to_string();

    let (status, _) = app
        .delete_auth(&format!("/api/workouts/{}", workout_id), &user.token)
        .await;
    assert_eq!(status, StatusCode::OK);

    // No trace of the workout or either of its exercises
    let (_, response) = app.get_auth("/api/workouts", &user.token).await;
    let workouts: serde_json::Value = serde_json::from_str(&response).unwrap();
    assert!(workouts.as_array().unwrap().is_empty());
    assert_eq!(exercise_count(&app.pool, user.user_id).await, 0);
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_delete_foreign_workout_is_not_found() {
    let app = common::TestApp::new().await;
    let owner = app.create_test_user().await;
    let intruder = app.create_test_user().await;

    let body = json!({
        "date": "2024-01-15",
        "exercises": [
            {"exercise_name": "Squat", "weight": 225.0, "reps": 5, "sets": 5}
        ]
    });
    let (_, response) = app
        .post_auth("/api/workouts", &body.to_string(), &owner.token)
        .await;
    let created: serde_json::Value = serde_json::from_str(&response).unwrap();
    let workout_id = created["workout_id"].as_str().unwrap().to_string();

    // Not-owned reports identically to not-found
    let (status, _) = app
        .delete_auth(&format!("/api/workouts/{}", workout_id), &intruder.token)
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    // The workout remains listable by its true owner
    let (_, response) = app.get_auth("/api/workouts", &owner.token).await;
    let workouts: serde_json::Value = serde_json::from_str(&response).unwrap();
    assert_eq!(workouts.as_array().unwrap().len(), 1);
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_delete_nonexistent_workout_is_not_found() {
    let app = common::TestApp::new().await;
    let user = app.create_test_user().await;

    let (status, _) = app
        .delete_auth(
            &format!("/api/workouts/{}", uuid::Uuid::new_v4()),
            &user.token,
        )
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_deleting_user_cascades_to_workouts_and_exercises() {
    let app = common::TestApp::new().await;
    let user = app.create_test_user().await;

    let body = json!({
        "date": "2024-01-15",
        "exercises": [
            {"exercise_name": "Bench Press", "weight": 135.0, "reps": 10, "sets": 3}
        ]
    });
    let (status, _) = app
        .post_auth("/api/workouts", &body.to_string(), &user.token)
        .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(workout_count(&app.pool, user.user_id).await, 1);

    let deleted = UserRepository::delete(&app.pool, user.user_id).await.unwrap();
    assert!(deleted);

    // Nothing owned by the user survives
    assert_eq!(workout_count(&app.pool, user.user_id).await, 0);
    assert_eq!(exercise_count(&app.pool, user.user_id).await, 0);
}
