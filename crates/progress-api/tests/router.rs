use axum::body::Body;
use axum::http::{Request, StatusCode};
use tower::ServiceExt;
use uuid::Uuid;

use progress_api::config::ServiceConfig;
use progress_api::router;
use progress_api::state::AppState;
use progress_core::models::student::{StaffMember, Student};

async fn body_json(response: axum::response::Response) -> serde_json::Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

fn state(dir: &std::path::Path) -> AppState {
    let config = ServiceConfig {
        data_dir: dir.join("data"),
        export_dir: dir.join("exports"),
        ..ServiceConfig::default()
    };
    AppState::new(config, jiff::tz::TimeZone::UTC)
}

#[tokio::test]
async fn health_and_catalog() {
    let dir = tempfile::tempdir().unwrap();
    let app = router(state(dir.path()));

    let response = app
        .clone()
        .oneshot(Request::get("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let response = app
        .clone()
        .oneshot(Request::get("/templates").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let templates = body_json(response).await;
    assert_eq!(templates.as_array().unwrap().len(), 9);
    assert_eq!(templates[0]["id"], "months_0_3");

    let response = app
        .oneshot(Request::get("/templates/nope").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert!(body_json(response).await["error"].is_string());
}

#[tokio::test]
async fn checklist_submission_over_http() {
    let dir = tempfile::tempdir().unwrap();
    let state = state(dir.path());
    let student = Student {
        id: Uuid::new_v4(),
        name: "Ada Lovelace".to_string(),
        class_name: None,
        date_of_birth: None,
    };
    let staff = StaffMember {
        id: Uuid::new_v4(),
        name: "Grace Hopper".to_string(),
    };
    state.store.put_student(&student).await.unwrap();
    state.store.put_staff_member(&staff).await.unwrap();
    let app = router(state);

    let body = serde_json::json!({
        "templateId": "months_0_3",
        "staffId": staff.id,
        "checkedIds": ["0-0", "0-1"],
    });
    let response = app
        .clone()
        .oneshot(
            Request::post(format!("/students/{}/checklists", student.id))
                .header("content-type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let record = body_json(response).await;
    assert_eq!(record["templateId"], "months_0_3");

    let response = app
        .clone()
        .oneshot(
            Request::get(format!("/students/{}/milestones", student.id))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(body_json(response).await.as_array().unwrap().len(), 1);

    let response = app
        .oneshot(
            Request::get(format!("/students/{}/buckets?mode=fortnightly", student.id))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn unknown_student_is_404() {
    let dir = tempfile::tempdir().unwrap();
    let app = router(state(dir.path()));
    let response = app
        .oneshot(
            Request::get(format!("/students/{}/recommendations", Uuid::new_v4()))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
