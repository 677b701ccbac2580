use std::sync::Arc;
use axum::{
    extract::{Path, State},
    Json,
};

use crate::{
    error::AppError,
    handlers::application_dtos::{ApplicationRequest, LookupResponse, SubmitResponse},
    models::application_models::Application,
    AppState,
};

pub async fn get_application(
    State(state): State<Arc<AppState>>,
    Path(student_id): Path<String>,
) -> Result<Json<LookupResponse>, AppError> {
    let student_id = student_id.trim();
    tracing::debug!("Existence check for student {}", student_id);

    let application = state.application_repository.find(student_id)?;
    Ok(Json(LookupResponse {
        exists: application.is_some(),
        application,
    }))
}

// Plain upsert, no existence check here: the form controller checks first.
// Two concurrent submissions for one id can both pass that check.
pub async fn put_application(
    State(state): State<Arc<AppState>>,
    Path(student_id): Path<String>,
    Json(request): Json<ApplicationRequest>,
) -> Result<Json<SubmitResponse>, AppError> {
    let student_id = student_id.trim();
    let name = request.name.trim();

    if name.is_empty() || student_id.is_empty() {
        return Err(AppError::MalformedPayload("name and student_id are required".to_string()));
    }
    if request.student_id.trim() != student_id {
        return Err(AppError::MalformedPayload(format!(
            "student_id in body does not match key {}",
            student_id
        )));
    }

    let application = Application {
        student_id: student_id.to_string(),
        name: name.to_string(),
        dept: request.dept.trim().to_string(),
        phone: request.phone.trim().to_string(),
        interest: request.interest.trim().to_string(),
        message: request.message.trim().to_string(),
        submitted_at: chrono::Utc::now().timestamp(),
    };

    state.application_repository.upsert(&application)?;
    tracing::info!("Stored application for student {}", student_id);

    Ok(Json(SubmitResponse {
        message: "Application stored".to_string(),
        submitted_at: application.submitted_at,
    }))
}

#[cfg(test)]
mod tests {
    use axum::{
        body::{to_bytes, Body},
        http::{Request, StatusCode},
    };
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use crate::{router, test_support::memory_state};

    fn put_request(key: &str, body: Value) -> Request<Body> {
        Request::builder()
            .method("PUT")
            .uri(format!("/api/applications/{}", key))
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    fn get_request(key: &str) -> Request<Body> {
        Request::builder()
            .uri(format!("/api/applications/{}", key))
            .body(Body::empty())
            .unwrap()
    }

    async fn json_body(response: axum::response::Response) -> Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    fn kim() -> Value {
        json!({
            "name": "Kim",
            "student_id": "20231234",
            "dept": "CS",
            "phone": "010-0000-0000",
            "interest": "AI",
            "message": "hi"
        })
    }

    #[tokio::test]
    async fn missing_application_reports_not_exists() {
        let app = router(memory_state());
        let response = app.oneshot(get_request("20231234")).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = json_body(response).await;
        assert_eq!(body["exists"], json!(false));
        assert_eq!(body["application"], Value::Null);
    }

    #[tokio::test]
    async fn stored_application_is_returned_with_timestamp() {
        let state = memory_state();

        let response = router(state.clone())
            .oneshot(put_request("20231234", kim()))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let stored = json_body(response).await;
        assert!(stored["submitted_at"].as_i64().unwrap() > 0);

        let response = router(state).oneshot(get_request("20231234")).await.unwrap();
        let body = json_body(response).await;
        assert_eq!(body["exists"], json!(true));
        assert_eq!(body["application"]["name"], json!("Kim"));
        assert_eq!(body["application"]["dept"], json!("CS"));
        assert_eq!(body["application"]["submitted_at"], stored["submitted_at"]);
    }

    #[tokio::test]
    async fn key_mismatch_is_rejected() {
        let state = memory_state();
        let response = router(state.clone())
            .oneshot(put_request("20239999", kim()))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        assert!(state.application_repository.find("20239999").unwrap().is_none());
        assert!(state.application_repository.find("20231234").unwrap().is_none());
    }

    #[tokio::test]
    async fn blank_name_is_rejected() {
        let state = memory_state();
        let mut body = kim();
        body["name"] = json!("   ");

        let response = router(state.clone())
            .oneshot(put_request("20231234", body))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let error = json_body(response).await;
        assert!(error["error"].as_str().unwrap().contains("required"));
        assert!(state.application_repository.find("20231234").unwrap().is_none());
    }
}
