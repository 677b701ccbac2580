use gloo_net::http::Response;
use serde::Deserialize;

use super::form::Application;
use super::store::{RecordStore, StoreError, StoredApplication};
use crate::utils::api::Api;

#[derive(Debug, Deserialize)]
struct LookupResponse {
    exists: bool,
    application: Option<StoredApplication>,
}

#[derive(Debug, Deserialize)]
struct ErrorResponse {
    error: String,
}

/// `RecordStore` backed by the club backend's `/api/applications` routes
#[derive(Clone, Copy, Default)]
pub struct HttpRecordStore;

fn application_path(student_id: &str) -> String {
    let encoded: String = js_sys::encode_uri_component(student_id).into();
    format!("/api/applications/{}", encoded)
}

/// `exists` decides. A record flagged as present but missing from the body
/// is an error, never "absent", or the follow-up write would overwrite it.
fn lookup_result(lookup: LookupResponse) -> Result<Option<StoredApplication>, StoreError> {
    match (lookup.exists, lookup.application) {
        (false, _) => Ok(None),
        (true, Some(application)) => Ok(Some(application)),
        (true, None) => Err(StoreError::Decode(
            "lookup reported an existing application but sent no record".to_string(),
        )),
    }
}

async fn backend_error(response: Response) -> StoreError {
    let status = response.status();
    let message = match response.json::<ErrorResponse>().await {
        Ok(body) => body.error,
        Err(_) => response.status_text(),
    };
    StoreError::Backend { status, message }
}

impl RecordStore for HttpRecordStore {
    async fn get(&self, student_id: &str) -> Result<Option<StoredApplication>, StoreError> {
        let response = Api::get(&application_path(student_id))
            .send()
            .await
            .map_err(|e| StoreError::Network(e.to_string()))?;
        if !response.ok() {
            return Err(backend_error(response).await);
        }

        let lookup: LookupResponse = response
            .json()
            .await
            .map_err(|e| StoreError::Decode(e.to_string()))?;
        lookup_result(lookup)
    }

    async fn put(&self, application: &Application) -> Result<(), StoreError> {
        let response = Api::put(&application_path(&application.student_id))
            .json(application)
            .map_err(|e| StoreError::Decode(e.to_string()))?
            .send()
            .await
            .map_err(|e| StoreError::Network(e.to_string()))?;
        if !response.ok() {
            return Err(backend_error(response).await);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decode(body: &str) -> Result<Option<StoredApplication>, StoreError> {
        lookup_result(serde_json::from_str(body).unwrap())
    }

    #[test]
    fn backend_lookup_body_decodes_into_stored_application() {
        let body = r#"{
            "exists": true,
            "application": {
                "student_id": "20231234",
                "name": "Kim",
                "dept": "CS",
                "phone": "010-0000-0000",
                "interest": "AI",
                "message": "hi",
                "submitted_at": 1760000000
            }
        }"#;

        let stored = decode(body).unwrap().unwrap();
        assert_eq!(stored.name, "Kim");
        assert_eq!(stored.student_id, "20231234");
        assert_eq!(stored.interest, "AI");
        assert_eq!(stored.submitted_at, 1_760_000_000);
    }

    #[test]
    fn missing_record_decodes_as_absent() {
        assert_eq!(decode(r#"{"exists":false,"application":null}"#), Ok(None));
    }

    #[test]
    fn existing_flag_without_record_is_an_error() {
        assert!(matches!(
            decode(r#"{"exists":true,"application":null}"#),
            Err(StoreError::Decode(_))
        ));
    }

    #[test]
    fn backend_error_body_decodes() {
        let body: ErrorResponse =
            serde_json::from_str(r#"{"error":"Malformed payload: name and student_id are required"}"#).unwrap();
        assert!(body.error.contains("required"));
    }
}
