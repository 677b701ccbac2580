use serde::{Deserialize, Serialize};
use crate::models::application_models::Application;

#[derive(Deserialize, Serialize, Clone, Debug)]
pub struct ApplicationRequest {
    pub name: String,
    pub student_id: String,
    #[serde(default)]
    pub dept: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub interest: String,
    #[serde(default)]
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct LookupResponse {
    pub exists: bool,
    pub application: Option<Application>,
}

#[derive(Debug, Serialize)]
pub struct SubmitResponse {
    pub message: String,
    pub submitted_at: i64,
}
