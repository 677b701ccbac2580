use serde::Deserialize;
use thiserror::Error;

use super::form::Application;

/// An application as the store returns it
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct StoredApplication {
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
    pub submitted_at: i64,
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum StoreError {
    #[error("network error: {0}")]
    Network(String),

    #[error("store responded {status}: {message}")]
    Backend { status: u16, message: String },

    #[error("could not decode store response: {0}")]
    Decode(String),
}

/// Remote store keyed by student id. `put` overwrites; callers check with
/// `get` first. The timestamp is assigned by the store.
#[allow(async_fn_in_trait)]
pub trait RecordStore {
    async fn get(&self, student_id: &str) -> Result<Option<StoredApplication>, StoreError>;
    async fn put(&self, application: &Application) -> Result<(), StoreError>;
}
