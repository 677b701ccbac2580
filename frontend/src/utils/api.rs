use gloo_net::http::{Request, Response};
use gloo_net::Error as GlooError;
use serde::Serialize;

use crate::config;
use crate::utils::logging::log_info;

/// API client rooted at the backend URL
pub struct Api;

/// Request wrapper that remembers what it is sending, for logging
pub struct RequestWrapper {
    request: Request,
    path: String,
    method: &'static str,
}

impl RequestWrapper {
    fn new(path: &str, method: &'static str) -> Self {
        let full_url = format!("{}{}", config::get_backend_url(), path);
        let request = match method {
            "PUT" => Request::put(&full_url),
            _ => Request::get(&full_url),
        };

        Self {
            request,
            path: path.to_string(),
            method,
        }
    }

    /// Set the request body as JSON
    pub fn json<T: Serialize>(mut self, data: &T) -> Result<Self, serde_json::Error> {
        let body_string = serde_json::to_string(data)?;
        self.request = self
            .request
            .header("Content-Type", "application/json")
            .body(body_string);
        Ok(self)
    }

    pub async fn send(self) -> Result<Response, GlooError> {
        let response = self.request.send().await?;
        if !response.ok() {
            log_info(
                &format!("{} {} returned", self.method, self.path),
                &response.status().to_string(),
            );
        }
        Ok(response)
    }
}

impl Api {
    /// Create a GET request against the backend
    pub fn get(path: &str) -> RequestWrapper {
        RequestWrapper::new(path, "GET")
    }

    /// Create a PUT request against the backend
    pub fn put(path: &str) -> RequestWrapper {
        RequestWrapper::new(path, "PUT")
    }
}
