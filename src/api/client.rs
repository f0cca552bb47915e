/// Blocking HTTP client for the employee/todo REST API.
use reqwest::StatusCode;
use reqwest::blocking::Client;
use serde::de::DeserializeOwned;

use super::errors::ApiError;
use crate::config::Config;
use crate::report::EmployeeId;
use crate::types::{Employee, Task};

/// Thin wrapper over `reqwest::blocking::Client` bound to one API root.
///
/// Every call is a single attempt. Only HTTP 200 counts as success.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: Client,
    base_url: String,
}

impl ApiClient {
    /// Build a client for the API root named in `config`.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Transport` if the TLS backend cannot be initialised.
    pub fn new(config: &Config) -> Result<Self, ApiError> {
        let http = Client::builder()
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|source| ApiError::Transport {
                url: config.base_url.clone(),
                source,
            })?;
        Ok(Self {
            http,
            base_url: config.base_url.clone(),
        })
    }

    /// `GET {base}/users/{id}`
    ///
    /// # Errors
    ///
    /// Returns `ApiError` on transport failure, non-200 status, or a body that
    /// is not a JSON object.
    pub fn employee(&self, id: &EmployeeId) -> Result<Employee, ApiError> {
        self.get_json(&format!("{}/users/{id}", self.base_url))
    }

    /// `GET {base}/todos?userId={id}`
    ///
    /// # Errors
    ///
    /// Returns `ApiError` on transport failure, non-200 status, or a body that
    /// is not a JSON array of tasks.
    pub fn tasks(&self, id: &EmployeeId) -> Result<Vec<Task>, ApiError> {
        self.get_json(&format!("{}/todos?userId={id}", self.base_url))
    }

    /// `GET {base}/users/{id}/todos?_expand=user`
    ///
    /// Each returned task embeds its owning employee under `user`.
    ///
    /// # Errors
    ///
    /// Same as [`ApiClient::tasks`].
    pub fn expanded_tasks(&self, id: &EmployeeId) -> Result<Vec<Task>, ApiError> {
        self.get_json(&format!("{}/users/{id}/todos?_expand=user", self.base_url))
    }

    fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, ApiError> {
        tracing::debug!(url, "GET");
        let resp = self
            .http
            .get(url)
            .send()
            .map_err(|source| ApiError::Transport {
                url: url.to_owned(),
                source,
            })?;

        let status = resp.status();
        tracing::debug!(url, status = status.as_u16(), "response");
        if status != StatusCode::OK {
            return Err(ApiError::Status {
                url: url.to_owned(),
                status: status.as_u16(),
            });
        }

        resp.json::<T>().map_err(|source| ApiError::Decode {
            url: url.to_owned(),
            source,
        })
    }
}
