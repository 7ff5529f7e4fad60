use reqwest::{header, Client, StatusCode};
use serde::de::DeserializeOwned;
use std::time::Duration;

use crate::shared::errors::{AppError, AppResult};
use crate::shared::utils::{LogContext, TimedOperation};

/// Common HTTP plumbing for catalog requests
pub struct CommonHttpHandler;

impl CommonHttpHandler {
    /// Map a response status to an error; any 2xx passes
    pub fn handle_response_status(status: StatusCode, service_name: &str) -> AppResult<()> {
        if status.is_success() {
            return Ok(());
        }

        let message = match status {
            StatusCode::NOT_FOUND => "Resource not found".to_string(),
            StatusCode::TOO_MANY_REQUESTS => format!("{} rate limit exceeded", service_name),
            StatusCode::BAD_REQUEST => format!("Bad request to {} API", service_name),
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
                format!("Access denied by {} API", service_name)
            }
            _ if status.is_server_error() => format!("{} service unavailable", service_name),
            _ => format!("Unexpected status code from {}: {}", service_name, status),
        };

        Err(AppError::FetchError(message))
    }

    /// Build the shared client with a fixed per-request timeout
    pub fn create_http_client(timeout: Duration, user_agent: &str) -> AppResult<Client> {
        let mut headers = header::HeaderMap::new();
        headers.insert(
            header::ACCEPT,
            header::HeaderValue::from_static("application/json"),
        );

        Client::builder()
            .timeout(timeout)
            .user_agent(user_agent)
            .default_headers(headers)
            .build()
            .map_err(|e| AppError::ConfigError(format!("Failed to create HTTP client: {}", e)))
    }

    /// Issue a single GET and decode the JSON body
    pub async fn get_json<T: DeserializeOwned>(
        client: &Client,
        url: &str,
        service_name: &str,
    ) -> AppResult<T> {
        LogContext::api_call(url, "started", None);
        let timer = TimedOperation::new(url);

        let response = client.get(url).send().await.map_err(|e| {
            if e.is_timeout() {
                AppError::FetchError("Request timeout".to_string())
            } else if e.is_connect() {
                AppError::FetchError(format!("Failed to connect to {}", service_name))
            } else {
                AppError::FetchError(e.to_string())
            }
        })?;

        let status = response.status();
        LogContext::api_call(url, status.as_str(), Some(timer.elapsed_ms()));
        Self::handle_response_status(status, service_name)?;

        response.json::<T>().await.map_err(|e| {
            AppError::FetchError(format!("Failed to parse {} response: {}", service_name, e))
        })
    }
}
