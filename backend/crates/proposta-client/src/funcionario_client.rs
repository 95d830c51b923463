use crate::{ClientError, ClientResult, EmployeeFetcher};

use proposta_core::{Employee, EmployeeRegistration};

use std::panic::Location;

use async_trait::async_trait;
use error_location::ErrorLocation;
use reqwest::{Client as ReqwestClient, Response, StatusCode};
use serde_json::Value;

const FUNCIONARIOS_PATH: &str = "/api/v1/funcionarios";

/// HTTP client for the employee service.
///
/// Timeouts and connection handling are reqwest's defaults; no retries.
#[derive(Clone)]
pub struct FuncionarioClient {
    base_url: String,
    client: ReqwestClient,
}

impl FuncionarioClient {
    /// Create a new client
    ///
    /// # Arguments
    /// * `base_url` - Employee service URL (e.g., "http://127.0.0.1:8081")
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: ReqwestClient::new(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Register an employee with the employee service
    pub async fn register(&self, registration: &EmployeeRegistration) -> ClientResult<Employee> {
        let url = format!("{}{}", self.base_url, FUNCIONARIOS_PATH);
        log::debug!("POST {} (employee {})", url, registration.id);

        let response = self.client.post(&url).json(registration).send().await?;
        let status = response.status();

        if !status.is_success() {
            return Err(api_error(status, response).await);
        }

        decode(response).await
    }
}

#[async_trait]
impl EmployeeFetcher for FuncionarioClient {
    async fn fetch_employee(&self, id: i64) -> ClientResult<Employee> {
        let url = format!("{}{}/{}", self.base_url, FUNCIONARIOS_PATH, id);
        log::debug!("GET {}", url);

        let response = self.client.get(&url).send().await?;
        let status = response.status();

        if status == StatusCode::NOT_FOUND {
            return Err(ClientError::NotFound {
                id,
                location: ErrorLocation::from(Location::caller()),
            });
        }

        if !status.is_success() {
            return Err(api_error(status, response).await);
        }

        decode(response).await
    }
}

async fn decode(response: Response) -> ClientResult<Employee> {
    let body = response.text().await?;
    Ok(serde_json::from_str(&body)?)
}

/// Build an `Api` error, pulling the message out of a structured error body
/// (`{"error": {"message": ..}}` or `{"message": ..}`) when there is one.
#[track_caller]
fn api_error_from_body(status: StatusCode, body: &str) -> ClientError {
    let message = serde_json::from_str::<Value>(body)
        .ok()
        .and_then(|v| {
            v.get("error")
                .and_then(|e| e.get("message"))
                .or_else(|| v.get("message"))
                .and_then(|m| m.as_str())
                .map(String::from)
        })
        .unwrap_or_else(|| {
            if body.is_empty() {
                status.canonical_reason().unwrap_or("Unknown error").to_string()
            } else {
                body.to_string()
            }
        });

    ClientError::Api {
        status: status.as_u16(),
        message,
        location: ErrorLocation::from(Location::caller()),
    }
}

async fn api_error(status: StatusCode, response: Response) -> ClientError {
    match response.text().await {
        Ok(body) => api_error_from_body(status, &body),
        Err(e) => ClientError::from_reqwest(e),
    }
}
