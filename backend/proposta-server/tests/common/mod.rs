#![allow(dead_code)]

//! Test infrastructure for proposta-server API tests

use proposta_client::{ClientError, ClientResult, EmployeeFetcher};
use proposta_config::ValidationConfig;
use proposta_core::Employee;
use proposta_server::AppState;

use std::collections::HashMap;
use std::panic::Location;
use std::sync::Arc;

use async_trait::async_trait;
use axum::{body::Body, http::Request, response::Response};
use error_location::ErrorLocation;
use http_body_util::BodyExt;
use sqlx::SqlitePool;
use sqlx::sqlite::SqlitePoolOptions;

/// Create a test pool with in-memory SQLite
pub async fn create_test_pool() -> SqlitePool {
    // Single connection: each :memory: connection is a separate database
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .expect("Failed to create test database");

    proposta_db::run_migrations(&pool)
        .await
        .expect("Failed to run migrations");

    pool
}

/// Employee service stand-in keyed by employee id
#[derive(Default)]
pub struct FakeEmployeeFetcher {
    employees: HashMap<i64, Employee>,
    failing: bool,
}

impl FakeEmployeeFetcher {
    pub fn with_employee(mut self, employee: Employee) -> Self {
        self.employees.insert(employee.id, employee);
        self
    }

    /// Every lookup fails as if the service answered 500
    pub fn failing() -> Self {
        Self {
            failing: true,
            ..Default::default()
        }
    }
}

#[async_trait]
impl EmployeeFetcher for FakeEmployeeFetcher {
    async fn fetch_employee(&self, id: i64) -> ClientResult<Employee> {
        if self.failing {
            return Err(ClientError::Api {
                status: 500,
                message: "Internal Server Error".into(),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        self.employees
            .get(&id)
            .cloned()
            .ok_or_else(|| ClientError::NotFound {
                id,
                location: ErrorLocation::from(Location::caller()),
            })
    }
}

pub fn sample_employee(id: i64) -> Employee {
    Employee {
        id,
        name: "Maria Souza".into(),
        birth_date: "1990-04-12".into(),
        cpf: "123.456.789-00".into(),
        sex: "F".into(),
    }
}

/// Create AppState for testing
pub async fn create_test_app_state_with(fetcher: FakeEmployeeFetcher) -> AppState {
    let pool = create_test_pool().await;
    AppState::new(pool, ValidationConfig::default(), Arc::new(fetcher))
}

pub async fn create_test_app_state() -> AppState {
    create_test_app_state_with(FakeEmployeeFetcher::default()).await
}

pub fn json_request(method: &str, uri: &str, body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub fn empty_request(method: &str, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

pub async fn body_json(response: Response) -> serde_json::Value {
    let body = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&body).unwrap()
}
