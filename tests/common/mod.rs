//! Common Test Utilities
//!
//! Shared helpers, fixtures, and test infrastructure.

use std::sync::Arc;

use axum::{
    body::Body,
    http::Request,
    response::Response,
    Router,
};
use http_body_util::BodyExt;
use tower::ServiceExt;
use uuid::Uuid;

use loan_server::config::{
    CorsSettings, DatabaseSettings, PaginationSettings, ServerSettings, Settings,
};
use loan_server::infrastructure::repositories::{InMemoryLoanRepository, InMemoryUserRepository};
use loan_server::presentation::http::routes;
use loan_server::startup::compose;

/// Test application backed by in-memory repositories.
///
/// The router is the real one from `routes::create_router`; only the
/// repositories differ from production.
pub struct TestApp {
    pub router: Router,
    pub loans: Arc<InMemoryLoanRepository>,
    pub users: Arc<InMemoryUserRepository>,
}

impl TestApp {
    /// Create a test application with default pagination limits.
    pub fn new() -> Self {
        Self::with_max_page_size(100)
    }

    /// Create a test application with a specific maximum page size.
    pub fn with_max_page_size(max_page_size: i64) -> Self {
        let loans = Arc::new(InMemoryLoanRepository::new());
        let users = Arc::new(InMemoryUserRepository::new());
        let settings = Arc::new(test_settings(max_page_size));

        let state = compose(loans.clone(), users.clone(), settings);
        let router = routes::create_router(state);

        Self {
            router,
            loans,
            users,
        }
    }

    /// Seed a user directly into the users collection.
    pub fn seed_user(&self) -> Uuid {
        let id = Uuid::new_v4();
        self.users.seed(id, "test user");
        id
    }

    /// Make a GET request to the application
    pub async fn get(&self, uri: &str) -> Response {
        self.router
            .clone()
            .oneshot(
                Request::builder()
                    .method("GET")
                    .uri(uri)
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap()
    }

    /// Make a POST request with JSON body
    pub async fn post_json(&self, uri: &str, body: serde_json::Value) -> Response {
        self.router
            .clone()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri(uri)
                    .header("Content-Type", "application/json")
                    .body(Body::from(body.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap()
    }

    /// Make a PATCH request with JSON body
    pub async fn patch_json(&self, uri: &str, body: serde_json::Value) -> Response {
        self.router
            .clone()
            .oneshot(
                Request::builder()
                    .method("PATCH")
                    .uri(uri)
                    .header("Content-Type", "application/json")
                    .body(Body::from(body.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap()
    }
}

/// Settings for tests; no config files or environment involved.
fn test_settings(max_page_size: i64) -> Settings {
    Settings {
        server: ServerSettings {
            host: "127.0.0.1".into(),
            port: 0,
        },
        database: DatabaseSettings {
            url: "postgres://unused".into(),
            max_connections: 1,
            min_connections: 1,
            acquire_timeout: 1,
        },
        pagination: PaginationSettings {
            default_page_size: 10,
            max_page_size,
        },
        cors: CorsSettings {
            allowed_origins: vec![],
        },
        environment: "test".into(),
    }
}

/// Read a response body as JSON.
pub async fn read_json(response: Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// Collect the message keys from a validation error response body.
pub fn error_messages(body: &serde_json::Value) -> Vec<String> {
    body["errors"]
        .as_array()
        .map(|errors| {
            errors
                .iter()
                .map(|e| e["message"].as_str().unwrap_or_default().to_string())
                .collect()
        })
        .unwrap_or_default()
}
