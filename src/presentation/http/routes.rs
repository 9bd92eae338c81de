//! Route Configuration
//!
//! Configures all HTTP routes for the API.

use axum::{
    middleware,
    response::IntoResponse,
    routing::{get, patch, post},
    Router,
};

use super::handlers;
use crate::infrastructure::metrics;
use crate::presentation::middleware::track_metrics;
use crate::startup::AppState;

/// Create the main API router
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .nest("/api", api_routes())
        // Health check endpoints
        .route("/health", get(handlers::health::health_check))
        .route("/health/live", get(handlers::health::liveness))
        .route("/health/ready", get(handlers::health::readiness))
        // Prometheus metrics endpoint
        .route("/metrics", get(metrics_handler))
        .layer(middleware::from_fn(track_metrics))
        .with_state(state)
}

/// Prometheus metrics endpoint handler
async fn metrics_handler() -> impl IntoResponse {
    let metrics = metrics::gather_metrics();
    (
        [(
            axum::http::header::CONTENT_TYPE,
            "text/plain; version=0.0.4; charset=utf-8",
        )],
        metrics,
    )
}

/// API routes
fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/loans", loan_routes())
        .nest("/users", user_routes())
}

/// Loan routes
///
/// The static `Borrowers`, `Lenders`, and `Repay` segments take priority
/// over the `{id}` capture. Loans for a specific borrower live under
/// `/users/{user_id}` so they cannot be mistaken for a loan ID lookup.
fn loan_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(handlers::loans::get_loans).post(handlers::loans::create_loan),
        )
        .route("/Borrowers", get(handlers::loans::get_borrowers))
        .route("/Lenders", get(handlers::loans::get_lenders))
        .route("/Repay", patch(handlers::loans::repay_loan))
        .route("/users/{user_id}", get(handlers::loans::get_user_loans))
        .route("/{id}", get(handlers::loans::get_loan))
}

/// User routes
fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/", post(handlers::users::create_user))
        .route("/{user_id}", get(handlers::users::get_user))
}
