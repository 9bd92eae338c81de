//! Loan API Tests
//!
//! End-to-end tests for the loan endpoints against the real router with
//! in-memory repositories.

use axum::http::StatusCode;
use serde_json::json;
use uuid::Uuid;

use crate::common::{error_messages, read_json, TestApp};

#[tokio::test]
async fn create_then_get_round_trips_the_loan() {
    let app = TestApp::new();
    let borrower = app.seed_user();
    let lender = app.seed_user();

    let response = app
        .post_json(
            "/api/loans",
            json!({
                "borrower_id": borrower,
                "lender_id": lender,
                "amount": "1500.00",
            }),
        )
        .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let created = read_json(response).await;
    let id = created["id"].as_str().unwrap().to_string();
    assert_eq!(created["borrower_id"], json!(borrower));
    assert_eq!(created["lender_id"], json!(lender));

    let response = app.get(&format!("/api/loans/{}", id)).await;
    assert_eq!(response.status(), StatusCode::OK);

    let loan = read_json(response).await;
    assert_eq!(loan["id"].as_str().unwrap(), id);
    assert_eq!(loan["borrower_id"], json!(borrower));
    assert_eq!(loan["lender_id"], json!(lender));
    assert_eq!(loan["amount"], json!("1500.00"));
    assert_eq!(loan["repaid"], json!(false));
    assert!(loan.get("repaid_at").is_none());
}

#[tokio::test]
async fn create_rejects_borrower_equal_to_lender() {
    let app = TestApp::new();
    let user = app.seed_user();

    let response = app
        .post_json(
            "/api/loans",
            json!({
                "borrower_id": user,
                "lender_id": user,
                "amount": "100.00",
            }),
        )
        .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = read_json(response).await;
    assert!(error_messages(&body).contains(&"BorrowerAndLenderMustDiffer".to_string()));
}

#[tokio::test]
async fn create_reports_all_violations_together() {
    let app = TestApp::new();

    // Borrower omitted (nil) and lender unknown: both rules reported.
    let response = app
        .post_json(
            "/api/loans",
            json!({
                "lender_id": Uuid::new_v4(),
                "amount": "100.00",
            }),
        )
        .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = read_json(response).await;
    let messages = error_messages(&body);
    assert!(messages.contains(&"BorrowerNotNullOrEmpty".to_string()));
    assert!(messages.contains(&"LenderDoesNotExist".to_string()));
    assert_eq!(messages.len(), 2);
}

#[tokio::test]
async fn create_with_both_ids_omitted_reports_empty_and_equal() {
    let app = TestApp::new();

    // Both IDs default to nil: empty borrower, empty lender, and the
    // equal-ids rule are all reported in one response.
    let response = app
        .post_json("/api/loans", json!({ "amount": "100.00" }))
        .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = read_json(response).await;
    let messages = error_messages(&body);
    assert!(messages.contains(&"BorrowerNotNullOrEmpty".to_string()));
    assert!(messages.contains(&"LenderNotNullOrEmpty".to_string()));
    assert!(messages.contains(&"BorrowerAndLenderMustDiffer".to_string()));
}

#[tokio::test]
async fn create_rejects_unknown_users() {
    let app = TestApp::new();

    let response = app
        .post_json(
            "/api/loans",
            json!({
                "borrower_id": Uuid::new_v4(),
                "lender_id": Uuid::new_v4(),
                "amount": "100.00",
            }),
        )
        .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let messages = error_messages(&read_json(response).await);
    assert!(messages.contains(&"LenderDoesNotExist".to_string()));
    assert!(messages.contains(&"BorrowerDoesNotExist".to_string()));
}

#[tokio::test]
async fn repay_transitions_the_loan_and_rejects_a_second_repay() {
    let app = TestApp::new();
    let borrower = app.seed_user();
    let lender = app.seed_user();

    let response = app
        .post_json(
            "/api/loans",
            json!({
                "borrower_id": borrower,
                "lender_id": lender,
                "amount": "250.00",
            }),
        )
        .await;
    let loan_id = read_json(response).await["id"].as_str().unwrap().to_string();

    let response = app
        .patch_json("/api/loans/Repay", json!({ "loan_id": loan_id }))
        .await;
    assert_eq!(response.status(), StatusCode::ACCEPTED);
    let accepted = read_json(response).await;
    assert_eq!(accepted["loan_id"].as_str().unwrap(), loan_id);

    let response = app.get(&format!("/api/loans/{}", loan_id)).await;
    let loan = read_json(response).await;
    assert_eq!(loan["repaid"], json!(true));
    assert!(loan["repaid_at"].is_string());

    // Repaid is terminal: a second repay fails validation.
    let response = app
        .patch_json("/api/loans/Repay", json!({ "loan_id": loan_id }))
        .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert!(error_messages(&read_json(response).await)
        .contains(&"LoanAlreadyRepaid".to_string()));
}

#[tokio::test]
async fn repay_of_unknown_loan_fails_validation() {
    let app = TestApp::new();

    let response = app
        .patch_json("/api/loans/Repay", json!({ "loan_id": Uuid::new_v4() }))
        .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert!(error_messages(&read_json(response).await)
        .contains(&"LoanDoesNotExist".to_string()));
}

#[tokio::test]
async fn oversized_take_is_rejected_before_any_repository_access() {
    let app = TestApp::with_max_page_size(5);

    let response = app.get("/api/loans?offset=0&take=6").await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn take_at_the_maximum_is_accepted() {
    let app = TestApp::with_max_page_size(5);
    let borrower = app.seed_user();
    let lender = app.seed_user();
    app.post_json(
        "/api/loans",
        json!({
            "borrower_id": borrower,
            "lender_id": lender,
            "amount": "10.00",
        }),
    )
    .await;

    let response = app.get("/api/loans?offset=0&take=5").await;

    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn empty_loan_page_is_not_found() {
    let app = TestApp::new();

    let response = app.get("/api/loans").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn unknown_loan_id_is_not_found() {
    let app = TestApp::new();

    let response = app.get(&format!("/api/loans/{}", Uuid::new_v4())).await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn malformed_loan_id_is_a_bad_request() {
    let app = TestApp::new();

    let response = app.get("/api/loans/not-a-uuid").await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn borrowers_and_lenders_are_distinct_user_ids() {
    let app = TestApp::new();
    let borrower = app.seed_user();
    let lender_a = app.seed_user();
    let lender_b = app.seed_user();

    for lender in [lender_a, lender_b] {
        app.post_json(
            "/api/loans",
            json!({
                "borrower_id": borrower,
                "lender_id": lender,
                "amount": "10.00",
            }),
        )
        .await;
    }

    let response = app.get("/api/loans/Borrowers").await;
    assert_eq!(response.status(), StatusCode::OK);
    let borrowers = read_json(response).await;
    assert_eq!(borrowers.as_array().unwrap().len(), 1);
    assert_eq!(borrowers[0], json!(borrower));

    let response = app.get("/api/loans/Lenders").await;
    assert_eq!(response.status(), StatusCode::OK);
    let lenders = read_json(response).await;
    assert_eq!(lenders.as_array().unwrap().len(), 2);

    // No loans at all: the distinct queries are empty, mapped to 404.
    let empty_app = TestApp::new();
    let response = empty_app.get("/api/loans/Borrowers").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn user_loans_cover_the_borrower_side_only() {
    let app = TestApp::new();
    let borrower = app.seed_user();
    let lender = app.seed_user();

    app.post_json(
        "/api/loans",
        json!({
            "borrower_id": borrower,
            "lender_id": lender,
            "amount": "10.00",
        }),
    )
    .await;

    let response = app.get(&format!("/api/loans/users/{}", borrower)).await;
    assert_eq!(response.status(), StatusCode::OK);
    let loans = read_json(response).await;
    assert_eq!(loans.as_array().unwrap().len(), 1);

    // The lender has borrowed nothing: empty result, 404 at the boundary.
    let response = app.get(&format!("/api/loans/users/{}", lender)).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn created_users_can_back_a_loan() {
    let app = TestApp::new();

    let response = app
        .post_json("/api/users", json!({ "name": "Alice" }))
        .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let alice = read_json(response).await["id"].as_str().unwrap().to_string();

    let response = app.post_json("/api/users", json!({ "name": "Bob" })).await;
    let bob = read_json(response).await["id"].as_str().unwrap().to_string();

    let response = app
        .post_json(
            "/api/loans",
            json!({
                "borrower_id": alice,
                "lender_id": bob,
                "amount": "42.00",
            }),
        )
        .await;

    assert_eq!(response.status(), StatusCode::CREATED);
}
