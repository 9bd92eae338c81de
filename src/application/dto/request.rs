//! Request DTOs
//!
//! Data structures for API request bodies.

use rust_decimal::Decimal;
use serde::Deserialize;
use uuid::Uuid;

/// Create loan request.
///
/// The loan ID is not part of the body: the handler generates it before
/// validation and it is returned in the 201 response. Missing user IDs
/// deserialize to the nil UUID so the create-loan validator can report
/// them as empty instead of the request failing to parse.
#[derive(Debug, Deserialize)]
pub struct CreateLoanRequest {
    #[serde(default)]
    pub borrower_id: Uuid,

    #[serde(default)]
    pub lender_id: Uuid,

    pub amount: Decimal,
}

/// Repay loan request
#[derive(Debug, Deserialize)]
pub struct RepayLoanRequest {
    pub loan_id: Uuid,
}

/// Create user request
#[derive(Debug, Deserialize)]
pub struct CreateUserRequest {
    pub name: String,
}

/// Pagination query parameters shared by the list endpoints.
#[derive(Debug, Default, Deserialize)]
pub struct PageQuery {
    pub offset: Option<i64>,
    pub take: Option<i64>,
}
