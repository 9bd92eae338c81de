//! Loan Handlers
//!
//! HTTP endpoints for the loan API. Writes run through the command bus
//! protocol (validate, check, submit); reads go straight to the query
//! service. The configured maximum page size is enforced here, before
//! any repository access.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use uuid::Uuid;

use crate::application::commands::{Command, CreateLoanCommand, RepayLoanCommand};
use crate::application::dto::request::{CreateLoanRequest, PageQuery, RepayLoanRequest};
use crate::application::dto::response::{CreateLoanResponse, LoanResponse, RepayLoanResponse};
use crate::shared::error::AppError;
use crate::startup::AppState;

/// Resolve offset/take from query parameters, rejecting oversized pages.
fn resolve_page(state: &AppState, query: &PageQuery) -> Result<(i64, i64), AppError> {
    let pagination = &state.settings.pagination;
    let offset = query.offset.unwrap_or(0).max(0);
    let take = query.take.unwrap_or(pagination.default_page_size);

    if take > pagination.max_page_size {
        return Err(AppError::BadRequest(format!(
            "take must not exceed {}",
            pagination.max_page_size
        )));
    }

    Ok((offset, take.max(0)))
}

/// Empty query results map to 404 at the boundary, not an error inside it.
fn not_found_if_empty<T>(items: Vec<T>, what: &str) -> Result<Vec<T>, AppError> {
    if items.is_empty() {
        return Err(AppError::NotFound(format!("No {} found", what)));
    }
    Ok(items)
}

/// Get a page of loans
pub async fn get_loans(
    State(state): State<AppState>,
    Query(query): Query<PageQuery>,
) -> Result<Json<Vec<LoanResponse>>, AppError> {
    let (offset, take) = resolve_page(&state, &query)?;

    let loans = state.queries.get_page(offset, take).await?;
    let loans = not_found_if_empty(loans, "loans")?;

    Ok(Json(loans.into_iter().map(LoanResponse::from).collect()))
}

/// Get a single loan by ID
pub async fn get_loan(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<LoanResponse>, AppError> {
    let id: Uuid = id
        .parse()
        .map_err(|_| AppError::BadRequest("Invalid loan ID".into()))?;

    let loan = state
        .queries
        .get(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Loan with id {} not found", id)))?;

    Ok(Json(LoanResponse::from(loan)))
}

/// Get distinct borrower IDs
pub async fn get_borrowers(
    State(state): State<AppState>,
    Query(query): Query<PageQuery>,
) -> Result<Json<Vec<Uuid>>, AppError> {
    let (offset, take) = resolve_page(&state, &query)?;

    let borrowers = state.queries.get_borrowers(offset, take).await?;
    let borrowers = not_found_if_empty(borrowers, "borrowers")?;

    Ok(Json(borrowers))
}

/// Get distinct lender IDs
pub async fn get_lenders(
    State(state): State<AppState>,
    Query(query): Query<PageQuery>,
) -> Result<Json<Vec<Uuid>>, AppError> {
    let (offset, take) = resolve_page(&state, &query)?;

    let lenders = state.queries.get_lenders(offset, take).await?;
    let lenders = not_found_if_empty(lenders, "lenders")?;

    Ok(Json(lenders))
}

/// Get loans where the given user is the borrower
pub async fn get_user_loans(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
    Query(query): Query<PageQuery>,
) -> Result<Json<Vec<LoanResponse>>, AppError> {
    let user_id: Uuid = user_id
        .parse()
        .map_err(|_| AppError::BadRequest("Invalid user ID".into()))?;
    let (offset, take) = resolve_page(&state, &query)?;

    let loans = state.queries.get_user_loans(user_id, offset, take).await?;
    let loans = not_found_if_empty(loans, "loans")?;

    Ok(Json(loans.into_iter().map(LoanResponse::from).collect()))
}

/// Create a new loan
///
/// The loan ID is generated here, before validation, and reused on
/// submission; the bus never regenerates it.
pub async fn create_loan(
    State(state): State<AppState>,
    Json(body): Json<CreateLoanRequest>,
) -> Result<(StatusCode, Json<CreateLoanResponse>), AppError> {
    let command = CreateLoanCommand {
        id: Uuid::new_v4(),
        borrower_id: body.borrower_id,
        lender_id: body.lender_id,
        amount: body.amount,
    };

    let result = state
        .bus
        .validate(&Command::CreateLoan(command.clone()))
        .await?;
    if !result.is_valid() {
        return Err(AppError::CommandRejected(result));
    }

    state
        .bus
        .submit(Command::CreateLoan(command.clone()))
        .await?;

    Ok((StatusCode::CREATED, Json(CreateLoanResponse::from(command))))
}

/// Mark a loan as repaid
pub async fn repay_loan(
    State(state): State<AppState>,
    Json(body): Json<RepayLoanRequest>,
) -> Result<(StatusCode, Json<RepayLoanResponse>), AppError> {
    let command = RepayLoanCommand {
        loan_id: body.loan_id,
    };

    let result = state
        .bus
        .validate(&Command::RepayLoan(command.clone()))
        .await?;
    if !result.is_valid() {
        return Err(AppError::CommandRejected(result));
    }

    state
        .bus
        .submit(Command::RepayLoan(command.clone()))
        .await?;

    Ok((StatusCode::ACCEPTED, Json(RepayLoanResponse::from(command))))
}
