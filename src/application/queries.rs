//! Loans Query Service
//!
//! Read-side facade over the loan repository, used directly by the HTTP
//! layer. Reads need no validation or mutation, so they bypass the
//! command bus entirely.

use std::sync::Arc;

use uuid::Uuid;

use crate::domain::{Loan, LoanRepository};
use crate::shared::error::AppError;

/// Pass-through query facade.
///
/// Pagination bound enforcement (the configured maximum page size) is
/// the calling layer's job; this service forwards offset/take untouched.
pub struct LoansQueryService {
    loans: Arc<dyn LoanRepository>,
}

impl LoansQueryService {
    pub fn new(loans: Arc<dyn LoanRepository>) -> Self {
        Self { loans }
    }

    /// Fetch a single loan by ID.
    pub async fn get(&self, id: Uuid) -> Result<Option<Loan>, AppError> {
        self.loans.find_by_id(id).await
    }

    /// Fetch a page of loans ordered by creation time.
    pub async fn get_page(&self, offset: i64, take: i64) -> Result<Vec<Loan>, AppError> {
        self.loans.find_page(offset, take).await
    }

    /// Distinct borrower IDs derived from the loan collection.
    pub async fn get_borrowers(&self, offset: i64, take: i64) -> Result<Vec<Uuid>, AppError> {
        self.loans.distinct_borrowers(offset, take).await
    }

    /// Distinct lender IDs derived from the loan collection.
    pub async fn get_lenders(&self, offset: i64, take: i64) -> Result<Vec<Uuid>, AppError> {
        self.loans.distinct_lenders(offset, take).await
    }

    /// Loans where the given user is the borrower.
    pub async fn get_user_loans(
        &self,
        user_id: Uuid,
        offset: i64,
        take: i64,
    ) -> Result<Vec<Loan>, AppError> {
        self.loans.find_by_borrower(user_id, offset, take).await
    }
}
