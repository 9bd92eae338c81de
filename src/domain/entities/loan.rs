//! Loan entity and repository trait.
//!
//! Maps to the `loans` table in the database schema.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::shared::error::AppError;

/// Represents a loan between two users.
///
/// Maps to the `loans` table:
/// - id: UUID PRIMARY KEY (assigned by the issuing layer, never regenerated)
/// - borrower_id: UUID NOT NULL REFERENCES users(id)
/// - lender_id: UUID NOT NULL REFERENCES users(id)
/// - amount: NUMERIC(19, 4) NOT NULL
/// - repaid: BOOLEAN NOT NULL DEFAULT FALSE
/// - repaid_at: TIMESTAMPTZ NULL
/// - created_at: TIMESTAMPTZ NOT NULL DEFAULT NOW()
///
/// Invariants:
/// - `borrower_id != lender_id`
/// - `repaid_at` is set if and only if `repaid` is true
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Loan {
    /// Loan ID (primary key)
    pub id: Uuid,

    /// User who borrowed the money
    pub borrower_id: Uuid,

    /// User who lent the money
    pub lender_id: Uuid,

    /// Principal amount
    pub amount: Decimal,

    /// Whether the loan has been repaid
    pub repaid: bool,

    /// Timestamp of repayment (None while the loan is active)
    pub repaid_at: Option<DateTime<Utc>>,

    /// Timestamp when the loan was created
    pub created_at: DateTime<Utc>,
}

impl Loan {
    /// Create a new active loan.
    pub fn new(
        id: Uuid,
        borrower_id: Uuid,
        lender_id: Uuid,
        amount: Decimal,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            borrower_id,
            lender_id,
            amount,
            repaid: false,
            repaid_at: None,
            created_at,
        }
    }

    /// Check if the loan is still active (not yet repaid).
    pub fn is_active(&self) -> bool {
        !self.repaid
    }

    /// Mark the loan as repaid at the given instant.
    ///
    /// Repaid is a terminal state; there is no operation to reverse it.
    pub fn mark_repaid(&mut self, at: DateTime<Utc>) {
        self.repaid = true;
        self.repaid_at = Some(at);
    }
}

/// Repository trait for Loan data access operations.
///
/// Reads are side-effect-free; an absent entity is `None` or an empty
/// `Vec`, never an error. `update` persists the full mutated entity.
#[async_trait]
pub trait LoanRepository: Send + Sync {
    /// Find a loan by its ID.
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Loan>, AppError>;

    /// Find a page of loans ordered by creation time.
    async fn find_page(&self, offset: i64, limit: i64) -> Result<Vec<Loan>, AppError>;

    /// Find loans where the given user is the borrower.
    async fn find_by_borrower(
        &self,
        user_id: Uuid,
        offset: i64,
        limit: i64,
    ) -> Result<Vec<Loan>, AppError>;

    /// Find loans where the given user is the lender.
    async fn find_by_lender(
        &self,
        user_id: Uuid,
        offset: i64,
        limit: i64,
    ) -> Result<Vec<Loan>, AppError>;

    /// Distinct borrower IDs across all loans, ordered for stable pagination.
    async fn distinct_borrowers(&self, offset: i64, limit: i64) -> Result<Vec<Uuid>, AppError>;

    /// Distinct lender IDs across all loans, ordered for stable pagination.
    async fn distinct_lenders(&self, offset: i64, limit: i64) -> Result<Vec<Uuid>, AppError>;

    /// Create a new loan. A duplicate ID surfaces as a conflict.
    async fn create(&self, loan: &Loan) -> Result<Loan, AppError>;

    /// Update an existing loan.
    async fn update(&self, loan: &Loan) -> Result<Loan, AppError>;
}

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use rust_decimal_macros::dec;
    use uuid::Uuid;

    use super::Loan;

    #[test]
    fn new_loan_starts_active() {
        let loan = Loan::new(
            Uuid::new_v4(),
            Uuid::new_v4(),
            Uuid::new_v4(),
            dec!(250.00),
            Utc::now(),
        );

        assert!(loan.is_active());
        assert!(!loan.repaid);
        assert!(loan.repaid_at.is_none());
    }

    #[test]
    fn mark_repaid_sets_flag_and_timestamp() {
        let mut loan = Loan::new(
            Uuid::new_v4(),
            Uuid::new_v4(),
            Uuid::new_v4(),
            dec!(250.00),
            Utc::now(),
        );

        let at = Utc::now();
        loan.mark_repaid(at);

        assert!(!loan.is_active());
        assert!(loan.repaid);
        assert_eq!(loan.repaid_at, Some(at));
    }
}
