//! Loan Repository Implementation
//!
//! PostgreSQL implementation of the LoanRepository trait.
//! Maps between the database schema and the domain Loan entity.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::{Loan, LoanRepository};
use crate::shared::error::AppError;

/// Database row representation matching the loans table schema.
#[derive(Debug, sqlx::FromRow)]
struct LoanRow {
    id: Uuid,
    borrower_id: Uuid,
    lender_id: Uuid,
    amount: Decimal,
    repaid: bool,
    repaid_at: Option<DateTime<Utc>>,
    created_at: DateTime<Utc>,
}

impl LoanRow {
    /// Convert database row to domain Loan entity.
    fn into_loan(self) -> Loan {
        Loan {
            id: self.id,
            borrower_id: self.borrower_id,
            lender_id: self.lender_id,
            amount: self.amount,
            repaid: self.repaid,
            repaid_at: self.repaid_at,
            created_at: self.created_at,
        }
    }
}

const LOAN_COLUMNS: &str = "id, borrower_id, lender_id, amount, repaid, repaid_at, created_at";

/// PostgreSQL loan repository implementation.
///
/// Pages are ordered by creation time with the loan ID as tiebreaker so
/// offset pagination stays stable across requests.
#[derive(Clone)]
pub struct PgLoanRepository {
    pool: PgPool,
}

impl PgLoanRepository {
    /// Create a new PgLoanRepository with the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl LoanRepository for PgLoanRepository {
    /// Find a loan by its ID.
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Loan>, AppError> {
        let row = sqlx::query_as::<_, LoanRow>(&format!(
            "SELECT {LOAN_COLUMNS} FROM loans WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(|r| r.into_loan()))
    }

    /// Find a page of loans ordered by creation time.
    async fn find_page(&self, offset: i64, limit: i64) -> Result<Vec<Loan>, AppError> {
        let rows = sqlx::query_as::<_, LoanRow>(&format!(
            "SELECT {LOAN_COLUMNS} FROM loans ORDER BY created_at, id OFFSET $1 LIMIT $2"
        ))
        .bind(offset)
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(|r| r.into_loan()).collect())
    }

    /// Find loans where the given user is the borrower.
    async fn find_by_borrower(
        &self,
        user_id: Uuid,
        offset: i64,
        limit: i64,
    ) -> Result<Vec<Loan>, AppError> {
        let rows = sqlx::query_as::<_, LoanRow>(&format!(
            "SELECT {LOAN_COLUMNS} FROM loans WHERE borrower_id = $1 \
             ORDER BY created_at, id OFFSET $2 LIMIT $3"
        ))
        .bind(user_id)
        .bind(offset)
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(|r| r.into_loan()).collect())
    }

    /// Find loans where the given user is the lender.
    async fn find_by_lender(
        &self,
        user_id: Uuid,
        offset: i64,
        limit: i64,
    ) -> Result<Vec<Loan>, AppError> {
        let rows = sqlx::query_as::<_, LoanRow>(&format!(
            "SELECT {LOAN_COLUMNS} FROM loans WHERE lender_id = $1 \
             ORDER BY created_at, id OFFSET $2 LIMIT $3"
        ))
        .bind(user_id)
        .bind(offset)
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(|r| r.into_loan()).collect())
    }

    /// Distinct borrower IDs across all loans.
    async fn distinct_borrowers(&self, offset: i64, limit: i64) -> Result<Vec<Uuid>, AppError> {
        let ids = sqlx::query_scalar::<_, Uuid>(
            "SELECT DISTINCT borrower_id FROM loans ORDER BY borrower_id OFFSET $1 LIMIT $2",
        )
        .bind(offset)
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;

        Ok(ids)
    }

    /// Distinct lender IDs across all loans.
    async fn distinct_lenders(&self, offset: i64, limit: i64) -> Result<Vec<Uuid>, AppError> {
        let ids = sqlx::query_scalar::<_, Uuid>(
            "SELECT DISTINCT lender_id FROM loans ORDER BY lender_id OFFSET $1 LIMIT $2",
        )
        .bind(offset)
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;

        Ok(ids)
    }

    /// Create a new loan.
    async fn create(&self, loan: &Loan) -> Result<Loan, AppError> {
        let row = sqlx::query_as::<_, LoanRow>(&format!(
            "INSERT INTO loans (id, borrower_id, lender_id, amount, repaid, repaid_at, created_at) \
             VALUES ($1, $2, $3, $4, $5, $6, $7) \
             RETURNING {LOAN_COLUMNS}"
        ))
        .bind(loan.id)
        .bind(loan.borrower_id)
        .bind(loan.lender_id)
        .bind(loan.amount)
        .bind(loan.repaid)
        .bind(loan.repaid_at)
        .bind(loan.created_at)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match &e {
            sqlx::Error::Database(db_err) if db_err.is_unique_violation() => {
                AppError::Conflict(format!("Loan with id {} already exists", loan.id))
            }
            _ => AppError::Database(e),
        })?;

        Ok(row.into_loan())
    }

    /// Update an existing loan, persisting the full entity.
    async fn update(&self, loan: &Loan) -> Result<Loan, AppError> {
        let row = sqlx::query_as::<_, LoanRow>(&format!(
            "UPDATE loans \
             SET borrower_id = $2, lender_id = $3, amount = $4, repaid = $5, repaid_at = $6 \
             WHERE id = $1 \
             RETURNING {LOAN_COLUMNS}"
        ))
        .bind(loan.id)
        .bind(loan.borrower_id)
        .bind(loan.lender_id)
        .bind(loan.amount)
        .bind(loan.repaid)
        .bind(loan.repaid_at)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Loan with id {} not found", loan.id)))?;

        Ok(row.into_loan())
    }
}
