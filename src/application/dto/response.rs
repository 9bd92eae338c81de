//! Response DTOs
//!
//! Data structures for API response bodies.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Serialize;
use uuid::Uuid;

use crate::application::commands::{CreateLoanCommand, RepayLoanCommand};
use crate::domain::{Loan, User};

/// Loan response
#[derive(Debug, Serialize)]
pub struct LoanResponse {
    pub id: Uuid,
    pub borrower_id: Uuid,
    pub lender_id: Uuid,
    pub amount: Decimal,
    pub repaid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub repaid_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

impl From<Loan> for LoanResponse {
    fn from(loan: Loan) -> Self {
        Self {
            id: loan.id,
            borrower_id: loan.borrower_id,
            lender_id: loan.lender_id,
            amount: loan.amount,
            repaid: loan.repaid,
            repaid_at: loan.repaid_at,
            created_at: loan.created_at,
        }
    }
}

/// Representation of an accepted create-loan command (201 body).
#[derive(Debug, Serialize)]
pub struct CreateLoanResponse {
    pub id: Uuid,
    pub borrower_id: Uuid,
    pub lender_id: Uuid,
    pub amount: Decimal,
}

impl From<CreateLoanCommand> for CreateLoanResponse {
    fn from(command: CreateLoanCommand) -> Self {
        Self {
            id: command.id,
            borrower_id: command.borrower_id,
            lender_id: command.lender_id,
            amount: command.amount,
        }
    }
}

/// Representation of an accepted repay-loan command (202 body).
#[derive(Debug, Serialize)]
pub struct RepayLoanResponse {
    pub loan_id: Uuid,
}

impl From<RepayLoanCommand> for RepayLoanResponse {
    fn from(command: RepayLoanCommand) -> Self {
        Self {
            loan_id: command.loan_id,
        }
    }
}

/// User response
#[derive(Debug, Serialize)]
pub struct UserResponse {
    pub id: Uuid,
    pub name: String,
    pub created_at: DateTime<Utc>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            name: user.name,
            created_at: user.created_at,
        }
    }
}
