//! Command Validators
//!
//! Pure checks run before a command is submitted. Each command type has
//! exactly one validator. Validators never mutate state and never return
//! an error for expected invalid input; only repository faults propagate
//! as `Err`.

use crate::application::commands::{CreateLoanCommand, RepayLoanCommand};
use crate::application::validation::{messages, ValidationResult};
use crate::domain::{LoanRepository, UserRepository};
use crate::shared::error::AppError;

/// Validate a [`CreateLoanCommand`] against the users collaborator.
///
/// Rules are checked in order and all failures are collected into one
/// result: non-nil lender, non-nil borrower, lender exists, borrower
/// exists, borrower differs from lender. Existence lookups are skipped
/// for nil IDs so a single missing field reports one error, not two.
/// The must-differ rule is unconditional: two nil IDs are both empty
/// and equal, and report all three violations.
pub async fn validate_create_loan(
    command: &CreateLoanCommand,
    users: &dyn UserRepository,
) -> Result<ValidationResult, AppError> {
    let mut result = ValidationResult::valid();

    if command.lender_id.is_nil() {
        result.add(
            "LenderId",
            command.lender_id,
            messages::LENDER_NOT_NULL_OR_EMPTY,
        );
    }

    if command.borrower_id.is_nil() {
        result.add(
            "BorrowerId",
            command.borrower_id,
            messages::BORROWER_NOT_NULL_OR_EMPTY,
        );
    }

    if !command.lender_id.is_nil() && !users.exists(command.lender_id).await? {
        result.add(
            "LenderId",
            command.lender_id,
            messages::LENDER_DOES_NOT_EXIST,
        );
    }

    if !command.borrower_id.is_nil() && !users.exists(command.borrower_id).await? {
        result.add(
            "BorrowerId",
            command.borrower_id,
            messages::BORROWER_DOES_NOT_EXIST,
        );
    }

    if command.borrower_id == command.lender_id {
        result.add(
            "BorrowerId",
            command.borrower_id,
            messages::BORROWER_AND_LENDER_MUST_DIFFER,
        );
    }

    Ok(result)
}

/// Validate a [`RepayLoanCommand`] against current loan state.
///
/// The referenced loan must exist and must still be active. Repaying an
/// already-repaid loan is rejected here rather than silently overwriting
/// the repayment timestamp.
pub async fn validate_repay_loan(
    command: &RepayLoanCommand,
    loans: &dyn LoanRepository,
) -> Result<ValidationResult, AppError> {
    let mut result = ValidationResult::valid();

    match loans.find_by_id(command.loan_id).await? {
        None => {
            result.add("LoanId", command.loan_id, messages::LOAN_DOES_NOT_EXIST);
        }
        Some(loan) if loan.repaid => {
            result.add("LoanId", command.loan_id, messages::LOAN_ALREADY_REPAID);
        }
        Some(_) => {}
    }

    Ok(result)
}
