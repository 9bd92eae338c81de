//! Command Handlers
//!
//! One handler per command type. Handlers execute pre-validated commands
//! against the repository; they do not re-run validation and trust the
//! bus protocol (validate, check, submit).

use chrono::Utc;

use crate::application::commands::{CreateLoanCommand, RepayLoanCommand};
use crate::domain::{Loan, LoanRepository};
use crate::shared::error::AppError;

/// Create a loan from the command fields.
///
/// The loan starts active with the creation timestamp taken at handling
/// time. The command's ID is used as-is; resubmitting the same ID is a
/// repository-level conflict, not something the handler guards against.
pub async fn handle_create_loan(
    command: CreateLoanCommand,
    loans: &dyn LoanRepository,
) -> Result<(), AppError> {
    let loan = Loan::new(
        command.id,
        command.borrower_id,
        command.lender_id,
        command.amount,
        Utc::now(),
    );

    loans.create(&loan).await?;

    tracing::debug!(loan_id = %loan.id, "loan created");
    Ok(())
}

/// Mark the referenced loan as repaid.
///
/// The validator has already confirmed the loan exists and is active; a
/// missing loan here means the state changed between validate and submit
/// (or the protocol was skipped) and is reported as a not-found fault
/// rather than applied blindly.
pub async fn handle_repay_loan(
    command: RepayLoanCommand,
    loans: &dyn LoanRepository,
) -> Result<(), AppError> {
    let mut loan = loans
        .find_by_id(command.loan_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Loan with id {} not found", command.loan_id)))?;

    loan.mark_repaid(Utc::now());
    loans.update(&loan).await?;

    tracing::debug!(loan_id = %loan.id, "loan repaid");
    Ok(())
}
