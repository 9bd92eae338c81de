//! Commands
//!
//! Intents to mutate loan state. Commands are short-lived value objects
//! owned by the request scope: built by the HTTP layer, validated, then
//! consumed by their handler.
//!
//! The command set is closed, so dispatch is a compile-time `match` over
//! the [`Command`] enum rather than a runtime type registry. A command
//! without a validator or handler cannot be represented.

use rust_decimal::Decimal;
use uuid::Uuid;

/// Create a new loan between two users.
///
/// The loan ID is assigned by the issuing layer before validation and is
/// reused on submission; the bus never regenerates it.
#[derive(Debug, Clone)]
pub struct CreateLoanCommand {
    pub id: Uuid,
    pub borrower_id: Uuid,
    pub lender_id: Uuid,
    pub amount: Decimal,
}

/// Mark an existing loan as repaid.
#[derive(Debug, Clone)]
pub struct RepayLoanCommand {
    pub loan_id: Uuid,
}

/// The closed set of commands the bus accepts.
#[derive(Debug, Clone)]
pub enum Command {
    CreateLoan(CreateLoanCommand),
    RepayLoan(RepayLoanCommand),
}

impl Command {
    /// Stable command name for logging and metrics labels.
    pub fn name(&self) -> &'static str {
        match self {
            Command::CreateLoan(_) => "create_loan",
            Command::RepayLoan(_) => "repay_loan",
        }
    }
}
