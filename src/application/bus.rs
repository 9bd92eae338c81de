//! Command Bus
//!
//! Routes a command to its validator and handler. The two-phase
//! contract is the central protocol of the write side:
//!
//! 1. `validate` - pure, side-effect-free, safe to retry
//! 2. `submit` - the single mutating step, which does NOT re-validate
//!
//! Callers must validate first and check `is_valid` before submitting.
//! Validate and submit are not transactionally linked: a concurrent
//! submit may change the referenced entities in between. The repository
//! is the only synchronization boundary.

use std::sync::Arc;

use crate::application::commands::Command;
use crate::application::validation::ValidationResult;
use crate::application::{handlers, validators};
use crate::domain::{LoanRepository, UserRepository};
use crate::infrastructure::metrics;
use crate::shared::error::AppError;

/// Dispatcher over the closed command set.
///
/// Built once by the composition root from concrete repository
/// instances; the variant-to-(validator, handler) mapping is the
/// `match` in each method, resolved at compile time.
pub struct CommandBus {
    loans: Arc<dyn LoanRepository>,
    users: Arc<dyn UserRepository>,
}

impl CommandBus {
    pub fn new(loans: Arc<dyn LoanRepository>, users: Arc<dyn UserRepository>) -> Self {
        Self { loans, users }
    }

    /// Run the command's validator without mutating any state.
    pub async fn validate(&self, command: &Command) -> Result<ValidationResult, AppError> {
        let result = match command {
            Command::CreateLoan(cmd) => {
                validators::validate_create_loan(cmd, self.users.as_ref()).await?
            }
            Command::RepayLoan(cmd) => {
                validators::validate_repay_loan(cmd, self.loans.as_ref()).await?
            }
        };

        if !result.is_valid() {
            metrics::record_command(command.name(), "rejected");
            tracing::info!(
                command = command.name(),
                errors = result.errors().len(),
                "command rejected by validation"
            );
        }

        Ok(result)
    }

    /// Dispatch the command to its handler.
    ///
    /// Completes when the mutation is persisted. Repository failures
    /// propagate directly; there is no retry or queuing at this layer.
    pub async fn submit(&self, command: Command) -> Result<(), AppError> {
        let name = command.name();

        let outcome = match command {
            Command::CreateLoan(cmd) => handlers::handle_create_loan(cmd, self.loans.as_ref()).await,
            Command::RepayLoan(cmd) => handlers::handle_repay_loan(cmd, self.loans.as_ref()).await,
        };

        match &outcome {
            Ok(()) => metrics::record_command(name, "accepted"),
            Err(_) => metrics::record_command(name, "failed"),
        }

        outcome
    }
}
