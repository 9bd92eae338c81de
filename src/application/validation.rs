//! Command Validation Results
//!
//! Validation failures are data, not exceptions: each failed rule becomes
//! an ordered entry recording the field, the attempted value, and a
//! stable message key. The HTTP layer serializes the whole collection as
//! the 400 response body.

use serde::Serialize;

/// Stable message keys reported in validation errors.
///
/// Keys rather than prose so callers can match on them; human-readable
/// localization is a presentation concern.
pub mod messages {
    pub const LENDER_NOT_NULL_OR_EMPTY: &str = "LenderNotNullOrEmpty";
    pub const BORROWER_NOT_NULL_OR_EMPTY: &str = "BorrowerNotNullOrEmpty";
    pub const LENDER_DOES_NOT_EXIST: &str = "LenderDoesNotExist";
    pub const BORROWER_DOES_NOT_EXIST: &str = "BorrowerDoesNotExist";
    pub const BORROWER_AND_LENDER_MUST_DIFFER: &str = "BorrowerAndLenderMustDiffer";
    pub const LOAN_DOES_NOT_EXIST: &str = "LoanDoesNotExist";
    pub const LOAN_ALREADY_REPAID: &str = "LoanAlreadyRepaid";
}

/// A single failed validation rule.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ValidationError {
    /// Name of the offending command field
    pub field: String,

    /// The value the caller supplied
    pub attempted_value: String,

    /// Stable message key identifying the violated rule
    pub message: String,
}

/// Ordered collection of validation errors for one command.
///
/// Valid if and only if the collection is empty. Validators append
/// entries in rule order without short-circuiting, so every violated
/// rule is reported together.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ValidationResult {
    errors: Vec<ValidationError>,
}

impl ValidationResult {
    /// An empty (valid) result.
    pub fn valid() -> Self {
        Self::default()
    }

    /// Record a failed rule.
    pub fn add(&mut self, field: &str, attempted_value: impl ToString, message: &str) {
        self.errors.push(ValidationError {
            field: field.to_string(),
            attempted_value: attempted_value.to_string(),
            message: message.to_string(),
        });
    }

    /// True iff no rule failed.
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// The recorded errors, in rule order.
    pub fn errors(&self) -> &[ValidationError] {
        &self.errors
    }

    /// Consume the result, yielding the recorded errors.
    pub fn into_errors(self) -> Vec<ValidationError> {
        self.errors
    }

    /// Whether any error carries the given message key.
    pub fn has_message(&self, message: &str) -> bool {
        self.errors.iter().any(|e| e.message == message)
    }
}
