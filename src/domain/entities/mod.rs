//! # Domain Entities
//!
//! Core domain entities of the loan server. All entities map directly to
//! their corresponding database tables.
//!
//! ## Entities
//!
//! - **Loan**: A loan between two users with an active/repaid lifecycle
//! - **User**: A user who appears on loans as borrower or lender
//!
//! ## Repository Traits
//!
//! Each entity has an associated repository trait defining data access
//! operations. These traits are implemented in the infrastructure layer,
//! following the dependency inversion principle.

mod loan;
mod user;

// Re-export Loan entity and related types
pub use loan::{Loan, LoanRepository};

// Re-export User entity and related types
pub use user::{User, UserRepository};
