//! # Domain Layer
//!
//! The domain layer contains the core business entities of the loan
//! server. It is independent of any external frameworks or
//! infrastructure concerns.
//!
//! ## Structure
//!
//! - **entities**: Core domain entities (Loan, User)
//!
//! ## Design Principles
//!
//! - No dependencies on infrastructure or presentation layers
//! - Repository traits define data access contracts
//! - Entities encapsulate domain behavior (loan lifecycle)

pub mod entities;

// Re-export commonly used types
pub use entities::*;
