//! Repository Implementations
//!
//! Concrete implementations of the domain repository traits.
//!
//! - **PgLoanRepository** / **PgUserRepository** - PostgreSQL via sqlx
//! - **InMemoryLoanRepository** / **InMemoryUserRepository** - DashMap
//!   stores mirroring the SQL semantics, used by the test suites

pub mod loan_repository;
pub mod memory;
pub mod user_repository;

pub use loan_repository::PgLoanRepository;
pub use memory::{InMemoryLoanRepository, InMemoryUserRepository};
pub use user_repository::PgUserRepository;
