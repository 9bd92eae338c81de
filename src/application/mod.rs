//! Application Layer
//!
//! The write side is the command core: commands, validators, handlers,
//! and the bus that dispatches between them. The read side is the loans
//! query service. DTOs describe the HTTP body shapes.

pub mod bus;
pub mod commands;
pub mod dto;
pub mod handlers;
pub mod queries;
pub mod validation;
pub mod validators;

pub use bus::CommandBus;
pub use commands::{Command, CreateLoanCommand, RepayLoanCommand};
pub use queries::LoansQueryService;
pub use validation::{ValidationError, ValidationResult};
