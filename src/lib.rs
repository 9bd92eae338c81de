//! # Loan Server Library
//!
//! This crate provides a loan-management REST API with:
//! - Validate-then-submit command dispatch for loan mutations
//! - Paginated read queries for loans, borrowers, and lenders
//! - PostgreSQL for persistent storage
//!
//! ## Architecture
//!
//! The crate follows Clean Architecture principles:
//!
//! - **Domain Layer**: Core business entities and repository traits
//! - **Application Layer**: Commands, validators, handlers, bus, queries
//! - **Infrastructure Layer**: Database and metrics implementations
//! - **Presentation Layer**: HTTP routes and handlers
//!
//! ## Module Structure
//!
//! ```text
//! loan_server/
//! +-- config/        Configuration management
//! +-- domain/        Domain entities and repository traits
//! +-- application/   Command core, query service, and DTOs
//! +-- infrastructure/ Database and metrics implementations
//! +-- presentation/  HTTP routes, handlers, and middleware
//! +-- shared/        Common utilities (errors)
//! ```

// Configuration module
pub mod config;

// Domain layer - Core business entities
pub mod domain;

// Application layer - Command core and queries
pub mod application;

// Infrastructure layer - External implementations
pub mod infrastructure;

// Presentation layer - HTTP handlers
pub mod presentation;

// Shared utilities
pub mod shared;

// Application startup and state management
pub mod startup;

// Telemetry and observability
pub mod telemetry;
