//! User entity and repository trait.
//!
//! Users are the borrower/lender collaborator referenced by loans. The
//! command core only needs an existence check; `find_by_id` and `create`
//! exist so the seeding endpoint and tests can populate the collection.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::shared::error::AppError;

/// Represents a user who can appear on a loan as borrower or lender.
///
/// Maps to the `users` table:
/// - id: UUID PRIMARY KEY
/// - name: TEXT NOT NULL
/// - created_at: TIMESTAMPTZ NOT NULL DEFAULT NOW()
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    /// User ID (primary key)
    pub id: Uuid,

    /// Display name
    pub name: String,

    /// Timestamp when the user was created
    pub created_at: DateTime<Utc>,
}

/// Repository trait for User data access operations.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find a user by their ID.
    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, AppError>;

    /// Check whether a user with the given ID exists.
    async fn exists(&self, id: Uuid) -> Result<bool, AppError>;

    /// Create a new user.
    async fn create(&self, user: &User) -> Result<User, AppError>;
}
