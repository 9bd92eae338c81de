//! In-Memory Repository Implementations
//!
//! DashMap-backed implementations of the repository traits, used by the
//! test suites and for running the server without a database. They
//! mirror the PostgreSQL semantics the command core depends on: stable
//! page ordering, conflict on duplicate create, not-found on updating a
//! missing row.

use async_trait::async_trait;
use chrono::Utc;
use dashmap::DashMap;
use uuid::Uuid;

use crate::domain::{Loan, LoanRepository, User, UserRepository};
use crate::shared::error::AppError;

fn page<T>(mut items: Vec<T>, offset: i64, limit: i64) -> Vec<T> {
    let offset = offset.max(0) as usize;
    let limit = limit.max(0) as usize;
    if offset >= items.len() {
        return Vec::new();
    }
    items.drain(..offset);
    items.truncate(limit);
    items
}

/// In-memory loan store keyed by loan ID.
#[derive(Default)]
pub struct InMemoryLoanRepository {
    loans: DashMap<Uuid, Loan>,
}

impl InMemoryLoanRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Place a loan directly into the store, bypassing the repository
    /// contract. Test seeding helper.
    pub fn insert(&self, loan: Loan) {
        self.loans.insert(loan.id, loan);
    }

    /// Loans ordered the way the SQL implementation orders pages.
    fn ordered(&self) -> Vec<Loan> {
        let mut all: Vec<Loan> = self.loans.iter().map(|e| e.value().clone()).collect();
        all.sort_by(|a, b| (a.created_at, a.id).cmp(&(b.created_at, b.id)));
        all
    }

    fn distinct_ids(&self, key: impl Fn(&Loan) -> Uuid, offset: i64, limit: i64) -> Vec<Uuid> {
        let mut ids: Vec<Uuid> = self.loans.iter().map(|e| key(e.value())).collect();
        ids.sort();
        ids.dedup();
        page(ids, offset, limit)
    }
}

#[async_trait]
impl LoanRepository for InMemoryLoanRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Loan>, AppError> {
        Ok(self.loans.get(&id).map(|e| e.value().clone()))
    }

    async fn find_page(&self, offset: i64, limit: i64) -> Result<Vec<Loan>, AppError> {
        Ok(page(self.ordered(), offset, limit))
    }

    async fn find_by_borrower(
        &self,
        user_id: Uuid,
        offset: i64,
        limit: i64,
    ) -> Result<Vec<Loan>, AppError> {
        let matching = self
            .ordered()
            .into_iter()
            .filter(|l| l.borrower_id == user_id)
            .collect();
        Ok(page(matching, offset, limit))
    }

    async fn find_by_lender(
        &self,
        user_id: Uuid,
        offset: i64,
        limit: i64,
    ) -> Result<Vec<Loan>, AppError> {
        let matching = self
            .ordered()
            .into_iter()
            .filter(|l| l.lender_id == user_id)
            .collect();
        Ok(page(matching, offset, limit))
    }

    async fn distinct_borrowers(&self, offset: i64, limit: i64) -> Result<Vec<Uuid>, AppError> {
        Ok(self.distinct_ids(|l| l.borrower_id, offset, limit))
    }

    async fn distinct_lenders(&self, offset: i64, limit: i64) -> Result<Vec<Uuid>, AppError> {
        Ok(self.distinct_ids(|l| l.lender_id, offset, limit))
    }

    async fn create(&self, loan: &Loan) -> Result<Loan, AppError> {
        if self.loans.contains_key(&loan.id) {
            return Err(AppError::Conflict(format!(
                "Loan with id {} already exists",
                loan.id
            )));
        }
        self.loans.insert(loan.id, loan.clone());
        Ok(loan.clone())
    }

    async fn update(&self, loan: &Loan) -> Result<Loan, AppError> {
        if !self.loans.contains_key(&loan.id) {
            return Err(AppError::NotFound(format!(
                "Loan with id {} not found",
                loan.id
            )));
        }
        self.loans.insert(loan.id, loan.clone());
        Ok(loan.clone())
    }
}

/// In-memory user store keyed by user ID.
#[derive(Default)]
pub struct InMemoryUserRepository {
    users: DashMap<Uuid, User>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Place a user directly into the store. Test seeding helper.
    pub fn seed(&self, id: Uuid, name: &str) {
        self.users.insert(
            id,
            User {
                id,
                name: name.to_string(),
                created_at: Utc::now(),
            },
        );
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, AppError> {
        Ok(self.users.get(&id).map(|e| e.value().clone()))
    }

    async fn exists(&self, id: Uuid) -> Result<bool, AppError> {
        Ok(self.users.contains_key(&id))
    }

    async fn create(&self, user: &User) -> Result<User, AppError> {
        if self.users.contains_key(&user.id) {
            return Err(AppError::Conflict(format!(
                "User with id {} already exists",
                user.id
            )));
        }
        self.users.insert(user.id, user.clone());
        Ok(user.clone())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    fn loan_at(seconds: i64) -> Loan {
        Loan::new(
            Uuid::new_v4(),
            Uuid::new_v4(),
            Uuid::new_v4(),
            dec!(10.00),
            chrono::DateTime::from_timestamp(seconds, 0).unwrap(),
        )
    }

    #[tokio::test]
    async fn pages_are_ordered_by_creation_time() {
        let repo = InMemoryLoanRepository::new();
        let older = loan_at(100);
        let newer = loan_at(200);
        repo.insert(newer.clone());
        repo.insert(older.clone());

        let all = repo.find_page(0, 10).await.unwrap();
        assert_eq!(all.len(), 2);
        assert_eq!(all[0].id, older.id);
        assert_eq!(all[1].id, newer.id);

        let second = repo.find_page(1, 10).await.unwrap();
        assert_eq!(second.len(), 1);
        assert_eq!(second[0].id, newer.id);
    }

    #[tokio::test]
    async fn offset_past_the_end_yields_an_empty_page() {
        let repo = InMemoryLoanRepository::new();
        repo.insert(loan_at(100));

        assert!(repo.find_page(5, 10).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn duplicate_create_conflicts() {
        let repo = InMemoryLoanRepository::new();
        let loan = loan_at(100);

        repo.create(&loan).await.unwrap();
        let err = repo.create(&loan).await.unwrap_err();

        assert!(matches!(err, AppError::Conflict(_)));
    }

    #[tokio::test]
    async fn update_of_missing_loan_is_not_found() {
        let repo = InMemoryLoanRepository::new();

        let err = repo.update(&loan_at(100)).await.unwrap_err();

        assert!(matches!(err, AppError::NotFound(_)));
    }
}
