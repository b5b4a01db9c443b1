use chrono::NaiveDate;
use async_trait::async_trait;

use crate::errors::Result;
use crate::transactions::transactions_model::{
    NewTransaction, Transaction, TransactionUpdate, TransactionView,
};

/// Trait for transaction repository operations, implemented by the storage
/// layer. Every query is scoped to a single owner.
#[async_trait]
pub trait TransactionRepositoryTrait: Send + Sync {
    /// Find a transaction by id, if it exists and belongs to the owner.
    fn find_by_id(&self, id: &str, owner_id: &str) -> Result<Option<Transaction>>;

    /// Transactions within an optional date range and optional category.
    /// Bounds are inclusive; `None` leaves that side unbounded.
    fn find_in_range(
        &self,
        owner_id: &str,
        start_date: Option<NaiveDate>,
        end_date: Option<NaiveDate>,
        category_name: Option<&str>,
    ) -> Result<Vec<Transaction>>;

    /// Transactions dated on or after `start_date`.
    fn find_since(&self, owner_id: &str, start_date: NaiveDate) -> Result<Vec<Transaction>>;

    /// Transactions within one calendar month.
    fn find_for_month(&self, owner_id: &str, year: i32, month: i32) -> Result<Vec<Transaction>>;

    /// Transactions within one calendar year.
    fn find_for_year(&self, owner_id: &str, year: i32) -> Result<Vec<Transaction>>;

    /// Whether any of the owner's transactions reference the category name.
    fn exists_with_category(&self, owner_id: &str, category_name: &str) -> Result<bool>;

    /// Persist a transaction the service has already validated.
    async fn insert(&self, transaction: Transaction) -> Result<Transaction>;

    /// Replace the stored transaction with the given one (matched by id).
    async fn update(&self, transaction: Transaction) -> Result<Transaction>;

    /// Remove a transaction by id.
    async fn delete(&self, id: &str) -> Result<()>;
}

/// Trait for transaction service operations.
#[async_trait]
pub trait TransactionServiceTrait: Send + Sync {
    /// Validate and create a transaction, snapshotting the category's type.
    async fn create_transaction(
        &self,
        new_transaction: NewTransaction,
        owner_id: &str,
    ) -> Result<TransactionView>;

    /// The owner's transactions, optionally filtered by date range and
    /// category.
    fn get_transactions(
        &self,
        owner_id: &str,
        start_date: Option<NaiveDate>,
        end_date: Option<NaiveDate>,
        category_name: Option<&str>,
    ) -> Result<Vec<TransactionView>>;

    /// Apply a partial update. Provided fields are re-validated with the
    /// creation rules; a new category re-snapshots the type.
    async fn update_transaction(
        &self,
        id: &str,
        update: TransactionUpdate,
        owner_id: &str,
    ) -> Result<TransactionView>;

    /// Delete a transaction owned by the caller.
    async fn delete_transaction(&self, id: &str, owner_id: &str) -> Result<()>;

    /// Transactions dated on or after `start_date`, for goal progress.
    fn transactions_since(&self, owner_id: &str, start_date: NaiveDate)
        -> Result<Vec<Transaction>>;

    /// Transactions of one calendar month, for monthly reports.
    fn transactions_for_month(
        &self,
        owner_id: &str,
        year: i32,
        month: i32,
    ) -> Result<Vec<Transaction>>;

    /// Transactions of one calendar year, for yearly reports.
    fn transactions_for_year(&self, owner_id: &str, year: i32) -> Result<Vec<Transaction>>;

    /// Whether any of the owner's transactions reference the category name.
    fn is_category_in_use(&self, owner_id: &str, category_name: &str) -> Result<bool>;
}
