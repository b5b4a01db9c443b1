use std::sync::Arc;

use async_trait::async_trait;
use chrono::{NaiveDate, Utc};
use log::debug;
use rust_decimal::Decimal;
use uuid::Uuid;

use super::transactions_model::{NewTransaction, Transaction, TransactionUpdate, TransactionView};
use super::transactions_traits::{TransactionRepositoryTrait, TransactionServiceTrait};
use crate::categories::CategoryServiceTrait;
use crate::errors::{Error, Result, ValidationError};

/// Service enforcing the transaction business rules: no future dates,
/// positive amounts, and a category that resolves for the owner. The
/// category's type is snapshotted onto the transaction at create/update
/// time and never re-derived afterwards.
pub struct TransactionService {
    transaction_repository: Arc<dyn TransactionRepositoryTrait>,
    category_service: Arc<dyn CategoryServiceTrait>,
}

impl TransactionService {
    pub fn new(
        transaction_repository: Arc<dyn TransactionRepositoryTrait>,
        category_service: Arc<dyn CategoryServiceTrait>,
    ) -> Self {
        TransactionService {
            transaction_repository,
            category_service,
        }
    }

    fn validate_amount(amount: Decimal) -> Result<()> {
        if amount <= Decimal::ZERO {
            return Err(ValidationError::InvalidAmount.into());
        }
        Ok(())
    }
}

#[async_trait]
impl TransactionServiceTrait for TransactionService {
    async fn create_transaction(
        &self,
        new_transaction: NewTransaction,
        owner_id: &str,
    ) -> Result<TransactionView> {
        // Validation order is load-bearing: date, then amount, then category.
        let today = Utc::now().date_naive();
        if new_transaction.date > today {
            return Err(ValidationError::InvalidDate(
                "Transaction date cannot be in the future".to_string(),
            )
            .into());
        }

        Self::validate_amount(new_transaction.amount)?;

        let category = self
            .category_service
            .resolve(&new_transaction.category_name, owner_id)?
            .ok_or_else(|| {
                ValidationError::InvalidCategory(new_transaction.category_name.clone())
            })?;

        let transaction = Transaction {
            id: Uuid::new_v4().to_string(),
            amount: new_transaction.amount,
            date: new_transaction.date,
            category_name: new_transaction.category_name,
            description: new_transaction.description,
            transaction_type: category.category_type,
            owner_id: owner_id.to_string(),
        };

        debug!(
            "Creating {:?} transaction in category '{}'",
            transaction.transaction_type, transaction.category_name
        );
        let saved = self.transaction_repository.insert(transaction).await?;
        Ok(TransactionView::from(&saved))
    }

    fn get_transactions(
        &self,
        owner_id: &str,
        start_date: Option<NaiveDate>,
        end_date: Option<NaiveDate>,
        category_name: Option<&str>,
    ) -> Result<Vec<TransactionView>> {
        let transactions = self.transaction_repository.find_in_range(
            owner_id,
            start_date,
            end_date,
            category_name,
        )?;
        Ok(transactions.iter().map(TransactionView::from).collect())
    }

    async fn update_transaction(
        &self,
        id: &str,
        update: TransactionUpdate,
        owner_id: &str,
    ) -> Result<TransactionView> {
        let mut transaction = self
            .transaction_repository
            .find_by_id(id, owner_id)?
            .ok_or_else(|| Error::NotFound("Transaction not found".to_string()))?;

        // Each provided field is re-validated before anything is persisted,
        // so a failure leaves the stored transaction untouched.
        if let Some(amount) = update.amount {
            Self::validate_amount(amount)?;
            transaction.amount = amount;
        }

        if let Some(category_name) = update.category_name {
            let category = self
                .category_service
                .resolve(&category_name, owner_id)?
                .ok_or_else(|| ValidationError::InvalidCategory(category_name.clone()))?;
            transaction.category_name = category_name;
            transaction.transaction_type = category.category_type;
        }

        if let Some(description) = update.description {
            transaction.description = Some(description);
        }

        // The date is immutable after creation.

        let saved = self.transaction_repository.update(transaction).await?;
        Ok(TransactionView::from(&saved))
    }

    async fn delete_transaction(&self, id: &str, owner_id: &str) -> Result<()> {
        let transaction = self
            .transaction_repository
            .find_by_id(id, owner_id)?
            .ok_or_else(|| Error::NotFound("Transaction not found".to_string()))?;
        self.transaction_repository.delete(&transaction.id).await
    }

    fn transactions_since(
        &self,
        owner_id: &str,
        start_date: NaiveDate,
    ) -> Result<Vec<Transaction>> {
        self.transaction_repository.find_since(owner_id, start_date)
    }

    fn transactions_for_month(
        &self,
        owner_id: &str,
        year: i32,
        month: i32,
    ) -> Result<Vec<Transaction>> {
        self.transaction_repository
            .find_for_month(owner_id, year, month)
    }

    fn transactions_for_year(&self, owner_id: &str, year: i32) -> Result<Vec<Transaction>> {
        self.transaction_repository.find_for_year(owner_id, year)
    }

    fn is_category_in_use(&self, owner_id: &str, category_name: &str) -> Result<bool> {
        self.transaction_repository
            .exists_with_category(owner_id, category_name)
    }
}
