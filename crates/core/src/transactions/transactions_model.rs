use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::categories::TransactionType;

/// A single income or expense event.
///
/// `transaction_type` is the type of the category at the moment the
/// transaction was created or last re-categorized. Changing a category
/// later never rewrites existing transactions.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub id: String,
    pub amount: Decimal,
    pub date: NaiveDate,
    pub category_name: String,
    pub description: Option<String>,
    pub transaction_type: TransactionType,
    pub owner_id: String,
}

/// Request model for creating a transaction.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct NewTransaction {
    pub amount: Decimal,
    pub date: NaiveDate,
    pub category_name: String,
    pub description: Option<String>,
}

/// Partial update for a transaction. Omitted fields are left untouched;
/// the date is immutable after creation and has no field here.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct TransactionUpdate {
    pub amount: Option<Decimal>,
    pub category_name: Option<String>,
    pub description: Option<String>,
}

/// Shape handed to the controller layer.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TransactionView {
    pub id: String,
    pub amount: Decimal,
    pub date: NaiveDate,
    pub category_name: String,
    pub description: Option<String>,
    pub transaction_type: TransactionType,
}

impl From<&Transaction> for TransactionView {
    fn from(transaction: &Transaction) -> Self {
        TransactionView {
            id: transaction.id.clone(),
            amount: transaction.amount,
            date: transaction.date,
            category_name: transaction.category_name.clone(),
            description: transaction.description.clone(),
            transaction_type: transaction.transaction_type,
        }
    }
}
