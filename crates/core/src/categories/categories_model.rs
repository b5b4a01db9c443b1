use serde::{Deserialize, Serialize};

/// Whether money moves into or out of the user's pocket.
///
/// Transactions carry a snapshot of their category's type taken at
/// create/update time; it is never re-derived afterwards.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "UPPERCASE")]
pub enum TransactionType {
    Income,
    Expense,
}

/// A transaction category.
///
/// Either a system default (visible to everyone, `owner_id` absent) or a
/// user's custom category (`is_custom` set, owned by exactly one user).
/// Default names are globally unique; custom names are unique per owner and
/// may never equal a default name.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: String,
    pub name: String,
    pub category_type: TransactionType,
    pub is_custom: bool,
    pub owner_id: Option<String>,
}

impl Category {
    pub fn is_default(&self) -> bool {
        !self.is_custom
    }
}

/// Request model for creating a custom category.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct NewCategory {
    pub name: String,
    pub category_type: TransactionType,
}

/// Shape handed to the controller layer.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CategoryView {
    pub name: String,
    pub category_type: TransactionType,
    pub is_custom: bool,
}

impl From<&Category> for CategoryView {
    fn from(category: &Category) -> Self {
        CategoryView {
            name: category.name.clone(),
            category_type: category.category_type,
            is_custom: category.is_custom,
        }
    }
}
