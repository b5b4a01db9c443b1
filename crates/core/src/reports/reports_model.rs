use std::collections::HashMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Income and expense breakdown for one calendar month.
///
/// Reports are derived values: they are never persisted and always
/// recomputed from the current transaction data. An empty month yields
/// empty maps and a net savings of zero, not an absent report.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyReport {
    pub month: i32,
    pub year: i32,
    pub income_by_category: HashMap<String, Decimal>,
    pub expenses_by_category: HashMap<String, Decimal>,
    pub net_savings: Decimal,
}

/// Income and expense breakdown for one calendar year.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct YearlyReport {
    pub year: i32,
    pub income_by_category: HashMap<String, Decimal>,
    pub expenses_by_category: HashMap<String, Decimal>,
    pub net_savings: Decimal,
}
