use std::collections::HashMap;
use std::sync::Arc;

use log::debug;
use rust_decimal::Decimal;

use super::reports_model::{MonthlyReport, YearlyReport};
use super::reports_traits::ReportServiceTrait;
use crate::categories::TransactionType;
use crate::errors::{Result, ValidationError};
use crate::transactions::{Transaction, TransactionServiceTrait};

/// Per-category totals of a transaction set, split by type.
///
/// The grand totals are accumulated independently of the maps so the net
/// savings figure is an exact decimal sum, not a re-walk of map values.
struct Aggregates {
    income_by_category: HashMap<String, Decimal>,
    expenses_by_category: HashMap<String, Decimal>,
    net_savings: Decimal,
}

fn aggregate(transactions: &[Transaction]) -> Aggregates {
    let mut income_by_category: HashMap<String, Decimal> = HashMap::new();
    let mut expenses_by_category: HashMap<String, Decimal> = HashMap::new();
    let mut income_total = Decimal::ZERO;
    let mut expense_total = Decimal::ZERO;

    for transaction in transactions {
        match transaction.transaction_type {
            TransactionType::Income => {
                *income_by_category
                    .entry(transaction.category_name.clone())
                    .or_insert(Decimal::ZERO) += transaction.amount;
                income_total += transaction.amount;
            }
            TransactionType::Expense => {
                *expenses_by_category
                    .entry(transaction.category_name.clone())
                    .or_insert(Decimal::ZERO) += transaction.amount;
                expense_total += transaction.amount;
            }
        }
    }

    Aggregates {
        income_by_category,
        expenses_by_category,
        net_savings: income_total - expense_total,
    }
}

/// Service deriving monthly and yearly reports from transaction data.
pub struct ReportService {
    transaction_service: Arc<dyn TransactionServiceTrait>,
}

impl ReportService {
    pub fn new(transaction_service: Arc<dyn TransactionServiceTrait>) -> Self {
        ReportService {
            transaction_service,
        }
    }
}

impl ReportServiceTrait for ReportService {
    fn monthly_report(&self, owner_id: &str, year: i32, month: i32) -> Result<MonthlyReport> {
        if !(1..=12).contains(&month) {
            return Err(ValidationError::InvalidMonth(month).into());
        }

        debug!("Building monthly report for {}-{:02}", year, month);
        let transactions = self
            .transaction_service
            .transactions_for_month(owner_id, year, month)?;
        let aggregates = aggregate(&transactions);

        Ok(MonthlyReport {
            month,
            year,
            income_by_category: aggregates.income_by_category,
            expenses_by_category: aggregates.expenses_by_category,
            net_savings: aggregates.net_savings,
        })
    }

    fn yearly_report(&self, owner_id: &str, year: i32) -> Result<YearlyReport> {
        debug!("Building yearly report for {}", year);
        let transactions = self
            .transaction_service
            .transactions_for_year(owner_id, year)?;
        let aggregates = aggregate(&transactions);

        Ok(YearlyReport {
            year,
            income_by_category: aggregates.income_by_category,
            expenses_by_category: aggregates.expenses_by_category,
            net_savings: aggregates.net_savings,
        })
    }
}
