use crate::errors::Result;
use crate::reports::reports_model::{MonthlyReport, YearlyReport};

/// Trait for report generation.
pub trait ReportServiceTrait: Send + Sync {
    /// Aggregate one calendar month of the owner's transactions.
    /// The month must lie in `[1, 12]`.
    fn monthly_report(&self, owner_id: &str, year: i32, month: i32) -> Result<MonthlyReport>;

    /// Aggregate one calendar year of the owner's transactions.
    fn yearly_report(&self, owner_id: &str, year: i32) -> Result<YearlyReport>;
}
