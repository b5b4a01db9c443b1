//! Reports module - derived monthly and yearly summaries.

mod reports_model;
mod reports_service;
mod reports_traits;

pub use reports_model::{MonthlyReport, YearlyReport};
pub use reports_service::ReportService;
pub use reports_traits::ReportServiceTrait;
