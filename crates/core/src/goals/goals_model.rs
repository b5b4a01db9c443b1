use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A savings goal: accumulate `target_amount` of net savings between
/// `start_date` and `target_date`.
///
/// Progress is never stored; it is recomputed from live transaction data on
/// every read. `start_date` is immutable after creation.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Goal {
    pub id: String,
    pub name: String,
    pub target_amount: Decimal,
    pub start_date: NaiveDate,
    pub target_date: NaiveDate,
    pub owner_id: String,
}

/// Request model for creating a goal. A missing `start_date` defaults to
/// the current date.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct NewGoal {
    pub name: String,
    pub target_amount: Decimal,
    pub target_date: NaiveDate,
    pub start_date: Option<NaiveDate>,
}

/// Partial update for a goal. Each provided field is re-validated on its
/// own; the start date is immutable and has no field here.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct GoalUpdate {
    pub target_amount: Option<Decimal>,
    pub target_date: Option<NaiveDate>,
}

/// Derived progress of a goal over the owner's transactions since its
/// start date.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GoalProgress {
    pub current_progress: Decimal,
    pub remaining_amount: Decimal,
    /// Percentage of the target reached, rounded half-up to two decimal
    /// places. The only value in the crate that leaves exact arithmetic.
    pub progress_percentage: f64,
}

/// Shape handed to the controller layer: the goal plus its live progress.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GoalView {
    pub id: String,
    pub name: String,
    pub target_amount: Decimal,
    pub start_date: NaiveDate,
    pub target_date: NaiveDate,
    pub current_progress: Decimal,
    pub progress_percentage: f64,
    pub remaining_amount: Decimal,
}

impl GoalView {
    pub fn new(goal: &Goal, progress: GoalProgress) -> Self {
        GoalView {
            id: goal.id.clone(),
            name: goal.name.clone(),
            target_amount: goal.target_amount,
            start_date: goal.start_date,
            target_date: goal.target_date,
            current_progress: progress.current_progress,
            progress_percentage: progress.progress_percentage,
            remaining_amount: progress.remaining_amount,
        }
    }
}
