use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use log::debug;
use num_traits::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use uuid::Uuid;

use super::goals_model::{Goal, GoalProgress, GoalUpdate, GoalView, NewGoal};
use super::goals_traits::{GoalRepositoryTrait, GoalServiceTrait};
use crate::categories::TransactionType;
use crate::constants::PERCENTAGE_DECIMAL_PRECISION;
use crate::errors::{Error, Result, ValidationError};
use crate::transactions::{Transaction, TransactionServiceTrait};

/// Compute a goal's progress over the given transactions.
///
/// The caller supplies the owner's transactions dated on or after the
/// goal's start date. Net savings below zero clamp to zero: a goal never
/// shows negative progress, and the remaining amount never exceeds the
/// target nor drops below zero.
pub fn calculate_progress(goal: &Goal, transactions: &[Transaction]) -> GoalProgress {
    let mut income_total = Decimal::ZERO;
    let mut expense_total = Decimal::ZERO;
    for transaction in transactions {
        match transaction.transaction_type {
            TransactionType::Income => income_total += transaction.amount,
            TransactionType::Expense => expense_total += transaction.amount,
        }
    }

    let current_progress = (income_total - expense_total).max(Decimal::ZERO);
    let remaining_amount = (goal.target_amount - current_progress).max(Decimal::ZERO);

    // The target amount is validated strictly positive at create and update
    // time, so the division cannot hit zero. Half-up rounding to two
    // decimal places; this is the only place exact arithmetic is left.
    let progress_percentage = (current_progress * Decimal::ONE_HUNDRED / goal.target_amount)
        .round_dp_with_strategy(
            PERCENTAGE_DECIMAL_PRECISION,
            RoundingStrategy::MidpointAwayFromZero,
        )
        .to_f64()
        .unwrap_or_default();

    GoalProgress {
        current_progress,
        remaining_amount,
        progress_percentage,
    }
}

/// Service managing savings goals and their derived progress.
pub struct GoalService {
    goal_repository: Arc<dyn GoalRepositoryTrait>,
    transaction_service: Arc<dyn TransactionServiceTrait>,
}

impl GoalService {
    pub fn new(
        goal_repository: Arc<dyn GoalRepositoryTrait>,
        transaction_service: Arc<dyn TransactionServiceTrait>,
    ) -> Self {
        GoalService {
            goal_repository,
            transaction_service,
        }
    }

    fn view_of(&self, goal: &Goal) -> Result<GoalView> {
        let transactions = self
            .transaction_service
            .transactions_since(&goal.owner_id, goal.start_date)?;
        Ok(GoalView::new(goal, calculate_progress(goal, &transactions)))
    }
}

#[async_trait]
impl GoalServiceTrait for GoalService {
    async fn create_goal(&self, new_goal: NewGoal, owner_id: &str) -> Result<GoalView> {
        // Validation order is load-bearing: amount, target date, date range.
        if new_goal.target_amount <= Decimal::ZERO {
            return Err(ValidationError::InvalidAmount.into());
        }

        let today = Utc::now().date_naive();
        if new_goal.target_date <= today {
            return Err(ValidationError::InvalidDate(
                "Target date must be in the future".to_string(),
            )
            .into());
        }

        let start_date = new_goal.start_date.unwrap_or(today);
        if start_date >= new_goal.target_date {
            return Err(ValidationError::InvalidDateRange.into());
        }

        let goal = Goal {
            id: Uuid::new_v4().to_string(),
            name: new_goal.name,
            target_amount: new_goal.target_amount,
            start_date,
            target_date: new_goal.target_date,
            owner_id: owner_id.to_string(),
        };

        debug!("Creating goal '{}' targeting {}", goal.name, goal.target_amount);
        let saved = self.goal_repository.insert(goal).await?;
        self.view_of(&saved)
    }

    fn get_goal(&self, id: &str, owner_id: &str) -> Result<GoalView> {
        let goal = self
            .goal_repository
            .find_by_id(id, owner_id)?
            .ok_or_else(|| Error::NotFound("Goal not found".to_string()))?;
        self.view_of(&goal)
    }

    fn get_goals(&self, owner_id: &str) -> Result<Vec<GoalView>> {
        let goals = self.goal_repository.list_for_owner(owner_id)?;
        goals.iter().map(|goal| self.view_of(goal)).collect()
    }

    async fn update_goal(&self, id: &str, update: GoalUpdate, owner_id: &str) -> Result<GoalView> {
        let mut goal = self
            .goal_repository
            .find_by_id(id, owner_id)?
            .ok_or_else(|| Error::NotFound("Goal not found".to_string()))?;

        if let Some(target_amount) = update.target_amount {
            if target_amount <= Decimal::ZERO {
                return Err(ValidationError::InvalidAmount.into());
            }
            goal.target_amount = target_amount;
        }

        if let Some(target_date) = update.target_date {
            let today = Utc::now().date_naive();
            if target_date <= today {
                return Err(ValidationError::InvalidDate(
                    "Target date must be in the future".to_string(),
                )
                .into());
            }
            // The start date never changes, so the new target must still
            // leave a forward window.
            if goal.start_date >= target_date {
                return Err(ValidationError::InvalidDateRange.into());
            }
            goal.target_date = target_date;
        }

        let saved = self.goal_repository.update(goal).await?;
        self.view_of(&saved)
    }

    async fn delete_goal(&self, id: &str, owner_id: &str) -> Result<()> {
        let goal = self
            .goal_repository
            .find_by_id(id, owner_id)?
            .ok_or_else(|| Error::NotFound("Goal not found".to_string()))?;
        self.goal_repository.delete(&goal.id).await
    }
}
