use async_trait::async_trait;

use crate::errors::Result;
use crate::goals::goals_model::{Goal, GoalUpdate, GoalView, NewGoal};

/// Trait for goal repository operations, implemented by the storage layer.
#[async_trait]
pub trait GoalRepositoryTrait: Send + Sync {
    /// Find a goal by id, if it exists and belongs to the owner.
    fn find_by_id(&self, id: &str, owner_id: &str) -> Result<Option<Goal>>;

    /// All goals belonging to the owner.
    fn list_for_owner(&self, owner_id: &str) -> Result<Vec<Goal>>;

    /// Persist a goal the service has already validated.
    async fn insert(&self, goal: Goal) -> Result<Goal>;

    /// Replace the stored goal with the given one (matched by id).
    async fn update(&self, goal: Goal) -> Result<Goal>;

    /// Remove a goal by id.
    async fn delete(&self, id: &str) -> Result<()>;
}

/// Trait for goal service operations. Every returned view carries progress
/// recomputed from the owner's live transaction data.
#[async_trait]
pub trait GoalServiceTrait: Send + Sync {
    /// Validate and create a goal.
    async fn create_goal(&self, new_goal: NewGoal, owner_id: &str) -> Result<GoalView>;

    /// A single goal with its current progress.
    fn get_goal(&self, id: &str, owner_id: &str) -> Result<GoalView>;

    /// All of the owner's goals with their current progress.
    fn get_goals(&self, owner_id: &str) -> Result<Vec<GoalView>>;

    /// Apply a partial update; each provided field is re-validated
    /// independently against the current date and the existing start date.
    async fn update_goal(&self, id: &str, update: GoalUpdate, owner_id: &str) -> Result<GoalView>;

    /// Delete a goal owned by the caller.
    async fn delete_goal(&self, id: &str, owner_id: &str) -> Result<()>;
}
