//! Goals module - domain models, services, and traits.

mod goals_model;
mod goals_service;
mod goals_traits;

pub use goals_model::{Goal, GoalProgress, GoalUpdate, GoalView, NewGoal};
pub use goals_service::{calculate_progress, GoalService};
pub use goals_traits::{GoalRepositoryTrait, GoalServiceTrait};
