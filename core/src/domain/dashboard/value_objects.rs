use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{
    daily_summary::value_objects::DailyProgress, food_entry::entities::FoodEntry,
    goal::entities::UserGoal, profile::entities::UserProfile,
};

/// Everything the home view shows, read in one call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Dashboard {
    pub profile: UserProfile,
    pub today: DailyProgress,
    pub recent_entries: Vec<FoodEntry>,
    pub active_goals: Vec<UserGoal>,
}
