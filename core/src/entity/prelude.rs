pub use super::daily_summaries::Entity as DailySummaries;
pub use super::food_entries::Entity as FoodEntries;
pub use super::user_goals::Entity as UserGoals;
pub use super::user_profiles::Entity as UserProfiles;
