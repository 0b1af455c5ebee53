pub mod prelude;

pub mod daily_summaries;
pub mod food_entries;
pub mod user_goals;
pub mod user_profiles;
