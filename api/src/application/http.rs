pub mod daily_summary;
pub mod dashboard;
pub mod food_analysis;
pub mod food_entry;
pub mod goal;
pub mod health;
pub mod profile;
pub mod server;
