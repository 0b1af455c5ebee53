pub mod authentication;
pub mod common;
pub mod daily_summary;
pub mod dashboard;
pub mod food_analysis;
pub mod food_entry;
pub mod goal;
pub mod intake;
pub mod profile;
pub mod storage;
