pub mod daily_summary;
pub mod db;
pub mod food_entry;
pub mod goal;
pub mod inference;
pub mod memory;
pub mod notifier;
pub mod object_storage;
pub mod preview;
pub mod profile;
