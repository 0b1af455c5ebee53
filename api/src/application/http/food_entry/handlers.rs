pub mod get_recent_entries;
pub mod save_food_entry;
pub mod search_history;
