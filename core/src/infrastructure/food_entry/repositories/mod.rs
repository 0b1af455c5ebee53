pub mod food_entry_repository;
