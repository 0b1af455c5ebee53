pub mod daily_summary_repository;
