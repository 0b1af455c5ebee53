pub mod goal_repository;
