pub mod create_goal;
pub mod deactivate_goal;
pub mod get_goals;
pub mod update_goal_value;
