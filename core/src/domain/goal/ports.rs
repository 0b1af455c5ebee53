use std::future::Future;

use uuid::Uuid;

use crate::domain::{
    authentication::value_objects::Identity,
    common::entities::app_errors::CoreError,
    goal::{entities::UserGoal, value_objects::CreateGoalInput},
};

#[cfg_attr(test, mockall::automock)]
pub trait GoalRepository: Send + Sync {
    fn create_goal(&self, goal: UserGoal)
    -> impl Future<Output = Result<UserGoal, CoreError>> + Send;

    /// Active goals, newest first
    fn get_active_goals(
        &self,
        user_id: Uuid,
    ) -> impl Future<Output = Result<Vec<UserGoal>, CoreError>> + Send;

    fn get_goal(
        &self,
        user_id: Uuid,
        goal_id: Uuid,
    ) -> impl Future<Output = Result<Option<UserGoal>, CoreError>> + Send;

    fn update_goal(&self, goal: UserGoal)
    -> impl Future<Output = Result<UserGoal, CoreError>> + Send;
}

#[cfg_attr(test, mockall::automock)]
pub trait GoalService: Send + Sync {
    fn create_goal(
        &self,
        identity: Identity,
        input: CreateGoalInput,
    ) -> impl Future<Output = Result<UserGoal, CoreError>> + Send;

    fn list_active_goals(
        &self,
        identity: Identity,
    ) -> impl Future<Output = Result<Vec<UserGoal>, CoreError>> + Send;

    /// Record a new current value and refresh the progress percentage
    fn update_goal_value(
        &self,
        identity: Identity,
        goal_id: Uuid,
        current_value: f64,
    ) -> impl Future<Output = Result<UserGoal, CoreError>> + Send;

    fn deactivate_goal(
        &self,
        identity: Identity,
        goal_id: Uuid,
    ) -> impl Future<Output = Result<UserGoal, CoreError>> + Send;
}
