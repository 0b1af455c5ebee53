use tracing::instrument;
use uuid::Uuid;

use crate::domain::{
    authentication::value_objects::Identity,
    common::{entities::app_errors::CoreError, services::Service},
    daily_summary::ports::DailySummaryRepository,
    food_analysis::ports::FoodInferenceClient,
    food_entry::ports::FoodEntryRepository,
    goal::{
        entities::{UserGoal, UserGoalConfig},
        policies::validate_new_goal,
        ports::{GoalRepository, GoalService},
        value_objects::CreateGoalInput,
    },
    profile::ports::ProfileRepository,
    storage::ports::ObjectStoragePort,
};

impl<FE, DS, UP, UG, INF, OS> GoalService for Service<FE, DS, UP, UG, INF, OS>
where
    FE: FoodEntryRepository,
    DS: DailySummaryRepository,
    UP: ProfileRepository,
    UG: GoalRepository,
    INF: FoodInferenceClient,
    OS: ObjectStoragePort,
{
    #[instrument(skip(self, identity, input), fields(user_id = %identity.id(), goal_type = input.goal_type.as_str()))]
    async fn create_goal(
        &self,
        identity: Identity,
        input: CreateGoalInput,
    ) -> Result<UserGoal, CoreError> {
        validate_new_goal(&input)?;

        let (Some(target_value), Some(target_date)) = (input.target_value, input.target_date)
        else {
            return Err(CoreError::Invalid(
                "target value and target date are required".to_string(),
            ));
        };

        let goal = UserGoal::new(UserGoalConfig {
            user_id: identity.id(),
            goal_type: input.goal_type,
            target_value,
            current_value: input.current_value.unwrap_or(0.0),
            unit: input.unit.trim().to_string(),
            target_date,
        });

        self.goal_repository.create_goal(goal).await
    }

    #[instrument(skip(self, identity), fields(user_id = %identity.id()))]
    async fn list_active_goals(&self, identity: Identity) -> Result<Vec<UserGoal>, CoreError> {
        self.goal_repository.get_active_goals(identity.id()).await
    }

    #[instrument(skip(self, identity), fields(user_id = %identity.id()))]
    async fn update_goal_value(
        &self,
        identity: Identity,
        goal_id: Uuid,
        current_value: f64,
    ) -> Result<UserGoal, CoreError> {
        if !current_value.is_finite() || current_value < 0.0 {
            return Err(CoreError::Invalid(
                "current value must be a non-negative number".to_string(),
            ));
        }

        let mut goal = self
            .goal_repository
            .get_goal(identity.id(), goal_id)
            .await?
            .ok_or(CoreError::NotFound)?;

        goal.set_current_value(current_value);
        self.goal_repository.update_goal(goal).await
    }

    #[instrument(skip(self, identity), fields(user_id = %identity.id()))]
    async fn deactivate_goal(&self, identity: Identity, goal_id: Uuid) -> Result<UserGoal, CoreError> {
        let mut goal = self
            .goal_repository
            .get_goal(identity.id(), goal_id)
            .await?
            .ok_or(CoreError::NotFound)?;

        goal.deactivate();
        self.goal_repository.update_goal(goal).await
    }
}
