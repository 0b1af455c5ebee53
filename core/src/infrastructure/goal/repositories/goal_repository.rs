use sea_orm::{
    ActiveValue::NotSet, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter,
    QueryOrder,
};
use tracing::error;
use uuid::Uuid;

use crate::{
    domain::{
        common::entities::app_errors::CoreError,
        goal::{entities::UserGoal, ports::GoalRepository},
    },
    entity::user_goals::{ActiveModel, Column, Entity},
};

#[derive(Debug, Clone)]
pub struct PostgresGoalRepository {
    pub db: DatabaseConnection,
}

impl PostgresGoalRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

impl GoalRepository for PostgresGoalRepository {
    async fn create_goal(&self, goal: UserGoal) -> Result<UserGoal, CoreError> {
        let created = Entity::insert(ActiveModel::from(&goal))
            .exec_with_returning(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to create goal: {}", e);
                CoreError::PersistenceError(e.to_string())
            })?;

        UserGoal::try_from(&created)
    }

    async fn get_active_goals(&self, user_id: Uuid) -> Result<Vec<UserGoal>, CoreError> {
        let models = Entity::find()
            .filter(Column::UserId.eq(user_id))
            .filter(Column::IsActive.eq(true))
            .order_by_desc(Column::CreatedAt)
            .all(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to list active goals: {}", e);
                CoreError::PersistenceError(e.to_string())
            })?;

        models.iter().map(UserGoal::try_from).collect()
    }

    async fn get_goal(&self, user_id: Uuid, goal_id: Uuid) -> Result<Option<UserGoal>, CoreError> {
        let model = Entity::find()
            .filter(Column::Id.eq(goal_id))
            .filter(Column::UserId.eq(user_id))
            .one(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to get goal: {}", e);
                CoreError::PersistenceError(e.to_string())
            })?;

        model.as_ref().map(UserGoal::try_from).transpose()
    }

    async fn update_goal(&self, goal: UserGoal) -> Result<UserGoal, CoreError> {
        let mut active_model = ActiveModel::from(&goal);
        // ownership and creation time never change
        active_model.user_id = NotSet;
        active_model.created_at = NotSet;

        let updated = Entity::update(active_model)
            .filter(Column::UserId.eq(goal.user_id))
            .exec(&self.db)
            .await
            .map_err(|e| match e {
                DbErr::RecordNotUpdated => CoreError::NotFound,
                e => {
                    error!("Failed to update goal: {}", e);
                    CoreError::PersistenceError(e.to_string())
                }
            })?;

        UserGoal::try_from(&updated)
    }
}
