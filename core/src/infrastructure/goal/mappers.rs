use sea_orm::ActiveValue::Set;

use crate::{
    domain::{
        common::entities::app_errors::CoreError,
        goal::entities::{GoalType, UserGoal},
    },
    entity::user_goals::{ActiveModel, Model},
};

impl TryFrom<&Model> for UserGoal {
    type Error = CoreError;

    fn try_from(model: &Model) -> Result<Self, Self::Error> {
        let goal_type = GoalType::try_from(model.goal_type.as_str()).map_err(|e| {
            tracing::error!(goal_id = %model.id, "Stored goal has an unknown type: {}", e);
            CoreError::PersistenceError(e.to_string())
        })?;

        Ok(Self {
            id: model.id,
            user_id: model.user_id,
            goal_type,
            target_value: model.target_value,
            current_value: model.current_value,
            unit: model.unit.clone(),
            start_date: model.start_date,
            target_date: model.target_date,
            is_active: model.is_active,
            progress_percentage: model.progress_percentage,
            created_at: model.created_at.to_utc(),
            updated_at: model.updated_at.to_utc(),
        })
    }
}

impl From<&UserGoal> for ActiveModel {
    fn from(goal: &UserGoal) -> Self {
        ActiveModel {
            id: Set(goal.id),
            user_id: Set(goal.user_id),
            goal_type: Set(goal.goal_type.as_str().to_string()),
            target_value: Set(goal.target_value),
            current_value: Set(goal.current_value),
            unit: Set(goal.unit.clone()),
            start_date: Set(goal.start_date),
            target_date: Set(goal.target_date),
            is_active: Set(goal.is_active),
            progress_percentage: Set(goal.progress_percentage),
            created_at: Set(goal.created_at.fixed_offset()),
            updated_at: Set(goal.updated_at.fixed_offset()),
        }
    }
}
