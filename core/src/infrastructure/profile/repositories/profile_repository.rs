use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, sea_query::OnConflict};
use tracing::error;
use uuid::Uuid;

use crate::{
    domain::{
        common::entities::app_errors::CoreError,
        profile::{entities::UserProfile, ports::ProfileRepository},
    },
    entity::user_profiles::{ActiveModel, Column, Entity},
};

#[derive(Debug, Clone)]
pub struct PostgresProfileRepository {
    pub db: DatabaseConnection,
}

impl PostgresProfileRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

impl ProfileRepository for PostgresProfileRepository {
    async fn get_profile_by_user(&self, user_id: Uuid) -> Result<Option<UserProfile>, CoreError> {
        let model = Entity::find()
            .filter(Column::UserId.eq(user_id))
            .one(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to get user profile: {}", e);
                CoreError::PersistenceError(e.to_string())
            })?;

        Ok(model.map(UserProfile::from))
    }

    async fn upsert_profile(&self, profile: UserProfile) -> Result<UserProfile, CoreError> {
        // the first stored row keeps its id and created_at
        let on_conflict = OnConflict::column(Column::UserId)
            .update_columns([
                Column::Email,
                Column::FullName,
                Column::Age,
                Column::Gender,
                Column::HeightCm,
                Column::WeightKg,
                Column::ActivityLevel,
                Column::DailyCalorieGoal,
                Column::DailyProteinGoal,
                Column::DailyCarbGoal,
                Column::DailyFatGoal,
                Column::UpdatedAt,
            ])
            .to_owned();

        let stored = Entity::insert(ActiveModel::from(&profile))
            .on_conflict(on_conflict)
            .exec_with_returning(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to upsert user profile: {}", e);
                CoreError::PersistenceError(e.to_string())
            })?;

        Ok(UserProfile::from(stored))
    }
}
