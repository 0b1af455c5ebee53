use chrono::{DateTime, Utc};
use sea_orm::{
    ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, QuerySelect,
};
use tracing::error;
use uuid::Uuid;

use crate::{
    domain::{
        common::entities::app_errors::CoreError,
        food_entry::{entities::FoodEntry, ports::FoodEntryRepository},
    },
    entity::food_entries::{ActiveModel, Column, Entity},
};

#[derive(Debug, Clone)]
pub struct PostgresFoodEntryRepository {
    pub db: DatabaseConnection,
}

impl PostgresFoodEntryRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

impl FoodEntryRepository for PostgresFoodEntryRepository {
    async fn create_entry(&self, entry: FoodEntry) -> Result<FoodEntry, CoreError> {
        let created = Entity::insert(ActiveModel::from(&entry))
            .exec_with_returning(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to create food entry: {}", e);
                CoreError::PersistenceError(e.to_string())
            })?;

        Ok(FoodEntry::from(created))
    }

    async fn get_recent_entries(
        &self,
        user_id: Uuid,
        limit: u64,
    ) -> Result<Vec<FoodEntry>, CoreError> {
        let models = Entity::find()
            .filter(Column::UserId.eq(user_id))
            .order_by_desc(Column::CreatedAt)
            .order_by_desc(Column::Id)
            .limit(limit)
            .all(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to list recent food entries: {}", e);
                CoreError::PersistenceError(e.to_string())
            })?;

        Ok(models.iter().map(FoodEntry::from).collect())
    }

    async fn get_entries_between(
        &self,
        user_id: Uuid,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<Vec<FoodEntry>, CoreError> {
        let models = Entity::find()
            .filter(Column::UserId.eq(user_id))
            .filter(Column::CreatedAt.gte(start.fixed_offset()))
            .filter(Column::CreatedAt.lt(end.fixed_offset()))
            .order_by_asc(Column::CreatedAt)
            .order_by_asc(Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to list food entries in range: {}", e);
                CoreError::PersistenceError(e.to_string())
            })?;

        Ok(models.iter().map(FoodEntry::from).collect())
    }
}
