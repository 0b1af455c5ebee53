use chrono::NaiveDate;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, sea_query::OnConflict};
use tracing::error;
use uuid::Uuid;

use crate::{
    domain::{
        common::entities::app_errors::CoreError,
        daily_summary::{entities::DailySummary, ports::DailySummaryRepository},
    },
    entity::daily_summaries::{ActiveModel, Column, Entity},
};

#[derive(Debug, Clone)]
pub struct PostgresDailySummaryRepository {
    pub db: DatabaseConnection,
}

impl PostgresDailySummaryRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

impl DailySummaryRepository for PostgresDailySummaryRepository {
    async fn get_summary(
        &self,
        user_id: Uuid,
        date: NaiveDate,
    ) -> Result<Option<DailySummary>, CoreError> {
        let model = Entity::find()
            .filter(Column::UserId.eq(user_id))
            .filter(Column::Date.eq(date))
            .one(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to get daily summary: {}", e);
                CoreError::PersistenceError(e.to_string())
            })?;

        Ok(model.map(DailySummary::from))
    }

    async fn upsert_summary(&self, summary: DailySummary) -> Result<DailySummary, CoreError> {
        let on_conflict = OnConflict::columns([Column::UserId, Column::Date])
            .update_columns([
                Column::TotalCalories,
                Column::TotalProteinG,
                Column::TotalCarbsG,
                Column::TotalFatG,
                Column::TotalFiberG,
                Column::TotalSugarG,
                Column::TotalSodiumMg,
                Column::MealsLogged,
                Column::GoalCaloriesMet,
                Column::GoalProteinMet,
                Column::GoalCarbsMet,
                Column::GoalFatMet,
                Column::UpdatedAt,
            ])
            .to_owned();

        let stored = Entity::insert(ActiveModel::from(&summary))
            .on_conflict(on_conflict)
            .exec_with_returning(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to upsert daily summary: {}", e);
                CoreError::PersistenceError(e.to_string())
            })?;

        Ok(DailySummary::from(stored))
    }
}
