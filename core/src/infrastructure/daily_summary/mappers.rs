use chrono::Utc;
use sea_orm::ActiveValue::Set;

use crate::{
    domain::daily_summary::entities::DailySummary,
    entity::daily_summaries::{ActiveModel, Model},
};

impl From<&Model> for DailySummary {
    fn from(model: &Model) -> Self {
        Self {
            id: model.id,
            user_id: model.user_id,
            date: model.date,
            total_calories: model.total_calories,
            total_protein_g: model.total_protein_g,
            total_carbs_g: model.total_carbs_g,
            total_fat_g: model.total_fat_g,
            total_fiber_g: model.total_fiber_g,
            total_sugar_g: model.total_sugar_g,
            total_sodium_mg: model.total_sodium_mg,
            meals_logged: model.meals_logged,
            goal_calories_met: model.goal_calories_met,
            goal_protein_met: model.goal_protein_met,
            goal_carbs_met: model.goal_carbs_met,
            goal_fat_met: model.goal_fat_met,
        }
    }
}

impl From<Model> for DailySummary {
    fn from(model: Model) -> Self {
        Self::from(&model)
    }
}

impl From<&DailySummary> for ActiveModel {
    fn from(summary: &DailySummary) -> Self {
        ActiveModel {
            id: Set(summary.id),
            user_id: Set(summary.user_id),
            date: Set(summary.date),
            total_calories: Set(summary.total_calories),
            total_protein_g: Set(summary.total_protein_g),
            total_carbs_g: Set(summary.total_carbs_g),
            total_fat_g: Set(summary.total_fat_g),
            total_fiber_g: Set(summary.total_fiber_g),
            total_sugar_g: Set(summary.total_sugar_g),
            total_sodium_mg: Set(summary.total_sodium_mg),
            meals_logged: Set(summary.meals_logged),
            goal_calories_met: Set(summary.goal_calories_met),
            goal_protein_met: Set(summary.goal_protein_met),
            goal_carbs_met: Set(summary.goal_carbs_met),
            goal_fat_met: Set(summary.goal_fat_met),
            updated_at: Set(Utc::now().fixed_offset()),
        }
    }
}
