use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// Per-user, per-date rollup of every entry's nutrition fields.
///
/// Carries no wall-clock fields so that recomputing over an unchanged entry
/// set yields an identical value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct DailySummary {
    pub id: Uuid,
    pub user_id: Uuid,
    pub date: NaiveDate,
    pub total_calories: f64,
    pub total_protein_g: f64,
    pub total_carbs_g: f64,
    pub total_fat_g: f64,
    pub total_fiber_g: f64,
    pub total_sugar_g: f64,
    pub total_sodium_mg: f64,
    pub meals_logged: i32,
    pub goal_calories_met: bool,
    pub goal_protein_met: bool,
    pub goal_carbs_met: bool,
    pub goal_fat_met: bool,
}

impl DailySummary {
    /// Stable id for the `(user_id, date)` pair.
    pub fn id_for(user_id: Uuid, date: NaiveDate) -> Uuid {
        Uuid::new_v5(&Uuid::NAMESPACE_OID, format!("{user_id}:{date}").as_bytes())
    }
}
