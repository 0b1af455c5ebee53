use chrono::NaiveDate;
use serde::Deserialize;
use utoipa::ToSchema;

use crate::domain::goal::entities::GoalType;

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct CreateGoalInput {
    pub goal_type: GoalType,
    pub target_value: Option<f64>,
    /// Starting value, 0 when omitted
    #[serde(default)]
    pub current_value: Option<f64>,
    pub unit: String,
    pub target_date: Option<NaiveDate>,
}
