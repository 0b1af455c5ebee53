use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::{
    common::{entities::app_errors::CoreError, generate_timestamp},
    goal::policies::progress_percentage,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum GoalType {
    WeightLoss,
    WeightGain,
    MuscleGain,
    BodyFatReduction,
    FitnessImprovement,
    HabitBuilding,
}

impl GoalType {
    pub fn as_str(&self) -> &str {
        match self {
            GoalType::WeightLoss => "weight_loss",
            GoalType::WeightGain => "weight_gain",
            GoalType::MuscleGain => "muscle_gain",
            GoalType::BodyFatReduction => "body_fat_reduction",
            GoalType::FitnessImprovement => "fitness_improvement",
            GoalType::HabitBuilding => "habit_building",
        }
    }
}

impl TryFrom<&str> for GoalType {
    type Error = CoreError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            "weight_loss" => Ok(GoalType::WeightLoss),
            "weight_gain" => Ok(GoalType::WeightGain),
            "muscle_gain" => Ok(GoalType::MuscleGain),
            "body_fat_reduction" => Ok(GoalType::BodyFatReduction),
            "fitness_improvement" => Ok(GoalType::FitnessImprovement),
            "habit_building" => Ok(GoalType::HabitBuilding),
            other => Err(CoreError::Invalid(format!("unknown goal type: {other}"))),
        }
    }
}

/// A longer-horizon target, tracked independently of daily nutrition targets.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct UserGoal {
    pub id: Uuid,
    pub user_id: Uuid,
    pub goal_type: GoalType,
    pub target_value: f64,
    pub current_value: f64,
    pub unit: String,
    pub start_date: NaiveDate,
    pub target_date: Option<NaiveDate>,
    pub is_active: bool,
    /// Always `progress_percentage(current_value, target_value)`
    pub progress_percentage: f64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

pub struct UserGoalConfig {
    pub user_id: Uuid,
    pub goal_type: GoalType,
    pub target_value: f64,
    pub current_value: f64,
    pub unit: String,
    pub target_date: NaiveDate,
}

impl UserGoal {
    pub fn new(config: UserGoalConfig) -> Self {
        let (now, timestamp) = generate_timestamp();

        Self {
            id: Uuid::new_v7(timestamp),
            user_id: config.user_id,
            goal_type: config.goal_type,
            target_value: config.target_value,
            current_value: config.current_value,
            unit: config.unit,
            start_date: now.date_naive(),
            target_date: Some(config.target_date),
            is_active: true,
            progress_percentage: progress_percentage(config.current_value, config.target_value),
            created_at: now,
            updated_at: now,
        }
    }

    pub fn set_current_value(&mut self, current_value: f64) {
        self.current_value = current_value;
        self.progress_percentage = progress_percentage(current_value, self.target_value);
        self.updated_at = Utc::now();
    }

    pub fn deactivate(&mut self) {
        self.is_active = false;
        self.updated_at = Utc::now();
    }
}
