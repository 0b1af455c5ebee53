use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::common::{DefaultTargets, generate_timestamp};

/// Daily calorie and macro targets used for the goal-met flags.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct NutritionTargets {
    pub calories: f64,
    pub protein_g: f64,
    pub carbs_g: f64,
    pub fat_g: f64,
}

impl From<DefaultTargets> for NutritionTargets {
    fn from(value: DefaultTargets) -> Self {
        Self {
            calories: value.calories,
            protein_g: value.protein_g,
            carbs_g: value.carbs_g,
            fat_g: value.fat_g,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct UserProfile {
    pub id: Uuid,
    pub user_id: Uuid,
    pub email: Option<String>,
    pub full_name: Option<String>,
    pub age: Option<i32>,
    pub gender: Option<String>,
    pub height_cm: Option<f64>,
    pub weight_kg: Option<f64>,
    pub activity_level: Option<String>,
    pub daily_calorie_goal: f64,
    pub daily_protein_goal: f64,
    pub daily_carb_goal: f64,
    pub daily_fat_goal: f64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl UserProfile {
    /// A fresh profile carrying only the identity's email and default targets.
    pub fn new(user_id: Uuid, email: Option<String>, targets: NutritionTargets) -> Self {
        let (now, timestamp) = generate_timestamp();

        Self {
            id: Uuid::new_v7(timestamp),
            user_id,
            email,
            full_name: None,
            age: None,
            gender: None,
            height_cm: None,
            weight_kg: None,
            activity_level: None,
            daily_calorie_goal: targets.calories,
            daily_protein_goal: targets.protein_g,
            daily_carb_goal: targets.carbs_g,
            daily_fat_goal: targets.fat_g,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn targets(&self) -> NutritionTargets {
        NutritionTargets {
            calories: self.daily_calorie_goal,
            protein_g: self.daily_protein_goal,
            carbs_g: self.daily_carb_goal,
            fat_g: self.daily_fat_goal,
        }
    }
}
