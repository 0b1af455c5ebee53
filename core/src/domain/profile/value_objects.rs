use serde::Deserialize;
use utoipa::ToSchema;

use crate::domain::{common::entities::app_errors::CoreError, profile::entities::UserProfile};

/// Partial profile update. Absent fields keep their stored value.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct UpdateProfileInput {
    pub full_name: Option<String>,
    pub age: Option<i32>,
    pub gender: Option<String>,
    pub height_cm: Option<f64>,
    pub weight_kg: Option<f64>,
    pub activity_level: Option<String>,
    pub daily_calorie_goal: Option<f64>,
    pub daily_protein_goal: Option<f64>,
    pub daily_carb_goal: Option<f64>,
    pub daily_fat_goal: Option<f64>,
}

impl UpdateProfileInput {
    pub fn validate(&self) -> Result<(), CoreError> {
        let targets = [
            ("daily_calorie_goal", self.daily_calorie_goal),
            ("daily_protein_goal", self.daily_protein_goal),
            ("daily_carb_goal", self.daily_carb_goal),
            ("daily_fat_goal", self.daily_fat_goal),
        ];

        for (field, value) in targets {
            if let Some(value) = value {
                if !value.is_finite() || value <= 0.0 {
                    return Err(CoreError::Invalid(format!(
                        "{field} must be a positive number"
                    )));
                }
            }
        }

        if let Some(age) = self.age {
            if age <= 0 {
                return Err(CoreError::Invalid("age must be positive".to_string()));
            }
        }

        Ok(())
    }

    pub fn apply_to(self, profile: &mut UserProfile) {
        if self.full_name.is_some() {
            profile.full_name = self.full_name;
        }
        if self.age.is_some() {
            profile.age = self.age;
        }
        if self.gender.is_some() {
            profile.gender = self.gender;
        }
        if self.height_cm.is_some() {
            profile.height_cm = self.height_cm;
        }
        if self.weight_kg.is_some() {
            profile.weight_kg = self.weight_kg;
        }
        if self.activity_level.is_some() {
            profile.activity_level = self.activity_level;
        }
        if let Some(value) = self.daily_calorie_goal {
            profile.daily_calorie_goal = value;
        }
        if let Some(value) = self.daily_protein_goal {
            profile.daily_protein_goal = value;
        }
        if let Some(value) = self.daily_carb_goal {
            profile.daily_carb_goal = value;
        }
        if let Some(value) = self.daily_fat_goal {
            profile.daily_fat_goal = value;
        }
    }
}
