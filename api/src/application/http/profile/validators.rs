use nutrilens_core::domain::profile::value_objects::UpdateProfileInput;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateProfileValidator {
    #[serde(default)]
    #[validate(length(max = 200, message = "full_name is too long"))]
    pub full_name: Option<String>,

    #[serde(default)]
    #[validate(range(min = 1, max = 150, message = "age must be between 1 and 150"))]
    pub age: Option<i32>,

    #[serde(default)]
    pub gender: Option<String>,

    #[serde(default)]
    #[validate(range(exclusive_min = 0.0, message = "height_cm must be positive"))]
    pub height_cm: Option<f64>,

    #[serde(default)]
    #[validate(range(exclusive_min = 0.0, message = "weight_kg must be positive"))]
    pub weight_kg: Option<f64>,

    #[serde(default)]
    pub activity_level: Option<String>,

    #[serde(default)]
    #[validate(range(exclusive_min = 0.0, message = "daily_calorie_goal must be positive"))]
    pub daily_calorie_goal: Option<f64>,

    #[serde(default)]
    #[validate(range(exclusive_min = 0.0, message = "daily_protein_goal must be positive"))]
    pub daily_protein_goal: Option<f64>,

    #[serde(default)]
    #[validate(range(exclusive_min = 0.0, message = "daily_carb_goal must be positive"))]
    pub daily_carb_goal: Option<f64>,

    #[serde(default)]
    #[validate(range(exclusive_min = 0.0, message = "daily_fat_goal must be positive"))]
    pub daily_fat_goal: Option<f64>,
}

impl From<UpdateProfileValidator> for UpdateProfileInput {
    fn from(payload: UpdateProfileValidator) -> Self {
        UpdateProfileInput {
            full_name: payload.full_name,
            age: payload.age,
            gender: payload.gender,
            height_cm: payload.height_cm,
            weight_kg: payload.weight_kg,
            activity_level: payload.activity_level,
            daily_calorie_goal: payload.daily_calorie_goal,
            daily_protein_goal: payload.daily_protein_goal,
            daily_carb_goal: payload.daily_carb_goal,
            daily_fat_goal: payload.daily_fat_goal,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn non_positive_targets_fail_validation() {
        let payload: UpdateProfileValidator =
            serde_json::from_str(r#"{"daily_calorie_goal": 0}"#).unwrap();
        assert!(payload.validate().is_err());

        let payload: UpdateProfileValidator =
            serde_json::from_str(r#"{"daily_calorie_goal": 1800, "age": 34}"#).unwrap();
        assert!(payload.validate().is_ok());
    }
}
