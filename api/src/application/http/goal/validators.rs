use chrono::NaiveDate;
use nutrilens_core::domain::goal::{entities::GoalType, value_objects::CreateGoalInput};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateGoalValidator {
    pub goal_type: GoalType,

    #[validate(
        required(message = "target_value is required"),
        range(exclusive_min = 0.0, message = "target_value must be positive")
    )]
    pub target_value: Option<f64>,

    #[serde(default)]
    #[validate(range(min = 0.0, message = "current_value must not be negative"))]
    pub current_value: Option<f64>,

    #[validate(length(min = 1, message = "unit is required"))]
    pub unit: String,

    #[validate(required(message = "target_date is required"))]
    pub target_date: Option<NaiveDate>,
}

impl From<CreateGoalValidator> for CreateGoalInput {
    fn from(payload: CreateGoalValidator) -> Self {
        CreateGoalInput {
            goal_type: payload.goal_type,
            target_value: payload.target_value,
            current_value: payload.current_value,
            unit: payload.unit,
            target_date: payload.target_date,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateGoalValueValidator {
    #[validate(range(min = 0.0, message = "current_value must not be negative"))]
    pub current_value: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn target_and_date_are_required() {
        let payload: CreateGoalValidator =
            serde_json::from_str(r#"{"goal_type": "weight_loss", "unit": "kg"}"#).unwrap();
        let errors = payload.validate().unwrap_err();
        let fields = errors.field_errors();

        assert!(fields.contains_key("target_value"));
        assert!(fields.contains_key("target_date"));
    }

    #[test]
    fn complete_goal_passes() {
        let payload: CreateGoalValidator = serde_json::from_str(
            r#"{"goal_type": "muscle_gain", "target_value": 5, "unit": "kg", "target_date": "2026-12-31"}"#,
        )
        .unwrap();

        assert!(payload.validate().is_ok());
        let input = CreateGoalInput::from(payload);
        assert_eq!(input.goal_type, GoalType::MuscleGain);
        assert_eq!(input.current_value, None);
    }
}
