use crate::domain::{common::entities::app_errors::CoreError, goal::value_objects::CreateGoalInput};

/// Display progress toward a target, clamped to `[0, 100]`.
///
/// A zero (or otherwise unusable) target yields 0.
pub fn progress_percentage(current: f64, target: f64) -> f64 {
    if !target.is_finite() || target <= 0.0 || !current.is_finite() {
        return 0.0;
    }

    (100.0 * current / target).clamp(0.0, 100.0)
}

pub fn validate_new_goal(input: &CreateGoalInput) -> Result<(), CoreError> {
    match input.target_value {
        Some(value) if value.is_finite() && value > 0.0 => {}
        _ => {
            return Err(CoreError::Invalid(
                "target value must be greater than zero".to_string(),
            ));
        }
    }

    if input.target_date.is_none() {
        return Err(CoreError::Invalid("target date is required".to_string()));
    }

    if input.unit.trim().is_empty() {
        return Err(CoreError::Invalid("unit is required".to_string()));
    }

    if let Some(current) = input.current_value {
        if !current.is_finite() || current < 0.0 {
            return Err(CoreError::Invalid(
                "current value must be a non-negative number".to_string(),
            ));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;
    use crate::domain::goal::entities::GoalType;

    #[test]
    fn progress_is_clamped() {
        assert_eq!(progress_percentage(5.0, 0.0), 0.0);
        assert_eq!(progress_percentage(15.0, 10.0), 100.0);
        assert_eq!(progress_percentage(5.0, 10.0), 50.0);
        assert_eq!(progress_percentage(4.0, 10.0), 40.0);
        assert_eq!(progress_percentage(-3.0, 10.0), 0.0);
        assert_eq!(progress_percentage(f64::NAN, 10.0), 0.0);
    }

    fn input() -> CreateGoalInput {
        CreateGoalInput {
            goal_type: GoalType::WeightLoss,
            target_value: Some(10.0),
            current_value: None,
            unit: "kg".to_string(),
            target_date: NaiveDate::from_ymd_opt(2026, 12, 31),
        }
    }

    #[test]
    fn goal_requires_positive_target_and_date() {
        assert!(validate_new_goal(&input()).is_ok());

        let zero = CreateGoalInput {
            target_value: Some(0.0),
            ..input()
        };
        assert!(matches!(validate_new_goal(&zero), Err(CoreError::Invalid(_))));

        let missing = CreateGoalInput {
            target_value: None,
            ..input()
        };
        assert!(validate_new_goal(&missing).is_err());

        let no_date = CreateGoalInput {
            target_date: None,
            ..input()
        };
        assert!(validate_new_goal(&no_date).is_err());
    }
}
