use crate::domain::{
    common::entities::app_errors::CoreError,
    food_analysis::entities::{AnalysisResult, RawAnalysisResponse, TotalNutrition},
};

/// Parse the body returned by an inference client.
///
/// Accepts the bare analysis object, the same object wrapped in a `data`
/// envelope, and bodies fenced in a markdown code block.
pub fn parse_analysis_response(raw: &str) -> Result<RawAnalysisResponse, CoreError> {
    let body = strip_code_fence(raw);

    let mut parsed: serde_json::Value = serde_json::from_str(body).map_err(|e| {
        tracing::error!("Failed to parse inference response: {}", e);
        CoreError::InferenceError(format!("Failed to parse inference response: {}", e))
    })?;

    if parsed.get("foods").is_none() {
        if let Some(inner) = parsed.get_mut("data").map(serde_json::Value::take) {
            parsed = inner;
        }
    }

    if parsed.get("foods").is_none() {
        return Err(CoreError::InferenceError(
            "No foods field in response".to_string(),
        ));
    }

    serde_json::from_value(parsed).map_err(|e| {
        tracing::error!("Invalid analysis format: {}", e);
        CoreError::InferenceError(format!("Invalid analysis format: {}", e))
    })
}

fn strip_code_fence(raw: &str) -> &str {
    let trimmed = raw.trim();
    match trimmed.strip_prefix("```") {
        Some(rest) => {
            let rest = rest.strip_prefix("json").unwrap_or(rest);
            rest.strip_suffix("```").unwrap_or(rest).trim()
        }
        None => trimmed,
    }
}

/// Validate a raw response and reconcile its totals with the per-item sums.
pub fn normalize_analysis(
    raw: RawAnalysisResponse,
    tolerance: f64,
    require_foods: bool,
) -> Result<AnalysisResult, CoreError> {
    if require_foods && raw.foods.is_empty() {
        return Err(CoreError::NoFoodDetected);
    }

    let mut foods = raw.foods;
    for food in &mut foods {
        let name = food.name.trim();
        if name.is_empty() {
            return Err(CoreError::InferenceError(
                "food item without a name".to_string(),
            ));
        }
        food.name = name.to_string();

        for (field, value) in food.numeric_fields() {
            if !value.is_finite() || value < 0.0 {
                return Err(CoreError::InferenceError(format!(
                    "food item '{}' has invalid {}: {}",
                    food.name, field, value
                )));
            }
        }
        food.confidence = food.confidence.min(1.0);
    }

    let computed = TotalNutrition::from_foods(&foods);
    let total_nutrition = match raw.total_nutrition {
        Some(reported) if reported.agrees_with(&computed, tolerance) => reported,
        Some(reported) => {
            tracing::warn!(
                reported_calories = reported.total_calories,
                computed_calories = computed.total_calories,
                "Reported totals disagree with item sums; using recomputed totals"
            );
            computed
        }
        None => computed,
    };

    Ok(AnalysisResult {
        foods,
        total_nutrition,
        meal_analysis: raw.meal_analysis,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const TWO_ITEMS: &str = r#"{
        "foods": [
            {"name": "Grilled chicken", "description": "breast", "serving_size": "150 g",
             "calories": 250, "protein_g": 40, "carbs_g": 0, "fat_g": 8,
             "fiber_g": 0, "sugar_g": 0, "sodium_mg": 120, "confidence": 0.9},
            {"name": "Rice", "description": "white", "serving_size": "1 cup",
             "calories": 200, "protein_g": 4, "carbs_g": 45, "fat_g": 0.5,
             "fiber_g": 0.6, "sugar_g": 0.1, "sodium_mg": 2, "confidence": 0.8}
        ],
        "total_nutrition": {
            "total_calories": 999, "total_protein_g": 44, "total_carbs_g": 45,
            "total_fat_g": 8.5, "total_fiber_g": 0.6, "total_sugar_g": 0.1,
            "total_sodium_mg": 122
        },
        "meal_analysis": {"overall_healthiness": "good", "meal_type": "lunch",
                          "recommendations": "add greens"}
    }"#;

    #[test]
    fn mismatched_totals_are_recomputed_from_items() {
        let raw = parse_analysis_response(TWO_ITEMS).unwrap();
        let result = normalize_analysis(raw, 0.01, true).unwrap();

        assert_eq!(result.total_nutrition.total_calories, 450.0);
        assert!((result.total_nutrition.total_fat_g - 8.5).abs() <= 0.01);
        assert_eq!(result.meal_analysis.meal_type, "lunch");
    }

    #[test]
    fn totals_within_tolerance_are_kept() {
        let body = TWO_ITEMS.replace("\"total_calories\": 999", "\"total_calories\": 450.005");
        let result = normalize_analysis(parse_analysis_response(&body).unwrap(), 0.01, true).unwrap();

        assert_eq!(result.total_nutrition.total_calories, 450.005);
    }

    #[test]
    fn data_envelope_and_code_fence_are_accepted() {
        let wrapped = format!("```json\n{{\"data\": {}}}\n```", TWO_ITEMS);
        let raw = parse_analysis_response(&wrapped).unwrap();

        assert_eq!(raw.foods.len(), 2);
    }

    #[test]
    fn null_nutrients_read_as_zero() {
        let body = TWO_ITEMS
            .replace("\"fiber_g\": 0.6,", "\"fiber_g\": null,")
            .replace("\"description\": \"white\",", "\"description\": null,")
            .replace("\"total_sodium_mg\": 122", "\"total_sodium_mg\": null");
        let raw = parse_analysis_response(&body).unwrap();

        assert_eq!(raw.foods[1].fiber_g, 0.0);
        assert_eq!(raw.foods[1].description, "");

        let result = normalize_analysis(raw, 0.01, true).unwrap();
        assert_eq!(result.total_nutrition.total_sodium_mg, 122.0);
    }

    #[test]
    fn missing_foods_field_is_malformed() {
        let err = parse_analysis_response(r#"{"error": "quota"}"#).unwrap_err();
        assert!(matches!(err, CoreError::InferenceError(_)));

        let err = parse_analysis_response("not json").unwrap_err();
        assert!(matches!(err, CoreError::InferenceError(_)));
    }

    #[test]
    fn empty_detection_depends_on_caller() {
        let empty = r#"{"foods": [], "meal_analysis": {}}"#;

        let err = normalize_analysis(parse_analysis_response(empty).unwrap(), 0.01, true);
        assert_eq!(err, Err(CoreError::NoFoodDetected));

        let ok = normalize_analysis(parse_analysis_response(empty).unwrap(), 0.01, false).unwrap();
        assert_eq!(ok.total_nutrition, TotalNutrition::default());
    }

    #[test]
    fn negative_nutrients_are_rejected() {
        let body = TWO_ITEMS.replace("\"carbs_g\": 45,", "\"carbs_g\": -45,");
        let err = normalize_analysis(parse_analysis_response(&body).unwrap(), 0.01, true);

        assert!(matches!(err, Err(CoreError::InferenceError(_))));
    }
}
