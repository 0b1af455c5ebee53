use uuid::Uuid;

use crate::domain::{
    common::entities::app_errors::CoreError,
    food_analysis::{
        entities::{AnalysisResult, RawAnalysisResponse},
        helpers::normalize_analysis,
    },
    food_entry::entities::{FoodEntry, FoodEntryConfig, MealType},
};

/// Re-check an analysis handed back by a client before it is persisted.
///
/// The analysis may have round-tripped through an untrusted surface, so item
/// values are validated again and totals recomputed when they drifted.
pub fn reconcile_analysis(
    analysis: AnalysisResult,
    tolerance: f64,
) -> Result<AnalysisResult, CoreError> {
    let raw = RawAnalysisResponse {
        foods: analysis.foods,
        total_nutrition: Some(analysis.total_nutrition),
        meal_analysis: analysis.meal_analysis,
    };

    normalize_analysis(raw, tolerance, true).map_err(|e| match e {
        CoreError::NoFoodDetected => {
            CoreError::Invalid("analysis contains no food items".to_string())
        }
        CoreError::InferenceError(msg) => CoreError::Invalid(msg),
        other => other,
    })
}

/// Build the single ledger row for an analysed meal.
///
/// A one-item meal keeps the item's name, description and serving size.
/// A multi-item meal is named after all of its items and its serving size
/// records the item count. Nutrition comes from the analysis totals.
pub fn entry_from_analysis(
    user_id: Uuid,
    image_url: Option<String>,
    analysis: &AnalysisResult,
) -> FoodEntry {
    let foods = &analysis.foods;

    let (food_name, description, serving_size) = match foods.as_slice() {
        [single] => (
            single.name.clone(),
            non_empty(&single.description),
            non_empty(&single.serving_size),
        ),
        many => {
            let name = many
                .iter()
                .map(|f| f.name.as_str())
                .collect::<Vec<_>>()
                .join(", ");
            let descriptions = many
                .iter()
                .filter(|f| !f.description.trim().is_empty())
                .map(|f| format!("{}: {}", f.name, f.description.trim()))
                .collect::<Vec<_>>()
                .join("; ");
            (
                name,
                non_empty(&descriptions),
                Some(format!("{} items", many.len())),
            )
        }
    };

    let confidence_score = if foods.is_empty() {
        None
    } else {
        Some(foods.iter().map(|f| f.confidence).sum::<f64>() / foods.len() as f64)
    };

    let totals = &analysis.total_nutrition;

    FoodEntry::new(FoodEntryConfig {
        user_id,
        image_url,
        food_name,
        description,
        calories: totals.total_calories,
        protein_g: Some(totals.total_protein_g),
        carbs_g: Some(totals.total_carbs_g),
        fat_g: Some(totals.total_fat_g),
        fiber_g: Some(totals.total_fiber_g),
        sugar_g: Some(totals.total_sugar_g),
        sodium_mg: Some(totals.total_sodium_mg),
        serving_size,
        meal_type: MealType::from(analysis.meal_analysis.meal_type.as_str()),
        confidence_score,
    })
}

fn non_empty(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::food_analysis::entities::{DetectedFood, MealAnalysis, TotalNutrition};

    fn food(name: &str, calories: f64, protein_g: f64, confidence: f64) -> DetectedFood {
        DetectedFood {
            name: name.to_string(),
            description: format!("{name} portion"),
            serving_size: "1 portion".to_string(),
            calories,
            protein_g,
            carbs_g: 10.0,
            fat_g: 5.0,
            fiber_g: 1.0,
            sugar_g: 2.0,
            sodium_mg: 50.0,
            confidence,
        }
    }

    fn analysis(foods: Vec<DetectedFood>, meal_type: &str) -> AnalysisResult {
        AnalysisResult {
            total_nutrition: TotalNutrition::from_foods(&foods),
            foods,
            meal_analysis: MealAnalysis {
                meal_type: meal_type.to_string(),
                ..MealAnalysis::default()
            },
        }
    }

    #[test]
    fn single_item_keeps_its_own_labels() {
        let user_id = Uuid::new_v4();
        let entry = entry_from_analysis(
            user_id,
            Some("https://cdn/x.jpg".to_string()),
            &analysis(vec![food("Pasta", 450.0, 20.0, 0.85)], "Dinner"),
        );

        assert_eq!(entry.user_id, user_id);
        assert_eq!(entry.food_name, "Pasta");
        assert_eq!(entry.description.as_deref(), Some("Pasta portion"));
        assert_eq!(entry.serving_size.as_deref(), Some("1 portion"));
        assert_eq!(entry.meal_type, MealType::Dinner);
        assert_eq!(entry.calories, 450.0);
        assert_eq!(entry.confidence_score, Some(0.85));
        assert_eq!(entry.analyzed_at, entry.created_at);
    }

    #[test]
    fn multiple_items_are_named_together_and_summed() {
        let entry = entry_from_analysis(
            Uuid::new_v4(),
            None,
            &analysis(
                vec![food("Chicken", 250.0, 40.0, 0.9), food("Rice", 200.0, 4.0, 0.7)],
                "brunch",
            ),
        );

        assert_eq!(entry.food_name, "Chicken, Rice");
        assert_eq!(entry.serving_size.as_deref(), Some("2 items"));
        assert_eq!(entry.calories, 450.0);
        assert_eq!(entry.protein_g, Some(44.0));
        assert_eq!(entry.meal_type, MealType::Other);
        assert!((entry.confidence_score.unwrap() - 0.8).abs() < 1e-9);
        assert!(entry.image_url.is_none());
    }

    #[test]
    fn reconcile_rejects_empty_and_fixes_drifted_totals() {
        let empty = analysis(vec![], "lunch");
        assert!(matches!(
            reconcile_analysis(empty, 0.01),
            Err(CoreError::Invalid(_))
        ));

        let mut drifted = analysis(vec![food("Soup", 120.0, 6.0, 0.6)], "lunch");
        drifted.total_nutrition.total_calories = 9000.0;
        let fixed = reconcile_analysis(drifted, 0.01).unwrap();
        assert_eq!(fixed.total_nutrition.total_calories, 120.0);
    }

    #[test]
    fn reconcile_rejects_negative_values_as_validation() {
        let bad = analysis(vec![food("Soup", -1.0, 6.0, 0.6)], "lunch");
        let err = reconcile_analysis(bad, 0.01).unwrap_err();
        assert!(err.is_validation());
    }
}
