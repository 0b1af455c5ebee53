use serde_json::json;

pub const FOOD_ANALYSIS_PROMPT: &str = "Identify every food item visible in this meal photo. \
For each item estimate the serving size and its nutrition: calories, protein, carbohydrates, \
fat, fiber and sugar in grams and sodium in milligrams, plus a confidence between 0 and 1. \
Report total_nutrition as the sum over all items and describe the meal as a whole: \
overall healthiness, meal type (breakfast, lunch, dinner, snack or other) and one short recommendation.";

fn number() -> serde_json::Value {
    json!({ "type": "number" })
}

/// Returns the JSON schema for food analysis LLM responses
pub fn get_food_analysis_schema() -> serde_json::Value {
    json!({
        "type": "object",
        "properties": {
            "foods": {
                "type": "array",
                "items": {
                    "type": "object",
                    "properties": {
                        "name": { "type": "string" },
                        "description": { "type": "string" },
                        "serving_size": { "type": "string" },
                        "calories": number(),
                        "protein_g": number(),
                        "carbs_g": number(),
                        "fat_g": number(),
                        "fiber_g": number(),
                        "sugar_g": number(),
                        "sodium_mg": number(),
                        "confidence": number()
                    },
                    "required": [
                        "name", "description", "serving_size", "calories", "protein_g",
                        "carbs_g", "fat_g", "fiber_g", "sugar_g", "sodium_mg", "confidence"
                    ]
                }
            },
            "total_nutrition": {
                "type": "object",
                "properties": {
                    "total_calories": number(),
                    "total_protein_g": number(),
                    "total_carbs_g": number(),
                    "total_fat_g": number(),
                    "total_fiber_g": number(),
                    "total_sugar_g": number(),
                    "total_sodium_mg": number()
                },
                "required": [
                    "total_calories", "total_protein_g", "total_carbs_g", "total_fat_g",
                    "total_fiber_g", "total_sugar_g", "total_sodium_mg"
                ]
            },
            "meal_analysis": {
                "type": "object",
                "properties": {
                    "overall_healthiness": { "type": "string" },
                    "meal_type": {
                        "type": "string",
                        "enum": ["breakfast", "lunch", "dinner", "snack", "other"]
                    },
                    "recommendations": { "type": "string" }
                },
                "required": ["overall_healthiness", "meal_type", "recommendations"]
            }
        },
        "required": ["foods", "total_nutrition", "meal_analysis"]
    })
}
