use serde::{Deserialize, Deserializer, Serialize};
use utoipa::ToSchema;

/// Models sometimes send `null` for a value they could not estimate.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// One food item recognised in a meal photo.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct DetectedFood {
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub serving_size: String,
    pub calories: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub protein_g: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub carbs_g: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub fat_g: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub fiber_g: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub sugar_g: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub sodium_mg: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub confidence: f64,
}

impl DetectedFood {
    /// Numeric fields paired with their wire names, in declaration order.
    pub fn numeric_fields(&self) -> [(&'static str, f64); 8] {
        [
            ("calories", self.calories),
            ("protein_g", self.protein_g),
            ("carbs_g", self.carbs_g),
            ("fat_g", self.fat_g),
            ("fiber_g", self.fiber_g),
            ("sugar_g", self.sugar_g),
            ("sodium_mg", self.sodium_mg),
            ("confidence", self.confidence),
        ]
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct TotalNutrition {
    #[serde(default, deserialize_with = "null_as_default")]
    pub total_calories: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub total_protein_g: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub total_carbs_g: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub total_fat_g: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub total_fiber_g: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub total_sugar_g: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub total_sodium_mg: f64,
}

impl TotalNutrition {
    pub fn from_foods(foods: &[DetectedFood]) -> Self {
        foods.iter().fold(Self::default(), |acc, food| Self {
            total_calories: acc.total_calories + food.calories,
            total_protein_g: acc.total_protein_g + food.protein_g,
            total_carbs_g: acc.total_carbs_g + food.carbs_g,
            total_fat_g: acc.total_fat_g + food.fat_g,
            total_fiber_g: acc.total_fiber_g + food.fiber_g,
            total_sugar_g: acc.total_sugar_g + food.sugar_g,
            total_sodium_mg: acc.total_sodium_mg + food.sodium_mg,
        })
    }

    fn fields(&self) -> [f64; 7] {
        [
            self.total_calories,
            self.total_protein_g,
            self.total_carbs_g,
            self.total_fat_g,
            self.total_fiber_g,
            self.total_sugar_g,
            self.total_sodium_mg,
        ]
    }

    /// True when every field is within `tolerance` of the same field in `other`.
    pub fn agrees_with(&self, other: &TotalNutrition, tolerance: f64) -> bool {
        self.fields()
            .iter()
            .zip(other.fields().iter())
            .all(|(a, b)| (a - b).abs() <= tolerance)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct MealAnalysis {
    #[serde(default)]
    pub overall_healthiness: String,
    #[serde(default)]
    pub meal_type: String,
    #[serde(default)]
    pub recommendations: String,
}

/// Normalized inference output. `total_nutrition` always agrees with the
/// per-item sums within the pipeline tolerance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct AnalysisResult {
    pub foods: Vec<DetectedFood>,
    pub total_nutrition: TotalNutrition,
    pub meal_analysis: MealAnalysis,
}

/// Inference response as received, before validation.
#[derive(Debug, Clone, Deserialize)]
pub struct RawAnalysisResponse {
    #[serde(default)]
    pub foods: Vec<DetectedFood>,
    #[serde(default)]
    pub total_nutrition: Option<TotalNutrition>,
    #[serde(default)]
    pub meal_analysis: MealAnalysis,
}
