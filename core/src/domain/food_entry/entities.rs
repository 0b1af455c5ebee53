use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::common::generate_timestamp;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum MealType {
    Breakfast,
    Lunch,
    Dinner,
    Snack,
    Other,
}

impl MealType {
    pub fn as_str(&self) -> &str {
        match self {
            MealType::Breakfast => "breakfast",
            MealType::Lunch => "lunch",
            MealType::Dinner => "dinner",
            MealType::Snack => "snack",
            MealType::Other => "other",
        }
    }
}

impl From<&str> for MealType {
    fn from(s: &str) -> Self {
        match s.trim().to_ascii_lowercase().as_str() {
            "breakfast" => MealType::Breakfast,
            "lunch" => MealType::Lunch,
            "dinner" => MealType::Dinner,
            "snack" => MealType::Snack,
            _ => MealType::Other,
        }
    }
}

/// One logged food occurrence. Entries are never edited after creation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct FoodEntry {
    pub id: Uuid,
    pub user_id: Uuid,
    pub image_url: Option<String>,
    pub food_name: String,
    pub description: Option<String>,
    pub calories: f64,
    pub protein_g: Option<f64>,
    pub carbs_g: Option<f64>,
    pub fat_g: Option<f64>,
    pub fiber_g: Option<f64>,
    pub sugar_g: Option<f64>,
    pub sodium_mg: Option<f64>,
    pub serving_size: Option<String>,
    pub meal_type: MealType,
    pub confidence_score: Option<f64>,
    pub analyzed_at: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct FoodEntryConfig {
    pub user_id: Uuid,
    pub image_url: Option<String>,
    pub food_name: String,
    pub description: Option<String>,
    pub calories: f64,
    pub protein_g: Option<f64>,
    pub carbs_g: Option<f64>,
    pub fat_g: Option<f64>,
    pub fiber_g: Option<f64>,
    pub sugar_g: Option<f64>,
    pub sodium_mg: Option<f64>,
    pub serving_size: Option<String>,
    pub meal_type: MealType,
    pub confidence_score: Option<f64>,
}

impl FoodEntry {
    pub fn new(config: FoodEntryConfig) -> Self {
        let (now, timestamp) = generate_timestamp();

        Self {
            id: Uuid::new_v7(timestamp),
            user_id: config.user_id,
            image_url: config.image_url,
            food_name: config.food_name,
            description: config.description,
            calories: config.calories,
            protein_g: config.protein_g,
            carbs_g: config.carbs_g,
            fat_g: config.fat_g,
            fiber_g: config.fiber_g,
            sugar_g: config.sugar_g,
            sodium_mg: config.sodium_mg,
            serving_size: config.serving_size,
            meal_type: config.meal_type,
            confidence_score: config.confidence_score,
            analyzed_at: now,
            created_at: now,
        }
    }

    pub fn matches_search(&self, term: &str) -> bool {
        let term = term.to_lowercase();
        self.food_name.to_lowercase().contains(&term)
            || self
                .description
                .as_deref()
                .is_some_and(|d| d.to_lowercase().contains(&term))
    }
}
