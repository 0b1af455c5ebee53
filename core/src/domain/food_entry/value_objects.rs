use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{
    food_analysis::entities::AnalysisResult,
    food_entry::entities::{FoodEntry, MealType},
    storage::value_objects::ImageFile,
};

#[derive(Debug, Clone)]
pub struct SaveFoodEntryInput {
    pub image: Option<ImageFile>,
    pub analysis: AnalysisResult,
}

#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct EntryHistoryFilter {
    /// Case-insensitive match on name or description
    pub search: Option<String>,
    pub date: Option<NaiveDate>,
    pub meal_type: Option<MealType>,
    pub limit: Option<u64>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct HistoryTotals {
    pub calories: f64,
    pub protein_g: f64,
    pub carbs_g: f64,
    pub fat_g: f64,
    pub count: i64,
}

impl HistoryTotals {
    pub fn from_entries(entries: &[FoodEntry]) -> Self {
        entries.iter().fold(Self::default(), |acc, entry| Self {
            calories: acc.calories + entry.calories,
            protein_g: acc.protein_g + entry.protein_g.unwrap_or(0.0),
            carbs_g: acc.carbs_g + entry.carbs_g.unwrap_or(0.0),
            fat_g: acc.fat_g + entry.fat_g.unwrap_or(0.0),
            count: acc.count + 1,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct EntryHistory {
    pub entries: Vec<FoodEntry>,
    pub totals: HistoryTotals,
}
