use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{
    daily_summary::entities::DailySummary, goal::policies::progress_percentage,
    profile::entities::NutritionTargets,
};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct MacroProgress {
    pub consumed: f64,
    pub target: f64,
    pub percentage: f64,
}

impl MacroProgress {
    pub fn new(consumed: f64, target: f64) -> Self {
        Self {
            consumed,
            target,
            percentage: progress_percentage(consumed, target),
        }
    }
}

/// How far a day's totals are toward the profile targets.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct DailyProgress {
    pub summary: DailySummary,
    pub calories: MacroProgress,
    pub protein: MacroProgress,
    pub carbs: MacroProgress,
    pub fat: MacroProgress,
}

impl DailyProgress {
    pub fn new(summary: DailySummary, targets: &NutritionTargets) -> Self {
        Self {
            calories: MacroProgress::new(summary.total_calories, targets.calories),
            protein: MacroProgress::new(summary.total_protein_g, targets.protein_g),
            carbs: MacroProgress::new(summary.total_carbs_g, targets.carbs_g),
            fat: MacroProgress::new(summary.total_fat_g, targets.fat_g),
            summary,
        }
    }
}
