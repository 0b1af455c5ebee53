use sea_orm::ActiveValue::Set;

use crate::{
    domain::food_entry::entities::{FoodEntry, MealType},
    entity::food_entries::{ActiveModel, Model},
};

impl From<&Model> for FoodEntry {
    fn from(model: &Model) -> Self {
        Self {
            id: model.id,
            user_id: model.user_id,
            image_url: model.image_url.clone(),
            food_name: model.food_name.clone(),
            description: model.description.clone(),
            calories: model.calories,
            protein_g: model.protein_g,
            carbs_g: model.carbs_g,
            fat_g: model.fat_g,
            fiber_g: model.fiber_g,
            sugar_g: model.sugar_g,
            sodium_mg: model.sodium_mg,
            serving_size: model.serving_size.clone(),
            meal_type: MealType::from(model.meal_type.as_str()),
            confidence_score: model.confidence_score,
            analyzed_at: model.analyzed_at.to_utc(),
            created_at: model.created_at.to_utc(),
        }
    }
}

impl From<Model> for FoodEntry {
    fn from(model: Model) -> Self {
        Self::from(&model)
    }
}

impl From<&FoodEntry> for ActiveModel {
    fn from(entry: &FoodEntry) -> Self {
        ActiveModel {
            id: Set(entry.id),
            user_id: Set(entry.user_id),
            image_url: Set(entry.image_url.clone()),
            food_name: Set(entry.food_name.clone()),
            description: Set(entry.description.clone()),
            calories: Set(entry.calories),
            protein_g: Set(entry.protein_g),
            carbs_g: Set(entry.carbs_g),
            fat_g: Set(entry.fat_g),
            fiber_g: Set(entry.fiber_g),
            sugar_g: Set(entry.sugar_g),
            sodium_mg: Set(entry.sodium_mg),
            serving_size: Set(entry.serving_size.clone()),
            meal_type: Set(entry.meal_type.as_str().to_string()),
            confidence_score: Set(entry.confidence_score),
            analyzed_at: Set(entry.analyzed_at.fixed_offset()),
            created_at: Set(entry.created_at.fixed_offset()),
        }
    }
}
