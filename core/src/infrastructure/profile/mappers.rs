use sea_orm::ActiveValue::Set;

use crate::{
    domain::profile::entities::UserProfile,
    entity::user_profiles::{ActiveModel, Model},
};

impl From<&Model> for UserProfile {
    fn from(model: &Model) -> Self {
        Self {
            id: model.id,
            user_id: model.user_id,
            email: model.email.clone(),
            full_name: model.full_name.clone(),
            age: model.age,
            gender: model.gender.clone(),
            height_cm: model.height_cm,
            weight_kg: model.weight_kg,
            activity_level: model.activity_level.clone(),
            daily_calorie_goal: model.daily_calorie_goal,
            daily_protein_goal: model.daily_protein_goal,
            daily_carb_goal: model.daily_carb_goal,
            daily_fat_goal: model.daily_fat_goal,
            created_at: model.created_at.to_utc(),
            updated_at: model.updated_at.to_utc(),
        }
    }
}

impl From<Model> for UserProfile {
    fn from(model: Model) -> Self {
        Self::from(&model)
    }
}

impl From<&UserProfile> for ActiveModel {
    fn from(profile: &UserProfile) -> Self {
        ActiveModel {
            id: Set(profile.id),
            user_id: Set(profile.user_id),
            email: Set(profile.email.clone()),
            full_name: Set(profile.full_name.clone()),
            age: Set(profile.age),
            gender: Set(profile.gender.clone()),
            height_cm: Set(profile.height_cm),
            weight_kg: Set(profile.weight_kg),
            activity_level: Set(profile.activity_level.clone()),
            daily_calorie_goal: Set(profile.daily_calorie_goal),
            daily_protein_goal: Set(profile.daily_protein_goal),
            daily_carb_goal: Set(profile.daily_carb_goal),
            daily_fat_goal: Set(profile.daily_fat_goal),
            created_at: Set(profile.created_at.fixed_offset()),
            updated_at: Set(profile.updated_at.fixed_offset()),
        }
    }
}
