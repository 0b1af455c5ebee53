use tracing::instrument;

use crate::domain::{
    authentication::value_objects::Identity,
    common::{entities::app_errors::CoreError, services::Service},
    daily_summary::ports::{DailySummaryRepository, DailySummaryService},
    food_analysis::ports::FoodInferenceClient,
    food_entry::ports::FoodEntryRepository,
    goal::ports::GoalRepository,
    profile::{
        entities::UserProfile,
        ports::{ProfileRepository, ProfileService},
        value_objects::UpdateProfileInput,
    },
    storage::ports::ObjectStoragePort,
};

impl<FE, DS, UP, UG, INF, OS> ProfileService for Service<FE, DS, UP, UG, INF, OS>
where
    FE: FoodEntryRepository,
    DS: DailySummaryRepository,
    UP: ProfileRepository,
    UG: GoalRepository,
    INF: FoodInferenceClient,
    OS: ObjectStoragePort,
{
    #[instrument(skip(self, identity), fields(user_id = %identity.id()))]
    async fn get_profile(&self, identity: Identity) -> Result<UserProfile, CoreError> {
        if let Some(profile) = self
            .profile_repository
            .get_profile_by_user(identity.id())
            .await?
        {
            return Ok(profile);
        }

        tracing::info!("Creating profile with default targets");
        let profile = UserProfile::new(
            identity.id(),
            identity.email().map(str::to_string),
            self.config.default_targets.into(),
        );

        self.profile_repository.upsert_profile(profile).await
    }

    #[instrument(skip(self, identity, input), fields(user_id = %identity.id()))]
    async fn update_profile(
        &self,
        identity: Identity,
        input: UpdateProfileInput,
    ) -> Result<UserProfile, CoreError> {
        input.validate()?;

        let mut profile = self.get_profile(identity.clone()).await?;
        input.apply_to(&mut profile);
        profile.updated_at = chrono::Utc::now();

        let profile = self.profile_repository.upsert_profile(profile).await?;

        // today's stored met flags follow the new targets
        let today = chrono::Utc::now().date_naive();
        if let Err(e) = self.recompute_daily_summary(identity, today).await {
            tracing::error!(error = %e, "Failed to refresh today's summary after profile update");
        }

        Ok(profile)
    }
}

#[cfg(test)]
mod tests {
    use uuid::Uuid;

    use super::*;
    use crate::{
        domain::{
            common::services::test_support::memory_service,
            food_entry::{
                entities::{FoodEntry, FoodEntryConfig, MealType},
                ports::FoodEntryRepository,
            },
            storage::ports::MockObjectStoragePort,
        },
        infrastructure::memory::InMemoryNutritionStore,
    };

    #[tokio::test]
    async fn first_read_creates_profile_with_defaults() {
        let store = InMemoryNutritionStore::default();
        let service = memory_service(&store, MockObjectStoragePort::new());
        let identity = Identity::new(Uuid::new_v4(), Some("ada@example.com".to_string()));

        let created = service.get_profile(identity.clone()).await.unwrap();
        assert_eq!(created.daily_calorie_goal, 2000.0);
        assert_eq!(created.daily_protein_goal, 150.0);
        assert_eq!(created.daily_carb_goal, 225.0);
        assert_eq!(created.daily_fat_goal, 65.0);
        assert_eq!(created.email.as_deref(), Some("ada@example.com"));

        let again = service.get_profile(identity).await.unwrap();
        assert_eq!(again.id, created.id);
    }

    #[tokio::test]
    async fn update_keeps_untouched_fields() {
        let store = InMemoryNutritionStore::default();
        let service = memory_service(&store, MockObjectStoragePort::new());
        let identity = Identity::new(Uuid::new_v4(), None);

        let updated = service
            .update_profile(
                identity.clone(),
                UpdateProfileInput {
                    full_name: Some("Ada".to_string()),
                    daily_calorie_goal: Some(1800.0),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        assert_eq!(updated.full_name.as_deref(), Some("Ada"));
        assert_eq!(updated.daily_calorie_goal, 1800.0);
        assert_eq!(updated.daily_fat_goal, 65.0);

        let stored = service.get_profile(identity).await.unwrap();
        assert_eq!(stored, updated);
    }

    #[tokio::test]
    async fn target_change_refreshes_todays_summary() {
        let store = InMemoryNutritionStore::default();
        let service = memory_service(&store, MockObjectStoragePort::new());
        let identity = Identity::new(Uuid::new_v4(), None);
        let today = chrono::Utc::now().date_naive();

        let entry = FoodEntry::new(FoodEntryConfig {
            user_id: identity.id(),
            image_url: None,
            food_name: "Burrito bowl".to_string(),
            description: None,
            calories: 1900.0,
            protein_g: Some(60.0),
            carbs_g: Some(200.0),
            fat_g: Some(70.0),
            fiber_g: None,
            sugar_g: None,
            sodium_mg: None,
            serving_size: None,
            meal_type: MealType::Lunch,
            confidence_score: None,
        });
        store.create_entry(entry).await.unwrap();

        let before = service
            .recompute_daily_summary(identity.clone(), today)
            .await
            .unwrap();
        assert!(!before.goal_calories_met);

        service
            .update_profile(
                identity.clone(),
                UpdateProfileInput {
                    daily_calorie_goal: Some(1500.0),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        let stored = store.get_summary(identity.id(), today).await.unwrap().unwrap();
        assert_eq!(stored.total_calories, 1900.0);
        assert!(stored.goal_calories_met);
    }

    #[tokio::test]
    async fn invalid_target_leaves_profile_unchanged() {
        let store = InMemoryNutritionStore::default();
        let service = memory_service(&store, MockObjectStoragePort::new());
        let identity = Identity::new(Uuid::new_v4(), None);
        let before = service.get_profile(identity.clone()).await.unwrap();

        let err = service
            .update_profile(
                identity.clone(),
                UpdateProfileInput {
                    daily_carb_goal: Some(0.0),
                    ..Default::default()
                },
            )
            .await
            .unwrap_err();

        assert!(err.is_validation());
        assert_eq!(service.get_profile(identity).await.unwrap(), before);
    }
}
