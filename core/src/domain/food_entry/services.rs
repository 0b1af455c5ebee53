use tracing::instrument;

use crate::domain::{
    authentication::value_objects::Identity,
    common::{entities::app_errors::CoreError, services::Service},
    daily_summary::{
        aggregator::day_bounds,
        ports::{DailySummaryRepository, DailySummaryService},
    },
    food_analysis::ports::FoodInferenceClient,
    food_entry::{
        entities::FoodEntry,
        helpers::{entry_from_analysis, reconcile_analysis},
        ports::{FoodEntryRepository, FoodEntryService},
        value_objects::{EntryHistory, EntryHistoryFilter, HistoryTotals, SaveFoodEntryInput},
    },
    goal::ports::GoalRepository,
    profile::ports::ProfileRepository,
    storage::{ports::ObjectStoragePort, services::AssetService},
};

impl<FE, DS, UP, UG, INF, OS> FoodEntryService for Service<FE, DS, UP, UG, INF, OS>
where
    FE: FoodEntryRepository,
    DS: DailySummaryRepository,
    UP: ProfileRepository,
    UG: GoalRepository,
    INF: FoodInferenceClient,
    OS: ObjectStoragePort,
{
    #[instrument(skip(self, identity, input), fields(user_id = %identity.id(), has_image = input.image.is_some()))]
    async fn save_food_entry(
        &self,
        identity: Identity,
        input: SaveFoodEntryInput,
    ) -> Result<FoodEntry, CoreError> {
        let analysis = reconcile_analysis(input.analysis, self.config.total_tolerance)?;

        // 1. Upload the photo first. A failed upload never leaves an entry behind,
        //    while a failed write may leave an unreferenced (content-addressed) asset.
        let image_url = match input.image {
            Some(image) => Some(
                self.upload_food_image(identity.clone(), image)
                    .await?
                    .public_url,
            ),
            None => None,
        };

        // 2. Write the ledger entry
        let entry = entry_from_analysis(identity.id(), image_url, &analysis);
        let entry = self
            .food_entry_repository
            .create_entry(entry)
            .await
            .map_err(|e| match e {
                CoreError::PersistenceError(_) => e,
                other => CoreError::PersistenceError(other.to_string()),
            })?;

        tracing::info!(
            entry_id = %entry.id,
            calories = entry.calories,
            "Food entry saved"
        );

        // 3. Recompute the day the entry landed on
        let date = entry.created_at.date_naive();
        if let Err(e) = self.recompute_daily_summary(identity, date).await {
            tracing::error!(
                entry_id = %entry.id,
                %date,
                "Entry saved but daily summary recompute failed: {}",
                e
            );
        }

        Ok(entry)
    }

    #[instrument(skip(self, identity), fields(user_id = %identity.id()))]
    async fn get_recent_entries(
        &self,
        identity: Identity,
        limit: Option<u64>,
    ) -> Result<Vec<FoodEntry>, CoreError> {
        let limit = limit.unwrap_or(self.config.recent_entries_limit);

        self.food_entry_repository
            .get_recent_entries(identity.id(), limit)
            .await
    }

    #[instrument(skip(self, identity, filter), fields(user_id = %identity.id()))]
    async fn search_history(
        &self,
        identity: Identity,
        filter: EntryHistoryFilter,
    ) -> Result<EntryHistory, CoreError> {
        let mut entries = match filter.date {
            Some(date) => {
                let (start, end) = day_bounds(date);
                let mut day = self
                    .food_entry_repository
                    .get_entries_between(identity.id(), start, end)
                    .await?;
                day.sort_by(|a, b| b.created_at.cmp(&a.created_at));
                day
            }
            None => {
                let limit = filter.limit.unwrap_or(self.config.recent_entries_limit);
                self.food_entry_repository
                    .get_recent_entries(identity.id(), limit)
                    .await?
            }
        };

        if let Some(term) = filter.search.as_deref().map(str::trim) {
            if !term.is_empty() {
                entries.retain(|e| e.matches_search(term));
            }
        }

        if let Some(meal_type) = filter.meal_type {
            entries.retain(|e| e.meal_type == meal_type);
        }

        let totals = HistoryTotals::from_entries(&entries);

        Ok(EntryHistory { entries, totals })
    }
}

#[cfg(test)]
mod tests {
    use bytes::Bytes;
    use chrono::Utc;
    use uuid::Uuid;

    use super::*;
    use crate::{
        domain::{
            common::{PipelineConfig, services::test_support::memory_service},
            food_analysis::{
                entities::{AnalysisResult, DetectedFood, MealAnalysis, TotalNutrition},
                ports::MockFoodInferenceClient,
            },
            food_entry::{entities::MealType, ports::MockFoodEntryRepository},
            storage::{ports::MockObjectStoragePort, value_objects::ImageFile},
        },
        infrastructure::memory::InMemoryNutritionStore,
    };

    fn analysis(name: &str, calories: f64, meal_type: &str) -> AnalysisResult {
        let foods = vec![DetectedFood {
            name: name.to_string(),
            description: format!("a plate of {name}"),
            serving_size: "1 plate".to_string(),
            calories,
            protein_g: 20.0,
            carbs_g: 50.0,
            fat_g: 15.0,
            fiber_g: 4.0,
            sugar_g: 6.0,
            sodium_mg: 500.0,
            confidence: 0.85,
        }];
        AnalysisResult {
            total_nutrition: TotalNutrition::from_foods(&foods),
            foods,
            meal_analysis: MealAnalysis {
                meal_type: meal_type.to_string(),
                ..MealAnalysis::default()
            },
        }
    }

    fn jpeg() -> ImageFile {
        ImageFile::new("meal.jpg", "image/jpeg", Bytes::from_static(&[0xFF, 0xD8, 0xFF]))
    }

    fn accepting_storage() -> MockObjectStoragePort {
        let mut storage = MockObjectStoragePort::new();
        storage
            .expect_bucket_name()
            .returning(|| "food-images".to_string());
        storage
            .expect_put_object()
            .times(1)
            .returning(|_, _, _, _| Box::pin(async { Ok(()) }));
        storage
            .expect_public_url()
            .returning(|bucket, key| format!("https://cdn.test/{bucket}/{key}"));
        storage
    }

    #[tokio::test]
    async fn save_uploads_then_writes_then_recomputes() {
        let store = InMemoryNutritionStore::default();
        let service = memory_service(&store, accepting_storage());
        let identity = Identity::new(Uuid::new_v4(), None);

        let entry = service
            .save_food_entry(
                identity.clone(),
                SaveFoodEntryInput {
                    image: Some(jpeg()),
                    analysis: analysis("Pasta", 450.0, "dinner"),
                },
            )
            .await
            .unwrap();

        let expected_prefix = format!("https://cdn.test/food-images/{}/", identity.id());
        assert!(
            entry
                .image_url
                .as_deref()
                .is_some_and(|url| url.starts_with(&expected_prefix))
        );
        assert_eq!(entry.meal_type, MealType::Dinner);

        let summary = store
            .get_summary(identity.id(), entry.created_at.date_naive())
            .await
            .unwrap()
            .unwrap();
        assert_eq!(summary.total_calories, 450.0);
        assert_eq!(summary.meals_logged, 1);
    }

    #[tokio::test]
    async fn failed_upload_writes_nothing() {
        let store = InMemoryNutritionStore::default();
        let mut storage = MockObjectStoragePort::new();
        storage
            .expect_bucket_name()
            .returning(|| "food-images".to_string());
        storage.expect_put_object().returning(|_, _, _, _| {
            Box::pin(async { Err(CoreError::InternalServerError) })
        });
        storage.expect_public_url().times(0);

        let service = memory_service(&store, storage);
        let identity = Identity::new(Uuid::new_v4(), None);

        let err = service
            .save_food_entry(
                identity.clone(),
                SaveFoodEntryInput {
                    image: Some(jpeg()),
                    analysis: analysis("Pasta", 450.0, "dinner"),
                },
            )
            .await
            .unwrap_err();

        assert!(matches!(err, CoreError::AssetUploadError(_)));
        assert!(
            service
                .get_recent_entries(identity, None)
                .await
                .unwrap()
                .is_empty()
        );
    }

    #[tokio::test]
    async fn rejected_write_is_a_persistence_error() {
        let store = InMemoryNutritionStore::default();
        let mut entries = MockFoodEntryRepository::new();
        entries
            .expect_create_entry()
            .returning(|_| Box::pin(async { Err(CoreError::InternalServerError) }));
        entries.expect_get_entries_between().times(0);

        let service = Service::new(
            entries,
            store.clone(),
            store.clone(),
            store,
            MockFoodInferenceClient::new(),
            MockObjectStoragePort::new(),
            PipelineConfig::default(),
        );

        let err = service
            .save_food_entry(
                Identity::new(Uuid::new_v4(), None),
                SaveFoodEntryInput {
                    image: None,
                    analysis: analysis("Salad", 120.0, "lunch"),
                },
            )
            .await
            .unwrap_err();

        assert!(matches!(err, CoreError::PersistenceError(_)));
    }

    #[tokio::test]
    async fn history_filters_and_totals() {
        let store = InMemoryNutritionStore::default();
        let service = memory_service(&store, MockObjectStoragePort::new());
        let identity = Identity::new(Uuid::new_v4(), None);

        for (name, calories, meal) in [
            ("Pasta", 450.0, "dinner"),
            ("Porridge", 300.0, "breakfast"),
            ("Pasta salad", 380.0, "lunch"),
        ] {
            service
                .save_food_entry(
                    identity.clone(),
                    SaveFoodEntryInput {
                        image: None,
                        analysis: analysis(name, calories, meal),
                    },
                )
                .await
                .unwrap();
        }

        let pasta = service
            .search_history(
                identity.clone(),
                EntryHistoryFilter {
                    search: Some("PASTA".to_string()),
                    ..Default::default()
                },
            )
            .await
            .unwrap();
        assert_eq!(pasta.totals.count, 2);
        assert_eq!(pasta.totals.calories, 830.0);

        let breakfast_today = service
            .search_history(
                identity.clone(),
                EntryHistoryFilter {
                    date: Some(Utc::now().date_naive()),
                    meal_type: Some(MealType::Breakfast),
                    ..Default::default()
                },
            )
            .await
            .unwrap();
        assert_eq!(breakfast_today.entries.len(), 1);
        assert_eq!(breakfast_today.entries[0].food_name, "Porridge");

        let recent = service
            .get_recent_entries(identity.clone(), Some(2))
            .await
            .unwrap();
        assert_eq!(recent.len(), 2);
        assert!(recent[0].created_at >= recent[1].created_at);

        let stranger = service
            .get_recent_entries(Identity::new(Uuid::new_v4(), None), None)
            .await
            .unwrap();
        assert!(stranger.is_empty());
    }
}
