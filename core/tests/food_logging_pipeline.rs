use std::sync::{
    Arc, Mutex,
    atomic::{AtomicUsize, Ordering},
};

use bytes::Bytes;
use chrono::{NaiveDate, Utc};
use nutrilens_core::{
    domain::{
        authentication::{Identity, SessionHub},
        common::{PipelineConfig, entities::app_errors::CoreError, services::Service},
        daily_summary::ports::{DailySummaryRepository, DailySummaryService},
        food_analysis::{ports::FoodInferenceClient, value_objects::InferenceRequest},
        goal::{
            entities::GoalType, policies::progress_percentage, ports::GoalService,
            value_objects::CreateGoalInput,
        },
        intake::{FoodAnalyzer, IntakeStep},
        storage::{ports::ObjectStoragePort, value_objects::ImageFile},
    },
    infrastructure::{
        memory::InMemoryNutritionStore, notifier::TracingNotifier, preview::InMemoryPreviewStore,
    },
};
use uuid::Uuid;

const ONE_PASTA_PLATE: &str = r#"{
    "foods": [{
        "name": "Pasta", "description": "penne with tomato sauce", "serving_size": "1 plate",
        "calories": 450, "protein_g": 20, "carbs_g": 50, "fat_g": 15,
        "fiber_g": 4, "sugar_g": 6, "sodium_mg": 480, "confidence": 0.88
    }],
    "total_nutrition": {
        "total_calories": 450, "total_protein_g": 20, "total_carbs_g": 50, "total_fat_g": 15,
        "total_fiber_g": 4, "total_sugar_g": 6, "total_sodium_mg": 480
    },
    "meal_analysis": {"overall_healthiness": "moderate", "meal_type": "lunch",
                      "recommendations": "add vegetables"}
}"#;

/// Inference fake: fails the first `failures` calls, then answers with `body`.
#[derive(Clone)]
struct ScriptedInference {
    body: &'static str,
    failures: usize,
    calls: Arc<AtomicUsize>,
}

impl ScriptedInference {
    fn answering(body: &'static str) -> Self {
        Self {
            body,
            failures: 0,
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    fn failing_first(mut self, failures: usize) -> Self {
        self.failures = failures;
        self
    }

    fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl FoodInferenceClient for ScriptedInference {
    async fn analyze_image(&self, request: InferenceRequest) -> Result<String, CoreError> {
        assert!(!request.image_data.is_empty());
        let attempt = self.calls.fetch_add(1, Ordering::SeqCst);
        if attempt < self.failures {
            return Err(CoreError::InferenceError("network unreachable".to_string()));
        }
        Ok(self.body.to_string())
    }
}

#[derive(Clone, Default)]
struct RecordingStorage {
    objects: Arc<Mutex<Vec<String>>>,
}

impl ObjectStoragePort for RecordingStorage {
    fn bucket_name(&self) -> String {
        "food-images".to_string()
    }

    async fn put_object(
        &self,
        bucket: &str,
        object_key: &str,
        _payload: Bytes,
        _content_type: &str,
    ) -> Result<(), CoreError> {
        self.objects
            .lock()
            .map_err(|_| CoreError::InternalServerError)?
            .push(format!("{bucket}/{object_key}"));
        Ok(())
    }

    fn public_url(&self, bucket: &str, object_key: &str) -> String {
        format!("https://assets.test/{bucket}/{object_key}")
    }
}

type PipelineService = Service<
    InMemoryNutritionStore,
    InMemoryNutritionStore,
    InMemoryNutritionStore,
    InMemoryNutritionStore,
    ScriptedInference,
    RecordingStorage,
>;

fn pipeline(
    store: &InMemoryNutritionStore,
    inference: ScriptedInference,
    storage: RecordingStorage,
) -> PipelineService {
    Service::new(
        store.clone(),
        store.clone(),
        store.clone(),
        store.clone(),
        inference,
        storage,
        PipelineConfig::default(),
    )
}

fn photo(name: &str, mime_type: &str, size: usize) -> ImageFile {
    ImageFile::new(name, mime_type, Bytes::from(vec![0x5A; size]))
}

#[tokio::test]
async fn jpeg_to_daily_summary() {
    let store = InMemoryNutritionStore::new();
    let storage = RecordingStorage::default();
    let service = pipeline(
        &store,
        ScriptedInference::answering(ONE_PASTA_PLATE),
        storage.clone(),
    );

    let identity = Identity::new(Uuid::new_v4(), Some("lee@example.com".to_string()));
    let hub = SessionHub::new(Some(identity.clone()));
    let previews = InMemoryPreviewStore::default();

    let mut analyzer = FoodAnalyzer::new(
        service.clone(),
        previews.clone(),
        TracingNotifier,
        hub.subscribe(),
        PipelineConfig::default(),
    );

    analyzer
        .select_file(photo("lunch.jpg", "image/jpeg", 3 * 1024 * 1024))
        .unwrap();
    let analysis = analyzer.request_analysis().await.unwrap();
    assert_eq!(analysis.foods.len(), 1);
    assert_eq!(analyzer.step(), IntakeStep::Results);

    let entry = analyzer.save().await.unwrap();
    assert_eq!(analyzer.step(), IntakeStep::Select);
    assert_eq!(previews.live_count(), 0);
    assert_eq!(storage.objects.lock().unwrap().len(), 1);
    assert!(entry.image_url.is_some());

    let today = entry.created_at.date_naive();
    let summary = service
        .get_daily_summary(identity.clone(), today)
        .await
        .unwrap();
    assert_eq!(summary.total_calories, 450.0);
    assert_eq!(summary.total_protein_g, 20.0);
    assert_eq!(summary.total_carbs_g, 50.0);
    assert_eq!(summary.total_fat_g, 15.0);
    assert_eq!(summary.meals_logged, 1);
}

#[tokio::test]
async fn oversized_png_never_reaches_the_pipeline() {
    let store = InMemoryNutritionStore::new();
    let inference = ScriptedInference::answering(ONE_PASTA_PLATE);
    let service = pipeline(&store, inference.clone(), RecordingStorage::default());
    let hub = SessionHub::new(Some(Identity::new(Uuid::new_v4(), None)));

    let mut analyzer = FoodAnalyzer::new(
        service,
        InMemoryPreviewStore::default(),
        TracingNotifier,
        hub.subscribe(),
        PipelineConfig::default(),
    );

    let err = analyzer
        .select_file(photo("huge.png", "image/png", 11 * 1024 * 1024))
        .unwrap_err();

    assert!(err.is_validation());
    assert!(analyzer.staged_image().is_none());
    assert!(matches!(
        analyzer.request_analysis().await,
        Err(CoreError::InvalidState(_))
    ));
    assert_eq!(inference.calls(), 0);
}

#[tokio::test]
async fn network_failure_allows_retry_without_reselecting() {
    let store = InMemoryNutritionStore::new();
    let inference = ScriptedInference::answering(ONE_PASTA_PLATE).failing_first(1);
    let service = pipeline(&store, inference.clone(), RecordingStorage::default());
    let hub = SessionHub::new(Some(Identity::new(Uuid::new_v4(), None)));

    let mut analyzer = FoodAnalyzer::new(
        service,
        InMemoryPreviewStore::default(),
        TracingNotifier,
        hub.subscribe(),
        PipelineConfig::default(),
    );

    analyzer
        .select_file(photo("dinner.webp", "image/webp", 200 * 1024))
        .unwrap();

    let err = analyzer.request_analysis().await.unwrap_err();
    assert!(matches!(err, CoreError::InferenceError(_)));
    assert_eq!(analyzer.step(), IntakeStep::Select);
    assert_eq!(
        analyzer.staged_image().map(|i| i.file_name.as_str()),
        Some("dinner.webp")
    );

    analyzer.request_analysis().await.unwrap();
    assert_eq!(analyzer.step(), IntakeStep::Results);
    assert_eq!(inference.calls(), 2);
}

#[tokio::test]
async fn goal_progress_from_current_value() {
    let store = InMemoryNutritionStore::new();
    let service = pipeline(
        &store,
        ScriptedInference::answering(ONE_PASTA_PLATE),
        RecordingStorage::default(),
    );
    let identity = Identity::new(Uuid::new_v4(), None);

    let goal = service
        .create_goal(
            identity.clone(),
            CreateGoalInput {
                goal_type: GoalType::WeightLoss,
                target_value: Some(10.0),
                current_value: Some(4.0),
                unit: "kg".to_string(),
                target_date: NaiveDate::from_ymd_opt(2027, 1, 31),
            },
        )
        .await
        .unwrap();

    assert_eq!(goal.progress_percentage, 40.0);
    assert_eq!(progress_percentage(goal.current_value, goal.target_value), 40.0);
    assert_eq!(service.list_active_goals(identity).await.unwrap().len(), 1);
}

#[tokio::test]
async fn recompute_is_stable_and_additive() {
    let store = InMemoryNutritionStore::new();
    let service = pipeline(
        &store,
        ScriptedInference::answering(ONE_PASTA_PLATE),
        RecordingStorage::default(),
    );
    let identity = Identity::new(Uuid::new_v4(), None);
    let hub = SessionHub::new(Some(identity.clone()));
    let mut analyzer = FoodAnalyzer::new(
        service.clone(),
        InMemoryPreviewStore::default(),
        TracingNotifier,
        hub.subscribe(),
        PipelineConfig::default(),
    );

    analyzer
        .select_file(photo("a.jpg", "image/jpeg", 1024))
        .unwrap();
    analyzer.request_analysis().await.unwrap();
    analyzer.save().await.unwrap();

    let today = Utc::now().date_naive();
    let first = service
        .recompute_daily_summary(identity.clone(), today)
        .await
        .unwrap();
    let second = service
        .recompute_daily_summary(identity.clone(), today)
        .await
        .unwrap();
    assert_eq!(
        serde_json::to_string(&first).unwrap(),
        serde_json::to_string(&second).unwrap()
    );

    analyzer
        .select_file(photo("b.jpg", "image/jpeg", 2048))
        .unwrap();
    analyzer.request_analysis().await.unwrap();
    analyzer.save().await.unwrap();

    let after = store.get_summary(identity.id(), today).await.unwrap().unwrap();
    assert_eq!(after.total_calories - first.total_calories, 450.0);
    assert_eq!(after.meals_logged, 2);
}
