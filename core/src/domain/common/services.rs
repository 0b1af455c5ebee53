use crate::domain::common::PipelineConfig;

/// Aggregate service over every port the pipeline talks to.
///
/// Each domain implements its service trait for `Service` in its own
/// `services.rs`, bounded only by the ports it needs.
#[derive(Clone)]
pub struct Service<FE, DS, UP, UG, INF, OS> {
    pub(crate) food_entry_repository: FE,
    pub(crate) daily_summary_repository: DS,
    pub(crate) profile_repository: UP,
    pub(crate) goal_repository: UG,
    pub(crate) inference_client: INF,
    pub(crate) object_storage: OS,
    pub(crate) config: PipelineConfig,
}

impl<FE, DS, UP, UG, INF, OS> Service<FE, DS, UP, UG, INF, OS> {
    pub fn new(
        food_entry_repository: FE,
        daily_summary_repository: DS,
        profile_repository: UP,
        goal_repository: UG,
        inference_client: INF,
        object_storage: OS,
        config: PipelineConfig,
    ) -> Self {
        Self {
            food_entry_repository,
            daily_summary_repository,
            profile_repository,
            goal_repository,
            inference_client,
            object_storage,
            config,
        }
    }

    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::Service;
    use crate::{
        domain::{
            common::PipelineConfig, food_analysis::ports::MockFoodInferenceClient,
            storage::ports::MockObjectStoragePort,
        },
        infrastructure::memory::InMemoryNutritionStore,
    };

    pub type MemoryService = Service<
        InMemoryNutritionStore,
        InMemoryNutritionStore,
        InMemoryNutritionStore,
        InMemoryNutritionStore,
        MockFoodInferenceClient,
        MockObjectStoragePort,
    >;

    /// Service backed by one shared in-memory store, with fresh port mocks.
    pub fn memory_service(store: &InMemoryNutritionStore, storage: MockObjectStoragePort) -> MemoryService {
        Service::new(
            store.clone(),
            store.clone(),
            store.clone(),
            store.clone(),
            MockFoodInferenceClient::new(),
            storage,
            PipelineConfig::default(),
        )
    }
}
