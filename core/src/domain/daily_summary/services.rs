use chrono::NaiveDate;
use tracing::instrument;
use uuid::Uuid;

use crate::domain::{
    authentication::value_objects::Identity,
    common::{entities::app_errors::CoreError, services::Service},
    daily_summary::{
        aggregator::{day_bounds, summarize},
        entities::DailySummary,
        ports::{DailySummaryRepository, DailySummaryService},
        value_objects::DailyProgress,
    },
    food_analysis::ports::FoodInferenceClient,
    food_entry::ports::FoodEntryRepository,
    goal::ports::GoalRepository,
    profile::{entities::NutritionTargets, ports::ProfileRepository},
    storage::ports::ObjectStoragePort,
};

impl<FE, DS, UP, UG, INF, OS> Service<FE, DS, UP, UG, INF, OS>
where
    UP: ProfileRepository,
{
    /// Stored profile targets, or the configured defaults when no profile exists yet.
    pub(crate) async fn targets_for(&self, user_id: Uuid) -> Result<NutritionTargets, CoreError> {
        let profile = self.profile_repository.get_profile_by_user(user_id).await?;

        Ok(profile
            .map(|p| p.targets())
            .unwrap_or_else(|| self.config.default_targets.into()))
    }
}

impl<FE, DS, UP, UG, INF, OS> DailySummaryService for Service<FE, DS, UP, UG, INF, OS>
where
    FE: FoodEntryRepository,
    DS: DailySummaryRepository,
    UP: ProfileRepository,
    UG: GoalRepository,
    INF: FoodInferenceClient,
    OS: ObjectStoragePort,
{
    #[instrument(skip(self, identity), fields(user_id = %identity.id()))]
    async fn recompute_daily_summary(
        &self,
        identity: Identity,
        date: NaiveDate,
    ) -> Result<DailySummary, CoreError> {
        let targets = self.targets_for(identity.id()).await?;
        self.recompute_with_targets(identity, date, &targets).await
    }

    /// Derived from the ledger on every read, so targets changed since the
    /// last write are reflected in the met flags.
    #[instrument(skip(self, identity), fields(user_id = %identity.id()))]
    async fn get_daily_summary(
        &self,
        identity: Identity,
        date: NaiveDate,
    ) -> Result<DailySummary, CoreError> {
        self.recompute_daily_summary(identity, date).await
    }

    #[instrument(skip(self, identity), fields(user_id = %identity.id()))]
    async fn get_daily_progress(
        &self,
        identity: Identity,
        date: NaiveDate,
    ) -> Result<DailyProgress, CoreError> {
        let targets = self.targets_for(identity.id()).await?;
        let summary = self.recompute_with_targets(identity, date, &targets).await?;

        Ok(DailyProgress::new(summary, &targets))
    }
}

impl<FE, DS, UP, UG, INF, OS> Service<FE, DS, UP, UG, INF, OS>
where
    FE: FoodEntryRepository,
    DS: DailySummaryRepository,
{
    async fn recompute_with_targets(
        &self,
        identity: Identity,
        date: NaiveDate,
        targets: &NutritionTargets,
    ) -> Result<DailySummary, CoreError> {
        let user_id = identity.id();
        let (start, end) = day_bounds(date);

        let entries = self
            .food_entry_repository
            .get_entries_between(user_id, start, end)
            .await?;

        let summary = summarize(user_id, date, &entries, targets);

        tracing::debug!(
            meals_logged = summary.meals_logged,
            total_calories = summary.total_calories,
            "Recomputed daily summary"
        );

        self.daily_summary_repository.upsert_summary(summary).await
    }
}
