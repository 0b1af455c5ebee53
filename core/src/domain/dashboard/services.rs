use chrono::Utc;
use tracing::instrument;

use crate::domain::{
    authentication::value_objects::Identity,
    common::{entities::app_errors::CoreError, services::Service},
    daily_summary::{
        ports::{DailySummaryRepository, DailySummaryService},
        value_objects::DailyProgress,
    },
    dashboard::{ports::DashboardService, value_objects::Dashboard},
    food_analysis::ports::FoodInferenceClient,
    food_entry::ports::{FoodEntryRepository, FoodEntryService},
    goal::ports::{GoalRepository, GoalService},
    profile::ports::{ProfileRepository, ProfileService},
    storage::ports::ObjectStoragePort,
};

impl<FE, DS, UP, UG, INF, OS> DashboardService for Service<FE, DS, UP, UG, INF, OS>
where
    FE: FoodEntryRepository,
    DS: DailySummaryRepository,
    UP: ProfileRepository,
    UG: GoalRepository,
    INF: FoodInferenceClient,
    OS: ObjectStoragePort,
{
    #[instrument(skip(self, identity), fields(user_id = %identity.id()))]
    async fn get_dashboard(&self, identity: Identity) -> Result<Dashboard, CoreError> {
        let profile = self.get_profile(identity.clone()).await?;

        // today's totals are always derived fresh from the entries
        let today = Utc::now().date_naive();
        let summary = self
            .recompute_daily_summary(identity.clone(), today)
            .await?;

        let recent_entries = self.get_recent_entries(identity.clone(), None).await?;
        let active_goals = self.list_active_goals(identity).await?;

        Ok(Dashboard {
            today: DailyProgress::new(summary, &profile.targets()),
            profile,
            recent_entries,
            active_goals,
        })
    }
}
