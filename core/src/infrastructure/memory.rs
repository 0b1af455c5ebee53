//! In-memory record store
//!
//! Implements every repository port over a per-user partitioned map. Used by
//! tests and by local runs that do not have a database at hand.

use std::{collections::HashMap, sync::Arc};

use chrono::{DateTime, NaiveDate, Utc};
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::{
    common::entities::app_errors::CoreError,
    daily_summary::{entities::DailySummary, ports::DailySummaryRepository},
    food_entry::{entities::FoodEntry, ports::FoodEntryRepository},
    goal::{entities::UserGoal, ports::GoalRepository},
    profile::{entities::UserProfile, ports::ProfileRepository},
};

#[derive(Debug, Default)]
struct UserRecords {
    entries: Vec<FoodEntry>,
    summaries: HashMap<NaiveDate, DailySummary>,
    profile: Option<UserProfile>,
    goals: Vec<UserGoal>,
}

#[derive(Debug, Clone, Default)]
pub struct InMemoryNutritionStore {
    users: Arc<RwLock<HashMap<Uuid, UserRecords>>>,
}

impl InMemoryNutritionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn entry_count(&self, user_id: Uuid) -> usize {
        self.users
            .read()
            .await
            .get(&user_id)
            .map_or(0, |records| records.entries.len())
    }
}

fn newest_first(a: &FoodEntry, b: &FoodEntry) -> std::cmp::Ordering {
    b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id))
}

impl FoodEntryRepository for InMemoryNutritionStore {
    async fn create_entry(&self, entry: FoodEntry) -> Result<FoodEntry, CoreError> {
        let mut users = self.users.write().await;
        let records = users.entry(entry.user_id).or_default();

        if records.entries.iter().any(|e| e.id == entry.id) {
            return Err(CoreError::PersistenceError(format!(
                "duplicate food entry id {}",
                entry.id
            )));
        }

        records.entries.push(entry.clone());
        Ok(entry)
    }

    async fn get_recent_entries(
        &self,
        user_id: Uuid,
        limit: u64,
    ) -> Result<Vec<FoodEntry>, CoreError> {
        let users = self.users.read().await;
        let mut entries = users
            .get(&user_id)
            .map(|records| records.entries.clone())
            .unwrap_or_default();

        entries.sort_by(newest_first);
        entries.truncate(usize::try_from(limit).unwrap_or(usize::MAX));
        Ok(entries)
    }

    async fn get_entries_between(
        &self,
        user_id: Uuid,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<Vec<FoodEntry>, CoreError> {
        let users = self.users.read().await;

        Ok(users
            .get(&user_id)
            .map(|records| {
                records
                    .entries
                    .iter()
                    .filter(|e| e.created_at >= start && e.created_at < end)
                    .cloned()
                    .collect()
            })
            .unwrap_or_default())
    }
}

impl DailySummaryRepository for InMemoryNutritionStore {
    async fn get_summary(
        &self,
        user_id: Uuid,
        date: NaiveDate,
    ) -> Result<Option<DailySummary>, CoreError> {
        let users = self.users.read().await;

        Ok(users
            .get(&user_id)
            .and_then(|records| records.summaries.get(&date).cloned()))
    }

    async fn upsert_summary(&self, summary: DailySummary) -> Result<DailySummary, CoreError> {
        let mut users = self.users.write().await;
        users
            .entry(summary.user_id)
            .or_default()
            .summaries
            .insert(summary.date, summary.clone());

        Ok(summary)
    }
}

impl ProfileRepository for InMemoryNutritionStore {
    async fn get_profile_by_user(&self, user_id: Uuid) -> Result<Option<UserProfile>, CoreError> {
        let users = self.users.read().await;
        Ok(users.get(&user_id).and_then(|records| records.profile.clone()))
    }

    async fn upsert_profile(&self, profile: UserProfile) -> Result<UserProfile, CoreError> {
        let mut users = self.users.write().await;
        let records = users.entry(profile.user_id).or_default();

        // one profile per user: keep the original id and creation time
        let stored = match &records.profile {
            Some(existing) => UserProfile {
                id: existing.id,
                created_at: existing.created_at,
                ..profile
            },
            None => profile,
        };

        records.profile = Some(stored.clone());
        Ok(stored)
    }
}

impl GoalRepository for InMemoryNutritionStore {
    async fn create_goal(&self, goal: UserGoal) -> Result<UserGoal, CoreError> {
        let mut users = self.users.write().await;
        users
            .entry(goal.user_id)
            .or_default()
            .goals
            .push(goal.clone());

        Ok(goal)
    }

    async fn get_active_goals(&self, user_id: Uuid) -> Result<Vec<UserGoal>, CoreError> {
        let users = self.users.read().await;
        let mut goals: Vec<UserGoal> = users
            .get(&user_id)
            .map(|records| records.goals.iter().filter(|g| g.is_active).cloned().collect())
            .unwrap_or_default();

        goals.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));
        Ok(goals)
    }

    async fn get_goal(&self, user_id: Uuid, goal_id: Uuid) -> Result<Option<UserGoal>, CoreError> {
        let users = self.users.read().await;

        Ok(users
            .get(&user_id)
            .and_then(|records| records.goals.iter().find(|g| g.id == goal_id).cloned()))
    }

    async fn update_goal(&self, goal: UserGoal) -> Result<UserGoal, CoreError> {
        let mut users = self.users.write().await;
        let slot = users
            .get_mut(&goal.user_id)
            .and_then(|records| records.goals.iter_mut().find(|g| g.id == goal.id))
            .ok_or(CoreError::NotFound)?;

        *slot = goal.clone();
        Ok(goal)
    }
}
