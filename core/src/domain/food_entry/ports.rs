use std::future::Future;

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::domain::{
    authentication::value_objects::Identity,
    common::entities::app_errors::CoreError,
    food_entry::{
        entities::FoodEntry,
        value_objects::{EntryHistory, EntryHistoryFilter, SaveFoodEntryInput},
    },
};

/// Repository trait for food entries
#[cfg_attr(test, mockall::automock)]
pub trait FoodEntryRepository: Send + Sync {
    fn create_entry(
        &self,
        entry: FoodEntry,
    ) -> impl Future<Output = Result<FoodEntry, CoreError>> + Send;

    /// Most recent entries first
    fn get_recent_entries(
        &self,
        user_id: Uuid,
        limit: u64,
    ) -> impl Future<Output = Result<Vec<FoodEntry>, CoreError>> + Send;

    /// Entries created in `[start, end)`
    fn get_entries_between(
        &self,
        user_id: Uuid,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> impl Future<Output = Result<Vec<FoodEntry>, CoreError>> + Send;
}

#[cfg_attr(test, mockall::automock)]
pub trait FoodEntryService: Send + Sync {
    /// Upload the photo (if any), write the entry, then recompute that day's summary
    fn save_food_entry(
        &self,
        identity: Identity,
        input: SaveFoodEntryInput,
    ) -> impl Future<Output = Result<FoodEntry, CoreError>> + Send;

    fn get_recent_entries(
        &self,
        identity: Identity,
        limit: Option<u64>,
    ) -> impl Future<Output = Result<Vec<FoodEntry>, CoreError>> + Send;

    fn search_history(
        &self,
        identity: Identity,
        filter: EntryHistoryFilter,
    ) -> impl Future<Output = Result<EntryHistory, CoreError>> + Send;
}
