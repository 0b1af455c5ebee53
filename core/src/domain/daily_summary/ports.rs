use std::future::Future;

use chrono::NaiveDate;
use uuid::Uuid;

use crate::domain::{
    authentication::value_objects::Identity,
    common::entities::app_errors::CoreError,
    daily_summary::{entities::DailySummary, value_objects::DailyProgress},
};

#[cfg_attr(test, mockall::automock)]
pub trait DailySummaryRepository: Send + Sync {
    fn get_summary(
        &self,
        user_id: Uuid,
        date: NaiveDate,
    ) -> impl Future<Output = Result<Option<DailySummary>, CoreError>> + Send;

    /// Replace the stored summary for `(summary.user_id, summary.date)`
    fn upsert_summary(
        &self,
        summary: DailySummary,
    ) -> impl Future<Output = Result<DailySummary, CoreError>> + Send;
}

#[cfg_attr(test, mockall::automock)]
pub trait DailySummaryService: Send + Sync {
    /// Derive the summary from the stored entries and replace the cached one
    fn recompute_daily_summary(
        &self,
        identity: Identity,
        date: NaiveDate,
    ) -> impl Future<Output = Result<DailySummary, CoreError>> + Send;

    fn get_daily_summary(
        &self,
        identity: Identity,
        date: NaiveDate,
    ) -> impl Future<Output = Result<DailySummary, CoreError>> + Send;

    fn get_daily_progress(
        &self,
        identity: Identity,
        date: NaiveDate,
    ) -> impl Future<Output = Result<DailyProgress, CoreError>> + Send;
}
