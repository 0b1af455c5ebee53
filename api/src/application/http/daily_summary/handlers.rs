pub mod get_daily_progress;
pub mod get_daily_summary;
pub mod recompute_daily_summary;

use chrono::{NaiveDate, Utc};
use serde::Deserialize;
use utoipa::IntoParams;

#[derive(Debug, Default, Deserialize, IntoParams)]
pub struct SummaryDateQuery {
    /// UTC day, defaults to today
    pub date: Option<NaiveDate>,
}

impl SummaryDateQuery {
    pub fn date_or_today(&self) -> NaiveDate {
        self.date.unwrap_or_else(|| Utc::now().date_naive())
    }
}
