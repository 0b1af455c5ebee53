use crate::domain::{
    common::entities::app_errors::CoreError, food_entry::entities::FoodEntry,
    intake::entities::PreviewRef, storage::value_objects::ImageFile,
};

/// Materializes previews for staged photos. Every materialized preview is
/// released exactly once.
#[cfg_attr(test, mockall::automock)]
pub trait PreviewStore: Send + Sync {
    fn materialize(&self, image: &ImageFile) -> Result<PreviewRef, CoreError>;

    fn release(&self, preview: &PreviewRef);
}

/// Sink for user-visible success and failure messages.
#[cfg_attr(test, mockall::automock)]
pub trait Notifier: Send + Sync {
    fn success(&self, message: &str);

    fn error(&self, message: &str);

    /// A meal was logged; the host leaves the capture flow for the dashboard.
    fn entry_saved(&self, entry: &FoodEntry);
}
