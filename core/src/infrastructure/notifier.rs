use crate::domain::{food_entry::entities::FoodEntry, intake::ports::Notifier};

/// Writes user-facing pipeline messages as structured log events.
#[derive(Debug, Clone, Default)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn success(&self, message: &str) {
        tracing::info!(target: "nutrilens::notify", outcome = "success", "{}", message);
    }

    fn error(&self, message: &str) {
        tracing::warn!(target: "nutrilens::notify", outcome = "error", "{}", message);
    }

    fn entry_saved(&self, entry: &FoodEntry) {
        tracing::info!(
            target: "nutrilens::notify",
            entry_id = %entry.id,
            next = "dashboard",
            "navigate"
        );
    }
}
