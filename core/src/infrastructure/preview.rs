use std::{
    collections::HashMap,
    sync::{Arc, Mutex},
};

use crate::domain::{
    common::{entities::app_errors::CoreError, generate_uuid_v7},
    intake::{entities::PreviewRef, ports::PreviewStore},
    storage::value_objects::ImageFile,
};

/// Keeps staged photos addressable by a `preview://` reference until released.
#[derive(Debug, Clone, Default)]
pub struct InMemoryPreviewStore {
    previews: Arc<Mutex<HashMap<PreviewRef, ImageFile>>>,
}

impl InMemoryPreviewStore {
    pub fn get(&self, preview: &PreviewRef) -> Option<ImageFile> {
        self.previews
            .lock()
            .ok()
            .and_then(|previews| previews.get(preview).cloned())
    }

    /// Number of previews materialized and not yet released.
    pub fn live_count(&self) -> usize {
        self.previews.lock().map(|p| p.len()).unwrap_or(0)
    }
}

impl PreviewStore for InMemoryPreviewStore {
    fn materialize(&self, image: &ImageFile) -> Result<PreviewRef, CoreError> {
        let preview = PreviewRef(format!("preview://{}", generate_uuid_v7()));

        let mut previews = self.previews.lock().map_err(|_| {
            tracing::error!("preview store lock poisoned");
            CoreError::InternalServerError
        })?;
        previews.insert(preview.clone(), image.clone());

        Ok(preview)
    }

    fn release(&self, preview: &PreviewRef) {
        match self.previews.lock() {
            Ok(mut previews) => {
                if previews.remove(preview).is_none() {
                    tracing::debug!(preview = preview.as_str(), "preview already released");
                }
            }
            Err(_) => tracing::error!("preview store lock poisoned"),
        }
    }
}
