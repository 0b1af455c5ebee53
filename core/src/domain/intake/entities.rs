use std::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::storage::value_objects::ImageFile;

/// Where a [`FoodAnalyzer`](super::FoodAnalyzer) is in the photo-to-entry flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IntakeStep {
    Select,
    Analyzing,
    Results,
    Saving,
}

impl fmt::Display for IntakeStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            IntakeStep::Select => "select",
            IntakeStep::Analyzing => "analyzing",
            IntakeStep::Results => "results",
            IntakeStep::Saving => "saving",
        };
        f.write_str(name)
    }
}

/// Handle to a locally materialized image preview.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PreviewRef(pub String);

impl PreviewRef {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone)]
pub struct StagedImage {
    pub image: ImageFile,
    pub preview: PreviewRef,
}
