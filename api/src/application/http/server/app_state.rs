use std::sync::Arc;

use nutrilens_core::application::NutriLensService;

use crate::args::Args;

#[derive(Clone)]
pub struct AppState {
    pub args: Arc<Args>,
    pub service: NutriLensService,
}

impl AppState {
    pub fn new(args: Arc<Args>, service: NutriLensService) -> Self {
        Self { args, service }
    }
}
