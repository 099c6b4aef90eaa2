use std::sync::Arc;

use dinstein_core::application::DinsteinService;

use crate::args::Args;

#[derive(Clone)]
pub struct AppState {
    pub args: Arc<Args>,
    pub service: DinsteinService,
}

impl AppState {
    pub fn new(args: Arc<Args>, service: DinsteinService) -> Self {
        Self { args, service }
    }
}
