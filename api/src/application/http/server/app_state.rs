use std::sync::Arc;

use healthco_core::application::HealthCoService;

use crate::args::Args;

#[derive(Clone)]
pub struct AppState {
    pub args: Arc<Args>,
    pub service: HealthCoService,
}

impl AppState {
    pub fn new(args: Arc<Args>, service: HealthCoService) -> Self {
        Self { args, service }
    }
}
