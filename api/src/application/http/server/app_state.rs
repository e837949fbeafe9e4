use std::sync::Arc;

use dishcovery_core::application::DishcoveryService;

use crate::args::Args;

#[derive(Clone)]
pub struct AppState {
    pub args: Arc<Args>,
    pub service: DishcoveryService,
}

impl AppState {
    pub fn new(args: Arc<Args>, service: DishcoveryService) -> Self {
        Self { args, service }
    }
}
