//! Application state for the web layer.

use std::sync::Arc;

use crate::board::BoardConfig;
use crate::schedules::ScheduleRegistry;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    /// All known schedules, validated at startup.
    pub registry: Arc<ScheduleRegistry>,

    /// Board display configuration.
    pub config: Arc<BoardConfig>,
}

impl AppState {
    /// Create a new app state.
    pub fn new(registry: ScheduleRegistry, config: BoardConfig) -> Self {
        Self {
            registry: Arc::new(registry),
            config: Arc::new(config),
        }
    }
}
