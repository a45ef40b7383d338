use std::sync::Arc;

use crate::calendar::CalendarService;
use crate::config::ServerConfig;

/// Handler state, cloned per request. Read-only after startup.
#[derive(Clone)]
pub struct AppState {
    /// Used directly only by `/health`; calendar reads go through `calendar`.
    pub pool: bmx_db::DbPool,
    pub config: Arc<ServerConfig>,
    pub calendar: CalendarService,
}
