use std::sync::Arc;

use goodstack_catalog::GoodService;
use goodstack_db::DbPool;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheaply cloneable: inner data is behind `Arc` or is already `Clone`.
#[derive(Clone)]
pub struct AppState {
    /// Primary-store connection pool (project handlers use it directly).
    pub pool: DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Goods orchestrator: write path and cache-aside read path.
    pub goods: Arc<GoodService>,
}
