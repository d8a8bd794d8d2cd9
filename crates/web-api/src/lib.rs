pub mod handlers;
pub mod server;

use std::sync::Arc;

use sqlx::PgPool;

use rota_ops_dashboard::DashboardService;
use rota_ops_data::Repositories;

pub use server::ApiServer;

/// Shared state handed to every handler.
#[derive(Clone)]
pub struct AppState {
    pub repos: Repositories,
    pub service: Arc<DashboardService<Repositories>>,
    pub pool: PgPool,
}

impl AppState {
    /// Builds the state from a connected pool.
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        let repos = Repositories::new(pool.clone());
        let service = Arc::new(DashboardService::new(repos.clone()));
        Self {
            repos,
            service,
            pool,
        }
    }
}
