use crate::{handlers, AppState};
use axum::{
    routing::{delete, get, post, put},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

pub struct ApiServer {
    state: AppState,
}

impl ApiServer {
    #[must_use]
    pub const fn new(state: AppState) -> Self {
        Self { state }
    }

    pub fn router(&self) -> Router {
        let cors = CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any);

        Router::new()
            .route("/api/health", get(handlers::health::check))
            .route("/api/dashboard", get(handlers::dashboard::get_dashboard))
            .route("/api/financial", get(handlers::dashboard::get_financial))
            .route("/api/orders", get(handlers::orders::list_orders))
            .route("/api/orders", post(handlers::orders::create_order))
            .route("/api/orders/:id", put(handlers::orders::update_order))
            .route("/api/orders/:id", delete(handlers::orders::delete_order))
            .route(
                "/api/future-deliveries",
                get(handlers::future_deliveries::list_deliveries),
            )
            .route(
                "/api/future-deliveries",
                post(handlers::future_deliveries::create_delivery),
            )
            .route(
                "/api/future-deliveries/:id",
                put(handlers::future_deliveries::update_delivery),
            )
            .route(
                "/api/future-deliveries/:id/note",
                put(handlers::future_deliveries::set_note),
            )
            .route(
                "/api/future-deliveries/:id/complete",
                put(handlers::future_deliveries::complete_delivery),
            )
            .route(
                "/api/future-deliveries/:id",
                delete(handlers::future_deliveries::delete_delivery),
            )
            .route("/api/expenses", get(handlers::expenses::list_expenses))
            .route("/api/expenses", post(handlers::expenses::create_expense))
            .route(
                "/api/expenses/:id",
                delete(handlers::expenses::delete_expense),
            )
            .layer(cors)
            .layer(TraceLayer::new_for_http())
            .with_state(self.state.clone())
    }

    /// Starts the web server listening on the specified address.
    ///
    /// # Errors
    /// Returns an error if the server fails to bind to the address or serve requests.
    pub async fn serve(self, addr: &str) -> anyhow::Result<()> {
        let listener = tokio::net::TcpListener::bind(addr).await?;
        tracing::info!("Web API listening on {}", addr);

        axum::serve(listener, self.router()).await?;

        Ok(())
    }
}
