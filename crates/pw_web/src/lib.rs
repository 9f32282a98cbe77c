use std::sync::Arc;

use axum::{routing::get, Router};
use tower_http::cors::CorsLayer;

pub mod handlers;
pub mod render;
pub mod state;

pub use state::{ApiState, AppState};

/// The site: home page and politicians page.
pub async fn create_app(state: AppState) -> Router {
    let cors = CorsLayer::permissive();

    Router::new()
        .route("/", get(handlers::home))
        .route("/politicians", get(handlers::politicians))
        .layer(cors)
        .with_state(Arc::new(state))
}

/// The members listing service the politicians page fetches from.
pub async fn create_members_api(state: ApiState) -> Router {
    let cors = CorsLayer::permissive();

    Router::new()
        .route("/politicians", get(handlers::list_politicians))
        .route("/v1/members", get(handlers::list_members))
        .route("/v1/members/:id", get(handlers::get_member))
        .layer(cors)
        .with_state(Arc::new(state))
}

pub async fn serve(addr: &str, app: Router) -> pw_core::Result<()> {
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("🌐 Listening on http://{}", listener.local_addr()?);
    axum::serve(listener, app).await?;
    Ok(())
}

pub mod prelude {
    pub use crate::{ApiState, AppState};
    pub use pw_core::{Article, Politician, Result, SortMode};
}
