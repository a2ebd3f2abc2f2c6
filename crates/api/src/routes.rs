use crate::handlers;
use crate::state::AppState;
use axum::{routing::get, Router};
use tower_http::trace::TraceLayer;

pub fn create_api_routes(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health_check))
        .merge(handlers::devices::routes())
        .merge(handlers::sightings::routes())
        .merge(handlers::knocks::routes())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
