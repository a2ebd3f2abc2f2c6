use axum::{extract::State, response::Json, routing::get, Router};

use crate::{
    dto::{KnockResponse, KnocksResponse},
    errors::ApiError,
    state::AppState,
};

pub fn routes() -> Router<AppState> {
    Router::new().route("/knock", get(get_knocks))
}

async fn get_knocks(State(state): State<AppState>) -> Result<Json<KnocksResponse>, ApiError> {
    let knocks = state.sightings.get_knocks.execute().await?;
    Ok(Json(KnocksResponse {
        knocks: knocks.into_iter().map(KnockResponse::from_knock).collect(),
    }))
}
