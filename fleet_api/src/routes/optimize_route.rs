use std::sync::Arc;

use axum::{Json, extract::State};
use fleet_routing::json::types::{JsonRouteRequest, JsonRouteResponse};

use crate::{error::ApiError, state::AppState};

pub async fn optimize_route_handler(
    State(state): State<Arc<AppState>>,
    Json(body): Json<JsonRouteRequest>,
) -> Result<Json<JsonRouteResponse>, ApiError> {
    Ok(Json(body.plan(&state.route_config)?))
}
