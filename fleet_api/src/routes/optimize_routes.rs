use axum::Json;
use fleet_routing::json::types::{JsonOptimizeRoutesRequest, JsonOptimizeRoutesResponse};
use tracing::info;

use crate::error::ApiError;

pub async fn optimize_routes_handler(
    Json(body): Json<JsonOptimizeRoutesRequest>,
) -> Result<Json<JsonOptimizeRoutesResponse>, ApiError> {
    let response = body.solve()?;

    info!(
        "routed {} locations over {} vehicles",
        body.locations.len(),
        response.routes.len()
    );

    Ok(Json(response))
}
