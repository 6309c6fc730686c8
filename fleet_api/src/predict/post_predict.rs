use std::sync::Arc;

use axum::{Json, extract::State};
use fleet_maintenance::{
    prediction::{PredictionResponse, predict_maintenance},
    vehicle_data::VehicleData,
};

use crate::{error::ApiError, state::AppState};

pub async fn post_predict_handler(
    State(state): State<Arc<AppState>>,
    Json(body): Json<VehicleData>,
) -> Result<Json<PredictionResponse>, ApiError> {
    let classifier = state
        .classifier
        .as_ref()
        .ok_or_else(|| ApiError::ServiceUnavailable("Model not loaded".to_owned()))?;

    let response = predict_maintenance(classifier.as_ref(), body)?;

    Ok(Json(response))
}
