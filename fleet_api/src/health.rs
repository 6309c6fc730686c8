use std::sync::Arc;

use axum::{Json, extract::State};
use schemars::JsonSchema;
use serde::Serialize;

use crate::state::AppState;

#[derive(Serialize, JsonSchema)]
pub struct HealthResponse {
    status: String,
    model_loaded: bool,
}

pub async fn health_handler(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_owned(),
        model_loaded: state.classifier.is_some(),
    })
}
