use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tracing::{Level, debug, instrument};

use crate::{
    classifier::MaintenanceClassifier, error::MaintenanceError, vehicle_data::VehicleData,
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename = "PredictionResponse")]
pub struct PredictionResponse {
    pub needs_maintenance: bool,
    pub maintenance_probability: Option<f64>,
    pub input_data: VehicleData,
}

#[instrument(skip_all, level = Level::DEBUG)]
pub fn predict_maintenance(
    classifier: &dyn MaintenanceClassifier,
    data: VehicleData,
) -> Result<PredictionResponse, MaintenanceError> {
    let needs_maintenance = classifier.predict(&data)?;
    let maintenance_probability = classifier.predict_probability(&data).transpose()?;

    debug!(needs_maintenance, ?maintenance_probability, "prediction done");

    Ok(PredictionResponse {
        needs_maintenance,
        maintenance_probability,
        input_data: data,
    })
}
