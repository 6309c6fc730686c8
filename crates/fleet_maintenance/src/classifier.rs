use std::sync::Arc;

use crate::{error::MaintenanceError, vehicle_data::VehicleData};

/// A pretrained binary classifier: `true` means the vehicle needs maintenance.
pub trait MaintenanceClassifier: Send + Sync {
    fn predict(&self, data: &VehicleData) -> Result<bool, MaintenanceError>;

    /// Probability of the "needs maintenance" class, for models that expose one.
    fn predict_probability(&self, _data: &VehicleData) -> Option<Result<f64, MaintenanceError>> {
        None
    }
}

/// A classifier loaded once and shared read-only for the life of the process.
pub type SharedClassifier = Arc<dyn MaintenanceClassifier>;
