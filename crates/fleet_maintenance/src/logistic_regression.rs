use serde::{Deserialize, Serialize};

use crate::{
    classifier::MaintenanceClassifier,
    error::MaintenanceError,
    vehicle_data::{Feature, VehicleData},
};

fn default_threshold() -> f64 {
    0.5
}

/// Parameters of a fitted logistic regression, as exported by the training job.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogisticRegressionParams {
    pub features: Vec<String>,
    pub coefficients: Vec<f64>,
    pub intercept: f64,
    #[serde(default = "default_threshold")]
    pub threshold: f64,
}

#[derive(Debug, Clone)]
pub struct LogisticRegressionModel {
    weights: Vec<(Feature, f64)>,
    intercept: f64,
    threshold: f64,
}

impl LogisticRegressionModel {
    pub fn new(params: LogisticRegressionParams) -> Result<Self, MaintenanceError> {
        if params.features.len() != params.coefficients.len() {
            return Err(MaintenanceError::InvalidModel(format!(
                "{} features but {} coefficients",
                params.features.len(),
                params.coefficients.len()
            )));
        }

        if !(0.0..=1.0).contains(&params.threshold) {
            return Err(MaintenanceError::InvalidModel(format!(
                "threshold must be within [0, 1], got {}",
                params.threshold
            )));
        }

        if !params.intercept.is_finite() || params.coefficients.iter().any(|c| !c.is_finite()) {
            return Err(MaintenanceError::InvalidModel(
                "coefficients and intercept must be finite".to_owned(),
            ));
        }

        let weights = params
            .features
            .iter()
            .zip(params.coefficients)
            .map(|(name, coefficient)| Ok((name.parse::<Feature>()?, coefficient)))
            .collect::<Result<Vec<_>, MaintenanceError>>()?;

        Ok(LogisticRegressionModel {
            weights,
            intercept: params.intercept,
            threshold: params.threshold,
        })
    }

    fn probability(&self, data: &VehicleData) -> Result<f64, MaintenanceError> {
        let score = self
            .weights
            .iter()
            .fold(self.intercept, |acc, (feature, coefficient)| {
                acc + coefficient * feature.value(data)
            });

        if score.is_nan() {
            return Err(MaintenanceError::NonFiniteScore);
        }

        Ok(1.0 / (1.0 + (-score).exp()))
    }
}

impl MaintenanceClassifier for LogisticRegressionModel {
    fn predict(&self, data: &VehicleData) -> Result<bool, MaintenanceError> {
        Ok(self.probability(data)? >= self.threshold)
    }

    fn predict_probability(&self, data: &VehicleData) -> Option<Result<f64, MaintenanceError>> {
        Some(self.probability(data))
    }
}
