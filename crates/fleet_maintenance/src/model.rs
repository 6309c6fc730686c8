use std::{path::Path, sync::Arc};

use serde::Deserialize;
use tracing::{info, instrument};

use crate::{
    classifier::SharedClassifier,
    error::MaintenanceError,
    logistic_regression::{LogisticRegressionModel, LogisticRegressionParams},
};

/// On-disk model document, tagged by `kind`.
#[derive(Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ModelDocument {
    LogisticRegression(LogisticRegressionParams),
}

impl ModelDocument {
    pub fn into_classifier(self) -> Result<SharedClassifier, MaintenanceError> {
        match self {
            ModelDocument::LogisticRegression(params) => {
                Ok(Arc::new(LogisticRegressionModel::new(params)?))
            }
        }
    }
}

pub fn parse_model(json: &str) -> Result<SharedClassifier, MaintenanceError> {
    serde_json::from_str::<ModelDocument>(json)?.into_classifier()
}

#[instrument(level = "debug")]
pub fn load_model(path: &Path) -> Result<SharedClassifier, MaintenanceError> {
    let json = std::fs::read_to_string(path).map_err(|source| MaintenanceError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let classifier = parse_model(&json)?;
    info!("Model loaded from {}", path.display());

    Ok(classifier)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils;

    #[test]
    fn test_load_model() {
        let path = test_utils::write_temp_file(
            "test_load_model.json",
            &test_utils::engine_health_model_json(),
        );

        let classifier = load_model(&path).unwrap();

        assert!(classifier.predict(&test_utils::worn_vehicle()).unwrap());
        assert!(
            classifier
                .predict_probability(&test_utils::healthy_vehicle())
                .is_some()
        );
    }

    #[test]
    fn test_missing_file() {
        let result = load_model(Path::new("/definitely/not/a/model.json"));
        assert!(matches!(result, Err(MaintenanceError::Io { .. })));
    }

    #[test]
    fn test_unknown_kind() {
        let result = parse_model(r#"{ "kind": "random_forest", "trees": [] }"#);
        assert!(matches!(result, Err(MaintenanceError::Deserialize(_))));
    }

    #[test]
    fn test_invalid_json() {
        let result = parse_model("not json");
        assert!(matches!(result, Err(MaintenanceError::Deserialize(_))));
    }

    #[test]
    fn test_invalid_parameters() {
        let result = parse_model(
            r#"{ "kind": "logistic_regression", "features": ["mileage"], "coefficients": [], "intercept": 0.0 }"#,
        );
        assert!(matches!(result, Err(MaintenanceError::InvalidModel(_))));
    }
}
