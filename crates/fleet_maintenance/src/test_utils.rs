use std::path::PathBuf;

use crate::{logistic_regression::LogisticRegressionParams, vehicle_data::VehicleData};

pub fn worn_vehicle() -> VehicleData {
    VehicleData {
        mileage: 180_000.0,
        vehicle_age: 9,
        fuel_efficiency: 9.5,
        battery_health: 40.0,
        engine_health: 35.0,
        avg_speed: 72.0,
        avg_accel: 2.8,
        odometer_reading: 181_250.0,
    }
}

pub fn healthy_vehicle() -> VehicleData {
    VehicleData {
        mileage: 20_000.0,
        vehicle_age: 1,
        fuel_efficiency: 16.0,
        battery_health: 92.0,
        engine_health: 95.0,
        avg_speed: 55.0,
        avg_accel: 1.1,
        odometer_reading: 20_400.0,
    }
}

/// Worn engines and batteries push the score up, mileage and age a little.
pub fn engine_health_params() -> LogisticRegressionParams {
    LogisticRegressionParams {
        features: vec![
            "engine_health".to_owned(),
            "battery_health".to_owned(),
            "mileage".to_owned(),
            "vehicle_age".to_owned(),
        ],
        coefficients: vec![-0.08, -0.04, 0.00002, 0.15],
        intercept: 6.0,
        threshold: 0.5,
    }
}

pub fn engine_health_model_json() -> String {
    serde_json::json!({
        "kind": "logistic_regression",
        "features": ["engine_health", "battery_health", "mileage", "vehicle_age"],
        "coefficients": [-0.08, -0.04, 0.00002, 0.15],
        "intercept": 6.0
    })
    .to_string()
}

/// Writes `contents` to a file unique to the calling test.
pub fn write_temp_file(name: &str, contents: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("fleet_maintenance_{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();

    let path = dir.join(name);
    std::fs::write(&path, contents).unwrap();
    path
}
