use std::{fmt::Display, str::FromStr};

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::MaintenanceError;

/// Telemetry summary of one vehicle, as fed to the classifier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename = "VehicleData")]
pub struct VehicleData {
    pub mileage: f64,
    pub vehicle_age: i64,
    pub fuel_efficiency: f64,
    pub battery_health: f64,
    pub engine_health: f64,
    pub avg_speed: f64,
    pub avg_accel: f64,
    pub odometer_reading: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Feature {
    Mileage,
    VehicleAge,
    FuelEfficiency,
    BatteryHealth,
    EngineHealth,
    AvgSpeed,
    AvgAccel,
    OdometerReading,
}

impl Feature {
    pub const ALL: [Feature; 8] = [
        Feature::Mileage,
        Feature::VehicleAge,
        Feature::FuelEfficiency,
        Feature::BatteryHealth,
        Feature::EngineHealth,
        Feature::AvgSpeed,
        Feature::AvgAccel,
        Feature::OdometerReading,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Feature::Mileage => "mileage",
            Feature::VehicleAge => "vehicle_age",
            Feature::FuelEfficiency => "fuel_efficiency",
            Feature::BatteryHealth => "battery_health",
            Feature::EngineHealth => "engine_health",
            Feature::AvgSpeed => "avg_speed",
            Feature::AvgAccel => "avg_accel",
            Feature::OdometerReading => "odometer_reading",
        }
    }

    pub fn value(&self, data: &VehicleData) -> f64 {
        match self {
            Feature::Mileage => data.mileage,
            Feature::VehicleAge => data.vehicle_age as f64,
            Feature::FuelEfficiency => data.fuel_efficiency,
            Feature::BatteryHealth => data.battery_health,
            Feature::EngineHealth => data.engine_health,
            Feature::AvgSpeed => data.avg_speed,
            Feature::AvgAccel => data.avg_accel,
            Feature::OdometerReading => data.odometer_reading,
        }
    }
}

impl Display for Feature {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Feature {
    type Err = MaintenanceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Feature::ALL
            .into_iter()
            .find(|feature| feature.name() == s)
            .ok_or_else(|| MaintenanceError::UnknownFeature(s.to_owned()))
    }
}
