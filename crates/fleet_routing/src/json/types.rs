use std::collections::BTreeMap;

use jiff::Timestamp;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::{
    config::RouteConfig,
    error::RouteError,
    problem::point::Point,
    solver::{
        partition::{VehicleRoute, partition_routes},
        single_route::{SingleRoutePlan, optimize_single_route},
    },
};

/// A coordinate pair on the wire, serialized as `[lat, long]`.
pub type JsonCoordinates = [f64; 2];

#[derive(Debug, Clone, Copy, Serialize, Deserialize, JsonSchema)]
#[serde(rename = "Location")]
pub struct JsonLocation {
    pub lat: f64,
    pub long: f64,
}

impl From<&JsonLocation> for Point {
    fn from(value: &JsonLocation) -> Self {
        Point::from_lat_long(value.lat, value.long)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename = "OptimizeRoutesRequest")]
pub struct JsonOptimizeRoutesRequest {
    pub locations: Vec<JsonLocation>,
    pub n_vehicles: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename = "OptimizeRoutesResponse")]
pub struct JsonOptimizeRoutesResponse {
    /// Ordered stops keyed by vehicle index. Keys serialize as strings in
    /// numeric order.
    pub routes: BTreeMap<usize, Vec<JsonCoordinates>>,
}

impl JsonOptimizeRoutesRequest {
    #[instrument(skip_all, level = "debug")]
    pub fn solve(&self) -> Result<JsonOptimizeRoutesResponse, RouteError> {
        let n_vehicles = usize::try_from(self.n_vehicles)
            .ok()
            .filter(|n| *n > 0)
            .ok_or_else(|| RouteError::invalid_input("n_vehicles must be greater than 0"))?;

        let points = self.locations.iter().map(Point::from).collect::<Vec<_>>();
        let routes = partition_routes(&points, n_vehicles)?;

        Ok(JsonOptimizeRoutesResponse::from(routes.as_slice()))
    }
}

impl From<&[VehicleRoute]> for JsonOptimizeRoutesResponse {
    fn from(routes: &[VehicleRoute]) -> Self {
        JsonOptimizeRoutesResponse {
            routes: routes
                .iter()
                .map(|route| {
                    (
                        route.vehicle_index,
                        route.tour.points.iter().map(Point::to_lat_long).collect(),
                    )
                })
                .collect(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename = "RouteRequest")]
pub struct JsonRouteRequest {
    pub vehicle_id: String,
    pub start_location: JsonLocation,
    pub end_location: JsonLocation,

    /// Average speed in km/h.
    pub avg_speed: f64,

    /// ISO-8601 arrival timestamp, UTC when no offset is given.
    pub arrival_time: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename = "RouteResponse")]
pub struct JsonRouteResponse {
    pub vehicle_id: String,
    pub route: Vec<JsonCoordinates>,
    pub total_distance_km: f64,
    pub estimated_duration_hours: f64,
    pub departure_time: Timestamp,
    pub arrival_time: Timestamp,
}

impl JsonRouteRequest {
    pub fn plan(&self, config: &RouteConfig) -> Result<JsonRouteResponse, RouteError> {
        optimize_single_route(
            Point::from(&self.start_location),
            Point::from(&self.end_location),
            self.avg_speed,
            &self.arrival_time,
            &self.vehicle_id,
            config,
        )
        .map(JsonRouteResponse::from)
    }
}

impl From<SingleRoutePlan> for JsonRouteResponse {
    fn from(plan: SingleRoutePlan) -> Self {
        JsonRouteResponse {
            vehicle_id: plan.vehicle_id,
            route: plan.route.iter().map(Point::to_lat_long).collect(),
            total_distance_km: plan.total_distance.value(),
            estimated_duration_hours: plan.estimated_duration.value(),
            departure_time: plan.departure_time,
            arrival_time: plan.arrival_time,
        }
    }
}
