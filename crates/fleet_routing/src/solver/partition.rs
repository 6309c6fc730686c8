use tracing::{Level, debug, instrument};

use crate::{
    error::RouteError,
    problem::point::Point,
    solver::greedy::{GreedyTour, solve_tsp_greedy},
};

#[derive(Debug, Clone, PartialEq)]
pub struct VehicleRoute {
    /// Zero-based position of the vehicle in the fleet.
    pub vehicle_index: usize,
    pub tour: GreedyTour,
}

/// Splits `points` into `n_vehicles` contiguous chunks of
/// `ceil(len / n_vehicles)` points, in input order, and routes each chunk on
/// its own. Vehicles left without points are absent from the result.
#[instrument(skip_all, level = Level::DEBUG, fields(points = points.len(), n_vehicles = n_vehicles))]
pub fn partition_routes(
    points: &[Point],
    n_vehicles: usize,
) -> Result<Vec<VehicleRoute>, RouteError> {
    if n_vehicles == 0 {
        return Err(RouteError::invalid_input(
            "n_vehicles must be greater than 0",
        ));
    }

    let chunk_size = points.len().div_ceil(n_vehicles).max(1);

    let routes = points
        .chunks(chunk_size)
        .enumerate()
        .map(|(vehicle_index, chunk)| {
            solve_tsp_greedy(chunk).map(|tour| VehicleRoute {
                vehicle_index,
                tour,
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    debug!(chunk_size, routes = routes.len(), "fleet partitioned");

    Ok(routes)
}
