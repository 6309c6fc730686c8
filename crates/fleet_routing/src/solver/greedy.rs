use fixedbitset::FixedBitSet;
use tracing::{Level, debug, instrument};

use crate::{error::RouteError, problem::point::Point};

/// Visiting order produced by [`solve_tsp_greedy`].
#[derive(Debug, Clone, PartialEq)]
pub struct GreedyTour {
    pub points: Vec<Point>,

    /// Sum of consecutive Euclidean distances, in coordinate units.
    pub total_distance: f64,
}

/// Nearest-neighbor tour starting at `points[0]`.
///
/// From the current position the closest unvisited point is taken next; on
/// equal distances the one that appears first in `points` wins. Points are
/// tracked by position, so duplicated coordinates are all visited.
#[instrument(skip_all, level = Level::DEBUG, fields(points = points.len()))]
pub fn solve_tsp_greedy(points: &[Point]) -> Result<GreedyTour, RouteError> {
    let Some(origin) = points.first() else {
        return Err(RouteError::invalid_input("points must not be empty"));
    };

    let mut visited = FixedBitSet::with_capacity(points.len());
    visited.insert(0);

    let mut route = Vec::with_capacity(points.len());
    route.push(*origin);

    let mut current = 0;
    let mut total_distance = 0.0;

    while route.len() < points.len() {
        let mut nearest: Option<(usize, f64)> = None;

        for (index, candidate) in points.iter().enumerate() {
            if visited.contains(index) {
                continue;
            }

            let distance = points[current].euclidean_distance(candidate);
            if nearest.is_none_or(|(_, best)| distance < best) {
                nearest = Some((index, distance));
            }
        }

        let Some((next, distance)) = nearest else {
            break;
        };

        visited.insert(next);
        route.push(points[next]);
        total_distance += distance;
        current = next;
    }

    debug!(total_distance, "greedy tour built");

    Ok(GreedyTour {
        points: route,
        total_distance,
    })
}
