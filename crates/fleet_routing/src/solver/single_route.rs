use jiff::{SignedDuration, Timestamp, civil, tz::TimeZone};
use tracing::{Level, debug, instrument};

use crate::{
    config::RouteConfig,
    error::RouteError,
    problem::{hours::Hours, kilometers::Kilometers, kmh::Kmh, point::Point},
};

#[derive(Debug, Clone, PartialEq)]
pub struct SingleRoutePlan {
    pub vehicle_id: String,
    pub route: [Point; 2],
    pub total_distance: Kilometers,
    pub estimated_duration: Hours,

    /// `estimated_duration` at nanosecond precision, the offset between
    /// departure and arrival.
    pub travel_time: SignedDuration,
    pub departure_time: Timestamp,
    pub arrival_time: Timestamp,
}

/// Reads an ISO-8601 timestamp. Date-times without an offset are taken as UTC.
pub fn parse_arrival_time(input: &str) -> Result<Timestamp, RouteError> {
    match input.parse::<Timestamp>() {
        Ok(timestamp) => Ok(timestamp),
        Err(source) => input
            .parse::<civil::DateTime>()
            .and_then(|datetime| datetime.to_zoned(TimeZone::UTC))
            .map(|zoned| zoned.timestamp())
            .map_err(|_| RouteError::MalformedInput {
                input: input.to_owned(),
                source,
            }),
    }
}

/// Estimates the straight trip from `start` to `end` that reaches `end` at
/// `arrival_time` when driving at `avg_speed` km/h.
#[instrument(skip(start, end, config), level = Level::DEBUG)]
pub fn optimize_single_route(
    start: Point,
    end: Point,
    avg_speed: f64,
    arrival_time: &str,
    vehicle_id: &str,
    config: &RouteConfig,
) -> Result<SingleRoutePlan, RouteError> {
    let speed = Kmh::try_new(avg_speed)?;
    let arrival_time = parse_arrival_time(arrival_time)?;

    let total_distance =
        Kilometers::from_degrees(start.euclidean_distance(&end), config.km_per_degree());
    let estimated_duration = total_distance / speed;
    let travel_time = estimated_duration.to_signed_duration()?;

    let departure_time = arrival_time.checked_sub(travel_time).map_err(|err| {
        RouteError::invalid_input(format!("departure time is out of range: {err}"))
    })?;

    debug!(
        distance_km = total_distance.value(),
        duration_hours = estimated_duration.value(),
        %departure_time,
        "single route planned"
    );

    Ok(SingleRoutePlan {
        vehicle_id: vehicle_id.to_owned(),
        route: [start, end],
        total_distance,
        estimated_duration,
        travel_time,
        departure_time,
        arrival_time,
    })
}
