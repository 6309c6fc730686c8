use fleet_routing::problem::point::Point;

/// Parses a `LAT,LONG` pair.
pub fn parse_point(input: &str) -> Result<Point, String> {
    let (lat, long) = input
        .split_once(',')
        .ok_or_else(|| String::from("Expected LAT,LONG"))?;

    let lat = parse_coordinate(lat)?;
    let long = parse_coordinate(long)?;

    Ok(Point::from_lat_long(lat, long))
}

fn parse_coordinate(input: &str) -> Result<f64, String> {
    match input.trim().parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(format!("Invalid coordinate '{}'", input.trim())),
    }
}
