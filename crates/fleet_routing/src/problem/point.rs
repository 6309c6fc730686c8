use geo::{Distance, Euclidean};

/// A `(latitude, longitude)` pair. Stored with longitude on the x axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    point: geo::Point,
}

impl Point {
    pub fn from_lat_long(lat: f64, long: f64) -> Self {
        Self {
            point: geo::Point::new(long, lat),
        }
    }

    pub fn lat(&self) -> f64 {
        self.point.y()
    }

    pub fn long(&self) -> f64 {
        self.point.x()
    }

    /// Straight-line distance in coordinate units, no geodesic correction.
    pub fn euclidean_distance(&self, to: &Point) -> f64 {
        Euclidean.distance(self.point, to.point)
    }

    pub fn to_lat_long(&self) -> [f64; 2] {
        [self.lat(), self.long()]
    }
}

impl From<(f64, f64)> for Point {
    fn from((lat, long): (f64, f64)) -> Self {
        Point::from_lat_long(lat, long)
    }
}
