use crate::error::RouteError;

#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Kmh(f64);

impl Kmh {
    /// Speeds must be strictly positive so travel times stay finite.
    pub fn try_new(value: f64) -> Result<Self, RouteError> {
        if value.is_finite() && value > 0.0 {
            Ok(Kmh(value))
        } else {
            Err(RouteError::invalid_input(format!(
                "avg_speed must be greater than 0, got {value}"
            )))
        }
    }

    pub fn value(&self) -> f64 {
        self.0
    }
}
