use crate::error::RouteError;

/// Kilometers covered by one unit of coordinate distance.
pub const DEFAULT_KM_PER_DEGREE: f64 = 111.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RouteConfig {
    km_per_degree: f64,
}

impl RouteConfig {
    pub fn new(km_per_degree: f64) -> Result<Self, RouteError> {
        if !km_per_degree.is_finite() || km_per_degree <= 0.0 {
            return Err(RouteError::invalid_input(format!(
                "km_per_degree must be a positive number, got {km_per_degree}"
            )));
        }

        Ok(RouteConfig { km_per_degree })
    }

    pub fn km_per_degree(&self) -> f64 {
        self.km_per_degree
    }
}

impl Default for RouteConfig {
    fn default() -> Self {
        RouteConfig {
            km_per_degree: DEFAULT_KM_PER_DEGREE,
        }
    }
}
