use jiff::SignedDuration;

use crate::error::RouteError;

#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Hours(f64);

impl Hours {
    pub fn new(value: f64) -> Self {
        Hours(value)
    }

    pub fn value(&self) -> f64 {
        self.0
    }

    pub fn to_signed_duration(self) -> Result<SignedDuration, RouteError> {
        SignedDuration::try_from_secs_f64(self.0 * 3600.0).map_err(|err| {
            RouteError::invalid_input(format!("duration of {} hours is out of range: {err}", self.0))
        })
    }
}
