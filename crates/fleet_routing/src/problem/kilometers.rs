use std::ops::Div;

use crate::problem::{hours::Hours, kmh::Kmh};

#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Kilometers(f64);

impl Kilometers {
    pub fn new(value: f64) -> Self {
        Kilometers(value)
    }

    /// Scales a distance measured in coordinate degrees.
    pub fn from_degrees(degrees: f64, km_per_degree: f64) -> Self {
        Kilometers(degrees * km_per_degree)
    }

    pub fn value(&self) -> f64 {
        self.0
    }
}

impl Div<Kmh> for Kilometers {
    type Output = Hours;

    fn div(self, speed: Kmh) -> Hours {
        Hours::new(self.0 / speed.value())
    }
}
