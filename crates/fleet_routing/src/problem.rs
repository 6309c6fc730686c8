pub mod hours;
pub mod kilometers;
pub mod kmh;
pub mod point;
