//! Route construction for the fleet service.
//!
//! Coordinates are `(latitude, longitude)` pairs treated as planar: every
//! distance is the straight-line Euclidean distance on raw degrees. Distances
//! are converted to kilometers with a single scale factor,
//! [`config::DEFAULT_KM_PER_DEGREE`] (111 km per degree) unless a
//! [`config::RouteConfig`] says otherwise.

pub mod config;
pub mod error;
pub mod json;
pub mod problem;
pub mod solver;
