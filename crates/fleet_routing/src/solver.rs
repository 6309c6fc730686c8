pub mod greedy;
pub mod partition;
pub mod single_route;
