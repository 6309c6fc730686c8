pub mod classifier;
pub mod error;
pub mod logistic_regression;
pub mod model;
pub mod prediction;
pub mod vehicle_data;

#[cfg(test)]
pub(crate) mod test_utils;
