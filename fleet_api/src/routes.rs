pub mod optimize_route;
pub mod optimize_routes;

use std::sync::Arc;

use aide::axum::{ApiRouter, routing::post};

use crate::{
    routes::{
        optimize_route::optimize_route_handler, optimize_routes::optimize_routes_handler,
    },
    state::AppState,
};

pub fn route_optimization_routes() -> ApiRouter<Arc<AppState>> {
    aide::generate::infer_responses(true);
    let router = ApiRouter::new()
        .api_route("/optimize-routes", post(optimize_routes_handler))
        .api_route("/optimize-route", post(optimize_route_handler));
    aide::generate::infer_responses(false);

    router
}
