pub mod post_predict;

use std::sync::Arc;

use aide::axum::{ApiRouter, routing::post};

use crate::{predict::post_predict::post_predict_handler, state::AppState};

pub fn predict_routes() -> ApiRouter<Arc<AppState>> {
    aide::generate::infer_responses(true);
    let router = ApiRouter::new().api_route("/predict", post(post_predict_handler));
    aide::generate::infer_responses(false);

    router
}
