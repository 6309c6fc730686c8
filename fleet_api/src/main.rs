mod app;
mod config;
mod docs;
mod error;
mod health;
mod predict;
mod routes;
mod state;

use std::sync::Arc;

use axum::serve;
use fleet_maintenance::model::load_model;
use tracing::{info, warn};

use crate::app::{api_router, build_app};
use crate::config::ApiConfig;
use crate::state::AppState;

use mimalloc::MiMalloc;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::from_filename("./.env.local").ok();
    let config = ApiConfig::from_env()?;

    tracing_subscriber::fmt()
        .with_max_level(config.log_level)
        .init();
    aide::generate::on_error(|error| tracing::error!("{}", error));
    aide::generate::extract_schemas(true);

    if std::env::args().any(|a| a == "--generate-openapi") {
        let (_, api) = api_router();

        std::fs::create_dir_all("schemas")?;
        std::fs::write("schemas/openapi.json", serde_json::to_string_pretty(&api)?)?;
        info!("OpenAPI specification has been written to schemas/openapi.json");
        return Ok(());
    }

    let classifier = match load_model(&config.model_path) {
        Ok(classifier) => Some(classifier),
        Err(error) => {
            warn!(
                "Model not loaded from {}: {}. /predict will answer 503.",
                config.model_path.display(),
                error
            );
            None
        }
    };

    let state = Arc::new(AppState {
        route_config: config.route_config,
        classifier,
    });

    let app = build_app(state, config.cors_layer());

    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    info!("listening on {}", config.bind_addr);

    serve(listener, app).await?;

    Ok(())
}
