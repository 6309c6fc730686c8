use std::{net::SocketAddr, path::PathBuf};

use axum::http::HeaderValue;
use fleet_routing::config::RouteConfig;
use thiserror::Error;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tracing::Level;

const DEFAULT_BIND_ADDR: &str = "127.0.0.1:8000";
const DEFAULT_MODEL_PATH: &str = "maintenance_model.json";
const DEFAULT_CORS_ORIGINS: &str = "http://localhost:5173,http://127.0.0.1:5173";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {key}: {message}")]
    InvalidValue { key: &'static str, message: String },
}

#[derive(Debug, Clone, PartialEq)]
pub enum CorsOrigins {
    Any,
    List(Vec<HeaderValue>),
}

#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub bind_addr: SocketAddr,
    pub model_path: PathBuf,
    pub route_config: RouteConfig,
    pub cors_origins: CorsOrigins,
    pub log_level: Level,
}

impl ApiConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let bind_addr = parse_value(
            "FLEET_API_ADDR",
            lookup("FLEET_API_ADDR").as_deref().unwrap_or(DEFAULT_BIND_ADDR),
            |value| value.parse::<SocketAddr>().map_err(|err| err.to_string()),
        )?;

        let model_path = PathBuf::from(
            lookup("FLEET_MODEL_PATH").unwrap_or_else(|| DEFAULT_MODEL_PATH.to_owned()),
        );

        let route_config = match lookup("FLEET_KM_PER_DEGREE") {
            Some(value) => parse_value("FLEET_KM_PER_DEGREE", &value, |value| {
                let km_per_degree = value.parse::<f64>().map_err(|err| err.to_string())?;
                RouteConfig::new(km_per_degree).map_err(|err| err.to_string())
            })?,
            None => RouteConfig::default(),
        };

        let cors_origins = parse_value(
            "FLEET_CORS_ORIGINS",
            lookup("FLEET_CORS_ORIGINS")
                .as_deref()
                .unwrap_or(DEFAULT_CORS_ORIGINS),
            parse_cors_origins,
        )?;

        let log_level = parse_value(
            "FLEET_LOG_LEVEL",
            lookup("FLEET_LOG_LEVEL").as_deref().unwrap_or("info"),
            |value| value.parse::<Level>().map_err(|err| err.to_string()),
        )?;

        Ok(ApiConfig {
            bind_addr,
            model_path,
            route_config,
            cors_origins,
            log_level,
        })
    }

    pub fn cors_layer(&self) -> CorsLayer {
        let allow_origin = match &self.cors_origins {
            CorsOrigins::Any => AllowOrigin::any(),
            CorsOrigins::List(origins) => AllowOrigin::list(origins.iter().cloned()),
        };

        CorsLayer::new()
            .allow_methods(Any)
            .allow_origin(allow_origin)
            .allow_headers(Any)
    }
}

fn parse_value<T>(
    key: &'static str,
    value: &str,
    parse: impl FnOnce(&str) -> Result<T, String>,
) -> Result<T, ConfigError> {
    parse(value.trim()).map_err(|message| ConfigError::InvalidValue { key, message })
}

fn parse_cors_origins(value: &str) -> Result<CorsOrigins, String> {
    let origins: Vec<&str> = value
        .split(',')
        .map(str::trim)
        .filter(|origin| !origin.is_empty())
        .collect();

    if origins.contains(&"*") {
        return Ok(CorsOrigins::Any);
    }

    origins
        .into_iter()
        .map(|origin| {
            HeaderValue::from_str(origin).map_err(|err| format!("origin `{origin}`: {err}"))
        })
        .collect::<Result<Vec<_>, _>>()
        .map(CorsOrigins::List)
}
