use aide::OperationOutput;
use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use fleet_maintenance::error::MaintenanceError;
use fleet_routing::error::RouteError;
use serde_json::json;

#[derive(Debug)]
pub enum ApiError {
    BadRequest(String),
    InternalServerError(String),
    ServiceUnavailable(String),
}

impl From<RouteError> for ApiError {
    fn from(error: RouteError) -> Self {
        ApiError::BadRequest(error.to_string())
    }
}

impl From<MaintenanceError> for ApiError {
    fn from(error: MaintenanceError) -> Self {
        ApiError::InternalServerError(error.to_string())
    }
}

impl OperationOutput for ApiError {
    type Inner = Self;
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::InternalServerError(message) => {
                tracing::error!("{}", message);
                (StatusCode::INTERNAL_SERVER_ERROR, message)
            }
            ApiError::BadRequest(message) => (StatusCode::BAD_REQUEST, message),
            ApiError::ServiceUnavailable(message) => (StatusCode::SERVICE_UNAVAILABLE, message),
        };

        (status, Json(json!({ "detail": message }))).into_response()
    }
}
