use std::sync::Arc;

use aide::{
    axum::{ApiRouter, routing::get},
    openapi::OpenApi,
    transform::TransformOpenApi,
};
use axum::{Extension, Router};
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;

use crate::{
    docs::docs_routes, health::health_handler, predict::predict_routes,
    routes::route_optimization_routes, state::AppState,
};

/// All routes of the service together with the OpenAPI document they describe.
pub fn api_router() -> (Router<Arc<AppState>>, OpenApi) {
    let mut api = OpenApi::default();

    let router = ApiRouter::new()
        .nest_api_service("/docs", docs_routes())
        .api_route("/health", get(health_handler))
        .merge(route_optimization_routes())
        .merge(predict_routes())
        .finish_api_with(&mut api, api_docs);

    (router, api)
}

pub fn build_app(state: Arc<AppState>, cors_layer: CorsLayer) -> Router {
    let (router, api) = api_router();

    router
        .layer(ServiceBuilder::new().layer(cors_layer))
        .layer(Extension(Arc::new(api)))
        .with_state(state)
}

fn api_docs(api: TransformOpenApi) -> TransformOpenApi {
    api.title("Fleet Management ML API")
        .description("Vehicle predictive maintenance and route optimization")
}

#[cfg(test)]
mod tests {
    use axum::{
        body::{Body, to_bytes},
        http::{Method, Request, StatusCode, header},
    };
    use fleet_maintenance::{classifier::SharedClassifier, model::parse_model};
    use fleet_routing::config::RouteConfig;
    use serde_json::{Value, json};
    use tower::ServiceExt;

    use super::*;
    use crate::config::ApiConfig;

    const MODEL_JSON: &str = r#"{
        "kind": "logistic_regression",
        "features": ["engine_health", "battery_health", "mileage", "vehicle_age"],
        "coefficients": [-0.08, -0.04, 0.00002, 0.15],
        "intercept": 6.0
    }"#;

    fn test_app(classifier: Option<SharedClassifier>) -> Router {
        let config = ApiConfig::from_lookup(|_| None).unwrap();
        let state = Arc::new(AppState {
            route_config: RouteConfig::default(),
            classifier,
        });

        build_app(state, config.cors_layer())
    }

    fn worn_vehicle() -> Value {
        json!({
            "mileage": 180000.0,
            "vehicle_age": 9,
            "fuel_efficiency": 9.5,
            "battery_health": 40.0,
            "engine_health": 35.0,
            "avg_speed": 72.0,
            "avg_accel": 2.8,
            "odometer_reading": 181250.0
        })
    }

    async fn post_json(app: Router, uri: &str, body: Value) -> (StatusCode, Value) {
        let request = Request::builder()
            .method(Method::POST)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap();

        send(app, request).await
    }

    async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
        let response = app.oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);

        (status, body)
    }

    #[tokio::test]
    async fn test_optimize_routes() {
        let (status, body) = post_json(
            test_app(None),
            "/optimize-routes",
            json!({
                "locations": [
                    { "lat": 0.0, "long": 0.0 },
                    { "lat": 3.0, "long": 0.0 },
                    { "lat": 1.0, "long": 0.0 },
                    { "lat": 5.0, "long": 5.0 },
                    { "lat": 6.0, "long": 6.0 }
                ],
                "n_vehicles": 2
            }),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body,
            json!({
                "routes": {
                    "0": [[0.0, 0.0], [1.0, 0.0], [3.0, 0.0]],
                    "1": [[5.0, 5.0], [6.0, 6.0]]
                }
            })
        );
    }

    #[tokio::test]
    async fn test_optimize_routes_empty_locations() {
        let (status, body) = post_json(
            test_app(None),
            "/optimize-routes",
            json!({ "locations": [], "n_vehicles": 2 }),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({ "routes": {} }));
    }

    #[tokio::test]
    async fn test_optimize_routes_rejects_zero_vehicles() {
        let (status, body) = post_json(
            test_app(None),
            "/optimize-routes",
            json!({ "locations": [{ "lat": 0.0, "long": 0.0 }], "n_vehicles": 0 }),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(
            body["detail"]
                .as_str()
                .unwrap()
                .contains("n_vehicles must be greater than 0")
        );
    }

    #[tokio::test]
    async fn test_optimize_route() {
        let (status, body) = post_json(
            test_app(None),
            "/optimize-route",
            json!({
                "vehicle_id": "VH-042",
                "start_location": { "lat": 0.0, "long": 0.0 },
                "end_location": { "lat": 1.0, "long": 0.0 },
                "avg_speed": 55.5,
                "arrival_time": "2025-06-10T10:00:00Z"
            }),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["vehicle_id"], json!("VH-042"));
        assert_eq!(body["total_distance_km"], json!(111.0));
        assert_eq!(body["estimated_duration_hours"], json!(2.0));
        assert_eq!(body["departure_time"], json!("2025-06-10T08:00:00Z"));
        assert_eq!(body["arrival_time"], json!("2025-06-10T10:00:00Z"));
    }

    #[tokio::test]
    async fn test_optimize_route_rejects_zero_speed() {
        let (status, _) = post_json(
            test_app(None),
            "/optimize-route",
            json!({
                "vehicle_id": "VH-042",
                "start_location": { "lat": 0.0, "long": 0.0 },
                "end_location": { "lat": 1.0, "long": 0.0 },
                "avg_speed": 0.0,
                "arrival_time": "2025-06-10T10:00:00Z"
            }),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_optimize_route_rejects_malformed_arrival() {
        let (status, body) = post_json(
            test_app(None),
            "/optimize-route",
            json!({
                "vehicle_id": "VH-042",
                "start_location": { "lat": 0.0, "long": 0.0 },
                "end_location": { "lat": 1.0, "long": 0.0 },
                "avg_speed": 50.0,
                "arrival_time": "next tuesday"
            }),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["detail"].as_str().unwrap().contains("next tuesday"));
    }

    #[tokio::test]
    async fn test_predict_without_model() {
        let (status, body) = post_json(test_app(None), "/predict", worn_vehicle()).await;

        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(body, json!({ "detail": "Model not loaded" }));
    }

    #[tokio::test]
    async fn test_predict() {
        let classifier = parse_model(MODEL_JSON).unwrap();
        let (status, body) = post_json(test_app(Some(classifier)), "/predict", worn_vehicle()).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["needs_maintenance"], json!(true));
        assert!(body["maintenance_probability"].as_f64().unwrap() > 0.5);
        assert_eq!(body["input_data"], worn_vehicle());
    }

    #[tokio::test]
    async fn test_health() {
        let request = Request::builder()
            .uri("/health")
            .body(Body::empty())
            .unwrap();
        let (status, body) = send(test_app(None), request).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({ "status": "ok", "model_loaded": false }));
    }

    #[tokio::test]
    async fn test_openapi_document() {
        let request = Request::builder()
            .uri("/docs/private/api.json")
            .body(Body::empty())
            .unwrap();
        let (status, body) = send(test_app(None), request).await;

        assert_eq!(status, StatusCode::OK);
        for path in ["/optimize-routes", "/optimize-route", "/predict", "/health"] {
            assert!(body["paths"].get(path).is_some(), "missing {path}");
        }
    }

    #[tokio::test]
    async fn test_docs_pages() {
        for uri in ["/docs", "/docs/swagger"] {
            let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
            let response = test_app(None).oneshot(request).await.unwrap();

            assert_eq!(response.status(), StatusCode::OK, "{uri}");
        }

        let request = Request::builder()
            .uri("/docs/private/api.json")
            .body(Body::empty())
            .unwrap();
        let (_, body) = send(test_app(None), request).await;

        let docs_operations = body["paths"]
            .as_object()
            .unwrap()
            .values()
            .filter(|item| item["get"]["tags"] == json!(["docs"]))
            .count();
        assert_eq!(docs_operations, 2);
    }

    #[tokio::test]
    async fn test_cors_preflight() {
        let request = Request::builder()
            .method(Method::OPTIONS)
            .uri("/optimize-routes")
            .header(header::ORIGIN, "http://localhost:5173")
            .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
            .body(Body::empty())
            .unwrap();

        let response = test_app(None).oneshot(request).await.unwrap();

        assert_eq!(
            response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN],
            "http://localhost:5173"
        );
    }
}
