use std::sync::Arc;

use aide::{
    axum::{
        ApiRouter, IntoApiResponse,
        routing::{get, get_with},
    },
    openapi::OpenApi,
    scalar::Scalar,
    swagger::Swagger,
    transform::TransformOperation,
};
use axum::{Extension, Json, response::IntoResponse};

const OPENAPI_JSON: &str = "/docs/private/api.json";
const DOCS_TITLE: &str = "Fleet API";

/// Interactive references under `/docs`, both reading the document served at
/// [`OPENAPI_JSON`].
pub fn docs_routes() -> ApiRouter {
    aide::generate::infer_responses(true);

    let router = ApiRouter::new()
        .api_route(
            "/",
            get_with(
                Scalar::new(OPENAPI_JSON)
                    .with_title(DOCS_TITLE)
                    .axum_handler(),
                |op| docs_page(op, "Scalar API reference"),
            ),
        )
        .api_route(
            "/swagger",
            get_with(
                Swagger::new(OPENAPI_JSON)
                    .with_title(DOCS_TITLE)
                    .axum_handler(),
                |op| docs_page(op, "Swagger UI"),
            ),
        )
        .route("/private/api.json", get(openapi_document));

    aide::generate::infer_responses(false);

    router
}

fn docs_page<'a>(op: TransformOperation<'a>, summary: &str) -> TransformOperation<'a> {
    op.summary(summary).tag("docs")
}

async fn openapi_document(Extension(api): Extension<Arc<OpenApi>>) -> impl IntoApiResponse {
    Json(api).into_response()
}
