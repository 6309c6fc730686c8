use schemars::schema_for;
use serde_json::json;

use crate::json::types;

pub fn generate_json_schema() -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&json!({
        "optimize_routes": {
            "request": schema_for!(types::JsonOptimizeRoutesRequest),
            "response": schema_for!(types::JsonOptimizeRoutesResponse),
        },
        "optimize_route": {
            "request": schema_for!(types::JsonRouteRequest),
            "response": schema_for!(types::JsonRouteResponse),
        },
    }))
}
