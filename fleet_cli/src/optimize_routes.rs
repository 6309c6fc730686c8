use std::path::PathBuf;

use clap::Args;
use comfy_table::Table;
use fleet_routing::json::types::{JsonOptimizeRoutesRequest, JsonOptimizeRoutesResponse};
use tracing::info;

use crate::file_utils::read_json;

#[derive(Args)]
pub struct OptimizeRoutesArgs {
    /// JSON document with `locations` and `n_vehicles`
    #[arg(short, long)]
    input: PathBuf,

    /// Overrides `n_vehicles` from the input document
    #[arg(short, long)]
    vehicles: Option<i64>,

    /// Print the JSON response instead of tables
    #[arg(long)]
    json: bool,
}

pub fn run(args: OptimizeRoutesArgs) -> Result<(), anyhow::Error> {
    info!("Optimizing routes from {:?}", args.input);

    let mut request: JsonOptimizeRoutesRequest = read_json(&args.input)?;
    if let Some(vehicles) = args.vehicles {
        request.n_vehicles = vehicles;
    }

    let response = request.solve()?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&response)?);
    } else {
        println!("{}", render_routes(&response));
    }

    Ok(())
}

fn render_routes(response: &JsonOptimizeRoutesResponse) -> String {
    if response.routes.is_empty() {
        return String::from("No locations to route");
    }

    let mut sections = Vec::with_capacity(response.routes.len());

    for (vehicle, stops) in &response.routes {
        let mut table = Table::new();
        table.set_header(vec!["Stop", "Lat", "Long"]);

        for (index, [lat, long]) in stops.iter().enumerate() {
            table.add_row(vec![index.to_string(), lat.to_string(), long.to_string()]);
        }

        sections.push(format!("Vehicle {vehicle}\n{table}"));
    }

    sections.join("\n\n")
}
