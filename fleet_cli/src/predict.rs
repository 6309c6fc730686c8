use std::path::PathBuf;

use clap::Args;
use comfy_table::Table;
use fleet_maintenance::{
    model::load_model,
    prediction::{PredictionResponse, predict_maintenance},
    vehicle_data::{Feature, VehicleData},
};

use crate::file_utils::read_json;

#[derive(Args)]
pub struct PredictArgs {
    /// Model document (`"kind": "logistic_regression"`)
    #[arg(short, long)]
    model: PathBuf,

    /// Vehicle record as JSON
    #[arg(short, long)]
    input: PathBuf,

    /// Print the JSON response instead of a table
    #[arg(long)]
    json: bool,
}

pub fn run(args: PredictArgs) -> Result<(), anyhow::Error> {
    let classifier = load_model(&args.model)?;
    let data: VehicleData = read_json(&args.input)?;
    let response = predict_maintenance(classifier.as_ref(), data)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&response)?);
    } else {
        println!("{}", render_prediction(&response));
    }

    Ok(())
}

fn render_prediction(response: &PredictionResponse) -> Table {
    let mut table = Table::new();

    table.set_header(vec![
        "Needs maintenance",
        if response.needs_maintenance { "yes" } else { "no" },
    ]);

    if let Some(probability) = response.maintenance_probability {
        table.add_row(vec!["Probability".to_owned(), format!("{probability:.3}")]);
    }

    for feature in Feature::ALL {
        table.add_row(vec![
            feature.name().to_owned(),
            feature.value(&response.input_data).to_string(),
        ]);
    }

    table
}
