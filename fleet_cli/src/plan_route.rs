use clap::Args;
use comfy_table::Table;
use fleet_routing::{
    config::{DEFAULT_KM_PER_DEGREE, RouteConfig},
    json::types::JsonRouteResponse,
    problem::point::Point,
    solver::single_route::{SingleRoutePlan, optimize_single_route},
};

use crate::parsers;

#[derive(Args)]
pub struct PlanRouteArgs {
    /// Start location as LAT,LONG
    #[arg(long, value_parser = parsers::parse_point, allow_hyphen_values = true)]
    start: Point,

    /// End location as LAT,LONG
    #[arg(long, value_parser = parsers::parse_point, allow_hyphen_values = true)]
    end: Point,

    /// Average speed in km/h
    #[arg(long)]
    speed: f64,

    /// Arrival time (e.g., "2025-06-10T10:00:00Z"), UTC when no offset is given
    #[arg(long)]
    arrival: String,

    #[arg(long, default_value = "cli")]
    vehicle_id: String,

    #[arg(long, default_value_t = DEFAULT_KM_PER_DEGREE)]
    km_per_degree: f64,

    /// Print the JSON response instead of a table
    #[arg(long)]
    json: bool,
}

pub fn run(args: PlanRouteArgs) -> Result<(), anyhow::Error> {
    let config = RouteConfig::new(args.km_per_degree)?;
    let plan = optimize_single_route(
        args.start,
        args.end,
        args.speed,
        &args.arrival,
        &args.vehicle_id,
        &config,
    )?;

    if args.json {
        println!(
            "{}",
            serde_json::to_string_pretty(&JsonRouteResponse::from(plan))?
        );
    } else {
        println!("{}", render_plan(&plan));
    }

    Ok(())
}

fn render_plan(plan: &SingleRoutePlan) -> Table {
    let [start, end] = plan.route;
    let mut table = Table::new();

    table.set_header(vec!["Vehicle", plan.vehicle_id.as_str()]);
    table.add_row(vec![
        "Start".to_owned(),
        format!("{}, {}", start.lat(), start.long()),
    ]);
    table.add_row(vec!["End".to_owned(), format!("{}, {}", end.lat(), end.long())]);
    table.add_row(vec![
        "Distance (km)".to_owned(),
        format!("{:.3}", plan.total_distance.value()),
    ]);
    table.add_row(vec![
        "Duration (h)".to_owned(),
        format!("{:.3}", plan.estimated_duration.value()),
    ]);
    table.add_row(vec!["Travel time".to_owned(), format!("{:#}", plan.travel_time)]);
    table.add_row(vec!["Departure".to_owned(), plan.departure_time.to_string()]);
    table.add_row(vec!["Arrival".to_owned(), plan.arrival_time.to_string()]);

    table
}
