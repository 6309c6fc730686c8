use clap::{CommandFactory, Parser, Subcommand};

use mimalloc::MiMalloc;

use crate::{
    generate::GenerateSubcommands, optimize_routes::OptimizeRoutesArgs,
    plan_route::PlanRouteArgs, predict::PredictArgs,
};

mod file_utils;
mod generate;
mod optimize_routes;
mod parsers;
mod plan_route;
mod predict;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

#[derive(Parser)]
#[clap(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    #[arg(short, long, global = true)]
    debug: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Split locations across vehicles and order each vehicle's stops
    OptimizeRoutes {
        #[command(flatten)]
        args: OptimizeRoutesArgs,
    },
    /// Estimate distance, duration and departure time of a single trip
    PlanRoute {
        #[command(flatten)]
        args: PlanRouteArgs,
    },
    /// Run the maintenance classifier on a vehicle record
    Predict {
        #[command(flatten)]
        args: PredictArgs,
    },
    #[command(visible_alias = "g")]
    Generate {
        #[command(subcommand)]
        commands: GenerateSubcommands,
    },
}

fn main() -> Result<(), anyhow::Error> {
    dotenvy::from_filename("./.env.local").ok();

    let cli = Cli::parse();
    tracing_subscriber::fmt()
        .with_max_level(if cli.debug {
            tracing::Level::DEBUG
        } else {
            tracing::Level::INFO
        })
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Some(Commands::OptimizeRoutes { args }) => optimize_routes::run(args)?,
        Some(Commands::PlanRoute { args }) => plan_route::run(args)?,
        Some(Commands::Predict { args }) => predict::run(args)?,
        Some(Commands::Generate { commands }) => generate::run(commands)?,
        None => Cli::command().print_help()?,
    }

    Ok(())
}
