mod config;
mod lookup;
mod report;

use chrono::Local;
use clap::{Parser, Subcommand};
use std::process::ExitCode;

use crate::config::Config;
use crate::lookup::{Coordinates, NetworkAddress, Orchestrator, PassTimeResult};

#[derive(Parser)]
#[command(name = "iss-overhead")]
#[command(about = "Upcoming ISS passes over your current location")]
struct Cli {
    /// YAML config file with endpoint and HTTP settings
    #[arg(short, long, global = true)]
    config: Option<String>,
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Find the next passes for this machine's location (default)
    Next,
    /// Print this machine's public IP address
    Ip,
    /// Print coordinates for an IP address (defaults to this machine's)
    Coords {
        #[arg(long)]
        ip: Option<String>,
    },
    /// Print the next passes for fixed coordinates
    Passes {
        #[arg(long, allow_hyphen_values = true)]
        lat: f64,
        #[arg(long, allow_hyphen_values = true)]
        lon: f64,
    },
}

#[tokio::main]
async fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => match Config::from_file(path) {
            Ok(c) => c,
            Err(e) => {
                eprintln!("Error loading config {}: {}", path, e);
                return ExitCode::FAILURE;
            }
        },
        None => Config::default(),
    };

    let orchestrator = match Orchestrator::from_config(&config) {
        Ok(o) => o,
        Err(e) => {
            eprintln!("Error building HTTP client: {}", e);
            return ExitCode::FAILURE;
        }
    };

    match cli.command.unwrap_or(Commands::Next) {
        Commands::Next => next(&orchestrator).await,
        Commands::Ip => ip(&orchestrator).await,
        Commands::Coords { ip } => coords(&orchestrator, ip).await,
        Commands::Passes { lat, lon } => {
            passes(&orchestrator, Coordinates { latitude: lat, longitude: lon }).await
        }
    }

    ExitCode::SUCCESS
}

async fn next(orchestrator: &Orchestrator) {
    match orchestrator.next_passes().await {
        Ok(passes) => print_passes(&passes),
        Err(e) => println!("It didn't work: {}", e),
    }
}

async fn ip(orchestrator: &Orchestrator) {
    match orchestrator.my_address().await {
        Ok(address) => println!("{}", address),
        Err(e) => println!("It didn't work: {}", e),
    }
}

async fn coords(orchestrator: &Orchestrator, ip: Option<String>) {
    match orchestrator.coordinates_for(ip.map(NetworkAddress::new)).await {
        Ok(c) => println!("{}, {}", c.latitude, c.longitude),
        Err(e) => println!("It didn't work: {}", e),
    }
}

async fn passes(orchestrator: &Orchestrator, coords: Coordinates) {
    match orchestrator.passes_over(coords).await {
        Ok(passes) => print_passes(&passes),
        Err(e) => println!("It didn't work: {}", e),
    }
}

fn print_passes(passes: &PassTimeResult) {
    if passes.is_empty() {
        log::info!("No upcoming passes reported");
    }
    for pass in passes {
        println!("{}", report::pass_line(pass, &Local));
    }
}
