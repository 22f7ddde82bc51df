//! Route display CLI
//!
//! Plans routes against the route display backend and renders them to the
//! terminal and, optionally, a GeoJSON file.

#![allow(clippy::print_stdout)]

mod display;

use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use application::ports::DisplayPort;
use application::services::RouteDisplayService;
use clap::{Parser, Subcommand};
use domain::value_objects::GeoLocation;
use infrastructure::{
    AppConfig, GeocoderAdapter, MapProvider, RoutePlannerAdapter, TrafficAdapter, WeatherAdapter,
    create_map_adapter, init_telemetry,
};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader};
use tokio::task::JoinSet;
use tokio::time::MissedTickBehavior;
use tracing::{debug, info};

use crate::display::TerminalDisplay;

/// Route display CLI
#[derive(Parser)]
#[command(name = "route-display")]
#[command(
    author,
    version,
    about = "Plan and display routes from the route display backend",
    long_about = None
)]
struct Cli {
    /// Verbosity level
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Configuration file (defaults to ./route-display.toml when present)
    #[arg(short, long, env = "ROUTE_DISPLAY_CONFIG")]
    config: Option<PathBuf>,

    /// Override the backend base URL
    #[arg(long)]
    base_url: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Plan a route between two addresses
    ///
    /// Example: route-display plan "Tiananmen Square" "Summer Palace"
    Plan {
        /// Start address
        from: String,

        /// Destination address
        to: String,

        /// Do not ask the backend to weigh the weather
        #[arg(long)]
        no_weather: bool,

        /// Write the map as GeoJSON to this file
        #[arg(long)]
        geojson: Option<PathBuf>,
    },

    /// Show current weather and traffic
    Conditions {
        /// Latitude (defaults to the configured location)
        #[arg(long, requires = "lon", allow_hyphen_values = true)]
        lat: Option<f64>,

        /// Longitude (defaults to the configured location)
        #[arg(long, requires = "lat", allow_hyphen_values = true)]
        lon: Option<f64>,
    },

    /// Read "from -> to" lines from stdin; a new line supersedes pending ones
    Interactive {
        /// Write the map as GeoJSON to this file
        #[arg(long)]
        geojson: Option<PathBuf>,
    },
}

/// Determine log filter level from verbosity count
const fn log_filter_from_verbosity(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// How often interactive mode refreshes weather and traffic
const CONDITIONS_REFRESH_INTERVAL: Duration = Duration::from_secs(5 * 60);

/// Split an interactive line into start and destination
fn parse_route_line(line: &str) -> Option<(&str, &str)> {
    let (from, to) = line.split_once("->")?;
    let (from, to) = (from.trim(), to.trim());
    (!from.is_empty() && !to.is_empty()).then_some((from, to))
}

fn build_service(
    config: &AppConfig,
    display: Arc<dyn DisplayPort>,
) -> anyhow::Result<RouteDisplayService> {
    let routing = config.backend.routing();
    let conditions = config.backend.conditions();

    let geocoder = GeocoderAdapter::from_config(&routing).context("creating geocoding client")?;
    let planner = RoutePlannerAdapter::from_config(&routing).context("creating route client")?;
    let weather = WeatherAdapter::from_config(&conditions).context("creating weather client")?;
    let traffic = TrafficAdapter::from_config(&conditions).context("creating traffic client")?;

    Ok(RouteDisplayService::new(
        Arc::new(geocoder),
        Arc::new(planner),
        create_map_adapter(&config.map),
        display,
        config.route.display_config(),
    )
    .with_weather(Arc::new(weather))
    .with_traffic(Arc::new(traffic)))
}

fn use_geojson_file(config: &mut AppConfig, path: Option<PathBuf>) {
    if let Some(path) = path {
        config.map.provider = MapProvider::GeoJson;
        config.map.output_path = Some(path);
    }
}

async fn run_interactive<R>(service: Arc<RouteDisplayService>, input: R) -> anyhow::Result<()>
where
    R: AsyncBufRead + Unpin,
{
    println!(
        "Enter routes as \"from -> to\", \"conditions\" for weather and traffic, \"quit\" to exit."
    );

    let mut lines = input.lines();
    let mut tasks = JoinSet::new();

    // The first tick completes immediately, so conditions show on startup
    let mut refresh = tokio::time::interval(CONDITIONS_REFRESH_INTERVAL);
    refresh.set_missed_tick_behavior(MissedTickBehavior::Delay);

    loop {
        let line = tokio::select! {
            biased;
            _ = refresh.tick() => {
                debug!("Periodic conditions refresh");
                service.refresh_conditions(None).await;
                continue;
            },
            line = lines.next_line() => line?,
        };
        let Some(line) = line else {
            break;
        };
        let line = line.trim();
        match line {
            "" => {},
            "quit" | "exit" => break,
            "conditions" => {
                service.refresh_conditions(None).await;
            },
            _ => match parse_route_line(line) {
                Some((from, to)) => {
                    let service = service.clone();
                    let (from, to) = (from.to_string(), to.to_string());
                    tasks.spawn(async move { service.plan_and_display(&from, &to).await });
                },
                None => println!("Expected \"from -> to\", got: {line}"),
            },
        }

        // Reap finished requests so the set does not grow without bound
        while let Some(done) = tasks.try_join_next() {
            if let Ok(Err(e)) = done {
                debug!(error = %e, "Interactive request ended without a route");
            }
        }
    }

    while let Some(done) = tasks.join_next().await {
        if let Err(e) = done.context("route task panicked")? {
            debug!(error = %e, "Interactive request ended without a route");
        }
    }
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    let mut config = AppConfig::load_from(cli.config.as_deref()).context("loading configuration")?;
    if cli.verbose > 0 {
        config.telemetry.log_filter = log_filter_from_verbosity(cli.verbose).to_string();
    }
    if let Some(base_url) = cli.base_url {
        config.backend.base_url = base_url;
        config.validate()?;
    }
    init_telemetry(&config.telemetry)?;

    let display: Arc<dyn DisplayPort> = Arc::new(TerminalDisplay::stdout());

    match cli.command {
        Commands::Plan {
            from,
            to,
            no_weather,
            geojson,
        } => {
            use_geojson_file(&mut config, geojson);
            if no_weather {
                config.route.consider_weather = false;
            }
            let service = build_service(&config, display)?;

            info!(%from, %to, "Planning route");
            if service.plan_and_display(&from, &to).await.is_err() {
                return Ok(ExitCode::FAILURE);
            }
            if let Some(path) = &config.map.output_path {
                println!("🗺️ Map written to {}", path.display());
            }
        },

        Commands::Conditions { lat, lon } => {
            let location = match (lat, lon) {
                (Some(lat), Some(lon)) => Some(GeoLocation::new(lat, lon)?),
                _ => None,
            };
            let service = build_service(&config, display)?;

            let report = service.refresh_conditions(location).await;
            if !report.is_complete() {
                return Ok(ExitCode::FAILURE);
            }
        },

        Commands::Interactive { geojson } => {
            use_geojson_file(&mut config, geojson);
            let service = Arc::new(build_service(&config, display)?);
            run_interactive(service, BufReader::new(tokio::io::stdin())).await?;
        },
    }

    Ok(ExitCode::SUCCESS)
}
