use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use nearstore_app::{
    Controller, FixedPosition, LocateOutcome, MapPresenter, TracingPresenter,
};
use nearstore_core::{load_app_config, load_stores, Coordinate, Environment};
use nearstore_geocode::GeocodeClient;

#[derive(Debug, Parser)]
#[command(name = "nearstore-cli")]
#[command(about = "Find the nearest store by coordinate or address")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// List the validated store dataset.
    Stores,
    /// Locate the store nearest to an explicit coordinate.
    Nearest {
        #[arg(long)]
        lat: f64,
        #[arg(long)]
        lng: f64,
    },
    /// Geocode a free-text address and locate the nearest store.
    Search { query: String },
}

/// `RUST_LOG` wins when set and parseable; otherwise the configured
/// `NEARSTORE_LOG_LEVEL` value drives the filter.
fn build_env_filter(
    rust_log: Option<String>,
    config_level: &str,
) -> Result<EnvFilter, tracing_subscriber::filter::ParseError> {
    match rust_log {
        Some(directives) => {
            EnvFilter::try_new(directives).or_else(|_| EnvFilter::try_new(config_level))
        }
        None => EnvFilter::try_new(config_level),
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = load_app_config()?;
    let env_filter = build_env_filter(std::env::var("RUST_LOG").ok(), &config.log_level)?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_ansi(!matches!(config.env, Environment::Production))
        .init();

    let stores = load_stores(&config.stores_path)?;
    tracing::info!(count = stores.len(), path = %config.stores_path.display(), "store dataset loaded");

    let mut controller = Controller::new(stores);
    let mut presenter = TracingPresenter;

    let cli = Cli::parse();
    let outcome = match cli.command {
        Commands::Stores => {
            for store in controller.stores() {
                let status = if store.coming_soon { " (coming soon)" } else { "" };
                println!(
                    "{:>4}  {}{}  ({:.4}, {:.4})",
                    store.id,
                    store.name,
                    status,
                    store.coordinate.latitude,
                    store.coordinate.longitude
                );
            }
            return Ok(());
        }
        Commands::Nearest { lat, lng } => {
            let here = FixedPosition(Coordinate::new(lat, lng));
            controller.locate_by_device(&here).await
        }
        Commands::Search { query } => {
            let geocoder = GeocodeClient::with_base_url(
                &config.geocoder_country_codes,
                config.geocoder_timeout_secs,
                &config.user_agent,
                &config.geocoder_base_url,
            )?;
            controller.locate_by_address(&geocoder, &query).await
        }
    };

    presenter.present(&controller.snapshot());
    report(&controller, outcome);

    Ok(())
}

fn report(controller: &Controller, outcome: LocateOutcome) {
    match outcome {
        LocateOutcome::Centered {
            store_id,
            distance_miles,
        } => {
            let store = controller
                .stores()
                .iter()
                .find(|s| s.id == store_id)
                .map_or("<unknown>", |s| s.name.as_str());
            println!("nearest store: {store} ({distance_miles:.1} mi away)");
        }
        LocateOutcome::EmptyQuery => println!("empty query; nothing to search"),
        LocateOutcome::AddressNotFound => println!("address not found, please try again"),
        LocateOutcome::LookupFailed => println!("address lookup failed; see logs"),
        LocateOutcome::PermissionNoticeShown => {
            println!("location access denied; enable location services and retry");
        }
        LocateOutcome::Unsupported => println!("geolocation is not supported here"),
        LocateOutcome::NoStores => println!("the store dataset is empty"),
        LocateOutcome::Busy => println!("a lookup is already in progress"),
    }
}
