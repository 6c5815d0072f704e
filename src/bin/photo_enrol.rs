//! Photo enrolment binary.

use clap::Parser;
use photo_enrol::{workflow, ApiClient, Config};
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Enrol a synthetic user into the iProov verification service.
#[derive(Parser, Debug)]
#[command(name = "photo-enrol", version, about)]
struct Args {
    /// Delete the user again after enrolment.
    #[arg(short = 'd', long = "delete_user")]
    delete_user: bool,
}

fn init_tracing(filter: &str) {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(filter))
        .with(tracing_subscriber::fmt::layer())
        .init();
}

#[tokio::main]
async fn main() {
    let args = Args::parse();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            // No LOG_LEVEL available yet; report the failure at the default level.
            init_tracing("info");
            error!(error = %e, "FATAL: config error, fix env vars or the .env file");
            std::process::exit(1);
        }
    };

    init_tracing(&config.log_level);
    info!(region = %config.region, source = %config.image_source, "configuration loaded");

    let client = match ApiClient::new(config.base_url()) {
        Ok(client) => client,
        Err(e) => {
            error!(error = %e, "failed to build HTTP client");
            std::process::exit(1);
        }
    };

    if let Err(e) = workflow::run(&config, &client, args.delete_user).await {
        error!(error = %e, "enrolment aborted");
        std::process::exit(1);
    }
}
