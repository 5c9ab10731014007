//! llm-dispatch gateway binary

#![allow(missing_docs)]

use clap::Parser;
use llm_dispatch::Config;
use llm_dispatch::server::HttpServer;
use llm_dispatch::utils::logging::init_logging;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{error, info};

#[derive(Debug, Parser)]
#[command(name = "gateway", version, about = "AI request dispatch gateway")]
struct Args {
    /// YAML configuration file; environment variables are used when it does not exist
    #[arg(short, long, env = "GATEWAY_CONFIG", default_value = "config/gateway.yaml")]
    config: PathBuf,
}

#[tokio::main]
async fn main() -> ExitCode {
    // A missing .env file is fine
    let _ = dotenvy::dotenv();
    let args = Args::parse();

    let config = match Config::load(&args.config).await {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    if let Err(e) = init_logging(config.logging()) {
        eprintln!("Error: {}", e);
        return ExitCode::FAILURE;
    }

    info!(
        version = llm_dispatch::VERSION,
        providers = config.providers().len(),
        "Starting gateway"
    );

    let result = match HttpServer::new(&config).await {
        Ok(server) => server.start().await,
        Err(e) => Err(e),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("Gateway stopped: {}", e);
            ExitCode::FAILURE
        }
    }
}
