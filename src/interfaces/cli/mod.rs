/// CLI Interface Module
///
/// This module provides command-line interface functionality for the
/// commerce engine. It serves as the primary entry point for the
/// application when run as a standalone service.
///
/// ## Responsibilities
/// - Parse command-line arguments
/// - Initialize logging
/// - Configure and start the HTTP server

use crate::infrastructure::http::ApiServer;
use clap::Parser;
use std::net::IpAddr;

/// Commerce engine command-line configuration
#[derive(Parser, Debug, Clone)]
#[command(name = "commerce-engine")]
#[command(version = "0.1.0")]
#[command(about = "In-memory product catalog and order registry service", long_about = None)]
pub struct CliConfig {
    /// Address the HTTP server listens on
    #[arg(short = 'H', long, default_value = "127.0.0.1")]
    pub host: IpAddr,

    /// Port the HTTP server listens on
    #[arg(short, long, default_value_t = 8080)]
    pub port: u16,

    /// Log level
    #[arg(short = 'l', long, default_value = "info", value_parser = ["trace", "debug", "info", "warn", "error"])]
    pub log_level: String,

    /// Print the configuration without starting the server
    #[arg(long, default_value_t = false)]
    pub dry_run: bool,
}

/// Runs the CLI application
///
/// This is the main entry point for the CLI interface. Parses command-line
/// arguments, initializes logging, and starts the HTTP server.
pub async fn run() {
    let config = CliConfig::parse();

    init_logging(&config.log_level);

    tracing::info!("commerce engine starting");
    tracing::info!("configuration: {:?}", config);

    println!("========================================");
    println!("  commerce-engine v{}", env!("CARGO_PKG_VERSION"));
    println!("========================================");
    println!("listen address:  {}:{}", config.host, config.port);
    println!("log level:       {}", config.log_level);
    println!("========================================");

    if config.dry_run {
        println!("\ndry-run mode - not starting the server");
        return;
    }

    let server = ApiServer::new(config.host, config.port);
    if let Err(err) = server.run().await {
        tracing::error!("server terminated: {err}");
    }
}

/// Initializes the logging system
fn init_logging(level: &str) {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}
