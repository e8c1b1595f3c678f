/// Main entry point for the commerce engine service
///
/// This serves as a thin wrapper that delegates to the interfaces layer.
/// The actual application logic is implemented in `interfaces::cli`.

use commerce_engine::interfaces::cli;

#[tokio::main]
async fn main() {
    cli::run().await;
}
