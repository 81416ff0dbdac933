use std::env;
use tracing_subscriber::{self, EnvFilter};

mod core;
mod server;

/// Zmanim MCP Server
///
/// An MCP server exposing Jewish prayer time (zmanim) tools:
/// - Sunrise and sunset
/// - Latest Shema and Tefila per the GR"A and MG"A
/// - Mincha times
/// - Shabbat candle lighting and Havdalah
/// - A full daily zmanim digest
///
/// Usage: npx @modelcontextprotocol/inspector cargo run --bin mcp-server-zmanim
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging only if LOG_LEVEL environment variable is set
    if let Ok(log_level) = env::var("LOG_LEVEL") {
        // Stdout carries the MCP transport, so diagnostics go to stderr
        tracing_subscriber::fmt()
            .with_env_filter(
                EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&log_level)),
            )
            .with_writer(std::io::stderr)
            .with_ansi(false)
            .init();

        tracing::info!("Starting Zmanim MCP server with log level: {}", log_level);
    }

    if let Err(e) = server::run().await {
        // Only log error if logging is initialized
        if env::var("LOG_LEVEL").is_ok() {
            tracing::error!("Error running Zmanim MCP server: {}", e);
        }
        return Err(e);
    }

    Ok(())
}
