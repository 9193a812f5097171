//! Nutrimix
//!
//! An MCP server exposing the per-goal recipe quantity calculator.

use rmcp::ServiceExt;
use tokio::io::{stdin, stdout};
use tracing_subscriber::EnvFilter;

use nutrimix::build_info;
use nutrimix::config::{self, DEFAULT_LOG_DIRECTIVE};
use nutrimix::mcp::NutrimixService;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging (output to stderr to not interfere with MCP stdio)
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(DEFAULT_LOG_DIRECTIVE.parse()?))
        .with_writer(std::io::stderr)
        .init();

    // Print startup banner to stderr
    build_info::print_startup_banner();
    eprintln!("Starting MCP server on stdio...");

    // Load goal profiles
    let (registry, source) = config::load_registry()?;
    eprintln!("Goal profiles: {:?}", source);

    // Create the Nutrimix service
    let service = NutrimixService::new(registry, source);

    // Create stdio transport
    let transport = (stdin(), stdout());

    // Start the MCP server
    let server = service.serve(transport).await?;

    // Wait for the server to complete
    server.waiting().await?;

    Ok(())
}
