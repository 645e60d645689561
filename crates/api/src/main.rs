use clap::Parser;

use mockapi_api::ServerConfig;

/// LeoVegas mock API server.
#[derive(Debug, Parser)]
#[command(name = "mockapi", version)]
struct Cli {
    /// Port to listen on. Overrides MOCK_PORT; invalid values fall back to 4567.
    port: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    mockapi_observability::init();

    let cli = Cli::parse();
    let config = ServerConfig::from_env(cli.port.as_deref());

    mockapi_api::server::run(config).await
}
