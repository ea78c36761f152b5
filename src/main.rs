use anyhow::Result;
use homerow::{config, server};

fn main() -> Result<()> {
    // Respect RUST_LOG env var if set, otherwise use defaults
    let env_filter = std::env::var("RUST_LOG").unwrap_or_else(|_| {
        "homerow=debug,homerow_common=debug,tower_http=info".to_string()
    });

    tracing_subscriber::fmt()
        .with_env_filter(&env_filter)
        .init();

    let config = config::load_config_or_default(None)?;

    tracing::info!("Starting homerow media server");
    tracing::info!(
        "Server will listen on {}:{}",
        config.server.host,
        config.server.port
    );

    let rt = tokio::runtime::Runtime::new()?;
    rt.block_on(server::start_server(config))
}
