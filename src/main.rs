use std::process::ExitCode;
use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use kitcheck::api::{start_server, ApiContext};
use kitcheck::checklist::ChecklistStore;
use kitcheck::config;

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config::default_log_filter())),
        )
        .init();

    tracing::info!(version = config::APP_VERSION, "{} starting", config::APP_NAME);

    let store = match ChecklistStore::open(config::store_path()) {
        Ok(store) => Arc::new(store),
        Err(e) => {
            tracing::error!("Failed to open checklist store: {e}");
            return ExitCode::FAILURE;
        }
    };

    let ctx = ApiContext::new(store);
    let mut server = match start_server(ctx, config::bind_addr()).await {
        Ok(server) => server,
        Err(e) => {
            tracing::error!("{e}");
            return ExitCode::FAILURE;
        }
    };

    tracing::info!(addr = %server.session.server_addr, "Listening");

    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {e}");
    }

    server.shutdown();
    ExitCode::SUCCESS
}
