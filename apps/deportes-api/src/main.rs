use axum_helpers::server::create_app;
use core_config::tracing::{init_tracing, install_color_eyre};
use domain_deportes::JsonFileDeporteRepository;
use tracing::info;

mod api;
mod config;
mod openapi;
mod state;

use config::Config;
use state::AppState;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    // Install color-eyre first for colored error output
    install_color_eyre();

    // Load configuration from environment variables
    let config = Config::from_env()?;

    // Initialize tracing
    init_tracing(&config.environment);

    let repository = JsonFileDeporteRepository::new(config.storage.data_file.clone());
    repository.ensure_exists().await?;
    info!(
        data_file = %config.storage.data_file.display(),
        "Deportes catalog ready"
    );

    let state = AppState { config, repository };
    let app = api::app(&state);

    info!("Starting Deportes API");

    create_app(app, &state.config.server)
        .await
        .map_err(|e| eyre::eyre!("Server error: {}", e))?;

    info!("Deportes API shutdown complete");
    Ok(())
}
