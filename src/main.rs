use std::error::Error;

use okboz_payroll::api::{AppState, create_router};
use okboz_payroll::config::ConfigLoader;
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt};

const DEFAULT_CONFIG_DIR: &str = "./config/okboz";
const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let config_dir =
        std::env::var("OKBOZ_CONFIG_DIR").unwrap_or_else(|_| DEFAULT_CONFIG_DIR.to_string());
    let bind_addr =
        std::env::var("OKBOZ_BIND_ADDR").unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string());

    let config = ConfigLoader::load(&config_dir)?;
    info!(
        config_dir = %config_dir,
        company = %config.company().name,
        version = %config.company().version,
        "Configuration loaded"
    );

    let app = create_router(AppState::new(config));
    let listener = tokio::net::TcpListener::bind(bind_addr.as_str()).await?;
    info!(addr = %bind_addr, "Payroll API listening");
    axum::serve(listener, app).await?;

    Ok(())
}
