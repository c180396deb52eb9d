//! Contacts Manager - Main entry point

use anyhow::Result;
use contacts_manager::server::{self, AppState};
use contacts_manager::{Config, SeedData, SessionStore};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    info!(
        bind = %config.bind_addr(),
        session_ttl_minutes = config.session_ttl_minutes,
        public_dir = %config.public_dir,
        "Configuration loaded"
    );

    let seed = match SeedData::sample() {
        Ok(seed) => seed,
        Err(e) => {
            error!("Sample contacts failed validation: {}", e);
            return Err(e.into());
        }
    };

    let sessions = SessionStore::new(seed, config.session_ttl());
    let app = server::build_router(AppState::new(sessions), &config.public_dir);

    server::run_server(&config, app).await?;

    info!("Contacts Manager shutdown complete");
    Ok(())
}
