use garage_buddy::{
    bot,
    config::{database, maintenance_types, settings::Settings},
    core::maintenance,
    errors::Result,
};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Logging first, so startup failures are reported
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // Variables may also come from the real environment
    dotenvy::dotenv().ok();

    let settings = Settings::from_env()
        .inspect_err(|e| error!("Invalid configuration: {}", e))?;
    info!(?settings, "Configuration loaded");

    let db = database::create_connection(&settings.database_url)
        .await
        .inspect_err(|e| error!("Failed to connect to database: {}", e))?;
    database::create_tables(&db)
        .await
        .inspect_err(|e| error!("Failed to create tables: {}", e))?;

    let config = maintenance_types::load_config(&settings.config_path)
        .inspect_err(|e| error!("Failed to load {}: {}", settings.config_path.display(), e))?;
    maintenance::seed_maintenance_types(&db, &config.maintenance_types)
        .await
        .inspect_err(|e| error!("Failed to seed maintenance types: {}", e))?;

    bot::run_bot(&settings.discord_token, db).await
}
