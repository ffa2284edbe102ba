#![allow(clippy::result_large_err)]

use dotenvy::dotenv;
use koi_delivery::{
    config::{
        self,
        database::{create_connection, ensure_sqlite_parent_dir, get_database_url},
        seed::{bundled_seed_data, load_seed_data},
    },
    core::{DatabaseInitializer, Pricing},
    errors::Result,
    repository::DatabaseRepository,
};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // 1. Initialize tracing (as early as possible)
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // 2. Load .env file; env vars can also be set externally
    dotenv().ok();
    info!("Attempted to load .env file.");

    // 3. Load the main application configuration
    let app_config = config::load_default_config()
        .inspect_err(|e| error!("Critical error loading application configuration: {}", e))?;
    info!("Successfully processed application configuration.");

    // 4. Connect to the database
    let database_url = get_database_url(&app_config);
    ensure_sqlite_parent_dir(&database_url)?;
    let db = create_connection(&database_url, &app_config)
        .await
        .inspect_err(|e| error!("Failed to connect to database: {}", e))?;

    // 5. Load seed fixtures
    let seed_data = match &app_config.seed_file {
        Some(path) => load_seed_data(path)?,
        None => bundled_seed_data()?,
    };

    // 6. Migrate and seed
    let initializer = DatabaseInitializer::new(
        DatabaseRepository::new(db),
        seed_data,
        Pricing::new(app_config.price_per_kilogram),
    );
    initializer
        .initialize()
        .await
        .inspect(|outcome| info!("Database initialized: {:?}", outcome))
        .inspect_err(|e| error!("Failed to initialize database: {}", e))?;
    initializer
        .try_seed()
        .await
        .inspect(|report| info!("Seeding finished, {} rows inserted.", report.rows_inserted()))?;

    Ok(())
}
