//! Delivery pricing service entry point.

use std::sync::Arc;

use anyhow::Context;
use delivery_pricing::api::create_router;
use delivery_pricing::infrastructure::{
    AppConfig, AppDependencies, DeliveryStore, InMemoryDeliveryStore, LogFormat,
    PostgresDeliveryStore, StorageMode, provision_schema,
};
use delivery_pricing::server::{Server, ServerConfig};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, fmt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = AppConfig::from_env().context("Failed to load configuration")?;

    init_tracing(config.log_format);

    tracing::info!(
        storage_mode = ?config.storage_mode,
        host = %config.app_host,
        port = config.app_port,
        "Starting delivery pricing service"
    );

    let store = create_store(&config).await?;

    let router = create_router(AppDependencies::with_default_pricing(Arc::clone(&store)));

    log_endpoints(&config);

    let result = Server::new(ServerConfig::from(&config)).run(router).await;

    store.close().await;
    tracing::info!("Store closed");

    result
}

fn init_tracing(log_format: LogFormat) {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,delivery_pricing=debug,tower_http=debug"));

    let registry = tracing_subscriber::registry().with(env_filter);
    match log_format {
        LogFormat::Text => registry.with(fmt::layer().with_target(true)).init(),
        LogFormat::Json => registry.with(fmt::layer().json().with_target(true)).init(),
    }
}

/// Builds the configured store. A Postgres store whose provisioning aborts
/// startup has already been closed when the error is returned.
async fn create_store(config: &AppConfig) -> anyhow::Result<Arc<dyn DeliveryStore>> {
    match config.storage_mode {
        StorageMode::Postgres => {
            let database_url = config
                .database_url
                .as_deref()
                .context("POSTGRES_URL is not set")?;
            let postgres = PostgresDeliveryStore::connect(database_url)
                .await
                .context("Failed to connect to Postgres")?;
            tracing::info!("Connected to Postgres");

            provision_schema(&postgres, config.strict_schema)
                .await
                .context("Failed to provision delivery table")?;

            Ok(Arc::new(postgres))
        }
        StorageMode::InMemory => {
            tracing::info!("Using in-memory storage; records are lost on exit");
            Ok(Arc::new(InMemoryDeliveryStore::new()))
        }
    }
}

fn log_endpoints(config: &AppConfig) {
    tracing::info!("Server is running on port {}", config.app_port);
    tracing::info!("Available endpoints:");
    tracing::info!("  POST   /calculate-cost          - Price and record a delivery");
    tracing::info!("  GET    /data                    - List all records");
    tracing::info!("  DELETE /data/{{organization_id}} - Delete one organization's records");
    tracing::info!("  DELETE /data                    - Delete all records");
}
