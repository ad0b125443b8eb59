//! Contact Manager API - main entry point.
//!
//! Wires the long-lived store client, repository, and service together once
//! at startup and serves the HTTP API until shutdown.

use anyhow::Result;
use contact_manager_api::client::{AsyncStoreClient, AsyncStoreClientImpl};
use contact_manager_api::repositories::{ContactRepository, StoreContactRepository};
use contact_manager_api::services::ContactCreator;
use contact_manager_api::{server, Config, StoreClient};
use std::sync::Arc;
use tower::{
    limit::GlobalConcurrencyLimitLayer, load_shed::LoadShedLayer, make::Shared, ServiceBuilder,
};
use tower_http::trace::{DefaultMakeSpan, TraceLayer};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration
    let config = Config::from_env()?;

    // Initialize logging; RUST_LOG overrides the configured level
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level.clone()));

    tracing_subscriber::fmt().with_env_filter(filter).init();

    info!("Configuration loaded successfully");
    info!(
        "Starting Contact Manager API against store {} (database: {}, container: {})",
        config.store_endpoint, config.database_name, config.container_name
    );

    // Initialize the store client; the handles are resolved once and reused
    // by every request handler
    let sync_client = StoreClient::new(&config);
    let client = Arc::new(AsyncStoreClientImpl::new(sync_client)) as Arc<dyn AsyncStoreClient>;

    let repository = Arc::new(StoreContactRepository::new(client)) as Arc<dyn ContactRepository>;
    let creator = Arc::new(ContactCreator::new(repository));

    let router = server::router(creator);

    let make_service = Shared::new(
        ServiceBuilder::new()
            .layer(LoadShedLayer::new())
            .layer(GlobalConcurrencyLimitLayer::new(config.request_limit))
            .layer(TraceLayer::new_for_http().make_span_with(DefaultMakeSpan::default()))
            .service(router),
    );

    info!("Listening on {}", config.bind_addr);
    axum::Server::bind(&config.bind_addr).serve(make_service).await?;

    Ok(())
}
