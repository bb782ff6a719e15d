use anyhow::Result;
use shipyard::config::ShipyardConfig;
use shipyard::logging::init_tracing;
use shipyard::server::ServerBuilder;
use shipyard::storage::InMemoryShipRepository;

#[tokio::main]
async fn main() -> Result<()> {
    let config = match std::env::var("SHIPYARD_CONFIG") {
        Ok(path) => ShipyardConfig::from_yaml_file(&path)?,
        Err(_) => ShipyardConfig::default(),
    };

    init_tracing(&config.logging)?;
    tracing::info!(
        address = %config.bind_address(),
        default_page_size = config.paging.default_page_size,
        "starting shipyard"
    );

    ServerBuilder::new()
        .with_repository(InMemoryShipRepository::new())
        .with_config(config)
        .serve()
        .await
}
