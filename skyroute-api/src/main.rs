use std::net::SocketAddr;
use skyroute_api::{app, AppState};
use skyroute_core::FlightSystem;
use skyroute_store::{app_config::Config, FlightFileStore};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "skyroute_api=debug,skyroute_core=info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::load()?;
    tracing::info!("Starting SkyRoute API on port {}", config.server.port);

    let store = FlightFileStore::new(&config.storage.flights_path);
    let (mut system, skipped) = FlightSystem::open(store, config.registry.max_flights)?;
    for line in &skipped {
        tracing::warn!(
            "Flight file line {} not loaded ({}): {}",
            line.line_number,
            line.reason,
            line.content
        );
    }
    match system.seed_if_empty() {
        Ok(true) => tracing::info!("Flight file was empty, seeded sample flights"),
        Ok(false) => {}
        Err(e) => tracing::warn!("Sample flights not seeded: {}", e),
    }

    let app = app(AppState::new(system));

    let addr = SocketAddr::from(([0, 0, 0, 0], config.server.port));
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
