use station_server::config::ServerConfig;
use station_server::stations::JsonLinesSource;
use station_server::web::{AppState, create_router};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("station_server=info,tower_http=info")),
        )
        .init();

    let config = ServerConfig::from_env().expect("Invalid configuration");

    // The file is read on every request, so a missing file is only a warning here
    if !config.data_path.exists() {
        warn!(
            path = %config.data_path.display(),
            "station data file does not exist yet"
        );
    }

    let state = AppState::new(JsonLinesSource::new(&config.data_path));
    let app = create_router(state);

    info!(
        addr = %config.bind_addr,
        data = %config.data_path.display(),
        "station server listening"
    );
    info!("GET /stations                   - by maintenance priority");
    info!("GET /stations/high-traffic      - by predicted traffic");
    info!("GET /stations/by-distance       - closest first");
    info!("GET /stations/combined-scoring  - by combined score");
    info!("GET /stations/discounts         - by discount");

    let listener = tokio::net::TcpListener::bind(config.bind_addr)
        .await
        .expect("Failed to bind listener");
    axum::serve(listener, app).await.expect("Server error");
}
