use std::net::SocketAddr;

use tracing::{info, Level};

use orders_backend::config::AppConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_max_level(Level::INFO)
        .init();

    // Backend selection is resolved from the environment exactly once.
    let config = AppConfig::from_env();
    let app = orders_backend::app(&config).await?;

    // Start the server
    let addr = SocketAddr::from(([127, 0, 0, 1], 3000));
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("Listening on {}", addr);
    info!("Users:  http://localhost:{}/api/users", addr.port());
    info!("Orders: http://localhost:{}/api/orders", addr.port());

    axum::serve(listener, app).await?;

    Ok(())
}
