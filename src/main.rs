//! Cafe API server: reads config from env (and `.env`), creates the `cafe` table if absent, serves.

use cafe_api::{app, connect_pool, ensure_cafe_table, AppState, CafeStore, ServerConfig};
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("cafe_api=info,tower_http=info")),
        )
        .init();

    let config = ServerConfig::from_env()?;
    let pool = connect_pool(&config.database_url, config.max_connections).await?;
    ensure_cafe_table(&pool).await?;
    tracing::info!(database_url = %config.database_url, "cafe table ready");

    let state = AppState::new(CafeStore::new(pool), config.delete_api_key.as_str());
    let listener = TcpListener::bind(&config.bind_addr).await?;
    tracing::info!("listening on {}", listener.local_addr()?);
    axum::serve(listener, app(state)).await?;
    Ok(())
}
