//! SurpriseSoul API server binary.

use std::sync::Arc;

use anyhow::Result;
use sqlx::postgres::PgPoolOptions;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use surprisesoul_api::config::Config;
use surprisesoul_api::routes::{router, AppState};
use surprisesoul_api::store::demo::DemoStore;
use surprisesoul_api::store::live::LiveStore;
use surprisesoul_api::store::CatalogStore;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env()?;

    let store: Arc<dyn CatalogStore> = match &config.database_url {
        Some(url) => {
            let pool = PgPoolOptions::new().max_connections(10).connect(url).await?;
            sqlx::migrate!("./migrations").run(&pool).await?;
            tracing::info!("catalog store: postgres");
            Arc::new(LiveStore::new(pool))
        }
        None => {
            tracing::info!("DATABASE_URL not set, serving the demo catalog");
            Arc::new(DemoStore)
        }
    };

    let app = router(AppState { store, list_limit: config.list_limit });

    let addr = format!("0.0.0.0:{}", config.port);
    tracing::info!("SurpriseSoul API listening on {addr}");
    axum::serve(tokio::net::TcpListener::bind(&addr).await?, app).await?;
    Ok(())
}
