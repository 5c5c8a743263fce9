use std::sync::Arc;

use anyhow::Result;
use tracing::info;
use tracing_subscriber::EnvFilter;

use lielens_api::{build_router, AppState};
use lielens_common::Config;
use lielens_core::{Analyzer, ContentResolver};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env()
                .add_directive("lielens_api=info".parse()?)
                .add_directive("lielens_core=info".parse()?),
        )
        .init();

    let config = Config::from_env();

    let state = Arc::new(AppState {
        analyzer: Analyzer::new(&config),
        resolver: ContentResolver::new(),
    });

    let app = build_router(state);

    let addr = format!("{}:{}", config.host, config.port);
    info!("LieLens API starting on {addr}");

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
