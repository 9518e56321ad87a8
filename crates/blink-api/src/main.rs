use anyhow::Result;
use blink_api::{config::ApiConfig, create_router, types::ApiState};
use blink_lib::{ChainConfig, RpcChainReader, TransferEngine};
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "blink_api=debug,blink_lib=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let chain_config = ChainConfig::from_env()?;
    let api_config = ApiConfig::from_env()?;

    let reader = RpcChainReader::new(&chain_config);
    info!(
        rpc_url = %reader.url(),
        commitment = ?chain_config.commitment.commitment,
        cluster = %api_config.cluster,
        "Connecting to Solana RPC"
    );

    let addr = api_config.bind_addr();
    let state = ApiState::new(TransferEngine::new(Arc::new(reader)), api_config);
    let app = create_router(state);

    info!("Starting action server on {}", addr);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("Action server listening on {}", addr);

    axum::serve(listener, app).await?;
    Ok(())
}
