use std::sync::Arc;

use tokio::net::TcpListener;
use tokio::sync::RwLock;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use podcastify::{
    AppState,
    api::routes::create_router,
    config::Config,
    pipeline::AgentPipeline,
    session::Session,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,podcastify=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = Config::load()?;
    let server_addr = config.server_addr;
    tracing::info!("Starting article-to-podcast server on {}", server_addr);

    // Session starts with whatever keys the environment provides
    let session = Session::from_config(&config);
    let pipeline = AgentPipeline::new(config.pipeline_timeout)?;

    let app_state = AppState {
        config: Arc::new(config),
        session: Arc::new(RwLock::new(session)),
        pipeline: Arc::new(pipeline),
    };

    let app = create_router(app_state);

    let listener = TcpListener::bind(server_addr).await?;
    tracing::info!("Listening on http://{}", server_addr);
    axum::serve(listener, app).await?;

    Ok(())
}
