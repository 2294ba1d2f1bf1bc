pub mod api;
pub mod config;
pub mod error;
pub mod orchestrator;
pub mod pipeline;
pub mod session;

use std::sync::Arc;

use tokio::sync::RwLock;

use config::Config;
use pipeline::PodcastPipeline;
use session::Session;

/// Application state that will be shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub session: Arc<RwLock<Session>>,
    pub pipeline: Arc<dyn PodcastPipeline>,
}
