use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, ClientBuilder};
use tracing::info;

use super::{
    AudioArtifact, CrawlRequest, PipelineError, PodcastPipeline, crawler, speech, summarize,
};
use crate::error::{AppError, Result};
use crate::session::Credentials;

/// The bundled crawl → summarize → synthesize pipeline.
///
/// Every stage runs over the same HTTP client, so the configured timeout
/// bounds each stage individually rather than the run as a whole.
pub struct AgentPipeline {
    client: Client,
}

impl AgentPipeline {
    pub fn new(stage_timeout: Duration) -> Result<Self> {
        let client = ClientBuilder::new()
            .timeout(stage_timeout)
            .connect_timeout(Duration::from_secs(5))
            .pool_max_idle_per_host(10)
            .build()
            .map_err(|e| AppError::Config(format!("Failed to build HTTP client: {}", e)))?;

        Ok(AgentPipeline { client })
    }
}

#[async_trait]
impl PodcastPipeline for AgentPipeline {
    async fn invoke(
        &self,
        request: &CrawlRequest,
        credentials: &Credentials,
    ) -> std::result::Result<AudioArtifact, PipelineError> {
        info!(url = %request.url, max_depth = request.max_depth, "crawling article");
        let article = crawler::crawl(&self.client, request).await?;
        info!(article_chars = article.len(), "crawl complete");

        let script =
            summarize::summarize(&self.client, &credentials.gemini_api_key, &article).await?;
        info!(script_chars = script.len(), "summarization complete");

        let audio =
            speech::synthesize(&self.client, &credentials.elevenlabs_api_key, &script).await?;
        info!(audio_bytes = audio.len(), "speech synthesis complete");

        Ok(AudioArtifact { content: audio })
    }
}
