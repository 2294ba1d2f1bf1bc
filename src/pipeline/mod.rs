//! The article-to-podcast pipeline boundary.
//!
//! The orchestrator only ever talks to [`PodcastPipeline`]; the bundled
//! [`AgentPipeline`] implements it with an HTTP crawl, a Gemini
//! summarization call, and an ElevenLabs speech synthesis call. Crawl,
//! summarization, and synthesis failures are indistinguishable at this
//! boundary: everything surfaces as a [`PipelineError`] message.

mod agent;
mod crawler;
mod speech;
mod summarize;

pub use agent::AgentPipeline;

use async_trait::async_trait;
use bytes::Bytes;

use crate::session::Credentials;

/// Hard ceiling on crawl depth; the UI slider covers the same range.
pub const MAX_DEPTH: u8 = 3;
/// Number of in-page links followed per level.
pub const MAX_LINKS: usize = 1;

/// One submission's worth of crawl parameters. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CrawlRequest {
    pub url: String,
    pub max_depth: u8,
    pub max_links: usize,
}

impl CrawlRequest {
    pub fn new(url: impl Into<String>, max_depth: u8) -> Self {
        CrawlRequest {
            url: url.into(),
            max_depth: max_depth.min(MAX_DEPTH),
            max_links: MAX_LINKS,
        }
    }
}

/// The binary audio result of a successful pipeline run, MP3-encoded.
#[derive(Debug, Clone)]
pub struct AudioArtifact {
    pub content: Bytes,
}

/// Opaque pipeline failure carrying the originating message.
#[derive(Debug, thiserror::Error)]
#[error("{message}")]
pub struct PipelineError {
    message: String,
}

impl PipelineError {
    pub fn new(message: impl Into<String>) -> Self {
        PipelineError {
            message: message.into(),
        }
    }
}

impl From<reqwest::Error> for PipelineError {
    fn from(err: reqwest::Error) -> Self {
        PipelineError::new(err.to_string())
    }
}

#[async_trait]
pub trait PodcastPipeline: Send + Sync {
    async fn invoke(
        &self,
        request: &CrawlRequest,
        credentials: &Credentials,
    ) -> Result<AudioArtifact, PipelineError>;
}

#[cfg(test)]
pub(crate) mod testing {
    use std::collections::VecDeque;
    use std::sync::Mutex;

    use super::*;

    /// Scriptable pipeline double that records every request it receives.
    pub struct MockPipeline {
        requests: Mutex<Vec<CrawlRequest>>,
        queued: Mutex<VecDeque<Result<Bytes, String>>>,
        fallback: Result<Bytes, String>,
    }

    impl MockPipeline {
        pub fn succeeding(audio: &'static [u8]) -> Self {
            MockPipeline {
                requests: Mutex::new(Vec::new()),
                queued: Mutex::new(VecDeque::new()),
                fallback: Ok(Bytes::from_static(audio)),
            }
        }

        pub fn failing(message: &str) -> Self {
            MockPipeline {
                requests: Mutex::new(Vec::new()),
                queued: Mutex::new(VecDeque::new()),
                fallback: Err(message.to_string()),
            }
        }

        /// Queue a one-off result consumed before the fallback applies.
        pub fn queue(&self, result: Result<Bytes, String>) {
            self.queued.lock().unwrap().push_back(result);
        }

        pub fn requests(&self) -> Vec<CrawlRequest> {
            self.requests.lock().unwrap().clone()
        }

        pub fn invocation_count(&self) -> usize {
            self.requests.lock().unwrap().len()
        }
    }

    #[async_trait]
    impl PodcastPipeline for MockPipeline {
        async fn invoke(
            &self,
            request: &CrawlRequest,
            _credentials: &Credentials,
        ) -> Result<AudioArtifact, PipelineError> {
            self.requests.lock().unwrap().push(request.clone());

            let next = self
                .queued
                .lock()
                .unwrap()
                .pop_front()
                .unwrap_or_else(|| self.fallback.clone());

            match next {
                Ok(content) => Ok(AudioArtifact { content }),
                Err(message) => Err(PipelineError::new(message)),
            }
        }
    }
}
