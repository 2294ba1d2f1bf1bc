//! The one state machine this application owns:
//! `Idle -> Validating -> {Rejected | Running} -> {Succeeded | Failed} -> Idle`.
//!
//! Validation happens entirely here, before the pipeline is touched; every
//! failure is terminal for its submission and never fatal to the server.

use tracing::{info, warn};

use crate::error::{AppError, Result};
use crate::pipeline::{AudioArtifact, CrawlRequest, PodcastPipeline};
use crate::session::Credentials;

/// Validate the submission, invoke the pipeline once, and return the audio.
///
/// The URL check runs before the credentials check; neither reaches the
/// pipeline. No retry, no timeout, no polling happens at this layer.
pub async fn submit_request(
    pipeline: &dyn PodcastPipeline,
    url: &str,
    depth: u8,
    credentials: &Credentials,
) -> Result<AudioArtifact> {
    let url = url.trim();
    if url.is_empty() {
        return Err(AppError::Validation("missing URL".to_string()));
    }
    if !credentials.is_complete() {
        return Err(AppError::Validation("missing credentials".to_string()));
    }

    let request = CrawlRequest::new(url, depth);
    info!(url = %request.url, max_depth = request.max_depth, "invoking podcast pipeline");

    match pipeline.invoke(&request, credentials).await {
        Ok(artifact) if artifact.content.is_empty() => {
            warn!("pipeline returned an empty artifact");
            Err(AppError::Pipeline(
                "Pipeline returned no audio".to_string(),
            ))
        }
        Ok(artifact) => {
            info!(audio_bytes = artifact.content.len(), "pipeline succeeded");
            Ok(artifact)
        }
        Err(e) => {
            warn!(error = %e, "pipeline invocation failed");
            Err(e.into())
        }
    }
}
