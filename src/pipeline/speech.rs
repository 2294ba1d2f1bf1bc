use bytes::Bytes;
use reqwest::Client;
use serde::Serialize;
use tracing::debug;

use super::PipelineError;

// "Rachel", ElevenLabs' default narration voice
const VOICE_ID: &str = "21m00Tcm4TlvDq8ikWAM";
const MODEL_ID: &str = "eleven_multilingual_v2";

#[derive(Serialize)]
struct SpeechRequest {
    text: String,
    model_id: String,
}

/// Synthesize the narration script into MP3 audio via ElevenLabs.
pub async fn synthesize(
    client: &Client,
    api_key: &str,
    script: &str,
) -> Result<Bytes, PipelineError> {
    debug!(script_chars = script.len(), "requesting speech synthesis");

    let url = format!("https://api.elevenlabs.io/v1/text-to-speech/{}", VOICE_ID);
    let body = SpeechRequest {
        text: script.to_string(),
        model_id: MODEL_ID.to_string(),
    };

    let res = client
        .post(&url)
        .header("xi-api-key", api_key)
        .header("accept", "audio/mpeg")
        .json(&body)
        .send()
        .await?;

    if !res.status().is_success() {
        return Err(PipelineError::new(format!(
            "Speech synthesis failed: HTTP {}",
            res.status()
        )));
    }

    let audio = res.bytes().await?;
    if audio.is_empty() {
        return Err(PipelineError::new("Speech synthesis returned no audio"));
    }

    Ok(audio)
}
