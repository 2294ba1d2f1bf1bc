use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Deserialize)]
pub struct SaveKeysRequest {
    pub gemini_api_key: String,
    pub elevenlabs_api_key: String,
}

/// What the page needs to render its sidebar; never echoes the keys.
#[derive(Serialize)]
pub struct SessionStatus {
    pub keys_configured: bool,
    pub has_audio: bool,
}

#[derive(Deserialize)]
pub struct GenerateRequest {
    pub url: String,
    #[serde(default = "default_depth")]
    pub max_depth: u8,
}

fn default_depth() -> u8 {
    1
}

#[derive(Serialize)]
pub struct GenerateResponse {
    pub url: String,
    pub audio_bytes: usize,
    pub generated_at: DateTime<Utc>,
    pub status: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generate_request_defaults_the_depth() {
        let req: GenerateRequest =
            serde_json::from_str(r#"{"url": "https://example.com"}"#).unwrap();
        assert_eq!(req.max_depth, 1);
    }

    #[test]
    fn session_status_never_contains_key_material() {
        let status = SessionStatus {
            keys_configured: true,
            has_audio: false,
        };
        let json = serde_json::to_string(&status).unwrap();
        assert_eq!(json, r#"{"keys_configured":true,"has_audio":false}"#);
    }
}
