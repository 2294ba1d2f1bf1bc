use crate::config::Config;
use crate::pipeline::AudioArtifact;

/// Snapshot of the API keys taken at submit time. A later save in the
/// sidebar must not affect a submission that is already in flight.
#[derive(Debug, Clone, Default)]
pub struct Credentials {
    pub gemini_api_key: String,
    pub elevenlabs_api_key: String,
}

impl Credentials {
    pub fn is_complete(&self) -> bool {
        !self.gemini_api_key.is_empty() && !self.elevenlabs_api_key.is_empty()
    }
}

/// Per-session state: the two API keys and the most recently generated
/// audio. Lives for the lifetime of the process, never touches disk.
#[derive(Default)]
pub struct Session {
    gemini_api_key: String,
    elevenlabs_api_key: String,
    artifact: Option<AudioArtifact>,
}

impl Session {
    /// Start a session, pre-filling keys from the environment when present.
    pub fn from_config(config: &Config) -> Self {
        Session {
            gemini_api_key: config.gemini_api_key.clone().unwrap_or_default(),
            elevenlabs_api_key: config.elevenlabs_api_key.clone().unwrap_or_default(),
            artifact: None,
        }
    }

    /// Explicit save action; overwrites whatever was stored before.
    pub fn save_keys(&mut self, gemini_api_key: String, elevenlabs_api_key: String) {
        self.gemini_api_key = gemini_api_key;
        self.elevenlabs_api_key = elevenlabs_api_key;
    }

    pub fn has_keys(&self) -> bool {
        self.credentials().is_complete()
    }

    pub fn credentials(&self) -> Credentials {
        Credentials {
            gemini_api_key: self.gemini_api_key.clone(),
            elevenlabs_api_key: self.elevenlabs_api_key.clone(),
        }
    }

    pub fn store_artifact(&mut self, artifact: AudioArtifact) {
        self.artifact = Some(artifact);
    }

    pub fn artifact(&self) -> Option<&AudioArtifact> {
        self.artifact.as_ref()
    }
}
