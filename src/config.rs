use std::env;
use std::net::{IpAddr, SocketAddr};
use std::str::FromStr;
use std::time::Duration;

use crate::error::{AppError, Result};

#[derive(Clone)]
pub struct Config {
    pub server_addr: SocketAddr,
    /// Optional pre-fill for the session; the user can overwrite it in the UI.
    pub gemini_api_key: Option<String>,
    /// Optional pre-fill for the session; the user can overwrite it in the UI.
    pub elevenlabs_api_key: Option<String>,
    /// Per-stage HTTP timeout applied inside the pipeline.
    pub pipeline_timeout: Duration,
}

impl Config {
    pub fn load() -> Result<Self> {
        // Load environment variables from .env file if it exists
        dotenv::dotenv().ok();

        // API keys are read once at startup and only used as session pre-fill
        let gemini_api_key = env::var("GEMINI_API_KEY").ok().filter(|k| !k.is_empty());
        let elevenlabs_api_key = env::var("ELEVENLABS_API_KEY")
            .ok()
            .filter(|k| !k.is_empty());

        // Load server configuration with defaults
        let host = env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = env::var("PORT").unwrap_or_else(|_| "3000".to_string());
        let port = port
            .parse::<u16>()
            .map_err(|e| AppError::Config(format!("Invalid port: {}", e)))?;
        let ip = IpAddr::from_str(&host)
            .map_err(|e| AppError::Config(format!("Invalid host address: {}", e)))?;

        let timeout_secs = env::var("PIPELINE_TIMEOUT_SECS")
            .unwrap_or_else(|_| "120".to_string())
            .parse::<u64>()
            .map_err(|e| AppError::Config(format!("Invalid pipeline timeout: {}", e)))?;

        Ok(Config {
            server_addr: SocketAddr::new(ip, port),
            gemini_api_key,
            elevenlabs_api_key,
            pipeline_timeout: Duration::from_secs(timeout_secs),
        })
    }
}
