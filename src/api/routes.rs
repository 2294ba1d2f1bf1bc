use axum::{
    Router,
    extract::{Json, State},
    http::header,
    response::{Html, IntoResponse, Response},
    routing::{get, post},
};
use chrono::Utc;
use tower_http::cors::{Any, CorsLayer};
use tracing::info;

use crate::api::models::{GenerateRequest, GenerateResponse, SaveKeysRequest, SessionStatus};
use crate::api::response;
use crate::error::{AppError, Result};
use crate::orchestrator;
use crate::AppState;

const INDEX_HTML: &str = include_str!("../../assets/index.html");
const DOWNLOAD_FILENAME: &str = "podcast_audio.mp3";

pub fn create_router(app_state: AppState) -> Router {
    Router::new()
        .route("/", get(index_handler))
        .route("/api/keys", post(save_keys_handler))
        .route("/api/session", get(session_handler))
        .route("/api/generate", post(generate_handler))
        .route("/api/audio", get(audio_handler))
        .route("/api/audio/download", get(download_handler))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(app_state)
}

async fn index_handler() -> Html<&'static str> {
    Html(INDEX_HTML)
}

async fn save_keys_handler(
    State(state): State<AppState>,
    Json(req): Json<SaveKeysRequest>,
) -> impl IntoResponse {
    let mut session = state.session.write().await;
    session.save_keys(req.gemini_api_key, req.elevenlabs_api_key);
    info!(keys_configured = session.has_keys(), "API keys saved");

    response::success(SessionStatus {
        keys_configured: session.has_keys(),
        has_audio: session.artifact().is_some(),
    })
}

async fn session_handler(State(state): State<AppState>) -> impl IntoResponse {
    let session = state.session.read().await;
    response::success(SessionStatus {
        keys_configured: session.has_keys(),
        has_audio: session.artifact().is_some(),
    })
}

async fn generate_handler(
    State(state): State<AppState>,
    Json(req): Json<GenerateRequest>,
) -> Result<impl IntoResponse> {
    info!(url = %req.url, "processing generate request");
    let start_time = std::time::Instant::now();

    // Snapshot the keys so a concurrent save cannot change this submission,
    // and so no session lock is held across the pipeline call
    let credentials = state.session.read().await.credentials();

    let artifact =
        orchestrator::submit_request(state.pipeline.as_ref(), &req.url, req.max_depth, &credentials)
            .await?;

    let audio_bytes = artifact.content.len();
    state.session.write().await.store_artifact(artifact);

    info!(elapsed = ?start_time.elapsed(), audio_bytes, "podcast generated");
    Ok(response::success(GenerateResponse {
        url: req.url,
        audio_bytes,
        generated_at: Utc::now(),
        status: "success".to_string(),
    }))
}

async fn audio_handler(State(state): State<AppState>) -> Result<Response> {
    let session = state.session.read().await;
    let artifact = session.artifact().ok_or(AppError::NoAudio)?;

    Ok((
        [(header::CONTENT_TYPE, "audio/mpeg")],
        artifact.content.clone(),
    )
        .into_response())
}

async fn download_handler(State(state): State<AppState>) -> Result<Response> {
    let session = state.session.read().await;
    let artifact = session.artifact().ok_or(AppError::NoAudio)?;

    Ok((
        [
            (header::CONTENT_TYPE, "audio/mpeg".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{}\"", DOWNLOAD_FILENAME),
            ),
        ],
        artifact.content.clone(),
    )
        .into_response())
}
