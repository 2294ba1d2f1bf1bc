use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::api::response;
use crate::pipeline::PipelineError;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Rejected before the pipeline is ever invoked.
    #[error("{0}")]
    Validation(String),

    /// Anything the pipeline reports; the message is passed through verbatim.
    #[error("{0}")]
    Pipeline(String),

    /// Audio endpoints hit before a successful generation.
    #[error("No podcast audio has been generated yet")]
    NoAudio,

    #[error("Configuration error: {0}")]
    Config(String),
}

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::Pipeline(_) => StatusCode::BAD_GATEWAY,
            AppError::NoAudio => StatusCode::NOT_FOUND,
            AppError::Config(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        response::error::<()>(status, self.to_string()).into_response()
    }
}

impl From<PipelineError> for AppError {
    fn from(err: PipelineError) -> Self {
        AppError::Pipeline(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
