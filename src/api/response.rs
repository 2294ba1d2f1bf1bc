use axum::Json;
use axum::http::StatusCode;
use chrono::Utc;
use serde::Serialize;

/// Uniform JSON envelope for every API endpoint.
#[derive(Serialize)]
pub struct ApiResponse<T> {
    pub data: Option<T>,
    pub meta: ResponseMeta,
}

#[derive(Serialize)]
pub struct ResponseMeta {
    pub status: String,
    pub status_code: u16,
    pub timestamp: String,
    pub message: Option<String>,
}

impl ResponseMeta {
    fn new(status: StatusCode, message: Option<String>) -> Self {
        ResponseMeta {
            status: if status.is_success() { "success" } else { "error" }.to_string(),
            status_code: status.as_u16(),
            timestamp: Utc::now().to_rfc3339(),
            message,
        }
    }
}

fn envelope<T: Serialize>(
    status: StatusCode,
    data: Option<T>,
    message: Option<String>,
) -> (StatusCode, Json<ApiResponse<T>>) {
    let meta = ResponseMeta::new(status, message);
    (status, Json(ApiResponse { data, meta }))
}

pub fn success<T: Serialize>(data: T) -> (StatusCode, Json<ApiResponse<T>>) {
    envelope(StatusCode::OK, Some(data), None)
}

pub fn error<T: Serialize>(
    status: StatusCode,
    message: String,
) -> (StatusCode, Json<ApiResponse<T>>) {
    envelope(status, None, Some(message))
}
