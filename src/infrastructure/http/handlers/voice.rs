//! Voice HTTP Handlers

use axum::{extract::State, Json};
use std::sync::Arc;

use crate::application::ListVoices;
use crate::infrastructure::http::dto::{ApiResponse, VoiceListResponse};
use crate::infrastructure::http::error::ApiError;
use crate::infrastructure::http::state::AppState;

/// 列出可用语音目录
pub async fn list_voices(
    State(state): State<Arc<AppState>>,
) -> Result<Json<ApiResponse<VoiceListResponse>>, ApiError> {
    let result = state.list_voices_handler.handle(ListVoices).await?;

    Ok(Json(ApiResponse::success(VoiceListResponse {
        voices: result.voices.iter().map(|v| v.to_string()).collect(),
    })))
}
