//! Block HTTP Handlers - 单块预览与下载

use axum::{extract::State, Json};
use base64::Engine as _;
use std::sync::Arc;

use crate::application::{DownloadBlock, PreviewBlock};
use crate::domain::project::{BlockIndex, ProjectName, TextBlock};
use crate::infrastructure::http::dto::{
    ApiResponse, DownloadRequest, DownloadResponse, PreviewRequest, PreviewResponse,
};
use crate::infrastructure::http::error::ApiError;
use crate::infrastructure::http::state::AppState;

/// 预览单个文本块
///
/// 返回 base64 data URI，UI 直接内嵌 `<audio>` 播放。
pub async fn preview_block(
    State(state): State<Arc<AppState>>,
    Json(req): Json<PreviewRequest>,
) -> Result<Json<ApiResponse<PreviewResponse>>, ApiError> {
    let profile = req.profile.into_profile()?;

    let result = state
        .preview_handler
        .handle(PreviewBlock {
            text: req.text,
            profile,
        })
        .await?;

    let encoded = base64::engine::general_purpose::STANDARD.encode(&result.audio_data);
    let audio = format!("data:{};base64,{}", result.media_type, encoded);

    Ok(Json(ApiResponse::success(PreviewResponse {
        audio,
        media_type: result.media_type,
        size: result.audio_data.len(),
    })))
}

/// 下载单个文本块的 mp3 + wav 一对
pub async fn download_block(
    State(state): State<Arc<AppState>>,
    Json(req): Json<DownloadRequest>,
) -> Result<Json<ApiResponse<DownloadResponse>>, ApiError> {
    let project =
        ProjectName::new(&req.project).map_err(|e| ApiError::BadRequest(e.to_string()))?;
    let index = BlockIndex::new(req.index).map_err(|e| ApiError::BadRequest(e.to_string()))?;
    let profile = req.profile.into_profile()?;

    let result = state
        .download_handler
        .handle(DownloadBlock {
            project,
            block: TextBlock::new(index, req.text),
            profile,
        })
        .await?;

    let engine = &base64::engine::general_purpose::STANDARD;
    Ok(Json(ApiResponse::success(DownloadResponse {
        mp3_name: result.mp3.file_name(),
        mp3_base64: engine.encode(result.mp3.data()),
        wav_name: result.wav.file_name(),
        wav_base64: engine.encode(result.wav.data()),
    })))
}
