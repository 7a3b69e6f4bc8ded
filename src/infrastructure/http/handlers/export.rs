//! Export HTTP Handler - 整项目批量导出

use axum::{
    body::Body,
    extract::State,
    http::{header, StatusCode},
    response::Response,
    Json,
};
use std::sync::Arc;

use crate::application::ExportProject;
use crate::domain::project::{ProjectName, TextBlock};
use crate::infrastructure::http::dto::ExportRequest;
use crate::infrastructure::http::error::ApiError;
use crate::infrastructure::http::state::AppState;

/// 导出整个项目为 ZIP
///
/// 成功时返回 `application/zip` 二进制体而不是 JSON 信封。
/// 所有块都为空的请求在进入管线前被拦截（对应 UI 侧的导出按钮守卫）。
pub async fn export_project(
    State(state): State<Arc<AppState>>,
    Json(req): Json<ExportRequest>,
) -> Result<Response, ApiError> {
    let project =
        ProjectName::new(&req.project).map_err(|e| ApiError::BadRequest(e.to_string()))?;
    let profile = req.profile.into_profile()?;
    let blocks =
        TextBlock::from_texts(req.blocks).map_err(|e| ApiError::BadRequest(e.to_string()))?;

    if blocks.iter().all(|b| b.is_blank()) {
        return Err(ApiError::BadRequest(
            "At least one block must have non-empty text".to_string(),
        ));
    }

    let result = state
        .export_handler
        .handle(ExportProject {
            project,
            blocks,
            profile,
        })
        .await?;

    Response::builder()
        .status(StatusCode::OK)
        .header(header::CONTENT_TYPE, "application/zip")
        .header(
            header::CONTENT_DISPOSITION,
            format!("attachment; filename=\"{}\"", result.file_name),
        )
        .header(header::CONTENT_LENGTH, result.archive.len())
        .body(Body::from(result.archive))
        .map_err(|e| ApiError::Internal(e.to_string()))
}
