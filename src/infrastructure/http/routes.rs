//! HTTP Routes
//!
//! API 路由定义
//!
//! API Endpoints:
//! - /api/ping            GET   健康检查
//! - /api/voice/list      GET   列出可用语音目录
//! - /api/block/preview   POST  预览单块（base64 内联音频）
//! - /api/block/download  POST  下载单块（mp3 + wav 一对）
//! - /api/project/export  POST  导出整项目（application/zip）

use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;

use super::handlers;
use super::state::AppState;

/// 创建所有路由
pub fn create_routes() -> Router<Arc<AppState>> {
    Router::new().nest("/api", api_routes())
}

/// API 路由
fn api_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/ping", get(handlers::ping))
        .nest("/voice", voice_routes())
        .nest("/block", block_routes())
        .nest("/project", project_routes())
}

/// Voice 路由
fn voice_routes() -> Router<Arc<AppState>> {
    Router::new().route("/list", get(handlers::list_voices))
}

/// Block 路由
fn block_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/preview", post(handlers::preview_block))
        .route("/download", post(handlers::download_block))
}

/// Project 路由
fn project_routes() -> Router<Arc<AppState>> {
    Router::new().route("/export", post(handlers::export_project))
}
