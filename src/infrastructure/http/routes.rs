//! HTTP Routes
//!
//! API Endpoints:
//! - /api/ping            GET   健康检查
//! - /api/story/generate  POST  生成故事（文本 + 语音，单次触发）
//!
//! 单页表单由静态文件服务托管在根路径（见 server.rs）

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
        .nest("/story", story_routes())
}

/// Story 路由
fn story_routes() -> Router<Arc<AppState>> {
    Router::new().route("/generate", post(handlers::generate_story))
}
