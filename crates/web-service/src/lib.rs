//! Web服务模块
//!
//! 提供 HTTP API 接口和文档服务

use color_eyre::Result;
use database::{DatabasePool, ProjectRepository};
use services::{ProjectService, ProjectServiceTrait};
use std::sync::Arc;
use tokio::sync::watch::Receiver;
use tracing::info;

pub mod models;
pub mod routes;
pub mod services;

/// 应用共享状态
///
/// 每个请求都会克隆一份，内部只有 [`Arc`]，克隆开销很小
#[derive(Clone)]
pub struct AppState {
    pub project_service: Arc<dyn ProjectServiceTrait>,
}

impl AppState {
    pub fn new<PS: ProjectServiceTrait>(project_service: PS) -> Self {
        Self {
            project_service: Arc::new(project_service),
        }
    }
}

/// 启动 Web 服务
///
/// 收到关闭信号后停止接收新连接，等待进行中的请求处理完成后返回
pub async fn start_web_service(pool: DatabasePool, bind_addr: String, shutdown_rx: Receiver<bool>) -> Result<()> {
    let shared_state = AppState::new(ProjectService::new(ProjectRepository::new(pool)));

    let router = routes::create_app_router(shared_state);

    info!("🚀 启动 Web Service 在 {}", bind_addr);

    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;

    axum::serve(listener, router.into_make_service())
        .with_graceful_shutdown(async move {
            wait_for_shutdown(shutdown_rx).await;
            info!("🛑 Web Service 正在关闭...");
        })
        .await?;

    info!("✅ Web Service 已停止");
    Ok(())
}

/// 等待关闭信号
async fn wait_for_shutdown(mut shutdown_rx: Receiver<bool>) {
    // 如果已经是 true，直接返回
    if *shutdown_rx.borrow() {
        return;
    }

    // 等待信号变化，发送端被丢弃时同样视为关闭
    let _ = shutdown_rx.changed().await;
}
