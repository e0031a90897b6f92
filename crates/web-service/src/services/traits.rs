//! 服务层 trait 定义
//!
//! 定义服务层的抽象接口，遵循六边形架构的端口适配器模式

use crate::models::err::AppResult;
use crate::models::projects::ProjectCreate;
use database::ProjectInfo;

/// 项目服务 trait 定义
///
/// 定义了项目相关的业务逻辑接口，作为应用层的端口(Port)。
/// [`AppState`](crate::AppState) 以 `Arc<dyn ProjectServiceTrait>` 的形式持有它，
/// 具体实现由 [`ProjectService`](super::ProjectService) 提供。
#[async_trait::async_trait]
pub trait ProjectServiceTrait: Send + Sync + 'static {
    /// 获取全部项目
    async fn list_projects(&self) -> AppResult<Vec<ProjectInfo>>;

    /// 创建新项目
    ///
    /// # 参数
    /// - `project`: 请求参数，原样交给仓库层
    ///
    /// # 返回值
    /// 返回创建的项目信息，违反表约束时返回 [`AppError::RepositoryError`](crate::models::err::AppError::RepositoryError)
    async fn create_project(&self, project: ProjectCreate) -> AppResult<ProjectInfo>;

    /// 根据 ID 获取项目信息
    async fn get_project(&self, id: i32) -> AppResult<ProjectInfo>;
}
