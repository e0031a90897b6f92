//! 项目仓库 trait 定义
//!
//! 定义项目数据库操作的抽象接口

use crate::models::project::{ProjectCreate, ProjectInfo};
use crate::DatabaseResult;

/// 项目仓库trait定义
///
/// 定义了项目相关的数据库操作接口，支持：
/// - 项目列表
/// - 项目创建
/// - 项目查询
#[async_trait::async_trait]
pub trait ProjectRepositoryTrait: Send + Sync + 'static {
    /// 获取全部项目
    ///
    /// 不做过滤和分页，返回顺序由存储决定
    async fn list_projects(&self) -> DatabaseResult<Vec<ProjectInfo>>;

    /// 创建新项目
    ///
    /// # 参数
    /// - `project`: 项目创建信息
    ///
    /// # 返回值
    /// 返回创建的项目信息（包含生成的 `id`）
    async fn create_project(&self, project: ProjectCreate) -> DatabaseResult<ProjectInfo>;

    /// 根据 ID 获取项目信息
    ///
    /// 项目不存在时返回 [`DatabaseError::NotFound`](crate::DatabaseError::NotFound)
    async fn get_project_by_id(&self, id: i32) -> DatabaseResult<ProjectInfo>;
}
