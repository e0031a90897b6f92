//! 内存项目仓库
//!
//! 不依赖数据库的 [`ProjectRepositoryTrait`] 实现，用于测试中替换真实存储

use crate::models::project::{ProjectCreate, ProjectInfo};
use crate::repositories::traits::ProjectRepositoryTrait;
use crate::{DatabaseError, DatabaseResult};
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::debug;

#[derive(Debug, Default)]
struct Inner {
    projects: Vec<ProjectInfo>,
    last_id: i32,
}

/// 内存项目仓库
///
/// `id` 从 1 开始递增分配，列表按创建顺序返回。
/// 克隆后的实例共享同一份数据。
/// 与 `projects` 表一致：`name` 不能为空，结束时间不能早于开始时间。
#[derive(Debug, Clone, Default)]
pub struct InMemoryProjectRepository {
    inner: Arc<RwLock<Inner>>,
}

impl InMemoryProjectRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait::async_trait]
impl ProjectRepositoryTrait for InMemoryProjectRepository {
    async fn list_projects(&self) -> DatabaseResult<Vec<ProjectInfo>> {
        Ok(self.inner.read().await.projects.clone())
    }

    async fn create_project(&self, project: ProjectCreate) -> DatabaseResult<ProjectInfo> {
        let name = project.name.ok_or_else(|| {
            DatabaseError::constraint_violation("null value in column \"name\" violates not-null constraint")
        })?;

        if let (Some(start), Some(end)) = (project.start_date, project.end_date) {
            if end < start {
                return Err(DatabaseError::constraint_violation(
                    "new row violates check constraint \"projects_date_range\"",
                ));
            }
        }

        let mut inner = self.inner.write().await;
        inner.last_id += 1;

        let project_info = ProjectInfo {
            id: inner.last_id,
            name,
            description: project.description,
            start_date: project.start_date,
            end_date: project.end_date,
        };
        inner.projects.push(project_info.clone());

        debug!("📝 内存仓库创建项目: {}", project_info.id);
        Ok(project_info)
    }

    async fn get_project_by_id(&self, id: i32) -> DatabaseResult<ProjectInfo> {
        self.inner
            .read()
            .await
            .projects
            .iter()
            .find(|p| p.id == id)
            .cloned()
            .ok_or_else(|| DatabaseError::not_found(format!("project {id}")))
    }
}
