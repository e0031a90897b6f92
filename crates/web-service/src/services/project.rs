//! 项目服务
//!
//! 提供项目相关的业务逻辑操作

use crate::models::err::AppResult;
use crate::models::projects::ProjectCreate;
use crate::services::traits::ProjectServiceTrait;
use database::{ProjectInfo, ProjectRepositoryTrait};
use tracing::debug;

#[derive(Debug, Clone)]
pub struct ProjectService<PR: ProjectRepositoryTrait> {
    project_repository: PR,
}

impl<PR: ProjectRepositoryTrait> ProjectService<PR> {
    pub fn new(project_repository: PR) -> Self {
        Self { project_repository }
    }
}

#[async_trait::async_trait]
impl<PR: ProjectRepositoryTrait> ProjectServiceTrait for ProjectService<PR> {
    async fn list_projects(&self) -> AppResult<Vec<ProjectInfo>> {
        Ok(self.project_repository.list_projects().await?)
    }

    async fn create_project(&self, project: ProjectCreate) -> AppResult<ProjectInfo> {
        let command = database::ProjectCreate::from(project);
        debug!("📝 提交项目到仓库: {:?}", command.name);

        Ok(self.project_repository.create_project(command).await?)
    }

    async fn get_project(&self, id: i32) -> AppResult<ProjectInfo> {
        Ok(self.project_repository.get_project_by_id(id).await?)
    }
}
