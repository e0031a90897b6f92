//! 项目仓库
//!
//! 负责项目相关的数据库操作

use crate::models::project::{ProjectCreate, ProjectInfo};
use crate::repositories::traits::ProjectRepositoryTrait;
use crate::{DatabaseError, DatabaseResult};
use sqlx::PgPool;
use tracing::debug;

/// 项目仓库结构体
#[derive(Debug, Clone)]
pub struct ProjectRepository {
    pool: PgPool,
}

impl ProjectRepository {
    /// 创建新的项目仓库实例
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait::async_trait]
impl ProjectRepositoryTrait for ProjectRepository {
    /// 获取全部项目
    ///
    /// 按 `id` 排序，保证没有写入时多次查询的结果一致
    async fn list_projects(&self) -> DatabaseResult<Vec<ProjectInfo>> {
        debug!("🔍 查询全部项目");

        let projects = sqlx::query_as::<_, ProjectInfo>(
            r#"
            SELECT id, name, description, start_date, end_date
            FROM projects
            ORDER BY id;
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        debug!("✅ 查询完成 - 共 {} 个项目", projects.len());
        Ok(projects)
    }

    /// 创建新项目
    ///
    /// 使用 `RETURNING` 一次拿到数据库生成的 `id`，
    /// 违反表约束（例如结束时间早于开始时间）时返回 [`DatabaseError::SqlxError`]
    async fn create_project(&self, project: ProjectCreate) -> DatabaseResult<ProjectInfo> {
        debug!("📝 创建项目: {:#?}", project);

        let project_info = sqlx::query_as::<_, ProjectInfo>(
            r#"
            INSERT INTO projects (name, description, start_date, end_date)
            VALUES ($1, $2, $3, $4)
            RETURNING id, name, description, start_date, end_date;
            "#,
        )
        .bind(project.name)
        .bind(project.description)
        .bind(project.start_date)
        .bind(project.end_date)
        .fetch_one(&self.pool)
        .await?;

        debug!("✅ 项目创建成功: {:#?}", project_info);
        Ok(project_info)
    }

    async fn get_project_by_id(&self, id: i32) -> DatabaseResult<ProjectInfo> {
        debug!("🔍 根据 ID 获取项目: {}", id);

        let project = sqlx::query_as::<_, ProjectInfo>(
            r#"
            SELECT id, name, description, start_date, end_date
            FROM projects
            WHERE id = $1
            LIMIT 1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| DatabaseError::not_found(format!("project {id}")))?;

        debug!("✅ 项目获取成功: {:#?}", project);
        Ok(project)
    }
}
