//! 项目相关接口
//!

use crate::models::common::MessageReply;
use crate::models::err::{AppError, ApiError};
use crate::models::projects::{ProjectCreate, ProjectInfo};
use crate::AppState;
use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use tracing::{debug, instrument};

const RETRIEVING_PROJECTS: &str = "retrieving projects";
const CREATING_PROJECT: &str = "creating a project";
const RETRIEVING_PROJECT: &str = "retrieving a project";

/// 获取全部项目
///
/// 返回存储中的全部项目，不支持过滤和分页，查询参数会被忽略。
#[utoipa::path(get,
    path = "/projects",
    tag = "projects",
    responses(
        (status = 200, description = "All projects", body = Vec<ProjectInfo>),
        (status = 500, description = "Any failure", body = MessageReply)
    )
)]
#[instrument(skip(state))]
pub async fn list_projects(State(state): State<AppState>) -> Result<Json<Vec<ProjectInfo>>, ApiError> {
    debug!("🔍 获取项目列表");

    let projects = state
        .project_service
        .list_projects()
        .await
        .map_err(|e| e.during(RETRIEVING_PROJECTS))?;

    Ok(Json(projects.into_iter().map(Into::into).collect()))
}

/// 创建项目
///
/// 根据用户输入参数创建项目信息，`id` 由存储生成。参数不做业务校验，由表约束决定是否接受。
///
/// 请求体由 `Result<Json<_>, JsonRejection>` 接收，这样json格式错误也会以统一的
/// [`MessageReply`] 结构返回，而不是axum默认的纯文本。
#[utoipa::path(post,
    path = "/projects",
    tag = "projects",
    request_body = ProjectCreate,
    responses(
        (status = 201, description = "Created project", body = ProjectInfo),
        (status = 500, description = "Malformed body or store rejected the project", body = MessageReply)
    )
)]
#[instrument(skip(state, payload))]
pub async fn create_project(
    State(state): State<AppState>,
    payload: Result<Json<ProjectCreate>, JsonRejection>,
) -> Result<(StatusCode, Json<ProjectInfo>), ApiError> {
    let Json(project) = payload.map_err(|e| AppError::from(e).during(CREATING_PROJECT))?;
    debug!("Creating project {:#?}", project);

    let project = state
        .project_service
        .create_project(project)
        .await
        .map_err(|e| e.during(CREATING_PROJECT))?;

    Ok((StatusCode::CREATED, Json(project.into())))
}

/// 查询指定项目信息
#[utoipa::path(get,
    path = "/projects/{id}",
    tag = "projects",
    params(("id" = i32, Path, description = "项目ID")),
    responses(
        (status = 200, description = "Project", body = ProjectInfo),
        (status = 404, description = "Project not found", body = MessageReply),
        (status = 500, description = "Any other failure", body = MessageReply)
    )
)]
#[instrument(skip(state, project_id))]
pub async fn get_project(
    State(state): State<AppState>,
    project_id: Result<Path<i32>, PathRejection>,
) -> Result<Json<ProjectInfo>, ApiError> {
    let Path(project_id) = project_id.map_err(|e| AppError::from(e).during(RETRIEVING_PROJECT))?;
    debug!("Getting project id {:#?}", project_id);

    let project = state
        .project_service
        .get_project(project_id)
        .await
        .map_err(|e| e.during(RETRIEVING_PROJECT))?;

    Ok(Json(project.into()))
}
