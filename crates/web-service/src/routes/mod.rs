//! 路由入口
//!
//! 提供 [`create_app_router`] 函数，导出当前App的所有路由。
//!
//! 用户可以在导出路由时传入共享数据 shared_state，这样所有路由函数都可以访问。

use crate::routes::projects::__path_create_project;
use crate::routes::projects::__path_get_project;
use crate::routes::projects::__path_list_projects;
use crate::routes::projects::{create_project, get_project, list_projects};
use crate::AppState;
use axum::Router;
use utoipa::OpenApi;
use utoipa_axum::router::OpenApiRouter;
use utoipa_axum::routes;
use utoipa_scalar::{Scalar, Servable};

pub mod health;
pub mod projects;

/// 导出当前App的所有业务路由
///
/// ## 参数定义
/// - state: 共享数据，参考 [`AppState`] 定义。
///
/// ## **❗️注意事项：**
///
/// 由于 [`routes!`] 宏限制，同一个宏里面的接口必须是同一个路径，并且不能有相同的http方法。
/// `/projects` 的 get/post 放在一起，`/projects/{id}` 单独定义。
fn routers(state: AppState) -> OpenApiRouter {
    OpenApiRouter::new()
        .routes(routes!(list_projects, create_project))
        .routes(routes!(get_project))
        .with_state(state)
}

/// 创建当前App的路由
///
/// 完成以下功能：
/// - 生成OpenAPI文档
/// - 生成App路由
/// - 使用Scalar作为最终在线文档格式，访问地址 `/docs`
/// - 健康检查 `/health`
///
/// 由于使用了 `utoipa` 库来自动化生成`openapi`文档，因此我们没有使用原生的 [`Router`]，而是使用了
/// [`OpenApiRouter`] 。
pub fn create_app_router(shared_state: AppState) -> Router {
    // 当前项目的OpenAPI声明
    #[derive(OpenApi)]
    #[openapi(
        tags(
            (name = "projects", description = "项目记录的查询与创建")
        ),
    )]
    struct ApiDoc;

    // 最终拿到的变量：
    // - router: Axum的Router，实际的路由对象
    // - api: utoipa的OpenApi，生成的OpenAPI对象
    let (router, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .merge(routers(shared_state))
        .split_for_parts();

    router
        .merge(health::routes())
        .merge(Scalar::with_url("/docs", api))
}
