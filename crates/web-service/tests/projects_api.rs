//! 项目接口的集成测试
//!
//! 通过 [`tower::ServiceExt::oneshot`] 直接驱动路由，存储使用内存仓库或故障仓库替换

use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use database::{DatabaseError, DatabaseResult, InMemoryProjectRepository, ProjectCreate, ProjectInfo, ProjectRepositoryTrait};
use serde_json::{json, Value};
use tower::ServiceExt;
use web_service::routes::create_app_router;
use web_service::services::ProjectService;
use web_service::AppState;

/// 每个操作都失败的仓库，模拟数据库故障
struct BrokenRepository;

#[async_trait::async_trait]
impl ProjectRepositoryTrait for BrokenRepository {
    async fn list_projects(&self) -> DatabaseResult<Vec<ProjectInfo>> {
        Err(DatabaseError::connection("connection refused"))
    }

    async fn create_project(&self, _project: ProjectCreate) -> DatabaseResult<ProjectInfo> {
        Err(DatabaseError::from(sqlx::Error::Protocol(
            "violates check constraint \"projects_date_range\"".into(),
        )))
    }

    async fn get_project_by_id(&self, _id: i32) -> DatabaseResult<ProjectInfo> {
        Err(DatabaseError::from(sqlx::Error::PoolTimedOut))
    }
}

fn app() -> Router {
    create_app_router(AppState::new(ProjectService::new(InMemoryProjectRepository::new())))
}

fn broken_app() -> Router {
    create_app_router(AppState::new(ProjectService::new(BrokenRepository)))
}

async fn send(router: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = router.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, body)
}

async fn get(router: &Router, uri: &str) -> (StatusCode, Value) {
    send(router, Request::get(uri).body(Body::empty()).unwrap()).await
}

async fn post_json(router: &Router, body: &str) -> (StatusCode, Value) {
    let request = Request::builder()
        .method(Method::POST)
        .uri("/projects")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    send(router, request).await
}

fn message(body: &Value) -> &str {
    body["message"].as_str().unwrap()
}

#[tokio::test]
async fn empty_store_lists_nothing() {
    let (status, body) = get(&app(), "/projects").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));
}

#[tokio::test]
async fn create_returns_created_project() {
    let router = app();

    let (status, body) = post_json(
        &router,
        r#"{"name":"Alpha","description":"first","startDate":"2024-01-01","endDate":"2024-06-01"}"#,
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["name"], "Alpha");
    assert_eq!(body["description"], "first");
    assert_eq!(body["startDate"], "2024-01-01T00:00:00Z");
    assert_eq!(body["endDate"], "2024-06-01T00:00:00Z");
    assert!(body["id"].as_i64().is_some());
}

#[tokio::test]
async fn created_projects_are_listed_with_distinct_ids() {
    let router = app();

    let (_, first) = post_json(&router, r#"{"name":"Alpha","description":"first"}"#).await;
    let (_, second) = post_json(&router, r#"{"name":"Alpha","startDate":"2024-03-01T09:00:00Z"}"#).await;
    assert_ne!(first["id"], second["id"]);

    let (status, listed) = get(&router, "/projects").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(listed, json!([first, second]));

    // 没有写入时两次查询结果一致
    let (_, again) = get(&router, "/projects").await;
    assert_eq!(listed, again);
}

#[tokio::test]
async fn concurrent_creates_get_unique_ids() {
    let router = app();

    let (a, b, c, d) = tokio::join!(
        post_json(&router, r#"{"name":"Alpha"}"#),
        post_json(&router, r#"{"name":"Alpha"}"#),
        post_json(&router, r#"{"name":"Beta"}"#),
        post_json(&router, r#"{"name":"Gamma"}"#),
    );

    let mut ids = Vec::new();
    for (status, body) in [a, b, c, d] {
        assert_eq!(status, StatusCode::CREATED);
        ids.push(body["id"].as_i64().unwrap());
    }
    ids.sort_unstable();
    ids.dedup();
    assert_eq!(ids.len(), 4);

    let (_, listed) = get(&router, "/projects").await;
    assert_eq!(listed.as_array().unwrap().len(), 4);
}

#[tokio::test]
async fn list_ignores_query_parameters() {
    let router = app();
    post_json(&router, r#"{"name":"Alpha"}"#).await;
    post_json(&router, r#"{"name":"Beta"}"#).await;

    let (status, body) = get(&router, "/projects?page=2&limit=1").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn missing_description_is_stored_as_null() {
    let (status, body) = post_json(&app(), r#"{"name":"Alpha","startDate":"2024-01-01"}"#).await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["description"], Value::Null);
    assert_eq!(body["endDate"], Value::Null);
}

#[tokio::test]
async fn missing_name_is_rejected_by_the_store() {
    let router = app();

    let (status, body) = post_json(&router, r#"{"description":"first"}"#).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(message(&body).starts_with("Error creating a project: "));
    assert!(message(&body).contains("not-null constraint"));

    let (_, listed) = get(&router, "/projects").await;
    assert_eq!(listed, json!([]));
}

#[tokio::test]
async fn malformed_body_uses_message_envelope() {
    let (status, body) = post_json(&app(), r#"{"name":"Alpha","#).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(message(&body).starts_with("Error creating a project: "));

    let (status, body) = post_json(&app(), r#"{"name":"Alpha","startDate":"soon"}"#).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(message(&body).starts_with("Error creating a project: "));
}

#[tokio::test]
async fn end_before_start_is_rejected_by_the_store() {
    let (status, body) = post_json(&app(), r#"{"name":"Alpha","startDate":"2024-06-01","endDate":"2024-01-01"}"#).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(message(&body).starts_with("Error creating a project: "));
    assert!(message(&body).contains("projects_date_range"));
}

#[tokio::test]
async fn get_project_by_id() {
    let router = app();
    let (_, created) = post_json(&router, r#"{"name":"Alpha"}"#).await;

    let (status, body) = get(&router, &format!("/projects/{}", created["id"])).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, created);

    let (status, body) = get(&router, "/projects/999").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(message(&body).starts_with("Error retrieving a project: "));

    let (status, body) = get(&router, "/projects/abc").await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(message(&body).starts_with("Error retrieving a project: "));
}

#[tokio::test]
async fn store_connection_failure_during_list() {
    let (status, body) = get(&broken_app(), "/projects").await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(message(&body), "Error retrieving projects: connection refused");
}

#[tokio::test]
async fn store_rejects_create() {
    let (status, body) = post_json(&broken_app(), r#"{"name":"Alpha","description":"first"}"#).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(message(&body).starts_with("Error creating a project: "));
    assert!(message(&body).contains("projects_date_range"));
}

#[tokio::test]
async fn store_timeout_during_get() {
    let (status, body) = get(&broken_app(), "/projects/1").await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(message(&body).starts_with("Error retrieving a project: "));
}

#[tokio::test]
async fn health_check_reports_healthy() {
    let (status, body) = get(&app(), "/health").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
}

#[tokio::test]
async fn docs_are_served() {
    let response = app()
        .oneshot(Request::get("/docs").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}
