use crate::models::common::MessageReply;
use axum::{
    extract::rejection::{JsonRejection, PathRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use color_eyre::eyre::Error;
use database::DatabaseError;
use thiserror::Error;
use tracing::{error, warn};

/// 服务层结果类型
pub type AppResult<T> = Result<T, AppError>;

/// 使用 [`thiserror`] 定义错误类型
#[derive(Error, Debug)]
pub enum AppError {
    /// 请求体不是合法的json，或者字段类型不匹配
    #[error("{}", .0.body_text())]
    MalformedBody(#[from] JsonRejection),

    /// 路径参数无法解析
    #[error("{}", .0.body_text())]
    InvalidPath(#[from] PathRejection),

    /// 仓库层数据库错误
    #[error(transparent)]
    RepositoryError(#[from] DatabaseError),

    /// 其他类型错误
    #[error(transparent)]
    InternalError(#[from] Error),
}

/// 错误分类
///
/// 只用于服务端日志，返回给调用方的状态码见 [`ApiError::status_code`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    InvalidInput,
    NotFound,
    StoreUnavailable,
    Unknown,
}

impl AppError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            AppError::MalformedBody(_) | AppError::InvalidPath(_) => ErrorKind::InvalidInput,
            AppError::RepositoryError(err) if err.is_not_found() => ErrorKind::NotFound,
            AppError::RepositoryError(err) if err.is_unavailable() => ErrorKind::StoreUnavailable,
            AppError::RepositoryError(_) | AppError::InternalError(_) => ErrorKind::Unknown,
        }
    }

    /// 附加发生错误时正在进行的操作，例如 `"creating a project"`
    pub fn during(self, operation: &'static str) -> ApiError {
        ApiError {
            operation,
            source: self,
        }
    }
}

/// handler 最终返回的错误
///
/// 序列化为 [`MessageReply`]：`{ "message": "Error <operation>: <source>" }`
#[derive(Error, Debug)]
#[error("Error {operation}: {source}")]
pub struct ApiError {
    operation: &'static str,
    source: AppError,
}

impl ApiError {
    pub fn kind(&self) -> ErrorKind {
        self.source.kind()
    }

    /// 按id查询不存在时返回404，其余所有失败统一返回500
    pub fn status_code(&self) -> StatusCode {
        match self.kind() {
            ErrorKind::NotFound => StatusCode::NOT_FOUND,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Tell axum how to convert `ApiError` into a response.
impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let kind = self.kind();

        match kind {
            ErrorKind::NotFound | ErrorKind::InvalidInput => {
                warn!(operation = self.operation, ?kind, error = %self.source, "⚠️ 请求被拒绝");
            }
            ErrorKind::StoreUnavailable | ErrorKind::Unknown => {
                error!(operation = self.operation, ?kind, error = ?self.source, "❌ 请求处理失败");
            }
        }

        let body = MessageReply {
            message: self.to_string(),
        };
        (status, Json(body)).into_response()
    }
}
