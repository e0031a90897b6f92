use thiserror::Error;

/// 数据库操作错误类型
#[derive(Error, Debug)]
pub enum DatabaseError {
    /// SQLX 错误，直接透传数据库返回的错误信息
    #[error(transparent)]
    SqlxError(#[from] sqlx::Error),

    /// 连接错误
    #[error("{0}")]
    ConnectionError(String),

    /// 迁移错误
    #[error("数据库迁移错误: {0}")]
    MigrationError(String),

    /// 记录不存在
    #[error("{0} not found")]
    NotFound(String),

    /// 违反表约束（非空、CHECK 等）
    #[error("{0}")]
    ConstraintViolation(String),
}

impl DatabaseError {
    /// 创建连接错误
    pub fn connection<T: ToString>(msg: T) -> Self {
        Self::ConnectionError(msg.to_string())
    }

    /// 创建迁移错误
    pub fn migration<T: ToString>(msg: T) -> Self {
        Self::MigrationError(msg.to_string())
    }

    /// 创建记录不存在错误
    pub fn not_found<T: ToString>(msg: T) -> Self {
        Self::NotFound(msg.to_string())
    }

    /// 创建违反表约束错误
    pub fn constraint_violation<T: ToString>(msg: T) -> Self {
        Self::ConstraintViolation(msg.to_string())
    }

    /// 是否为查询的记录不存在
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_) | Self::SqlxError(sqlx::Error::RowNotFound))
    }

    /// 是否为数据库不可用（连接失败、连接池耗尽或已关闭等）
    ///
    /// 这类错误与请求内容无关，稍后重试可能恢复。
    pub fn is_unavailable(&self) -> bool {
        match self {
            Self::ConnectionError(_) => true,
            Self::SqlxError(err) => matches!(
                err,
                sqlx::Error::PoolTimedOut
                    | sqlx::Error::PoolClosed
                    | sqlx::Error::Io(_)
                    | sqlx::Error::Tls(_)
                    | sqlx::Error::WorkerCrashed
            ),
            _ => false,
        }
    }
}
