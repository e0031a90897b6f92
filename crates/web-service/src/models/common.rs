use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// 错误时返回给调用方的统一结构
///
/// ```json
/// { "message": "Error retrieving projects: ..." }
/// ```
#[derive(Deserialize, Debug, ToSchema, Serialize)]
pub struct MessageReply {
    #[schema(example = "Error retrieving projects: 数据库连接错误: connection refused")]
    /// 错误描述，格式为 `Error <操作>: <原始错误信息>`
    pub message: String,
}
