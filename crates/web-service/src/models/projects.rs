//! 项目接口的请求与返回结构
//!
//! 字段使用 camelCase 命名：`startDate` / `endDate`

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// 新建项目参数
///
/// 这里只负责把json转换为类型化的字段，不做业务校验：
/// `name` 缺失或者结束时间早于开始时间，都交给存储的表约束决定。
///
/// 日期可以是 `2024-01-01`（当天 UTC 零点）或者 RFC 3339 格式
#[derive(Deserialize, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProjectCreate {
    #[schema(example = "Alpha")]
    /// 项目名称，必填
    pub name: Option<String>,

    #[schema(example = "first")]
    /// 项目描述
    pub description: Option<String>,

    #[serde(default, deserialize_with = "flexible_date::deserialize")]
    #[schema(value_type = Option<String>, example = "2024-01-01")]
    /// 开始时间
    pub start_date: Option<DateTime<Utc>>,

    #[serde(default, deserialize_with = "flexible_date::deserialize")]
    #[schema(value_type = Option<String>, example = "2024-06-01")]
    /// 结束时间
    pub end_date: Option<DateTime<Utc>>,
}

/// 转换为仓库层的创建命令
impl From<ProjectCreate> for database::ProjectCreate {
    fn from(project: ProjectCreate) -> Self {
        database::ProjectCreate {
            name: project.name,
            description: project.description,
            start_date: project.start_date,
            end_date: project.end_date,
        }
    }
}

/// 项目信息
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProjectInfo {
    #[schema(example = 15)]
    /// 项目ID
    pub id: i32,

    #[schema(example = "Alpha")]
    /// 项目名称
    pub name: String,

    #[schema(example = "first")]
    /// 项目描述
    pub description: Option<String>,

    #[schema(example = "2024-01-01T00:00:00Z")]
    /// 开始时间
    pub start_date: Option<DateTime<Utc>>,

    #[schema(example = "2024-06-01T00:00:00Z")]
    /// 结束时间
    pub end_date: Option<DateTime<Utc>>,
}

impl From<database::ProjectInfo> for ProjectInfo {
    fn from(project: database::ProjectInfo) -> Self {
        Self {
            id: project.id,
            name: project.name,
            description: project.description,
            start_date: project.start_date,
            end_date: project.end_date,
        }
    }
}

/// 同时支持 `YYYY-MM-DD` 与 RFC 3339 的日期反序列化
mod flexible_date {
    use chrono::{DateTime, NaiveDate, TimeZone, Utc};
    use serde::{Deserialize, Deserializer};

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
    where
        D: Deserializer<'de>,
    {
        Option::<String>::deserialize(deserializer)?
            .map(|s| parse(&s).map_err(serde::de::Error::custom))
            .transpose()
    }

    pub fn parse(s: &str) -> Result<DateTime<Utc>, String> {
        if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
            return Ok(dt.with_timezone(&Utc));
        }

        NaiveDate::parse_from_str(s, "%Y-%m-%d")
            .ok()
            .and_then(|d| d.and_hms_opt(0, 0, 0))
            .map(|naive| Utc.from_utc_datetime(&naive))
            .ok_or_else(|| format!("invalid date `{s}`, expected YYYY-MM-DD or RFC 3339"))
    }
}
