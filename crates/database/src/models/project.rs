//! 项目数据库模型
//!
//! 定义项目相关的数据库模型结构体

use chrono::{DateTime, Utc};

/// 项目信息结构体，对应 `projects` 表中的一行
#[derive(Debug, Clone, PartialEq, sqlx::FromRow)]
pub struct ProjectInfo {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    pub start_date: Option<DateTime<Utc>>,
    pub end_date: Option<DateTime<Utc>>,
}

/// 项目创建参数
///
/// 只做类型转换，不做业务校验：`name` 缺失时原样交给数据库，由 `NOT NULL` 约束拒绝。
/// `id` 由数据库生成
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectCreate {
    pub name: Option<String>,
    pub description: Option<String>,
    pub start_date: Option<DateTime<Utc>>,
    pub end_date: Option<DateTime<Utc>>,
}
