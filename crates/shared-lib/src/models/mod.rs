pub mod config;

// 重新导出具体的类型
pub use config::{AppConfig, DatabaseConfig};
