//! 数据库仓库 trait 定义
//!
//! 这里定义了各种数据库仓库的抽象接口
//!
//! ## Repository Trait 设计模式 🎯
//!
//! 所有 Repository trait 都遵循统一的 trait 约束：
//!
//! ```rust,ignore
//! pub trait XxxRepositoryTrait: Send + Sync + 'static {
//!     // 异步方法定义...
//! }
//! ```
//!
//! - `Send` / `Sync`：仓库实例会被多个并发请求共享，返回的 `Future` 也会在线程间传递
//! - `'static`：仓库作为应用服务长期运行，不依赖于短期引用
//!
//! 服务层只依赖 trait，因此可以在启动时注入 PostgreSQL 实现
//! [`ProjectRepository`](crate::ProjectRepository)，在测试中注入
//! [`InMemoryProjectRepository`](crate::InMemoryProjectRepository)：
//!
//! ```rust,ignore
//! let service = ProjectService::new(ProjectRepository::new(pool.clone()));
//! let service = ProjectService::new(InMemoryProjectRepository::new());
//! ```

pub mod project;

// 重新导出
pub use project::ProjectRepositoryTrait;
