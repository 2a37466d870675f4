// ==========================================
// 产品目录导入系统 - 核心库
// ==========================================
// 技术栈: Rust + SQLite
// 系统定位: CSV 对账导入工具（价格单调上调 upsert）
// ==========================================

// ==========================================
// 模块声明
// ==========================================

// 领域层 - 实体与类型
pub mod domain;

// 数据仓储层 - 数据访问
pub mod repository;

// 导入层 - 解析/策略/计数/驱动
pub mod importer;

// 数据库基础设施（连接初始化/PRAGMA 统一/建表）
pub mod db;

// 日志系统
pub mod logging;

// ==========================================
// 重导出核心类型
// ==========================================

// 领域类型
pub use domain::{ImportOutcome, ImportSummary, ProductRecord, RunTally, StoredProduct};

// 导入层
pub use importer::{
    decide, parse_line, ImportDriver, ImportError, ImportResult, ReconcileAction, RunAccountant,
    RunLog,
};

// 仓储层
pub use repository::{ProductCatalog, RepositoryError, RepositoryResult, SqliteProductRepository};

// ==========================================
// 常量定义
// ==========================================

// 系统版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// 系统名称
pub const APP_NAME: &str = "产品目录导入系统";
