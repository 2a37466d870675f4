// ==========================================
// 产品目录导入系统 - 领域模型层
// ==========================================
// 职责: 定义导入流程中的领域实体与值类型
// 红线: 不含数据访问逻辑,不含 I/O
// ==========================================

pub mod product;

// 重导出核心类型
pub use product::{ImportOutcome, ImportSummary, ProductRecord, RunTally, StoredProduct};
