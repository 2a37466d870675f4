// ==========================================
// 产品目录导入系统 - 导入层
// ==========================================
// 职责: 外部产品数据导入与对账
// 流程: 读行 → 解析 → 查询 → 决策 → 写入 → 计数
// ==========================================

// 模块声明
pub mod accountant;
pub mod error;
pub mod import_driver;
pub mod line_reader;
pub mod policy;
pub mod record_parser;
pub mod run_log;

// 重导出核心类型
pub use accountant::RunAccountant;
pub use error::{ImportError, ImportResult};
pub use import_driver::ImportDriver;
pub use line_reader::read_data_lines;
pub use policy::{decide, ReconcileAction};
pub use record_parser::{parse_line, EXPECTED_FIELD_COUNT, FIELD_DELIMITER};
pub use run_log::RunLog;
