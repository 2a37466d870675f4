// ==========================================
// 产品目录导入系统 - 导入模块错误类型
// ==========================================
// 依据: Rust 错误处理最佳实践
// 工具: thiserror 派生宏
// ==========================================

use crate::repository::error::RepositoryError;
use thiserror::Error;

/// 导入模块错误类型
///
/// 启动类错误（文件缺失/空文件）终止整次运行;
/// 行级错误（字段/目录访问）在驱动层就地回收,计入 Failed,不向上传播
#[derive(Error, Debug)]
pub enum ImportError {
    // ===== 启动类错误（致命） =====
    #[error("输入文件不存在: {0}")]
    InputNotFound(String),

    #[error("输入文件为空或仅有表头: {0}")]
    EmptyInput(String),

    #[error("文件读取失败: {0}")]
    FileReadError(String),

    // ===== 行级错误（就地回收） =====
    #[error("字段数量错误 (行 {row}): 期望 5 个字段,实际 {found} 个")]
    FieldCount { row: usize, found: usize },

    #[error("字段格式错误 (行 {row}, 字段 {field}): 无法解析值 {value:?}")]
    FieldFormat {
        row: usize,
        field: &'static str,
        value: String,
    },

    #[error("目录访问失败 (行 {row}, 编码 {code}): {source}")]
    Catalog {
        row: usize,
        code: String,
        #[source]
        source: RepositoryError,
    },

    // ===== 通用错误 =====
    #[error("内部错误: {0}")]
    InternalError(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

// 实现 From<std::io::Error>
impl From<std::io::Error> for ImportError {
    fn from(err: std::io::Error) -> Self {
        ImportError::FileReadError(err.to_string())
    }
}

impl ImportError {
    /// 是否为行级错误（可就地回收,不终止运行）
    pub fn is_line_level(&self) -> bool {
        matches!(
            self,
            ImportError::FieldCount { .. }
                | ImportError::FieldFormat { .. }
                | ImportError::Catalog { .. }
        )
    }
}

/// Result 类型别名
pub type ImportResult<T> = Result<T, ImportError>;
