// ==========================================
// 产品目录导入系统 - 产品领域模型
// ==========================================
// 职责: 定义导入流程中流转的值类型
// 红线: 解析产出的 ProductRecord 不可变,逐行消费,不跨行保留
// ==========================================

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

// ==========================================
// ProductRecord - 单行解析结果
// ==========================================
// 用途: 解析层写入,策略层/仓储层只读
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductRecord {
    // ===== 业务主键 =====
    pub code: String, // 产品编码（目录内唯一业务键）

    // ===== 业务字段 =====
    pub name: String,     // 产品名称（自由文本）
    pub price: f64,       // 价格（源字段第 3 列）
    pub stock: i64,       // 库存数量（源字段第 4 列）
    pub category: String, // 产品分类（自由文本）

    // ===== 诊断字段 =====
    pub row_number: usize, // 数据行号（1 起,不含表头）
}

// ==========================================
// StoredProduct - 目录现存记录（只读视图）
// ==========================================
// 说明: 核心逻辑只读取 id/code/price,
//       其余列仅作为 Update 的写入目标,从不回读
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredProduct {
    pub id: i64,      // 目录内部标识（Update 定位用）
    pub code: String, // 产品编码
    pub price: f64,   // 当前存储价格（策略比较基准）
}

// ==========================================
// ImportOutcome - 单行处理结果
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ImportOutcome {
    Inserted, // 新增
    Updated,  // 价格上调,已更新
    Skipped,  // 价格未上调,跳过
    Failed,   // 解析或数据库错误
}

// ==========================================
// RunTally - 单次运行计数器
// ==========================================
// 红线: 归属于单次运行,按值传递,不使用进程级静态状态
// 每个处理行恰好递增一个计数器,只增不减
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunTally {
    pub inserted: u64,
    pub updated: u64,
    pub skipped: u64,
    pub failed: u64,
}

impl RunTally {
    /// 创建全零计数器
    pub fn new() -> Self {
        Self::default()
    }

    /// 四项计数之和（应恒等于已处理的数据行数）
    pub fn total(&self) -> u64 {
        self.inserted + self.updated + self.skipped + self.failed
    }
}

// ==========================================
// ImportSummary - 单次运行汇总
// ==========================================
#[derive(Debug, Clone)]
pub struct ImportSummary {
    pub run_id: String,                  // 运行批次标识（UUID v4）
    pub input_path: String,              // 输入文件路径
    pub total_rows: usize,               // 数据行总数（不含表头）
    pub tally: RunTally,                 // 四项计数
    pub started_at: DateTime<Utc>,       // 开始时间
    pub completed_at: DateTime<Utc>,     // 结束时间
    pub elapsed: Duration,               // 耗时
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_run_tally_total() {
        let tally = RunTally {
            inserted: 3,
            updated: 2,
            skipped: 1,
            failed: 4,
        };
        assert_eq!(tally.total(), 10);
    }

    #[test]
    fn test_run_tally_new_is_zero() {
        let tally = RunTally::new();
        assert_eq!(tally.total(), 0);
    }
}
