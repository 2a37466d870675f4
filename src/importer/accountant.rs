// ==========================================
// 产品目录导入系统 - 运行计数器
// ==========================================
// 职责: 按行归集 Inserted/Updated/Skipped/Failed 四类结果
// 红线: 计数器归属单次运行实例,不使用进程级静态状态,
//       可在运行中途查询快照而不清零
// ==========================================

use crate::domain::product::{ImportOutcome, RunTally};

// ==========================================
// RunAccountant - 单次运行的结果归集器
// ==========================================
#[derive(Debug, Default)]
pub struct RunAccountant {
    tally: RunTally,
}

impl RunAccountant {
    /// 创建新的归集器（全零计数）
    pub fn new() -> Self {
        Self {
            tally: RunTally::new(),
        }
    }

    /// 记录一行的处理结果（对应计数器恰好 +1）
    pub fn record(&mut self, outcome: ImportOutcome) {
        match outcome {
            ImportOutcome::Inserted => self.tally.inserted += 1,
            ImportOutcome::Updated => self.tally.updated += 1,
            ImportOutcome::Skipped => self.tally.skipped += 1,
            ImportOutcome::Failed => self.tally.failed += 1,
        }
    }

    /// 当前计数快照（非破坏性,运行中途可随时查询）
    pub fn summary(&self) -> RunTally {
        self.tally.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_each_outcome_once() {
        let mut accountant = RunAccountant::new();
        accountant.record(ImportOutcome::Inserted);
        accountant.record(ImportOutcome::Updated);
        accountant.record(ImportOutcome::Skipped);
        accountant.record(ImportOutcome::Failed);

        let tally = accountant.summary();
        assert_eq!(tally.inserted, 1);
        assert_eq!(tally.updated, 1);
        assert_eq!(tally.skipped, 1);
        assert_eq!(tally.failed, 1);
        assert_eq!(tally.total(), 4);
    }

    #[test]
    fn test_summary_is_non_destructive() {
        let mut accountant = RunAccountant::new();
        accountant.record(ImportOutcome::Inserted);

        // 中途查询不清零
        assert_eq!(accountant.summary().inserted, 1);
        accountant.record(ImportOutcome::Inserted);
        assert_eq!(accountant.summary().inserted, 2);
    }

    #[test]
    fn test_total_equals_processed_lines() {
        let mut accountant = RunAccountant::new();
        let outcomes = [
            ImportOutcome::Inserted,
            ImportOutcome::Skipped,
            ImportOutcome::Skipped,
            ImportOutcome::Failed,
            ImportOutcome::Updated,
        ];
        for outcome in outcomes {
            accountant.record(outcome);
        }
        assert_eq!(accountant.summary().total(), outcomes.len() as u64);
    }
}
