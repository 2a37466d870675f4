// ==========================================
// 产品目录导入系统 - 导入驱动器
// ==========================================
// 职责: 整合导入流程,从文件到目录
// 流程: 读行 → 解析 → 查询 → 决策 → 写入 → 计数
// 红线: 单线程严格顺序,一行完整处理后才开始下一行;
//       行级失败就地回收（fail-soft）,绝不中断整次运行
// ==========================================

use crate::domain::product::{ImportOutcome, ImportSummary, ProductRecord};
use crate::importer::accountant::RunAccountant;
use crate::importer::error::{ImportError, ImportResult};
use crate::importer::line_reader::read_data_lines;
use crate::importer::policy::{decide, ReconcileAction};
use crate::importer::record_parser::parse_line;
use crate::importer::run_log::RunLog;
use crate::repository::product_repo::ProductCatalog;
use chrono::Utc;
use std::path::Path;
use std::time::Instant;
use tracing::{debug, error, info, warn};
use uuid::Uuid;

// ==========================================
// ImportDriver - 导入驱动器
// ==========================================
pub struct ImportDriver<C>
where
    C: ProductCatalog,
{
    // 目录协作方
    catalog: C,

    // 运行日志（尽力而为）
    run_log: RunLog,
}

impl<C> ImportDriver<C>
where
    C: ProductCatalog,
{
    /// 创建新的 ImportDriver 实例
    ///
    /// # 参数
    /// - catalog: 目录协作方（查询与写入）
    /// - run_log: 运行日志文件
    pub fn new(catalog: C, run_log: RunLog) -> Self {
        Self { catalog, run_log }
    }

    /// 执行一次完整导入
    ///
    /// # 参数
    /// - input_path: 输入文件路径（首行为表头）
    ///
    /// # 返回
    /// - Ok(ImportSummary): 运行汇总（任意行级结果组合均为成功返回）
    /// - Err: 启动类错误（文件缺失/仅有表头）
    pub fn run<P: AsRef<Path>>(&mut self, input_path: P) -> ImportResult<ImportSummary> {
        let start_time = Instant::now();
        let started_at = Utc::now();
        let run_id = Uuid::new_v4().to_string();
        let input_path_str = input_path.as_ref().display().to_string();

        info!(run_id = %run_id, input = %input_path_str, "开始导入产品数据");
        self.run_log.append("=== 导入开始 ===");
        self.run_log.append(&format!("输入文件: {}", input_path_str));

        // === 步骤 1: 读取输入行 ===
        debug!("步骤 1: 读取输入行");
        let lines = read_data_lines(input_path.as_ref()).map_err(|e| {
            error!(error = %e, "输入读取失败");
            self.run_log.append(&format!("致命错误 - {}", e));
            e
        })?;

        let total_rows = lines.len();
        info!(total_rows = total_rows, "输入读取完成");
        self.run_log.append(&format!("待处理记录数: {}", total_rows));

        // === 步骤 2: 逐行处理 ===
        debug!("步骤 2: 逐行处理");
        let mut accountant = RunAccountant::new();
        for (idx, line) in lines.iter().enumerate() {
            let row_number = idx + 1;
            let outcome = self.process_line(line, row_number);
            accountant.record(outcome);
        }

        let completed_at = Utc::now();
        let elapsed = start_time.elapsed();
        let tally = accountant.summary();

        // === 步骤 3: 汇总 ===
        self.run_log.append("--- 汇总 ---");
        self.run_log.append(&format!("新增: {}", tally.inserted));
        self.run_log.append(&format!("更新: {}", tally.updated));
        self.run_log.append(&format!("跳过: {}", tally.skipped));
        self.run_log.append(&format!("错误: {}", tally.failed));
        if let Ok(tally_json) = serde_json::to_string(&tally) {
            self.run_log.append(&format!("计数快照: {}", tally_json));
        }
        self.run_log.append("=== 导入结束 ===");

        info!(
            run_id = %run_id,
            total = total_rows,
            inserted = tally.inserted,
            updated = tally.updated,
            skipped = tally.skipped,
            failed = tally.failed,
            elapsed_ms = elapsed.as_millis(),
            "产品数据导入完成"
        );

        Ok(ImportSummary {
            run_id,
            input_path: input_path_str,
            total_rows,
            tally,
            started_at,
            completed_at,
            elapsed,
        })
    }

    /// 处理单行: 解析 → 查询 → 决策 → 写入
    ///
    /// 所有失败路径在此收敛为 Failed,并附行号（已知时附编码）记录
    fn process_line(&mut self, line: &str, row_number: usize) -> ImportOutcome {
        // 解析
        let record = match parse_line(line, row_number) {
            Ok(record) => record,
            Err(e) => {
                warn!(row = row_number, error = %e, "行解析失败");
                self.run_log.append(&format!("错误 - {}", e));
                return ImportOutcome::Failed;
            }
        };

        // 查询现存记录
        let existing = match self.catalog.find_by_code(&record.code) {
            Ok(existing) => existing,
            Err(e) => {
                let e = ImportError::Catalog {
                    row: row_number,
                    code: record.code.clone(),
                    source: e,
                };
                warn!(row = row_number, code = %record.code, error = %e, "目录查询失败");
                self.run_log.append(&format!("错误 - {}", e));
                return ImportOutcome::Failed;
            }
        };

        // 决策并执行
        match decide(&record, existing.as_ref()) {
            ReconcileAction::Insert => match self.catalog.insert(&record) {
                Ok(()) => {
                    info!(row = row_number, code = %record.code, price = record.price, "新增产品");
                    self.run_log.append(&format!(
                        "新增 - 记录 {}: {} - {} (${}) 插入成功",
                        row_number, record.code, record.name, record.price
                    ));
                    ImportOutcome::Inserted
                }
                Err(e) => self.record_write_failure(&record, row_number, e),
            },
            ReconcileAction::Update { id, previous_price } => {
                match self.catalog.update(id, &record) {
                    Ok(()) => {
                        info!(
                            row = row_number,
                            code = %record.code,
                            previous_price = previous_price,
                            new_price = record.price,
                            "价格上调,已更新"
                        );
                        self.run_log.append(&format!(
                            "更新 - {}: 价格 ${} -> ${}",
                            record.code, previous_price, record.price
                        ));
                        ImportOutcome::Updated
                    }
                    Err(e) => self.record_write_failure(&record, row_number, e),
                }
            }
            ReconcileAction::Skip { current_price } => {
                info!(
                    row = row_number,
                    code = %record.code,
                    current_price = current_price,
                    incoming_price = record.price,
                    "价格未上调,跳过"
                );
                self.run_log.append(&format!(
                    "跳过 - 记录 {}: {} - 现价 ${} 不低于来料价,不更新",
                    row_number, record.code, current_price
                ));
                ImportOutcome::Skipped
            }
        }
    }

    /// 写入失败的统一回收路径
    fn record_write_failure(
        &mut self,
        record: &ProductRecord,
        row_number: usize,
        source: crate::repository::error::RepositoryError,
    ) -> ImportOutcome {
        let e = ImportError::Catalog {
            row: row_number,
            code: record.code.clone(),
            source,
        };
        warn!(row = row_number, code = %record.code, error = %e, "目录写入失败");
        self.run_log.append(&format!("错误 - {}", e));
        ImportOutcome::Failed
    }
}
