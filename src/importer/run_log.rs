// ==========================================
// 产品目录导入系统 - 运行日志文件
// ==========================================
// 职责: 面向操作员的逐事件文本日志（追加写,带时间戳）
// 契约: 尽力而为 - 写入失败只告警,绝不中断导入运行;
//       调用方不得依赖日志送达保证正确性,仅用于诊断
// ==========================================

use chrono::Local;
use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::warn;

// ==========================================
// RunLog - 追加式运行日志
// ==========================================
pub struct RunLog {
    path: PathBuf,
}

impl RunLog {
    /// 创建运行日志（清空既有内容,对齐每次运行独立日志的约定）
    ///
    /// 创建失败不致命: 返回的实例后续写入同样走尽力而为路径
    pub fn create<P: AsRef<Path>>(path: P) -> Self {
        let path = path.as_ref().to_path_buf();
        if let Err(e) = File::create(&path) {
            warn!(path = %path.display(), error = %e, "无法创建运行日志文件");
        }
        Self { path }
    }

    /// 追加一条带时间戳的日志行
    ///
    /// 格式: `[YYYY-MM-DD HH:MM:SS] 消息`
    /// 失败时仅告警,不返回错误
    pub fn append(&self, message: &str) {
        let line = format!("[{}] {}", Local::now().format("%Y-%m-%d %H:%M:%S"), message);

        let result = OpenOptions::new()
            .append(true)
            .create(true)
            .open(&self.path)
            .and_then(|mut file| writeln!(file, "{}", line));

        if let Err(e) = result {
            warn!(path = %self.path.display(), error = %e, "运行日志写入失败");
        }
    }

    /// 日志文件路径
    pub fn path(&self) -> &Path {
        &self.path
    }
}
