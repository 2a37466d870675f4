// ==========================================
// 产品目录导入系统 - 输入文件读取
// ==========================================
// 职责: 读取原始行并校验启动前置条件
// 契约: 首行为表头（丢弃）,其后每行一条记录
// 红线: 不做字段级解析,只产出原始行文本
// ==========================================

use crate::importer::error::{ImportError, ImportResult};
use std::fs;
use std::path::Path;

/// 读取输入文件的全部数据行（不含表头）
///
/// # 参数
/// - path: 输入文件路径
///
/// # 返回
/// - Ok(Vec<String>): 按文件顺序的数据行
/// - Err(ImportError::InputNotFound): 文件不存在
/// - Err(ImportError::EmptyInput): 文件为空或仅有表头
///
/// # 说明
/// - 行内容原样保留（裁剪由解析层负责）,仅剥离行尾换行
/// - "仅有表头" 属于启动类错误,不作为零行成功处理
pub fn read_data_lines<P: AsRef<Path>>(path: P) -> ImportResult<Vec<String>> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(ImportError::InputNotFound(path.display().to_string()));
    }

    let content = fs::read_to_string(path)?;
    let mut lines = content.lines();

    // 丢弃表头行
    let header = lines.next();
    let data_lines: Vec<String> = lines.map(|line| line.to_string()).collect();

    if header.is_none() || data_lines.is_empty() {
        return Err(ImportError::EmptyInput(path.display().to_string()));
    }

    Ok(data_lines)
}
