// ==========================================
// 测试辅助函数
// ==========================================
// 职责: 提供测试所需的数据库初始化、输入文件生成等功能
// ==========================================

use catalog_importer::db::{init_schema, open_sqlite_connection};
use rusqlite::Connection;
use std::error::Error;
use std::io::Write;
use tempfile::NamedTempFile;

/// 创建临时测试数据库并初始化 schema
///
/// # 返回
/// - NamedTempFile: 临时数据库文件（需要保持存活）
/// - String: 数据库文件路径
pub fn create_test_db() -> Result<(NamedTempFile, String), Box<dyn Error>> {
    let temp_file = NamedTempFile::new()?;
    let db_path = temp_file.path().to_str().unwrap().to_string();

    let conn = open_sqlite_connection(&db_path)?;
    init_schema(&conn)?;

    Ok((temp_file, db_path))
}

/// 生成带表头的临时输入文件
pub fn create_input_file(lines: &[&str]) -> Result<NamedTempFile, Box<dyn Error>> {
    let mut file = NamedTempFile::new()?;
    writeln!(file, "code,name,price,stock,category")?;
    for line in lines {
        writeln!(file, "{}", line)?;
    }
    Ok(file)
}

/// 直接查询目录中某编码的当前价格（绕过仓储层,独立验证落库结果）
pub fn query_price(db_path: &str, code: &str) -> Result<Option<f64>, Box<dyn Error>> {
    let conn = Connection::open(db_path)?;
    let mut stmt = conn.prepare("SELECT price FROM products WHERE code = ?1")?;
    let result = stmt.query_row([code], |row| row.get::<_, f64>(0));
    match result {
        Ok(price) => Ok(Some(price)),
        Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
        Err(e) => Err(Box::new(e)),
    }
}

/// 目录中的记录总数
pub fn count_products(db_path: &str) -> Result<i64, Box<dyn Error>> {
    let conn = Connection::open(db_path)?;
    let count = conn.query_row("SELECT COUNT(*) FROM products", [], |row| row.get(0))?;
    Ok(count)
}
