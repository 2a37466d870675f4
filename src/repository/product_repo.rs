// ==========================================
// 产品目录导入系统 - 产品目录仓储
// ==========================================
// 职责: 管理 products 表的查询与写入
// 红线: 不含业务逻辑（对账决策在策略层）,只负责数据访问
// ==========================================

use crate::db::{init_schema, open_sqlite_connection};
use crate::domain::product::{ProductRecord, StoredProduct};
use crate::repository::error::{RepositoryError, RepositoryResult};
use chrono::Utc;
use rusqlite::{params, Connection};
use std::sync::{Arc, Mutex};

// ==========================================
// ProductCatalog - 目录协作方接口
// ==========================================
/// 目录协作方接口
///
/// 驱动层只依赖该接口,策略/驱动的测试可用内存实现替换 SQLite
pub trait ProductCatalog {
    /// 按编码查询现存记录
    ///
    /// # 返回
    /// - Ok(Some(StoredProduct)): 找到记录
    /// - Ok(None): 查无此编码（不是错误）
    /// - Err: 数据库错误
    fn find_by_code(&self, code: &str) -> RepositoryResult<Option<StoredProduct>>;

    /// 新增目录记录（五个业务字段,imported_at 保持 NULL）
    fn insert(&self, record: &ProductRecord) -> RepositoryResult<()>;

    /// 按 id 重写可变字段（名称/价格/库存/分类）并刷新导入时间戳
    ///
    /// code 是匹配键,不被重写
    fn update(&self, id: i64, record: &ProductRecord) -> RepositoryResult<()>;
}

// ==========================================
// SqliteProductRepository - SQLite 实现
// ==========================================
pub struct SqliteProductRepository {
    conn: Arc<Mutex<Connection>>,
}

impl SqliteProductRepository {
    /// 创建新的仓储实例（打开连接并幂等建表）
    ///
    /// # 参数
    /// - db_path: 数据库文件路径
    ///
    /// # 返回
    /// - Err(DatabaseConnectionError): 目录不可达,属于启动类失败
    pub fn new(db_path: &str) -> RepositoryResult<Self> {
        let conn = open_sqlite_connection(db_path)
            .map_err(|e| RepositoryError::DatabaseConnectionError(e.to_string()))?;
        init_schema(&conn)?;
        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    /// 从已有连接创建仓储实例（测试用内存库走这里）
    pub fn from_connection(conn: Arc<Mutex<Connection>>) -> RepositoryResult<Self> {
        {
            let guard = conn
                .lock()
                .map_err(|e| RepositoryError::LockError(e.to_string()))?;
            init_schema(&guard)?;
        }
        Ok(Self { conn })
    }

    /// 获取数据库连接
    fn get_conn(&self) -> RepositoryResult<std::sync::MutexGuard<Connection>> {
        self.conn
            .lock()
            .map_err(|e| RepositoryError::LockError(e.to_string()))
    }
}

impl ProductCatalog for SqliteProductRepository {
    fn find_by_code(&self, code: &str) -> RepositoryResult<Option<StoredProduct>> {
        let conn = self.get_conn()?;
        let mut stmt = conn.prepare("SELECT id, code, price FROM products WHERE code = ?1")?;

        let result = stmt.query_row(params![code], |row| {
            Ok(StoredProduct {
                id: row.get(0)?,
                code: row.get(1)?,
                price: row.get(2)?,
            })
        });

        match result {
            Ok(product) => Ok(Some(product)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn insert(&self, record: &ProductRecord) -> RepositoryResult<()> {
        let conn = self.get_conn()?;
        conn.execute(
            r#"
            INSERT INTO products (code, name, price, stock, category)
            VALUES (?1, ?2, ?3, ?4, ?5)
            "#,
            params![
                record.code,
                record.name,
                record.price,
                record.stock,
                record.category,
            ],
        )?;
        Ok(())
    }

    fn update(&self, id: i64, record: &ProductRecord) -> RepositoryResult<()> {
        let conn = self.get_conn()?;
        let affected = conn.execute(
            r#"
            UPDATE products
            SET name = ?1,
                price = ?2,
                stock = ?3,
                category = ?4,
                imported_at = ?5
            WHERE id = ?6
            "#,
            params![
                record.name,
                record.price,
                record.stock,
                record.category,
                Utc::now().to_rfc3339(),
                id,
            ],
        )?;

        if affected == 0 {
            return Err(RepositoryError::NotFound {
                entity: "products".to_string(),
                id: id.to_string(),
            });
        }
        Ok(())
    }
}
