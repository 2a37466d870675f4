// ==========================================
// 产品目录导入系统 - 行解析器
// ==========================================
// 职责: 将一行原始文本解析为 ProductRecord
// 契约: 恰好 5 个逗号分隔字段 (编码,名称,价格,库存,分类)
// 红线: 纯函数,无 I/O;不支持字段内嵌分隔符的引号转义
// ==========================================

use crate::domain::product::ProductRecord;
use crate::importer::error::{ImportError, ImportResult};

/// 字段分隔符（固定,无引号语法）
pub const FIELD_DELIMITER: char = ',';

/// 每行期望的字段数
pub const EXPECTED_FIELD_COUNT: usize = 5;

/// 解析单行数据
///
/// # 参数
/// - raw: 原始行文本（不含表头行）
/// - row_number: 数据行号（1 起,用于错误定位）
///
/// # 返回
/// - Ok(ProductRecord): 解析成功
/// - Err(ImportError::FieldCount): 字段数不为 5
/// - Err(ImportError::FieldFormat): 价格/库存无法解析
///
/// # 说明
/// - 每个字段先做两端空白裁剪
/// - 编码/名称允许为空,价格允许为负（保持源系统的宽松行为）
pub fn parse_line(raw: &str, row_number: usize) -> ImportResult<ProductRecord> {
    let fields: Vec<&str> = raw.split(FIELD_DELIMITER).collect();

    if fields.len() != EXPECTED_FIELD_COUNT {
        return Err(ImportError::FieldCount {
            row: row_number,
            found: fields.len(),
        });
    }

    let code = fields[0].trim().to_string();
    let name = fields[1].trim().to_string();

    let price_raw = fields[2].trim();
    let price: f64 = price_raw.parse().map_err(|_| ImportError::FieldFormat {
        row: row_number,
        field: "price",
        value: price_raw.to_string(),
    })?;

    let stock_raw = fields[3].trim();
    let stock: i64 = stock_raw.parse().map_err(|_| ImportError::FieldFormat {
        row: row_number,
        field: "stock",
        value: stock_raw.to_string(),
    })?;

    let category = fields[4].trim().to_string();

    Ok(ProductRecord {
        code,
        name,
        price,
        stock,
        category,
        row_number,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_line() {
        let record = parse_line("A1,Widget,10.00,5,Tools", 1).unwrap();
        assert_eq!(record.code, "A1");
        assert_eq!(record.name, "Widget");
        assert_eq!(record.price, 10.00);
        assert_eq!(record.stock, 5);
        assert_eq!(record.category, "Tools");
        assert_eq!(record.row_number, 1);
    }

    #[test]
    fn test_parse_trims_whitespace() {
        let record = parse_line("  A1 , Widget ,  10.5 , 5 ,  Tools  ", 2).unwrap();
        assert_eq!(record.code, "A1");
        assert_eq!(record.name, "Widget");
        assert_eq!(record.price, 10.5);
        assert_eq!(record.category, "Tools");
    }

    #[test]
    fn test_parse_deterministic() {
        let a = parse_line("A1,Widget,10.00,5,Tools", 3).unwrap();
        let b = parse_line("A1,Widget,10.00,5,Tools", 3).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_parse_too_few_fields() {
        let err = parse_line("A1,Widget,10.00", 4).unwrap_err();
        match err {
            ImportError::FieldCount { row, found } => {
                assert_eq!(row, 4);
                assert_eq!(found, 3);
            }
            other => panic!("期望 FieldCount,实际 {:?}", other),
        }
    }

    #[test]
    fn test_parse_too_many_fields() {
        // 名称内嵌逗号会破坏字段对齐,按字段数错误处理（已知格式限制）
        let err = parse_line("A1,Widget, Deluxe,10.00,5,Tools", 5).unwrap_err();
        assert!(matches!(err, ImportError::FieldCount { found: 6, .. }));
    }

    #[test]
    fn test_parse_bad_price() {
        let err = parse_line("B2,Gadget,notanumber,1,Misc", 6).unwrap_err();
        match err {
            ImportError::FieldFormat { row, field, value } => {
                assert_eq!(row, 6);
                assert_eq!(field, "price");
                assert_eq!(value, "notanumber");
            }
            other => panic!("期望 FieldFormat,实际 {:?}", other),
        }
    }

    #[test]
    fn test_parse_bad_stock() {
        let err = parse_line("B2,Gadget,1.50,many,Misc", 7).unwrap_err();
        assert!(matches!(
            err,
            ImportError::FieldFormat { field: "stock", .. }
        ));
    }

    #[test]
    fn test_parse_fractional_stock_rejected() {
        let err = parse_line("B2,Gadget,1.50,2.5,Misc", 8).unwrap_err();
        assert!(matches!(
            err,
            ImportError::FieldFormat { field: "stock", .. }
        ));
    }

    #[test]
    fn test_parse_empty_code_and_name_accepted() {
        // 宽松行为: 空编码/空名称照单全收
        let record = parse_line(",,1.00,0,Misc", 9).unwrap();
        assert_eq!(record.code, "");
        assert_eq!(record.name, "");
    }

    #[test]
    fn test_parse_negative_price_accepted() {
        // 宽松行为: 负价格可解析即有效
        let record = parse_line("A1,Widget,-3.25,1,Tools", 10).unwrap();
        assert_eq!(record.price, -3.25);
    }
}
