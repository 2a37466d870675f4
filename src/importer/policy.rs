// ==========================================
// 产品目录导入系统 - 对账策略
// ==========================================
// 职责: 单条业务规则 - 价格单调上调的 upsert 决策
// 红线: 纯函数,无 I/O,可在无数据库环境下独立测试
// ==========================================
// 规则: 目录中某编码的价格只会经导入上调,从不下调;
//       价格未上调的来料仅计数,不产生写入
// ==========================================

use crate::domain::product::{ProductRecord, StoredProduct};

// ==========================================
// ReconcileAction - 决策结果
// ==========================================
#[derive(Debug, Clone, PartialEq)]
pub enum ReconcileAction {
    /// 目录中无此编码,新增整条记录
    Insert,
    /// 来料价格严格高于现价,按 id 重写可变字段
    Update { id: i64, previous_price: f64 },
    /// 来料价格未超过现价（含相等）,不写入
    Skip { current_price: f64 },
}

/// 对账决策
///
/// # 参数
/// - incoming: 本行解析出的来料记录
/// - existing: 目录中该编码的现存记录（查无则 None）
///
/// # 返回
/// - Insert / Update / Skip 三者之一
///
/// # 说明
/// - 比较为严格大于: 价格相等时保留现存记录（Skip）
pub fn decide(incoming: &ProductRecord, existing: Option<&StoredProduct>) -> ReconcileAction {
    match existing {
        None => ReconcileAction::Insert,
        Some(stored) => {
            if incoming.price > stored.price {
                ReconcileAction::Update {
                    id: stored.id,
                    previous_price: stored.price,
                }
            } else {
                ReconcileAction::Skip {
                    current_price: stored.price,
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(price: f64) -> ProductRecord {
        ProductRecord {
            code: "A1".to_string(),
            name: "Widget".to_string(),
            price,
            stock: 5,
            category: "Tools".to_string(),
            row_number: 1,
        }
    }

    fn stored(id: i64, price: f64) -> StoredProduct {
        StoredProduct {
            id,
            code: "A1".to_string(),
            price,
        }
    }

    #[test]
    fn test_decide_missing_is_insert() {
        assert_eq!(decide(&record(10.0), None), ReconcileAction::Insert);
        assert_eq!(decide(&record(-1.0), None), ReconcileAction::Insert);
    }

    #[test]
    fn test_decide_higher_price_is_update() {
        let existing = stored(42, 10.0);
        assert_eq!(
            decide(&record(12.5), Some(&existing)),
            ReconcileAction::Update {
                id: 42,
                previous_price: 10.0
            }
        );
    }

    #[test]
    fn test_decide_lower_price_is_skip() {
        let existing = stored(42, 10.0);
        assert_eq!(
            decide(&record(9.99), Some(&existing)),
            ReconcileAction::Skip {
                current_price: 10.0
            }
        );
    }

    #[test]
    fn test_decide_equal_price_is_skip() {
        // 相等属于边界: 必须 Skip,不得 Update
        let existing = stored(42, 10.0);
        assert_eq!(
            decide(&record(10.0), Some(&existing)),
            ReconcileAction::Skip {
                current_price: 10.0
            }
        );
    }

    #[test]
    fn test_decide_negative_prices_follow_same_rule() {
        let existing = stored(7, -5.0);
        assert!(matches!(
            decide(&record(-4.0), Some(&existing)),
            ReconcileAction::Update { id: 7, .. }
        ));
        assert!(matches!(
            decide(&record(-6.0), Some(&existing)),
            ReconcileAction::Skip { .. }
        ));
    }
}
