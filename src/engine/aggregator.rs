// ==========================================
// WMS 库存调拨系统 - 库存聚合器
// ==========================================
// 职责: 原始库存记录 → (物料, 业务单元, 仓库) 聚合余额
// 输入: StockRecord 列表（保持输入顺序）
// 输出: AggregatedStock（按首次出现顺序排列）
// ==========================================
// 红线: 只求和不过滤；同键记录求和,不覆盖
// 容错: 余额缺失按 0；物料编码为空的记录丢弃并计数
// ==========================================

use crate::domain::stock::{AggregatedEntry, StockKey, StockRecord};
use crate::engine::location::normalize_location;
use std::collections::HashMap;
use tracing::{debug, instrument};

// ==========================================
// AggregatedStock - 聚合结果
// ==========================================
#[derive(Debug, Clone, Default)]
pub struct AggregatedStock {
    entries: Vec<AggregatedEntry>,
    index: HashMap<StockKey, usize>,
    total_records: usize,
    dropped_records: usize,
}

/// 单个物料的聚合视图（借用 AggregatedStock）
#[derive(Debug, Clone)]
pub struct MaterialGroup<'a> {
    pub material_code: &'a str,
    pub material_desc: &'a str,
    pub entries: Vec<&'a AggregatedEntry>,
}

impl AggregatedStock {
    /// 聚合原始记录
    #[instrument(skip(records), fields(count = records.len()))]
    pub fn aggregate(records: &[StockRecord]) -> Self {
        let mut stock = AggregatedStock {
            total_records: records.len(),
            ..Default::default()
        };

        for record in records {
            let material_code = record.material_code.trim();
            if material_code.is_empty() {
                stock.dropped_records += 1;
                continue;
            }

            let key = StockKey {
                material_code: material_code.to_string(),
                business_unit: normalize_location(&record.business_unit),
                warehouse: normalize_location(&record.warehouse),
            };
            let balance = record.effective_balance();
            let desc = record.material_desc.trim();

            match stock.index.get(&key) {
                Some(&idx) => {
                    let entry = &mut stock.entries[idx];
                    entry.balance += balance;
                    entry.record_count += 1;
                    if entry.material_desc.is_empty() && !desc.is_empty() {
                        entry.material_desc = desc.to_string();
                    }
                }
                None => {
                    stock.index.insert(key.clone(), stock.entries.len());
                    stock.entries.push(AggregatedEntry {
                        key,
                        material_desc: desc.to_string(),
                        balance,
                        record_count: 1,
                    });
                }
            }
        }

        debug!(
            entries = stock.entries.len(),
            dropped = stock.dropped_records,
            "库存聚合完成"
        );
        stock
    }

    /// 全部聚合条目（首次出现顺序）
    pub fn entries(&self) -> &[AggregatedEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// 输入记录总数
    pub fn total_records(&self) -> usize {
        self.total_records
    }

    /// 因物料编码为空被丢弃的记录数
    pub fn dropped_records(&self) -> usize {
        self.dropped_records
    }

    /// 按键查找（键需为规范化后的值）
    pub fn get(&self, key: &StockKey) -> Option<&AggregatedEntry> {
        self.index.get(key).map(|&idx| &self.entries[idx])
    }

    /// 按原始代码查找余额（内部做规范化）
    pub fn balance_of(&self, material_code: &str, business_unit: &str, warehouse: &str) -> Option<f64> {
        let key = StockKey {
            material_code: material_code.trim().to_string(),
            business_unit: normalize_location(business_unit),
            warehouse: normalize_location(warehouse),
        };
        self.get(&key).map(|e| e.balance)
    }

    /// 键 → 余额映射
    pub fn balance_map(&self) -> HashMap<StockKey, f64> {
        self.entries
            .iter()
            .map(|e| (e.key.clone(), e.balance))
            .collect()
    }

    /// 按物料分组（物料首次出现顺序，组内保持条目顺序）
    pub fn by_material(&self) -> Vec<MaterialGroup<'_>> {
        let mut groups: Vec<MaterialGroup<'_>> = Vec::new();
        let mut group_index: HashMap<&str, usize> = HashMap::new();

        for entry in &self.entries {
            let code = entry.key.material_code.as_str();
            match group_index.get(code) {
                Some(&idx) => {
                    let group = &mut groups[idx];
                    if group.material_desc.is_empty() && !entry.material_desc.is_empty() {
                        group.material_desc = entry.material_desc.as_str();
                    }
                    group.entries.push(entry);
                }
                None => {
                    group_index.insert(code, groups.len());
                    groups.push(MaterialGroup {
                        material_code: code,
                        material_desc: entry.material_desc.as_str(),
                        entries: vec![entry],
                    });
                }
            }
        }

        groups
    }

    /// 出现过的业务单元数量
    pub fn business_unit_count(&self) -> usize {
        let mut units: Vec<&str> = self
            .entries
            .iter()
            .map(|e| e.key.business_unit.as_str())
            .filter(|bu| !bu.is_empty())
            .collect();
        units.sort_unstable();
        units.dedup();
        units.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duplicate_triples_are_summed() {
        let records = vec![
            StockRecord::new("M1", "1", "1", 100.0),
            StockRecord::new("M1", "1", "1", 50.5),
            StockRecord::new("M1", "1", "28", 10.0),
        ];
        let stock = AggregatedStock::aggregate(&records);

        assert_eq!(stock.len(), 2);
        assert_eq!(stock.balance_of("M1", "1", "1"), Some(150.5));
        assert_eq!(stock.balance_of("M1", "1", "28"), Some(10.0));
        assert_eq!(stock.entries()[0].record_count, 2);
    }

    #[test]
    fn test_equivalent_spellings_share_key() {
        let records = vec![
            StockRecord::new("M1", "01", "0001", 10.0),
            StockRecord::new("M1", "1", "1", 5.0),
            StockRecord::new("M1", "1", "qual", 3.0),
            StockRecord::new("M1", "1", "QUAL", 4.0),
        ];
        let stock = AggregatedStock::aggregate(&records);

        assert_eq!(stock.len(), 2);
        assert_eq!(stock.balance_of("M1", "1", "1"), Some(15.0));
        assert_eq!(stock.balance_of("M1", "1", "QUAL"), Some(7.0));
    }

    #[test]
    fn test_missing_balance_counts_as_zero() {
        let mut record = StockRecord::new("M1", "1", "1", 0.0);
        record.balance = None;
        let records = vec![record, StockRecord::new("M1", "1", "1", 20.0)];
        let stock = AggregatedStock::aggregate(&records);

        assert_eq!(stock.balance_of("M1", "1", "1"), Some(20.0));
        assert_eq!(stock.entries()[0].record_count, 2);
    }

    #[test]
    fn test_blank_material_dropped() {
        let records = vec![
            StockRecord::new("  ", "1", "1", 100.0),
            StockRecord::new("", "1", "1", 100.0),
            StockRecord::new("M1", "1", "1", 1.0),
        ];
        let stock = AggregatedStock::aggregate(&records);

        assert_eq!(stock.len(), 1);
        assert_eq!(stock.total_records(), 3);
        assert_eq!(stock.dropped_records(), 2);
    }

    #[test]
    fn test_negative_and_zero_balances_kept() {
        let records = vec![
            StockRecord::new("M1", "1", "1", -30.0),
            StockRecord::new("M2", "1", "1", 0.0),
        ];
        let stock = AggregatedStock::aggregate(&records);
        assert_eq!(stock.balance_of("M1", "1", "1"), Some(-30.0));
        assert_eq!(stock.balance_of("M2", "1", "1"), Some(0.0));
    }

    #[test]
    fn test_first_occurrence_order_and_grouping() {
        let records = vec![
            StockRecord::new("M2", "1", "1", 1.0),
            StockRecord::new("M1", "3", "1", 2.0).with_desc("Parafuso"),
            StockRecord::new("M2", "6", "28", 3.0).with_desc("Porca"),
            StockRecord::new("M1", "1", "1", 4.0),
        ];
        let stock = AggregatedStock::aggregate(&records);
        let groups = stock.by_material();

        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].material_code, "M2");
        assert_eq!(groups[0].material_desc, "Porca");
        assert_eq!(groups[0].entries.len(), 2);
        assert_eq!(groups[1].material_code, "M1");
        assert_eq!(groups[1].entries[0].business_unit(), "3");
    }

    #[test]
    fn test_balance_map_matches_entries() {
        let records = vec![
            StockRecord::new("M1", "1", "1", 1.0),
            StockRecord::new("M1", "1", "1", 2.0),
        ];
        let stock = AggregatedStock::aggregate(&records);
        let map = stock.balance_map();
        assert_eq!(map.len(), 1);
        assert_eq!(map.values().copied().sum::<f64>(), 3.0);
    }

    #[test]
    fn test_business_unit_count() {
        let records = vec![
            StockRecord::new("M1", "1", "1", 1.0),
            StockRecord::new("M2", "01", "8", 1.0),
            StockRecord::new("M1", "6", "28", 1.0),
        ];
        assert_eq!(AggregatedStock::aggregate(&records).business_unit_count(), 2);
    }
}
