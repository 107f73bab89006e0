// ==========================================
// WMS 库存调拨系统 - 对比视图
// ==========================================
// 职责: 固定仓库 × 固定业务单元的余额对比（展示用）
// 红线: 不自行匹配调出/调入方,提示只取正式建议列表
// ==========================================

use crate::domain::transfer::{ComparisonRow, ComparisonView, TransferSuggestion};
use crate::engine::aggregator::AggregatedStock;
use std::collections::HashMap;

/// 对比视图定义
#[derive(Debug, Clone, Copy)]
pub struct ComparisonSpec {
    pub name: &'static str,
    pub warehouse: &'static str,
    pub business_units: &'static [&'static str],
}

/// 仓库 1：BU1 × BU3 × BU7
pub const WAREHOUSE_1_NETWORK: ComparisonSpec = ComparisonSpec {
    name: "WAREHOUSE_1_NETWORK",
    warehouse: "1",
    business_units: &["1", "3", "7"],
};

/// 仓库 28 专线：BU1 × BU6
pub const WAREHOUSE_28_LANE: ComparisonSpec = ComparisonSpec {
    name: "WAREHOUSE_28_LANE",
    warehouse: "28",
    business_units: &["1", "6"],
};

pub const DEFAULT_COMPARISONS: [ComparisonSpec; 2] = [WAREHOUSE_1_NETWORK, WAREHOUSE_28_LANE];

impl ComparisonSpec {
    fn covers(&self, business_unit: &str, warehouse: &str) -> bool {
        warehouse == self.warehouse && self.business_units.contains(&business_unit)
    }

    /// 构建对比视图
    ///
    /// # 参数
    /// - stock: 聚合余额
    /// - suggestions: 已排序的正式建议列表
    /// - critical_threshold: 临界值（仅用于 has_critical 标记）
    pub fn build(
        &self,
        stock: &AggregatedStock,
        suggestions: &[TransferSuggestion],
        critical_threshold: f64,
    ) -> ComparisonView {
        let mut rows = Vec::new();

        // 按物料分桶，桶内保持正式排序
        let mut by_material: HashMap<&str, Vec<&TransferSuggestion>> = HashMap::new();
        for s in suggestions {
            by_material.entry(s.material_code.as_str()).or_default().push(s);
        }

        for group in stock.by_material() {
            let balances: Vec<Option<f64>> = self
                .business_units
                .iter()
                .map(|bu| {
                    group
                        .entries
                        .iter()
                        .find(|e| e.business_unit() == *bu && e.warehouse() == self.warehouse)
                        .map(|e| e.balance)
                })
                .collect();

            if balances.iter().all(Option::is_none) {
                continue;
            }

            let total = balances.iter().flatten().sum();
            let has_critical = balances
                .iter()
                .flatten()
                .any(|&v| v < critical_threshold);

            let hint = by_material
                .get(group.material_code)
                .and_then(|bucket| {
                    bucket.iter().find(|s| {
                        self.covers(&s.origin.business_unit, &s.origin.warehouse)
                            && self.covers(&s.destination.business_unit, &s.destination.warehouse)
                    })
                })
                .map(|s| (*s).clone());

            rows.push(ComparisonRow {
                material_code: group.material_code.to_string(),
                material_desc: group.material_desc.to_string(),
                balances,
                total,
                has_critical,
                hint,
            });
        }

        ComparisonView {
            name: self.name.to_string(),
            warehouse: self.warehouse.to_string(),
            business_units: self.business_units.iter().map(|s| s.to_string()).collect(),
            rows,
        }
    }
}
