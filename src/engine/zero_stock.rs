// ==========================================
// WMS 库存调拨系统 - 零库存检测
// ==========================================
// 职责:
// - 库位级: 可调出仓库余额 <= 0
// - 物料级: 所有可调出仓库余额合计 <= 0（无任何可调出库存）
// ==========================================
// 说明: 非可调出仓库的库存不计入物料级合计（按规则不可调拨）
// ==========================================

use crate::domain::transfer::{NoStockAnywhere, ZeroStockFlag};
use crate::engine::aggregator::AggregatedStock;
use crate::engine::eligibility::EligibilityPolicy;
use tracing::{debug, instrument};

pub struct ZeroStockDetector<'p> {
    policy: &'p EligibilityPolicy,
}

impl<'p> ZeroStockDetector<'p> {
    pub fn new(policy: &'p EligibilityPolicy) -> Self {
        Self { policy }
    }

    /// 库位级零库存标记（按聚合条目顺序）
    #[instrument(skip(self, stock), fields(entries = stock.len()))]
    pub fn detect_zero_stock(&self, stock: &AggregatedStock) -> Vec<ZeroStockFlag> {
        let flags: Vec<ZeroStockFlag> = stock
            .entries()
            .iter()
            .filter(|e| self.policy.is_eligible_origin(e.warehouse()))
            .filter(|e| e.balance <= 0.0)
            .map(|e| ZeroStockFlag {
                material_code: e.key.material_code.clone(),
                material_desc: e.material_desc.clone(),
                business_unit: e.key.business_unit.clone(),
                warehouse: e.key.warehouse.clone(),
                balance: e.balance,
            })
            .collect();

        debug!(flags = flags.len(), "库位级零库存检测完成");
        flags
    }

    /// 物料级无可调库存（按物料首次出现顺序）
    ///
    /// 没有任何可调出库位的物料合计为 0，同样上报
    #[instrument(skip(self, stock), fields(entries = stock.len()))]
    pub fn detect_no_stock_anywhere(&self, stock: &AggregatedStock) -> Vec<NoStockAnywhere> {
        let result: Vec<NoStockAnywhere> = stock
            .by_material()
            .into_iter()
            .filter_map(|group| {
                let eligible: Vec<f64> = group
                    .entries
                    .iter()
                    .filter(|e| self.policy.is_eligible_origin(e.warehouse()))
                    .map(|e| e.balance)
                    .collect();
                let total_balance: f64 = eligible.iter().sum();

                (total_balance <= 0.0).then(|| NoStockAnywhere {
                    material_code: group.material_code.to_string(),
                    material_desc: group.material_desc.to_string(),
                    total_balance,
                    eligible_locations: eligible.len(),
                })
            })
            .collect();

        debug!(materials = result.len(), "物料级零库存检测完成");
        result
    }
}
