// ==========================================
// WMS 库存调拨系统 - 调拨建议领域模型
// ==========================================
// 职责: 定义引擎输出（调拨建议、零库存标记、汇总）
// 红线: 仅为建议,不改变库存
// ==========================================

use crate::domain::stock::{AggregatedEntry, Location};
use crate::domain::types::{PairRule, TransferPriority};
use serde::{Deserialize, Serialize};

// ==========================================
// TransferEndpoint - 调拨端点（起点/终点）
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransferEndpoint {
    pub business_unit: String,
    pub warehouse: String,
    pub balance: f64, // 计算时的聚合余额
}

impl TransferEndpoint {
    pub fn location(&self) -> Location {
        Location::new(self.business_unit.clone(), self.warehouse.clone())
    }
}

impl From<&AggregatedEntry> for TransferEndpoint {
    fn from(entry: &AggregatedEntry) -> Self {
        Self {
            business_unit: entry.key.business_unit.clone(),
            warehouse: entry.key.warehouse.clone(),
            balance: entry.balance,
        }
    }
}

// ==========================================
// TransferSuggestion - 调拨建议
// ==========================================
// 红线: suggested_qty = ceil(min(need, avail)) 且 >= 1
// - need  = critical - destination.balance
// - avail = origin.balance - critical
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransferSuggestion {
    pub material_code: String,
    pub material_desc: String,
    pub origin: TransferEndpoint,
    pub destination: TransferEndpoint,
    pub suggested_qty: u64,
    pub priority: TransferPriority,
    pub rule: PairRule, // 放行该通道的规则（可解释性）
}

// ==========================================
// ZeroStockFlag - 可调出仓库零库存标记
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ZeroStockFlag {
    pub material_code: String,
    pub material_desc: String,
    pub business_unit: String,
    pub warehouse: String,
    pub balance: f64, // <= 0
}

// ==========================================
// NoStockAnywhere - 物料级无可调库存
// ==========================================
// 所有可调出仓库余额合计 <= 0
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NoStockAnywhere {
    pub material_code: String,
    pub material_desc: String,
    pub total_balance: f64,
    pub eligible_locations: usize, // 参与合计的可调出库位数
}

// ==========================================
// RebalanceSummary - 运行汇总
// ==========================================
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RebalanceSummary {
    pub total_records: usize,
    pub dropped_records: usize,
    pub aggregated_entries: usize,
    pub business_units: usize,
    pub critical_entries: usize,
    pub warning_entries: usize,
    pub suggestion_count: usize,
    pub urgent_count: usize,
    pub high_count: usize,
    pub normal_count: usize,
    pub zero_stock_count: usize,
    pub no_stock_material_count: usize,
}

// ==========================================
// ComparisonView - 对比视图（展示用）
// ==========================================
// 红线: 提示信息取自正式建议列表,不作为独立计算结果
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonView {
    pub name: String,
    pub warehouse: String,
    pub business_units: Vec<String>,
    pub rows: Vec<ComparisonRow>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonRow {
    pub material_code: String,
    pub material_desc: String,
    /// 与 ComparisonView.business_units 一一对应；None 表示该单元无记录
    pub balances: Vec<Option<f64>>,
    pub total: f64,
    pub has_critical: bool,
    pub hint: Option<TransferSuggestion>,
}

// ==========================================
// RebalanceReport - 引擎完整输出
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RebalanceReport {
    /// 已按优先级排序，消费方不得重新排序
    pub suggestions: Vec<TransferSuggestion>,
    pub zero_stock: Vec<ZeroStockFlag>,
    pub no_stock_anywhere: Vec<NoStockAnywhere>,
    pub comparisons: Vec<ComparisonView>,
    pub summary: RebalanceSummary,
}
