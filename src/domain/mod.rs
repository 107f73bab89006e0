// ==========================================
// WMS 库存调拨系统 - 领域模型层
// ==========================================
// 职责: 定义领域实体、类型
// 红线: 不含数据访问逻辑,不含引擎逻辑
// ==========================================

pub mod stock;
pub mod transfer;
pub mod types;

// 重导出核心类型
pub use stock::{AggregatedEntry, Location, StockKey, StockRecord};
pub use transfer::{
    ComparisonRow, ComparisonView, NoStockAnywhere, RebalanceReport, RebalanceSummary,
    TransferEndpoint, TransferSuggestion, ZeroStockFlag,
};
pub use types::{PairRule, StockLevel, TransferPriority};
