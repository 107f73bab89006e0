// ==========================================
// WMS 库存调拨系统 - 引擎层
// ==========================================
// 职责: 实现调拨规则引擎（纯计算,无 I/O）
// 红线: 输出仅为建议,不修改库存
// ==========================================

pub mod aggregator;
pub mod comparison;
pub mod eligibility;
pub mod error;
pub mod location;
pub mod matching;
pub mod orchestrator;
pub mod priority;
pub mod zero_stock;

// 重导出核心引擎
pub use aggregator::{AggregatedStock, MaterialGroup};
pub use comparison::{ComparisonSpec, DEFAULT_COMPARISONS, WAREHOUSE_1_NETWORK, WAREHOUSE_28_LANE};
pub use eligibility::EligibilityPolicy;
pub use error::{EngineError, EngineResult};
pub use location::normalize_location;
pub use matching::MatchingEngine;
pub use orchestrator::RebalanceOrchestrator;
pub use priority::{compare_suggestions, PriorityClassifier};
pub use zero_stock::ZeroStockDetector;
