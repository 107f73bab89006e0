// ==========================================
// WMS 库存调拨系统 - API 层
// ==========================================
// 职责: 提供业务 API 接口,供命令行入口调用
// ==========================================

pub mod error;
pub mod rebalance_api;

// 重导出核心类型
pub use error::{ApiError, ApiResult};
pub use rebalance_api::{AnalysisResult, RebalanceApi};
