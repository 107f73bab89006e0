// ==========================================
// WMS 库存调拨系统 - 配置层
// ==========================================
// 职责: 调拨参数定义、读取与持久化
// 存储: config_kv 表
// ==========================================

pub mod config_manager;
pub mod config_reader;
pub mod rebalance_config;

// 重导出核心配置
pub use config_manager::{config_keys, ConfigManager};
pub use config_reader::RebalanceConfigReader;
pub use rebalance_config::{
    RebalanceConfig, DEFAULT_BLOCKED_WAREHOUSES, DEFAULT_CRITICAL_THRESHOLD,
    DEFAULT_WARN_MULTIPLIER,
};
