// ==========================================
// WMS 库存调拨系统 - 核心库
// ==========================================
// 技术栈: Rust + SQLite（配置）
// 系统定位: 决策支持系统（仅输出调拨建议,人工执行）
// ==========================================

// 初始化国际化系统
rust_i18n::i18n!("locales", fallback = "zh-CN");

// ==========================================
// 模块声明
// ==========================================

// 领域层 - 实体与类型
pub mod domain;

// 引擎层 - 调拨规则
pub mod engine;

// 导入层 - 外部数据
pub mod importer;

// 配置层 - 系统配置
pub mod config;

// 数据库基础设施（连接初始化/PRAGMA 统一）
pub mod db;

// 日志系统
pub mod logging;

// 国际化
pub mod i18n;

// API 层 - 业务接口
pub mod api;

// 应用层 - 共享状态
pub mod app;

// ==========================================
// 重导出核心类型
// ==========================================

// 领域类型
pub use domain::types::{PairRule, StockLevel, TransferPriority};

// 领域实体
pub use domain::{
    AggregatedEntry, ComparisonRow, ComparisonView, Location, NoStockAnywhere, RebalanceReport,
    RebalanceSummary, StockKey, StockRecord, TransferEndpoint, TransferSuggestion, ZeroStockFlag,
};

// 引擎
pub use engine::{
    normalize_location, AggregatedStock, EligibilityPolicy, EngineError, MatchingEngine,
    PriorityClassifier, RebalanceOrchestrator, ZeroStockDetector,
};

// 配置
pub use config::{ConfigManager, RebalanceConfig, RebalanceConfigReader};

// API
pub use api::{AnalysisResult, ApiError, RebalanceApi};

// ==========================================
// 常量定义
// ==========================================

// 系统版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// 系统名称
pub const APP_NAME: &str = "WMS 库存调拨系统";
