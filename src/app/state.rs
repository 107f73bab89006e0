// ==========================================
// WMS 库存调拨系统 - 应用状态
// ==========================================
// 职责: 管理应用级别的共享状态和API实例
// ==========================================

use std::sync::Arc;

use crate::api::RebalanceApi;
use crate::config::config_manager::ConfigManager;

/// 数据库路径环境变量
pub const DB_PATH_ENV: &str = "WMS_REBALANCE_DB_PATH";

/// 应用状态
pub struct AppState {
    /// 数据库路径
    pub db_path: String,

    /// 配置管理器
    pub config_manager: Arc<ConfigManager>,

    /// 调拨分析API
    pub rebalance_api: Arc<RebalanceApi<ConfigManager>>,
}

impl AppState {
    /// 创建应用状态（打开配置库并建表）
    pub fn new(db_path: String) -> Result<Self, Box<dyn std::error::Error>> {
        tracing::info!(db_path = %db_path, "初始化应用状态");

        let config_manager = Arc::new(ConfigManager::new(&db_path)?);
        let rebalance_api = Arc::new(RebalanceApi::new(config_manager.clone()));

        Ok(Self {
            db_path,
            config_manager,
            rebalance_api,
        })
    }
}

/// 获取默认数据库路径
///
/// 优先级: 环境变量 WMS_REBALANCE_DB_PATH → 用户数据目录 → 当前目录
pub fn get_default_db_path() -> String {
    use std::path::PathBuf;

    if let Ok(path) = std::env::var(DB_PATH_ENV) {
        let trimmed = path.trim();
        if !trimmed.is_empty() {
            return trimmed.to_string();
        }
    }

    let mut path = PathBuf::from("./wms_rebalance.db");

    if let Some(data_dir) = dirs::data_dir() {
        // 开发环境使用独立目录，避免污染生产数据
        #[cfg(debug_assertions)]
        {
            path = data_dir.join("wms-rebalance-dev");
        }

        #[cfg(not(debug_assertions))]
        {
            path = data_dir.join("wms-rebalance");
        }

        // 确保目录存在
        std::fs::create_dir_all(&path).ok();
        path = path.join("wms_rebalance.db");
    }

    path.to_string_lossy().to_string()
}
