// ==========================================
// WMS 库存调拨系统 - 调拨参数读取 Trait
// ==========================================
// 职责: 定义引擎所需的参数读取接口（不包含实现）
// 红线: 不包含配置写入、不包含业务逻辑
// ==========================================

use crate::config::rebalance_config::RebalanceConfig;
use async_trait::async_trait;
use std::error::Error;

// ==========================================
// RebalanceConfigReader Trait
// ==========================================
// 实现者: ConfigManager（从 config_kv 表读取）
#[async_trait]
pub trait RebalanceConfigReader: Send + Sync {
    /// 获取临界余额
    ///
    /// # 默认值
    /// - 200
    async fn get_critical_threshold(&self) -> Result<f64, Box<dyn Error>>;

    /// 获取预警倍数（仅展示层）
    ///
    /// # 默认值
    /// - 1.5
    async fn get_warn_multiplier(&self) -> Result<f64, Box<dyn Error>>;

    /// 获取封锁仓库列表（未规范化）
    async fn get_blocked_warehouses(&self) -> Result<Vec<String>, Box<dyn Error>>;

    /// 组装完整参数（封锁列表已规范化）
    async fn load_rebalance_config(&self) -> Result<RebalanceConfig, Box<dyn Error>> {
        // 逐项绑定：错误类型非 Send，不能跨 await 存活
        let critical_threshold = self.get_critical_threshold().await?;
        let warn_multiplier = self.get_warn_multiplier().await?;
        let blocked_warehouses = self.get_blocked_warehouses().await?;

        let config = RebalanceConfig {
            critical_threshold,
            warn_multiplier,
            blocked_warehouses,
        };
        Ok(config.normalized())
    }
}
