// ==========================================
// Mock 配置实现 - 用于集成测试
// ==========================================

use async_trait::async_trait;
use std::error::Error;
use wms_rebalance::config::{RebalanceConfig, RebalanceConfigReader};

/// Mock 配置结构
#[derive(Debug, Clone)]
pub struct MockConfig {
    pub critical_threshold: f64,
    pub warn_multiplier: f64,
    pub blocked_warehouses: Vec<String>,
}

impl MockConfig {
    /// 创建默认配置
    pub fn default() -> Self {
        let defaults = RebalanceConfig::default();
        Self {
            critical_threshold: defaults.critical_threshold,
            warn_multiplier: defaults.warn_multiplier,
            blocked_warehouses: defaults.blocked_warehouses,
        }
    }

    /// 创建自定义临界值配置
    pub fn with_critical(critical_threshold: f64) -> Self {
        let mut config = Self::default();
        config.critical_threshold = critical_threshold;
        config
    }
}

#[async_trait]
impl RebalanceConfigReader for MockConfig {
    async fn get_critical_threshold(&self) -> Result<f64, Box<dyn Error>> {
        Ok(self.critical_threshold)
    }

    async fn get_warn_multiplier(&self) -> Result<f64, Box<dyn Error>> {
        Ok(self.warn_multiplier)
    }

    async fn get_blocked_warehouses(&self) -> Result<Vec<String>, Box<dyn Error>> {
        Ok(self.blocked_warehouses.clone())
    }
}
