use crate::engine::location::normalize_location;
use serde::{Deserialize, Serialize};

/// 默认临界余额
pub const DEFAULT_CRITICAL_THRESHOLD: f64 = 200.0;

/// 默认预警倍数（仅展示层使用）：余额 < 200 × 1.5 = 300 → 预警
pub const DEFAULT_WARN_MULTIPLIER: f64 = 1.5;

/// 默认封锁仓库（不能作为调入方）
pub const DEFAULT_BLOCKED_WAREHOUSES: &[&str] = &[
    "0", "2", "8", "20", "21", "22", "23", "24", "25", "26", "27", "29", "30", "32", "33", "200",
    "300", "1001", "9999", "ABAS", "AMOS", "HOLD", "IMPO", "INVE", "LOJA", "MTNL", "PERD", "PROD",
    "QUAL", "TEMP", "TRAN", "VENC",
];

/// 调拨引擎参数
///
/// 存储位置：config_kv（scope_id='global'）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RebalanceConfig {
    /// 每个库位应保留的最低余额
    #[serde(default = "default_critical_threshold")]
    pub critical_threshold: f64,

    /// 预警倍数（仅展示层水位判定使用）
    #[serde(default = "default_warn_multiplier")]
    pub warn_multiplier: f64,

    /// 封锁仓库列表（规范化后的代码）
    #[serde(default = "default_blocked_warehouses")]
    pub blocked_warehouses: Vec<String>,
}

fn default_critical_threshold() -> f64 {
    DEFAULT_CRITICAL_THRESHOLD
}

fn default_warn_multiplier() -> f64 {
    DEFAULT_WARN_MULTIPLIER
}

fn default_blocked_warehouses() -> Vec<String> {
    DEFAULT_BLOCKED_WAREHOUSES
        .iter()
        .map(|s| s.to_string())
        .collect()
}

impl Default for RebalanceConfig {
    fn default() -> Self {
        Self {
            critical_threshold: DEFAULT_CRITICAL_THRESHOLD,
            warn_multiplier: DEFAULT_WARN_MULTIPLIER,
            blocked_warehouses: default_blocked_warehouses(),
        }
    }
}

impl RebalanceConfig {
    pub fn with_critical_threshold(mut self, critical_threshold: f64) -> Self {
        self.critical_threshold = critical_threshold;
        self
    }

    pub fn with_blocked_warehouses<I, S>(mut self, warehouses: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.blocked_warehouses = warehouses
            .into_iter()
            .map(|w| w.as_ref().to_string())
            .collect();
        self
    }

    /// 规范化封锁列表（去零/大写/去空/去重，保持原顺序）
    pub fn normalized(mut self) -> Self {
        let mut seen = std::collections::HashSet::new();
        self.blocked_warehouses = self
            .blocked_warehouses
            .iter()
            .map(|w| normalize_location(w))
            .filter(|w| !w.is_empty())
            .filter(|w| seen.insert(w.clone()))
            .collect();
        self
    }

    /// 校验参数
    ///
    /// # 规则
    /// - critical_threshold 必须为有限正数（优先级按 balance / critical 计算）
    /// - warn_multiplier 必须为有限数且 >= 1
    pub fn validate(&self) -> Result<(), String> {
        if !self.critical_threshold.is_finite() || self.critical_threshold <= 0.0 {
            return Err(format!(
                "critical_threshold 必须为正数，实际 {}",
                self.critical_threshold
            ));
        }
        if !self.warn_multiplier.is_finite() || self.warn_multiplier < 1.0 {
            return Err(format!(
                "warn_multiplier 必须 >= 1，实际 {}",
                self.warn_multiplier
            ));
        }
        Ok(())
    }
}
