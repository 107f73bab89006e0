// ==========================================
// WMS 库存调拨系统 - 领域类型定义
// ==========================================
// 依据: 调拨规则说明 - 优先级体系 / 调拨通道
// ==========================================

use serde::{Deserialize, Serialize};
use std::fmt;

// ==========================================
// 调拨优先级 (Transfer Priority)
// ==========================================
// 红线: 等级制,不是评分制
// 顺序: Urgent < High < Normal（越小越优先）
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TransferPriority {
    Urgent, // 紧急
    High,   // 高
    Normal, // 普通
}

impl TransferPriority {
    /// 排序序号（0 最优先）
    pub fn rank(&self) -> u8 {
        match self {
            TransferPriority::Urgent => 0,
            TransferPriority::High => 1,
            TransferPriority::Normal => 2,
        }
    }

    /// 本地化显示名称
    pub fn label(&self) -> String {
        match self {
            TransferPriority::Urgent => crate::i18n::t("priority.urgent"),
            TransferPriority::High => crate::i18n::t("priority.high"),
            TransferPriority::Normal => crate::i18n::t("priority.normal"),
        }
    }

    /// 从字符串解析优先级（兼容历史标签）
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_uppercase().as_str() {
            "URGENT" | "URGENTE" => Some(TransferPriority::Urgent),
            "HIGH" | "ALTO" => Some(TransferPriority::High),
            "NORMAL" => Some(TransferPriority::Normal),
            _ => None,
        }
    }
}

impl fmt::Display for TransferPriority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransferPriority::Urgent => write!(f, "URGENT"),
            TransferPriority::High => write!(f, "HIGH"),
            TransferPriority::Normal => write!(f, "NORMAL"),
        }
    }
}

// ==========================================
// 库存水位 (Stock Level)
// ==========================================
// 仅供展示层使用，不参与匹配计算
// 顺序: Critical < Warning < Ok
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum StockLevel {
    Critical, // 低于临界值
    Warning,  // 低于 临界值 × 预警倍数
    Ok,       // 正常
}

impl StockLevel {
    /// 根据余额判定水位
    ///
    /// # 规则
    /// - balance < critical → CRITICAL
    /// - balance < critical × warn_multiplier → WARNING
    /// - 其他 → OK
    pub fn classify(balance: f64, critical: f64, warn_multiplier: f64) -> Self {
        if balance < critical {
            StockLevel::Critical
        } else if balance < critical * warn_multiplier {
            StockLevel::Warning
        } else {
            StockLevel::Ok
        }
    }

    /// 本地化显示名称
    pub fn label(&self) -> String {
        match self {
            StockLevel::Critical => crate::i18n::t("stock_level.critical"),
            StockLevel::Warning => crate::i18n::t("stock_level.warning"),
            StockLevel::Ok => crate::i18n::t("stock_level.ok"),
        }
    }
}

impl fmt::Display for StockLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StockLevel::Critical => write!(f, "CRITICAL"),
            StockLevel::Warning => write!(f, "WARNING"),
            StockLevel::Ok => write!(f, "OK"),
        }
    }
}

// ==========================================
// 调拨通道规则 (Pair Rule)
// ==========================================
// 记录放行某个 origin → destination 组合的规则，作为建议的 reason
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PairRule {
    FreeOrigin,   // 仓库 1: 可调往任意非封锁仓库
    MainUnitOnly, // 仓库 8: 仅调往业务单元 1
    ReservedLane, // 仓库 28: 仅限 BU1 ↔ BU6 的 28 号仓专线
}

impl fmt::Display for PairRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PairRule::FreeOrigin => write!(f, "FREE_ORIGIN"),
            PairRule::MainUnitOnly => write!(f, "MAIN_UNIT_ONLY"),
            PairRule::ReservedLane => write!(f, "RESERVED_LANE"),
        }
    }
}
