// ==========================================
// WMS 库存调拨系统 - 调拨优先级判定与排序
// ==========================================
// 职责: 按调入方余额判定优先级 + 输出排序
// 输入: 未排序的调拨建议列表
// 输出: 排序后的调拨建议列表
// ==========================================
// 规则 (pct = balance / critical):
// - URGENT: balance <= 0 或 pct < 0.5
// - HIGH:   pct < 0.75
// - NORMAL: 其他
// 排序键:
// 1) 优先级 (URGENT < HIGH < NORMAL)
// 2) destination.balance 升序 (越缺越靠前)
// 稳定排序,相同键保持输入顺序
// ==========================================

use crate::domain::transfer::TransferSuggestion;
use crate::domain::types::TransferPriority;
use std::cmp::Ordering;

/// URGENT 阈值（占临界值比例）
pub const URGENT_RATIO: f64 = 0.5;

/// HIGH 阈值（占临界值比例）
pub const HIGH_RATIO: f64 = 0.75;

// ==========================================
// PriorityClassifier - 优先级判定器
// ==========================================
pub struct PriorityClassifier {
    critical_threshold: f64,
}

impl PriorityClassifier {
    pub fn new(critical_threshold: f64) -> Self {
        Self { critical_threshold }
    }

    /// 判定调入方余额对应的优先级
    pub fn classify(&self, destination_balance: f64) -> TransferPriority {
        if destination_balance <= 0.0 {
            return TransferPriority::Urgent;
        }

        let pct = destination_balance / self.critical_threshold;
        if pct < URGENT_RATIO {
            TransferPriority::Urgent
        } else if pct < HIGH_RATIO {
            TransferPriority::High
        } else {
            TransferPriority::Normal
        }
    }

    /// 排序调拨建议（稳定排序）
    pub fn sort(&self, mut suggestions: Vec<TransferSuggestion>) -> Vec<TransferSuggestion> {
        suggestions.sort_by(compare_suggestions);
        suggestions
    }
}

/// 比较两条建议
///
/// Ordering::Less 表示 a 排在 b 之前
pub fn compare_suggestions(a: &TransferSuggestion, b: &TransferSuggestion) -> Ordering {
    match a.priority.rank().cmp(&b.priority.rank()) {
        Ordering::Equal => {}
        other => return other,
    }

    a.destination.balance.total_cmp(&b.destination.balance)
}

#[cfg(test)]
mod tests;
