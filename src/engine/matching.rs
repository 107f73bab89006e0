// ==========================================
// WMS 库存调拨系统 - 调拨匹配引擎
// ==========================================
// 职责: 为每个低于临界值的库位选出唯一最佳调出方并计算建议数量
// 输入: AggregatedStock + EligibilityPolicy + 临界值
// 输出: 调拨建议列表（生成顺序,未排序）
// ==========================================
// 红线:
// - 调出方调拨后余额不得低于临界值
// - 每个调入方只选一个调出方,不拆单
// - 未选中的调出方本次运行不再使用,不排队,不结转
// ==========================================

use crate::domain::stock::AggregatedEntry;
use crate::domain::transfer::{TransferEndpoint, TransferSuggestion};
use crate::domain::types::PairRule;
use crate::engine::aggregator::{AggregatedStock, MaterialGroup};
use crate::engine::eligibility::EligibilityPolicy;
use crate::engine::priority::PriorityClassifier;
use tracing::{debug, instrument, trace};

// ==========================================
// MatchingEngine - 调拨匹配引擎
// ==========================================
pub struct MatchingEngine<'p> {
    policy: &'p EligibilityPolicy,
    critical_threshold: f64,
    classifier: PriorityClassifier,
}

impl<'p> MatchingEngine<'p> {
    pub fn new(policy: &'p EligibilityPolicy, critical_threshold: f64) -> Self {
        Self {
            policy,
            critical_threshold,
            classifier: PriorityClassifier::new(critical_threshold),
        }
    }

    // ==========================================
    // 核心方法
    // ==========================================

    /// 生成全部物料的调拨建议
    #[instrument(skip(self, stock), fields(entries = stock.len()))]
    pub fn match_transfers(&self, stock: &AggregatedStock) -> Vec<TransferSuggestion> {
        let mut suggestions = Vec::new();
        let mut unmatched = 0usize;

        for group in stock.by_material() {
            let (matched, skipped) = self.match_material(&group);
            unmatched += skipped;
            suggestions.extend(matched);
        }

        debug!(
            suggestions = suggestions.len(),
            unmatched_destinations = unmatched,
            "调拨匹配完成"
        );
        suggestions
    }

    /// 单个物料匹配
    ///
    /// # 返回
    /// - (建议列表, 无可用调出方的调入库位数)
    pub fn match_material(&self, group: &MaterialGroup<'_>) -> (Vec<TransferSuggestion>, usize) {
        // 1. 调入候选: 非封锁仓库且低于临界值
        let destinations: Vec<&AggregatedEntry> = group
            .entries
            .iter()
            .copied()
            .filter(|e| self.policy.is_valid_destination(e.warehouse()))
            .filter(|e| e.balance < self.critical_threshold)
            .collect();

        if destinations.is_empty() {
            return (Vec::new(), 0);
        }

        // 2. 调出候选: 可调出仓库、余额为正且高于临界值
        let origins: Vec<&AggregatedEntry> = group
            .entries
            .iter()
            .copied()
            .filter(|e| self.policy.is_eligible_origin(e.warehouse()))
            .filter(|e| e.balance > 0.0 && e.balance - self.critical_threshold > 0.0)
            .collect();

        let mut suggestions = Vec::new();
        let mut unmatched = 0usize;

        for dest in destinations {
            // 3. 通道过滤 + 4. 选余额最大者（并列取先出现者）
            let dest_location = dest.location();
            let mut best: Option<(&AggregatedEntry, PairRule)> = None;
            for &origin in &origins {
                let Some(rule) = self.policy.pair_rule(&origin.location(), &dest_location) else {
                    continue;
                };
                match best {
                    Some((current, _)) if current.balance >= origin.balance => {}
                    _ => best = Some((origin, rule)),
                }
            }

            let Some((origin, rule)) = best else {
                trace!(
                    material_code = group.material_code,
                    business_unit = dest.business_unit(),
                    warehouse = dest.warehouse(),
                    "无可用调出方"
                );
                unmatched += 1;
                continue;
            };

            // 5. 数量计算
            let Some(qty) = self.suggested_qty(origin.balance, dest.balance) else {
                unmatched += 1;
                continue;
            };

            // 6. 生成建议
            suggestions.push(TransferSuggestion {
                material_code: group.material_code.to_string(),
                material_desc: group.material_desc.to_string(),
                origin: TransferEndpoint::from(origin),
                destination: TransferEndpoint::from(dest),
                suggested_qty: qty,
                priority: self.classifier.classify(dest.balance),
                rule,
            });
        }

        (suggestions, unmatched)
    }

    /// 计算建议数量
    ///
    /// # 规则
    /// - need  = critical - destination_balance
    /// - avail = origin_balance - critical
    /// - qty   = ceil(min(need, avail))
    /// - 向上取整后超出 avail（小数余额）时改为向下取整,保证调出方不跌破临界值
    ///
    /// # 返回
    /// - None: need/avail 非正或取整后为 0
    pub fn suggested_qty(&self, origin_balance: f64, destination_balance: f64) -> Option<u64> {
        let need = self.critical_threshold - destination_balance;
        let avail = origin_balance - self.critical_threshold;
        if !(need > 0.0 && avail > 0.0) {
            return None;
        }

        let mut qty = need.min(avail).ceil();
        if qty > avail {
            qty = avail.floor();
        }

        if qty >= 1.0 {
            Some(qty as u64)
        } else {
            None
        }
    }
}
