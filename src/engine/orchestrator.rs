// ==========================================
// WMS 库存调拨系统 - 引擎编排器
// ==========================================
// 用途: 协调各引擎的执行顺序
// 流程:
// 1) 参数校验 + 规范化
// 2) 聚合 (Aggregator)
// 3) 匹配 (MatchingEngine)
// 4) 排序 (PriorityClassifier)
// 5) 零库存检测 (ZeroStockDetector)
// 6) 对比视图 (ComparisonSpec)
// 7) 汇总
// ==========================================
// 红线: 纯计算,无 I/O；相同输入 → 相同输出
// ==========================================

use crate::config::RebalanceConfig;
use crate::domain::stock::StockRecord;
use crate::domain::transfer::{RebalanceReport, RebalanceSummary};
use crate::domain::types::{StockLevel, TransferPriority};
use crate::engine::aggregator::AggregatedStock;
use crate::engine::comparison::DEFAULT_COMPARISONS;
use crate::engine::eligibility::EligibilityPolicy;
use crate::engine::error::{EngineError, EngineResult};
use crate::engine::matching::MatchingEngine;
use crate::engine::priority::PriorityClassifier;
use crate::engine::zero_stock::ZeroStockDetector;
use tracing::{debug, info, instrument};

// ==========================================
// RebalanceOrchestrator - 引擎编排器
// ==========================================
pub struct RebalanceOrchestrator {
    config: RebalanceConfig,
    policy: EligibilityPolicy,
}

impl RebalanceOrchestrator {
    /// 创建编排器（校验并规范化参数）
    pub fn new(config: RebalanceConfig) -> EngineResult<Self> {
        config.validate().map_err(EngineError::InvalidConfig)?;
        let config = config.normalized();
        let policy = EligibilityPolicy::from_config(&config);
        Ok(Self { config, policy })
    }

    /// 一次性执行完整流程
    pub fn run(records: &[StockRecord], config: &RebalanceConfig) -> EngineResult<RebalanceReport> {
        Ok(Self::new(config.clone())?.execute(records))
    }

    /// 执行完整调拨分析
    #[instrument(skip(self, records), fields(records = records.len()))]
    pub fn execute(&self, records: &[StockRecord]) -> RebalanceReport {
        let critical = self.config.critical_threshold;

        // ===== 聚合 =====
        let stock = AggregatedStock::aggregate(records);
        debug!(
            entries = stock.len(),
            dropped = stock.dropped_records(),
            "聚合完成"
        );

        // ===== 匹配 + 排序 =====
        let raw = MatchingEngine::new(&self.policy, critical).match_transfers(&stock);
        let suggestions = PriorityClassifier::new(critical).sort(raw);

        // ===== 零库存检测 =====
        let detector = ZeroStockDetector::new(&self.policy);
        let zero_stock = detector.detect_zero_stock(&stock);
        let no_stock_anywhere = detector.detect_no_stock_anywhere(&stock);

        // ===== 对比视图 =====
        let comparisons = DEFAULT_COMPARISONS
            .iter()
            .map(|spec| spec.build(&stock, &suggestions, critical))
            .collect();

        // ===== 汇总 =====
        let mut summary = RebalanceSummary {
            total_records: stock.total_records(),
            dropped_records: stock.dropped_records(),
            aggregated_entries: stock.len(),
            business_units: stock.business_unit_count(),
            suggestion_count: suggestions.len(),
            zero_stock_count: zero_stock.len(),
            no_stock_material_count: no_stock_anywhere.len(),
            ..Default::default()
        };

        for entry in stock.entries() {
            match StockLevel::classify(entry.balance, critical, self.config.warn_multiplier) {
                StockLevel::Critical => summary.critical_entries += 1,
                StockLevel::Warning => summary.warning_entries += 1,
                StockLevel::Ok => {}
            }
        }

        for s in &suggestions {
            match s.priority {
                TransferPriority::Urgent => summary.urgent_count += 1,
                TransferPriority::High => summary.high_count += 1,
                TransferPriority::Normal => summary.normal_count += 1,
            }
        }

        info!(
            suggestions = summary.suggestion_count,
            urgent = summary.urgent_count,
            zero_stock = summary.zero_stock_count,
            no_stock_materials = summary.no_stock_material_count,
            "调拨分析完成"
        );

        RebalanceReport {
            suggestions,
            zero_stock,
            no_stock_anywhere,
            comparisons,
            summary,
        }
    }
}
