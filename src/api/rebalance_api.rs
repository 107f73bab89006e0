// ==========================================
// WMS 库存调拨系统 - 调拨分析 API
// ==========================================
// 职责: 读取参数 → (导入文件) → 运行引擎 → 返回报告
// 红线: 只读分析,不修改库存,不持久化建议
// ==========================================

use crate::api::error::{ApiError, ApiResult};
use crate::config::{RebalanceConfig, RebalanceConfigReader};
use crate::domain::stock::StockRecord;
use crate::domain::transfer::RebalanceReport;
use crate::engine::orchestrator::RebalanceOrchestrator;
use crate::importer::stock_importer::{ImportBatch, StockImporter};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::Arc;
use tracing::{info, instrument};

// ==========================================
// AnalysisResult - 文件分析结果
// ==========================================
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub batch: ImportBatch,
    pub report: RebalanceReport,
}

// ==========================================
// RebalanceApi - 调拨分析 API
// ==========================================
pub struct RebalanceApi<C>
where
    C: RebalanceConfigReader,
{
    config: Arc<C>,
}

impl<C> RebalanceApi<C>
where
    C: RebalanceConfigReader,
{
    /// 创建新的 RebalanceApi 实例
    ///
    /// # 参数
    /// - config: 参数读取器
    pub fn new(config: Arc<C>) -> Self {
        Self { config }
    }

    /// 读取当前生效的调拨参数（已规范化）
    pub async fn current_config(&self) -> ApiResult<RebalanceConfig> {
        self.config
            .load_rebalance_config()
            .await
            .map_err(|e| ApiError::ConfigReadError(e.to_string()))
    }

    /// 分析已加载的库存记录
    #[instrument(skip(self, records), fields(records = records.len()))]
    pub async fn analyze_records(&self, records: &[StockRecord]) -> ApiResult<RebalanceReport> {
        let config = self.current_config().await?;
        Ok(RebalanceOrchestrator::run(records, &config)?)
    }

    /// 导入文件并分析
    ///
    /// # 错误
    /// - ImportError: 文件不存在/格式不支持/缺少余额列/无数据
    /// - InvalidConfig: 参数校验失败
    #[instrument(skip(self, file_path), fields(file = %file_path.as_ref().display()))]
    pub async fn analyze_file<P: AsRef<Path>>(&self, file_path: P) -> ApiResult<AnalysisResult> {
        let path = file_path.as_ref().to_path_buf();
        let imported = tokio::task::spawn_blocking(move || StockImporter::new().import_file(path))
            .await
            .map_err(|e| ApiError::InternalError(format!("导入任务失败: {}", e)))??;

        let report = self.analyze_records(&imported.records).await?;
        info!(
            batch_id = %imported.batch.batch_id,
            suggestions = report.summary.suggestion_count,
            "文件分析完成"
        );

        Ok(AnalysisResult {
            batch: imported.batch,
            report,
        })
    }
}
