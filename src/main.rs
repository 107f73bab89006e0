// ==========================================
// WMS 库存调拨系统 - 命令行入口
// ==========================================
// 用法: wms-rebalance <库存文件.xlsx|.xls|.csv> [数据库路径]
// 输出: stdout 为 JSON 报告,日志写 stderr
// ==========================================

use anyhow::{bail, Context};
use wms_rebalance::app::{get_default_db_path, AppState};
use wms_rebalance::{i18n, logging};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    logging::init();

    if let Ok(locale) = std::env::var("WMS_REBALANCE_LOCALE") {
        i18n::set_locale(locale.trim());
    }

    let mut args = std::env::args().skip(1);
    let Some(file_path) = args.next() else {
        bail!("用法: wms-rebalance <库存文件.xlsx|.xls|.csv> [数据库路径]");
    };
    let db_path = args.next().unwrap_or_else(get_default_db_path);

    tracing::info!("==================================================");
    tracing::info!("{} v{}", wms_rebalance::APP_NAME, wms_rebalance::VERSION);
    tracing::info!("使用数据库: {}", db_path);
    tracing::info!("==================================================");

    let state = AppState::new(db_path).map_err(|e| anyhow::anyhow!("无法初始化应用状态: {}", e))?;

    let result = state
        .rebalance_api
        .analyze_file(&file_path)
        .await
        .with_context(|| format!("分析失败: {}", file_path))?;

    if result.report.suggestions.is_empty() {
        tracing::info!("{}", i18n::t("report.no_suggestions"));
    }

    println!("{}", serde_json::to_string_pretty(&result)?);
    Ok(())
}
