// ==========================================
// WMS 库存调拨系统 - 库存导入器
// ==========================================
// 流程:
// 1) 文件解析（CSV / Excel 首个工作表）
// 2) 列映射（余额列必需）
// 3) 行映射 + 库位规范化
// 4) 生成导入批次信息
// ==========================================
// 红线: 只读文件,不落库
// ==========================================

use crate::domain::stock::StockRecord;
use crate::importer::error::{ImportError, ImportResult};
use crate::importer::field_mapper::StockFieldMapper;
use crate::importer::file_parser::{RawSheet, UniversalFileParser};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{info, instrument};
use uuid::Uuid;

// ==========================================
// ImportBatch - 导入批次
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImportBatch {
    pub batch_id: String,
    pub file_name: String,
    pub imported_at: DateTime<Utc>,
    pub rows_read: usize,
    pub blank_rows_skipped: usize,
}

// ==========================================
// ImportedStock - 导入结果
// ==========================================
#[derive(Debug, Clone)]
pub struct ImportedStock {
    pub batch: ImportBatch,
    pub records: Vec<StockRecord>,
}

// ==========================================
// StockImporter - 库存导入器
// ==========================================
#[derive(Debug, Default)]
pub struct StockImporter;

impl StockImporter {
    pub fn new() -> Self {
        Self
    }

    /// 从文件导入库存余额
    ///
    /// # 错误
    /// - FileNotFound / UnsupportedFormat: 文件问题
    /// - EmptySheet: 无表头
    /// - BalanceColumnMissing: 找不到余额列
    /// - NoDataRows: 没有非空数据行
    #[instrument(skip(self, file_path), fields(file = %file_path.as_ref().display()))]
    pub fn import_file<P: AsRef<Path>>(&self, file_path: P) -> ImportResult<ImportedStock> {
        let path = file_path.as_ref();
        let sheet = UniversalFileParser.parse(path)?;

        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_default();

        let imported = self.import_sheet(sheet, file_name)?;
        info!(
            batch_id = %imported.batch.batch_id,
            "{}",
            crate::i18n::t_with_args(
                "import.completed",
                &[
                    ("rows", &imported.batch.rows_read.to_string()),
                    ("skipped", &imported.batch.blank_rows_skipped.to_string()),
                ],
            )
        );
        Ok(imported)
    }

    /// 从已解析的表格导入
    pub fn import_sheet(&self, sheet: RawSheet, file_name: String) -> ImportResult<ImportedStock> {
        if sheet.headers.is_empty() {
            return Err(ImportError::EmptySheet);
        }

        let mapper = StockFieldMapper::from_headers(&sheet.headers)?;
        if sheet.rows.is_empty() {
            return Err(ImportError::NoDataRows);
        }

        let records: Vec<StockRecord> = sheet.rows.iter().map(|row| mapper.map_row(row)).collect();

        Ok(ImportedStock {
            batch: ImportBatch {
                batch_id: Uuid::new_v4().to_string(),
                file_name,
                imported_at: Utc::now(),
                rows_read: records.len(),
                blank_rows_skipped: sheet.blank_rows_skipped,
            },
            records,
        })
    }
}
