// ==========================================
// WMS 库存调拨系统 - 导入模块错误类型
// ==========================================
// 工具: thiserror 派生宏
// ==========================================

use crate::i18n::t_with_args;
use thiserror::Error;

/// 导入模块错误类型
#[derive(Error, Debug)]
pub enum ImportError {
    // ===== 文件相关错误 =====
    #[error("文件不存在: {0}")]
    FileNotFound(String),

    #[error("文件格式不支持: {0}（仅支持 .xlsx/.xls/.csv）")]
    UnsupportedFormat(String),

    #[error("文件读取失败: {0}")]
    FileReadError(String),

    #[error("Excel 解析失败: {0}")]
    ExcelParseError(String),

    #[error("CSV 解析失败: {0}")]
    CsvParseError(String),

    // ===== 内容错误 =====
    #[error("工作表为空或无数据行")]
    EmptySheet,

    #[error("未找到任何有效数据行")]
    NoDataRows,

    #[error("未找到余额列，可用列: {available}")]
    BalanceColumnMissing { available: String },

    // ===== 通用错误 =====
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl From<std::io::Error> for ImportError {
    fn from(err: std::io::Error) -> Self {
        ImportError::FileReadError(err.to_string())
    }
}

impl From<csv::Error> for ImportError {
    fn from(err: csv::Error) -> Self {
        ImportError::CsvParseError(err.to_string())
    }
}

impl From<calamine::Error> for ImportError {
    fn from(err: calamine::Error) -> Self {
        ImportError::ExcelParseError(err.to_string())
    }
}

impl ImportError {
    /// 按当前语言生成的提示信息（无对应翻译的变体沿用 Display）
    pub fn localized_message(&self) -> String {
        match self {
            ImportError::FileNotFound(path) => {
                t_with_args("import.file_not_found", &[("path", path)])
            }
            ImportError::UnsupportedFormat(ext) => {
                t_with_args("import.unsupported_format", &[("ext", ext)])
            }
            ImportError::BalanceColumnMissing { available } => {
                t_with_args("import.balance_column_missing", &[("available", available)])
            }
            other => other.to_string(),
        }
    }
}

/// Result 类型别名
pub type ImportResult<T> = Result<T, ImportError>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::{set_locale, LOCALE_TEST_LOCK};

    #[test]
    fn test_localized_message_follows_locale() {
        let _guard = LOCALE_TEST_LOCK.lock().unwrap();
        let err = ImportError::BalanceColumnMissing {
            available: "CD, ARMAZ".to_string(),
        };

        set_locale("pt-BR");
        let msg = err.localized_message();
        assert!(msg.contains("Coluna de saldo"));
        assert!(msg.contains("CD, ARMAZ"));

        set_locale("en");
        let msg = ImportError::UnsupportedFormat("txt".to_string()).localized_message();
        assert_eq!(msg, "Unsupported file format: txt");

        set_locale("zh-CN");
        let msg = ImportError::FileNotFound("/tmp/a.csv".to_string()).localized_message();
        assert_eq!(msg, "文件不存在: /tmp/a.csv");
    }

    #[test]
    fn test_untranslated_variant_uses_display() {
        let err = ImportError::NoDataRows;
        assert_eq!(err.localized_message(), err.to_string());
    }
}
