// ==========================================
// WMS 库存调拨系统 - 文件解析器实现
// ==========================================
// 支持: Excel (.xlsx/.xls，首个工作表) / CSV (.csv)
// 输出: 表头 + 原始行（保持文件顺序，跳过全空行）
// ==========================================

use crate::importer::error::{ImportError, ImportResult};
use calamine::{open_workbook_auto, Reader};
use csv::ReaderBuilder;
use std::path::Path;

// ==========================================
// RawSheet - 解析结果
// ==========================================
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawSheet {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
    pub blank_rows_skipped: usize,
}

impl RawSheet {
    /// 追加一行；全空白行只计数不保留
    fn push_row(&mut self, row: Vec<String>) {
        if row.iter().all(|v| v.is_empty()) {
            self.blank_rows_skipped += 1;
        } else {
            self.rows.push(row);
        }
    }
}

// ==========================================
// FileParser Trait
// ==========================================
pub trait FileParser {
    fn parse_sheet(&self, file_path: &Path) -> ImportResult<RawSheet>;
}

fn ensure_exists(path: &Path) -> ImportResult<()> {
    if !path.exists() {
        return Err(ImportError::FileNotFound(path.display().to_string()));
    }
    Ok(())
}

fn extension_of(path: &Path) -> String {
    path.extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_lowercase()
}

// ==========================================
// CSV Parser 实现
// ==========================================
// 分隔符: 表头行中 ';' 多于 ',' 时使用 ';'（常见于逗号小数的导出文件）
pub struct CsvParser;

impl CsvParser {
    fn detect_delimiter(header_line: &str) -> u8 {
        let semicolons = header_line.matches(';').count();
        let commas = header_line.matches(',').count();
        if semicolons > commas {
            b';'
        } else {
            b','
        }
    }
}

impl FileParser for CsvParser {
    fn parse_sheet(&self, file_path: &Path) -> ImportResult<RawSheet> {
        ensure_exists(file_path)?;

        let ext = extension_of(file_path);
        if !ext.is_empty() && ext != "csv" {
            return Err(ImportError::UnsupportedFormat(ext));
        }

        // 非 UTF-8 字节（Windows-1252 导出）按替换字符解码，不整体拒绝
        let bytes = std::fs::read(file_path)?;
        let content = String::from_utf8_lossy(&bytes);
        let content = content.trim_start_matches('\u{feff}');
        let delimiter = Self::detect_delimiter(content.lines().next().unwrap_or(""));

        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .delimiter(delimiter)
            .flexible(true) // 允许行长度不一致
            .from_reader(content.as_bytes());

        let mut sheet = RawSheet {
            headers: reader
                .headers()?
                .iter()
                .map(|h| h.trim().to_string())
                .collect(),
            ..Default::default()
        };

        for result in reader.records() {
            let record = result?;
            sheet.push_row(record.iter().map(|v| v.trim().to_string()).collect());
        }

        if sheet.headers.iter().all(|h| h.is_empty()) {
            return Err(ImportError::EmptySheet);
        }

        Ok(sheet)
    }
}

// ==========================================
// Excel Parser 实现
// ==========================================
pub struct ExcelParser;

impl FileParser for ExcelParser {
    fn parse_sheet(&self, file_path: &Path) -> ImportResult<RawSheet> {
        ensure_exists(file_path)?;

        let ext = extension_of(file_path);
        if ext != "xlsx" && ext != "xls" {
            return Err(ImportError::UnsupportedFormat(ext));
        }

        let mut workbook = open_workbook_auto(file_path)?;

        // 读取第一个 sheet
        let sheet_name = workbook
            .sheet_names()
            .first()
            .cloned()
            .ok_or_else(|| ImportError::ExcelParseError("Excel 文件无工作表".to_string()))?;
        let range = workbook.worksheet_range(&sheet_name)?;

        let mut rows = range.rows();
        let header_row = rows.next().ok_or(ImportError::EmptySheet)?;

        let mut sheet = RawSheet {
            headers: header_row
                .iter()
                .map(|cell| cell.to_string().trim().to_string())
                .collect(),
            ..Default::default()
        };

        for data_row in rows {
            sheet.push_row(
                data_row
                    .iter()
                    .map(|cell| cell.to_string().trim().to_string())
                    .collect(),
            );
        }

        Ok(sheet)
    }
}

// ==========================================
// 通用文件解析器（根据扩展名自动选择）
// ==========================================
pub struct UniversalFileParser;

impl UniversalFileParser {
    pub fn parse<P: AsRef<Path>>(&self, file_path: P) -> ImportResult<RawSheet> {
        let path = file_path.as_ref();
        match extension_of(path).as_str() {
            "csv" => CsvParser.parse_sheet(path),
            "xlsx" | "xls" => ExcelParser.parse_sheet(path),
            other => {
                ensure_exists(path)?;
                Err(ImportError::UnsupportedFormat(other.to_string()))
            }
        }
    }
}
