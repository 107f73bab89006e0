// ==========================================
// WMS 库存调拨系统 - 导入层
// ==========================================
// 职责: 外部库存余额表导入,生成 StockRecord
// 支持: Excel, CSV
// ==========================================

pub mod error;
pub mod field_mapper;
pub mod file_parser;
pub mod stock_importer;

// 重导出核心类型
pub use error::{ImportError, ImportResult};
pub use field_mapper::{find_column, normalize_header, parse_number, StockFieldMapper};
pub use file_parser::{CsvParser, ExcelParser, FileParser, RawSheet, UniversalFileParser};
pub use stock_importer::{ImportBatch, ImportedStock, StockImporter};
