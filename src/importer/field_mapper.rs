// ==========================================
// WMS 库存调拨系统 - 字段映射器实现
// ==========================================
// 职责: 源表头 → 标准字段映射 + 类型转换
// 匹配顺序: 完全相等 → 前缀 → 包含（每轮按别名顺序尝试）
// ==========================================

use crate::domain::stock::StockRecord;
use crate::engine::location::normalize_location;
use crate::importer::error::{ImportError, ImportResult};

// ==========================================
// 列别名表
// ==========================================
pub mod aliases {
    pub const MATERIAL_CODE: &[&str] = &[
        "cd_material",
        "cdmaterial",
        "codigo",
        "code",
        "material",
        "cod_material",
    ];
    pub const MATERIAL_DESC: &[&str] = &[
        "descmaterial",
        "desc_material",
        "descricao",
        "description",
        "nome",
        "desc",
    ];
    pub const BUSINESS_UNIT: &[&str] = &[
        "cd_unidade_de_n",
        "cd_unidade_de_negocio",
        "cd_unidade",
        "unidade_de_negocio",
        "unidade_negocio",
        "cd",
    ];
    pub const WAREHOUSE: &[&str] = &[
        "cd_centro_armaz",
        "cdcentroarmaz",
        "centro_armazenagem",
        "centro_armaz",
        "armazem_local",
        "local_armaz",
        "armaz",
    ];
    pub const BALANCE: &[&str] = &["saldo", "qtd", "quantidade", "stock", "quantity", "balance"];
    pub const WAREHOUSE_DESC: &[&str] = &[
        "descarmaz",
        "desc_armaz",
        "descricao_armaz",
        "desc_armazem",
        "descricaoarmaz",
    ];
    pub const RETURN_QTY: &[&str] = &["devolver", "qtd_devolver", "return", "retorno"];
}

/// 表头规范化：小写、去首尾空白、空白/连字符/点 → 下划线
pub fn normalize_header(header: &str) -> String {
    header
        .trim()
        .to_lowercase()
        .chars()
        .map(|c| if c.is_whitespace() || c == '-' || c == '.' { '_' } else { c })
        .collect()
}

/// 按别名查找列下标
pub fn find_column(normalized_headers: &[String], aliases: &[&str]) -> Option<usize> {
    let passes: [fn(&str, &str) -> bool; 3] = [
        |h, k| h == k,
        |h, k| h.starts_with(k),
        |h, k| h.contains(k),
    ];

    passes.iter().find_map(|hit| {
        aliases
            .iter()
            .find_map(|k| normalized_headers.iter().position(|h| hit(h, k)))
    })
}

/// 数值解析
///
/// - 第一个逗号视为小数点
/// - 取最长可解析的数值前缀（"12kg" → 12）
/// - 无法解析 → 0
pub fn parse_number(raw: &str) -> f64 {
    let s = raw.trim().replacen(',', ".", 1);
    let end = s
        .char_indices()
        .take_while(|(_, c)| c.is_ascii_digit() || matches!(c, '+' | '-' | '.' | 'e' | 'E'))
        .map(|(i, c)| i + c.len_utf8())
        .last()
        .unwrap_or(0);

    (1..=end)
        .rev()
        .filter(|&i| s.is_char_boundary(i))
        .find_map(|i| s[..i].parse::<f64>().ok())
        .filter(|v| v.is_finite())
        .unwrap_or(0.0)
}

// ==========================================
// StockFieldMapper - 库存字段映射器
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StockFieldMapper {
    pub material_code: Option<usize>,
    pub material_desc: Option<usize>,
    pub business_unit: Option<usize>,
    pub warehouse: Option<usize>,
    pub balance: usize,
    pub warehouse_desc: Option<usize>,
    pub return_qty: Option<usize>,
}

impl StockFieldMapper {
    /// 根据表头解析列映射
    ///
    /// # 错误
    /// - BalanceColumnMissing: 找不到余额列（附可用列名）
    pub fn from_headers(headers: &[String]) -> ImportResult<Self> {
        let normalized: Vec<String> = headers.iter().map(|h| normalize_header(h)).collect();

        let balance = find_column(&normalized, aliases::BALANCE).ok_or_else(|| {
            ImportError::BalanceColumnMissing {
                available: headers
                    .iter()
                    .filter(|h| !h.is_empty())
                    .cloned()
                    .collect::<Vec<_>>()
                    .join(", "),
            }
        })?;

        Ok(Self {
            material_code: find_column(&normalized, aliases::MATERIAL_CODE),
            material_desc: find_column(&normalized, aliases::MATERIAL_DESC),
            business_unit: find_column(&normalized, aliases::BUSINESS_UNIT),
            warehouse: find_column(&normalized, aliases::WAREHOUSE),
            balance,
            warehouse_desc: find_column(&normalized, aliases::WAREHOUSE_DESC),
            return_qty: find_column(&normalized, aliases::RETURN_QTY),
        })
    }

    /// 映射单行
    pub fn map_row(&self, row: &[String]) -> StockRecord {
        let text = |idx: Option<usize>| -> String {
            idx.and_then(|i| row.get(i))
                .map(|v| v.trim().to_string())
                .unwrap_or_default()
        };

        StockRecord {
            material_code: text(self.material_code),
            material_desc: text(self.material_desc),
            warehouse_desc: self.warehouse_desc.map(|i| {
                row.get(i).map(|v| v.trim().to_string()).unwrap_or_default()
            }),
            business_unit: normalize_location(&text(self.business_unit)),
            warehouse: normalize_location(&text(self.warehouse)),
            balance: Some(row.get(self.balance).map(|v| parse_number(v)).unwrap_or(0.0)),
            return_qty: self
                .return_qty
                .map(|i| row.get(i).map(|v| parse_number(v)).unwrap_or(0.0)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn headers(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_normalize_header() {
        assert_eq!(normalize_header(" Cd Centro-Armaz. "), "cd_centro_armaz_");
        assert_eq!(normalize_header("SALDO"), "saldo");
    }

    #[test]
    fn test_exact_match_preferred_over_substring() {
        // "cd" 精确匹配第 2 列，而不是包含 "cd" 的第 1 列
        let h: Vec<String> = ["cd_material", "cd", "saldo"].iter().map(|s| s.to_string()).collect();
        assert_eq!(find_column(&h, aliases::BUSINESS_UNIT), Some(1));
    }

    #[test]
    fn test_typical_erp_export_headers() {
        let mapper = StockFieldMapper::from_headers(&headers(&[
            "CD_MATERIAL",
            "DESCMATERIAL",
            "CD_UNIDADE_DE_N",
            "CD_CENTRO_ARMAZ",
            "DESCARMAZ",
            "SALDO",
            "DEVOLVER",
        ]))
        .unwrap();

        assert_eq!(mapper.material_code, Some(0));
        assert_eq!(mapper.material_desc, Some(1));
        assert_eq!(mapper.business_unit, Some(2));
        assert_eq!(mapper.warehouse, Some(3));
        assert_eq!(mapper.warehouse_desc, Some(4));
        assert_eq!(mapper.balance, 5);
        assert_eq!(mapper.return_qty, Some(6));
    }

    #[test]
    fn test_missing_balance_column() {
        let err = StockFieldMapper::from_headers(&headers(&["CD_MATERIAL", "", "CD"])).unwrap_err();
        match err {
            ImportError::BalanceColumnMissing { available } => {
                assert_eq!(available, "CD_MATERIAL, CD");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_parse_number() {
        assert_eq!(parse_number("12,5"), 12.5);
        assert_eq!(parse_number(" 300 "), 300.0);
        assert_eq!(parse_number("-4"), -4.0);
        assert_eq!(parse_number("12kg"), 12.0);
        assert_eq!(parse_number("abc"), 0.0);
        assert_eq!(parse_number(""), 0.0);
    }

    #[test]
    fn test_map_row_normalizes_locations() {
        let mapper =
            StockFieldMapper::from_headers(&headers(&["cd_material", "cd", "armaz", "saldo"]))
                .unwrap();
        let record = mapper.map_row(&headers(&[" M1 ", "001", "qual", "7,5"]));

        assert_eq!(record.material_code, "M1");
        assert_eq!(record.business_unit, "1");
        assert_eq!(record.warehouse, "QUAL");
        assert_eq!(record.balance, Some(7.5));
        assert_eq!(record.return_qty, None);
    }
}
