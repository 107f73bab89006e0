// ==========================================
// WMS 库存调拨系统 - 库位代码规范化
// ==========================================
// 红线: 无状态、无副作用、幂等
// ==========================================
// 规则:
// - TRIM + UPPER
// - 纯数字: 去除前导零（"0002" → "2"，"000" → "0"）
// - 其他: 原样返回（"inve" → "INVE"）
// ==========================================

/// 规范化仓库/业务单元代码
///
/// 纯数字按字符串去零，不做整数解析，超长数字不会溢出。
pub fn normalize_location(raw: &str) -> String {
    let s = raw.trim().to_uppercase();

    if !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit()) {
        let stripped = s.trim_start_matches('0');
        if stripped.is_empty() {
            return "0".to_string();
        }
        return stripped.to_string();
    }

    s
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_leading_zeros() {
        assert_eq!(normalize_location("0002"), "2");
        assert_eq!(normalize_location("002"), "2");
        assert_eq!(normalize_location("2"), "2");
        assert_eq!(normalize_location("0028"), "28");
    }

    #[test]
    fn test_all_zeros() {
        assert_eq!(normalize_location("00"), "0");
        assert_eq!(normalize_location("0"), "0");
    }

    #[test]
    fn test_textual_codes_uppercased() {
        assert_eq!(normalize_location("inve"), "INVE");
        assert_eq!(normalize_location("  Qual "), "QUAL");
        assert_eq!(normalize_location("a01"), "A01");
    }

    #[test]
    fn test_blank_stays_blank() {
        assert_eq!(normalize_location(""), "");
        assert_eq!(normalize_location("   "), "");
    }

    #[test]
    fn test_trim_before_numeric_check() {
        assert_eq!(normalize_location(" 0001 "), "1");
    }

    #[test]
    fn test_long_numeric_no_overflow() {
        assert_eq!(
            normalize_location("000123456789012345678901234567890"),
            "123456789012345678901234567890"
        );
    }

    #[test]
    fn test_idempotent() {
        for raw in ["0002", "inve", " 28 ", "000", "HoLd", "1001", ""] {
            let once = normalize_location(raw);
            assert_eq!(normalize_location(&once), once, "raw={:?}", raw);
        }
    }
}
