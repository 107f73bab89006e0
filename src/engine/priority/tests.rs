use super::PriorityClassifier;
use crate::domain::transfer::{TransferEndpoint, TransferSuggestion};
use crate::domain::types::{PairRule, TransferPriority};

// ==========================================
// 测试辅助函数
// ==========================================

/// 创建测试用的调拨建议
fn create_test_suggestion(material_code: &str, destination_balance: f64) -> TransferSuggestion {
    let classifier = PriorityClassifier::new(200.0);
    TransferSuggestion {
        material_code: material_code.to_string(),
        material_desc: String::new(),
        origin: TransferEndpoint {
            business_unit: "1".to_string(),
            warehouse: "1".to_string(),
            balance: 1000.0,
        },
        destination: TransferEndpoint {
            business_unit: "3".to_string(),
            warehouse: "1".to_string(),
            balance: destination_balance,
        },
        suggested_qty: (200.0 - destination_balance).ceil() as u64,
        priority: classifier.classify(destination_balance),
        rule: PairRule::FreeOrigin,
    }
}

// ==========================================
// 判定规则测试
// ==========================================

#[test]
fn test_classify_non_positive_is_urgent() {
    let classifier = PriorityClassifier::new(200.0);
    assert_eq!(classifier.classify(0.0), TransferPriority::Urgent);
    assert_eq!(classifier.classify(-50.0), TransferPriority::Urgent);
}

#[test]
fn test_classify_urgent_below_half() {
    let classifier = PriorityClassifier::new(200.0);
    assert_eq!(classifier.classify(1.0), TransferPriority::Urgent);
    assert_eq!(classifier.classify(99.9), TransferPriority::Urgent);
}

#[test]
fn test_classify_half_boundary_is_high() {
    let classifier = PriorityClassifier::new(200.0);
    assert_eq!(classifier.classify(100.0), TransferPriority::High);
    assert_eq!(classifier.classify(149.9), TransferPriority::High);
}

#[test]
fn test_classify_three_quarter_boundary_is_normal() {
    let classifier = PriorityClassifier::new(200.0);
    // 150 / 200 = 0.75，不满足 pct < 0.75
    assert_eq!(classifier.classify(150.0), TransferPriority::Normal);
    assert_eq!(classifier.classify(199.0), TransferPriority::Normal);
}

#[test]
fn test_classify_scales_with_threshold() {
    let classifier = PriorityClassifier::new(100.0);
    assert_eq!(classifier.classify(49.0), TransferPriority::Urgent);
    assert_eq!(classifier.classify(74.0), TransferPriority::High);
    assert_eq!(classifier.classify(75.0), TransferPriority::Normal);
}

// ==========================================
// 排序测试
// ==========================================

#[test]
fn test_sort_by_priority_then_balance() {
    let classifier = PriorityClassifier::new(200.0);
    let sorted = classifier.sort(vec![
        create_test_suggestion("A", 180.0), // NORMAL
        create_test_suggestion("B", 120.0), // HIGH
        create_test_suggestion("C", 50.0),  // URGENT
        create_test_suggestion("D", -10.0), // URGENT
        create_test_suggestion("E", 110.0), // HIGH
    ]);

    let codes: Vec<&str> = sorted.iter().map(|s| s.material_code.as_str()).collect();
    assert_eq!(codes, vec!["D", "C", "E", "B", "A"]);
}

#[test]
fn test_sort_is_stable_for_equal_keys() {
    let classifier = PriorityClassifier::new(200.0);
    let sorted = classifier.sort(vec![
        create_test_suggestion("X", 80.0),
        create_test_suggestion("Y", 80.0),
        create_test_suggestion("Z", 80.0),
    ]);

    let codes: Vec<&str> = sorted.iter().map(|s| s.material_code.as_str()).collect();
    assert_eq!(codes, vec!["X", "Y", "Z"]);
}

#[test]
fn test_sort_empty() {
    let classifier = PriorityClassifier::new(200.0);
    assert!(classifier.sort(Vec::new()).is_empty());
}
