// ==========================================
// WMS 库存调拨系统 - 调拨准入策略
// ==========================================
// 依据: 调拨规则说明 - 仓库通道规则
// 红线: 无状态、无副作用、无 I/O 操作
// ==========================================
// 规则:
// - 可调出仓库固定为 {1, 8, 28}（规范化后）
// - 封锁仓库不得作为调入方
// - 同一 (业务单元, 仓库) 不得自调
// - 仓库 1  → 任意非封锁仓库
// - 仓库 8  → 仅调往业务单元 1
// - 仓库 28 → 仅 BU1 ↔ BU6 且双方均为 28 号仓
// ==========================================

use crate::config::RebalanceConfig;
use crate::domain::stock::Location;
use crate::domain::types::PairRule;
use crate::engine::location::normalize_location;
use std::collections::HashSet;

/// 可调出仓库（规范化后）
pub const ELIGIBLE_ORIGIN_WAREHOUSES: [&str; 3] = ["1", "8", "28"];

/// 自由调出仓库
pub const FREE_ORIGIN_WAREHOUSE: &str = "1";

/// 仅可调往主业务单元的仓库
pub const MAIN_UNIT_ORIGIN_WAREHOUSE: &str = "8";

/// 主业务单元
pub const MAIN_BUSINESS_UNIT: &str = "1";

/// 专线仓库
pub const RESERVED_LANE_WAREHOUSE: &str = "28";

/// 专线两端的业务单元
pub const RESERVED_LANE_UNITS: (&str, &str) = ("1", "6");

// ==========================================
// EligibilityPolicy - 调拨准入策略
// ==========================================
#[derive(Debug, Clone)]
pub struct EligibilityPolicy {
    blocked: HashSet<String>,
}

impl Default for EligibilityPolicy {
    fn default() -> Self {
        Self::from_config(&RebalanceConfig::default())
    }
}

impl EligibilityPolicy {
    /// 按配置构造（封锁列表在此规范化）
    pub fn from_config(config: &RebalanceConfig) -> Self {
        Self::with_blocked(config.blocked_warehouses.iter())
    }

    pub fn with_blocked<I, S>(blocked: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let blocked = blocked
            .into_iter()
            .map(|w| normalize_location(w.as_ref()))
            .filter(|w| !w.is_empty())
            .collect();
        Self { blocked }
    }

    /// 仓库是否可作为调出方
    pub fn is_eligible_origin(&self, warehouse: &str) -> bool {
        let warehouse = normalize_location(warehouse);
        ELIGIBLE_ORIGIN_WAREHOUSES.contains(&warehouse.as_str())
    }

    /// 仓库是否封锁
    pub fn is_blocked(&self, warehouse: &str) -> bool {
        self.blocked.contains(&normalize_location(warehouse))
    }

    /// 仓库是否可作为调入方
    pub fn is_valid_destination(&self, warehouse: &str) -> bool {
        !self.is_blocked(warehouse)
    }

    /// 判定 origin → destination 是否为有效调拨通道
    pub fn is_valid_pair(&self, origin: &Location, destination: &Location) -> bool {
        self.pair_rule(origin, destination).is_some()
    }

    /// 返回放行该通道的规则；None 表示不允许调拨
    pub fn pair_rule(&self, origin: &Location, destination: &Location) -> Option<PairRule> {
        let o_arm = normalize_location(&origin.warehouse);
        let d_arm = normalize_location(&destination.warehouse);
        let o_bu = normalize_location(&origin.business_unit);
        let d_bu = normalize_location(&destination.business_unit);

        // 调入方不可为封锁仓库
        if self.blocked.contains(&d_arm) {
            return None;
        }

        // 同一库位不自调
        if o_bu == d_bu && o_arm == d_arm {
            return None;
        }

        match o_arm.as_str() {
            FREE_ORIGIN_WAREHOUSE => Some(PairRule::FreeOrigin),
            MAIN_UNIT_ORIGIN_WAREHOUSE => {
                (d_bu == MAIN_BUSINESS_UNIT).then_some(PairRule::MainUnitOnly)
            }
            RESERVED_LANE_WAREHOUSE => {
                if d_arm != RESERVED_LANE_WAREHOUSE {
                    return None;
                }
                let (a, b) = RESERVED_LANE_UNITS;
                let on_lane = (o_bu == a && d_bu == b) || (o_bu == b && d_bu == a);
                on_lane.then_some(PairRule::ReservedLane)
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn loc(bu: &str, arm: &str) -> Location {
        Location::new(bu, arm)
    }

    #[test]
    fn test_eligible_origin_set() {
        let policy = EligibilityPolicy::default();
        assert!(policy.is_eligible_origin("1"));
        assert!(policy.is_eligible_origin("0001"));
        assert!(policy.is_eligible_origin("8"));
        assert!(policy.is_eligible_origin("028"));
        assert!(!policy.is_eligible_origin("2"));
        assert!(!policy.is_eligible_origin("INVE"));
        assert!(!policy.is_eligible_origin(""));
    }

    #[test]
    fn test_blocked_destination() {
        let policy = EligibilityPolicy::default();
        assert!(policy.is_blocked("qual"));
        assert!(policy.is_blocked("00"));
        assert!(policy.is_blocked("0008"));
        assert!(!policy.is_blocked("1"));
        assert!(!policy.is_blocked("28"));

        // 仓库 1 可调往任意非封锁仓库，封锁仓库除外
        assert!(!policy.is_valid_pair(&loc("1", "1"), &loc("3", "QUAL")));
        assert!(!policy.is_valid_pair(&loc("1", "1"), &loc("3", "2")));
    }

    #[test]
    fn test_free_origin_any_destination() {
        let policy = EligibilityPolicy::default();
        assert_eq!(
            policy.pair_rule(&loc("1", "1"), &loc("7", "1")),
            Some(PairRule::FreeOrigin)
        );
        assert!(policy.is_valid_pair(&loc("3", "1"), &loc("6", "28")));
        assert!(policy.is_valid_pair(&loc("3", "01"), &loc("3", "5")));
    }

    #[test]
    fn test_self_pair_rejected() {
        let policy = EligibilityPolicy::default();
        assert!(!policy.is_valid_pair(&loc("1", "1"), &loc("1", "1")));
        assert!(!policy.is_valid_pair(&loc("01", "001"), &loc("1", "1")));
        assert!(!policy.is_valid_pair(&loc("1", "28"), &loc("1", "28")));
    }

    #[test]
    fn test_main_unit_only_origin() {
        let policy = EligibilityPolicy::default();
        assert_eq!(
            policy.pair_rule(&loc("3", "8"), &loc("1", "1")),
            Some(PairRule::MainUnitOnly)
        );
        assert!(policy.is_valid_pair(&loc("3", "8"), &loc("001", "5")));
        assert!(!policy.is_valid_pair(&loc("3", "8"), &loc("6", "1")));
        // 调入 8 号仓本身是封锁仓库
        assert!(!policy.is_valid_pair(&loc("3", "8"), &loc("1", "8")));
    }

    #[test]
    fn test_reserved_lane_both_directions() {
        let policy = EligibilityPolicy::default();
        assert_eq!(
            policy.pair_rule(&loc("1", "28"), &loc("6", "28")),
            Some(PairRule::ReservedLane)
        );
        assert!(policy.is_valid_pair(&loc("6", "28"), &loc("1", "0028")));
    }

    #[test]
    fn test_reserved_lane_rejections() {
        let policy = EligibilityPolicy::default();
        // 目标仓库非 28
        assert!(!policy.is_valid_pair(&loc("6", "28"), &loc("1", "1")));
        // 业务单元不在专线上
        assert!(!policy.is_valid_pair(&loc("1", "28"), &loc("3", "28")));
        assert!(!policy.is_valid_pair(&loc("3", "28"), &loc("6", "28")));
    }

    #[test]
    fn test_non_eligible_origin_never_valid() {
        let policy = EligibilityPolicy::default();
        assert!(!policy.is_valid_pair(&loc("1", "5"), &loc("3", "1")));
        assert!(!policy.is_valid_pair(&loc("1", "HOLD"), &loc("3", "1")));
        assert_eq!(policy.pair_rule(&loc("1", "2"), &loc("6", "28")), None);
    }

    #[test]
    fn test_custom_blocked_list() {
        let policy = EligibilityPolicy::with_blocked(["5"]);
        assert!(!policy.is_valid_pair(&loc("1", "1"), &loc("3", "005")));
        // 默认封锁的 QUAL 在自定义列表中不再封锁
        assert!(policy.is_valid_pair(&loc("1", "1"), &loc("3", "QUAL")));
    }
}
