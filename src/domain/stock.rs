// ==========================================
// WMS 库存调拨系统 - 库存领域模型
// ==========================================
// 依据: 库存余额导出表 - 字段说明
// ==========================================
// 红线: 输入记录只读,引擎不修改库存
// ==========================================

use serde::{Deserialize, Serialize};

// ==========================================
// StockRecord - 库存余额原始记录
// ==========================================
// 同一 (物料, 业务单元, 仓库) 可能对应多条记录（不同批次），聚合时求和
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StockRecord {
    // ===== 主键 =====
    pub material_code: String, // 物料编码（空值 = 无效记录）

    // ===== 展示信息 =====
    #[serde(default)]
    pub material_desc: String, // 物料描述
    #[serde(default)]
    pub warehouse_desc: Option<String>, // 仓库描述

    // ===== 位置 =====
    #[serde(default)]
    pub business_unit: String, // 业务单元（配送中心代码）
    #[serde(default)]
    pub warehouse: String, // 仓库（库位代码）

    // ===== 数量 =====
    #[serde(default)]
    pub balance: Option<f64>, // 余额（可为 0 或负数，缺失按 0 处理）
    #[serde(default)]
    pub return_qty: Option<f64>, // 待退回数量（引擎不使用）
}

impl StockRecord {
    /// 构造一条只含核心字段的记录
    pub fn new(
        material_code: impl Into<String>,
        business_unit: impl Into<String>,
        warehouse: impl Into<String>,
        balance: f64,
    ) -> Self {
        Self {
            material_code: material_code.into(),
            material_desc: String::new(),
            warehouse_desc: None,
            business_unit: business_unit.into(),
            warehouse: warehouse.into(),
            balance: Some(balance),
            return_qty: None,
        }
    }

    /// 设置物料描述
    pub fn with_desc(mut self, material_desc: impl Into<String>) -> Self {
        self.material_desc = material_desc.into();
        self
    }

    /// 有效余额：缺失或非有限数值按 0 处理
    pub fn effective_balance(&self) -> f64 {
        match self.balance {
            Some(v) if v.is_finite() => v,
            _ => 0.0,
        }
    }
}

// ==========================================
// Location - 库位 (业务单元 + 仓库)
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Location {
    pub business_unit: String,
    pub warehouse: String,
}

impl Location {
    pub fn new(business_unit: impl Into<String>, warehouse: impl Into<String>) -> Self {
        Self {
            business_unit: business_unit.into(),
            warehouse: warehouse.into(),
        }
    }
}

// ==========================================
// StockKey - 聚合键 (物料 + 业务单元 + 仓库)
// ==========================================
// 业务单元与仓库均为规范化后的值
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct StockKey {
    pub material_code: String,
    pub business_unit: String,
    pub warehouse: String,
}

impl StockKey {
    pub fn location(&self) -> Location {
        Location::new(self.business_unit.clone(), self.warehouse.clone())
    }
}

// ==========================================
// AggregatedEntry - 聚合余额
// ==========================================
// 红线: 同一次运行中每个 StockKey 只有一条
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AggregatedEntry {
    pub key: StockKey,
    pub material_desc: String, // 首个非空描述
    pub balance: f64,          // 同键记录余额之和
    pub record_count: usize,   // 参与求和的记录数
}

impl AggregatedEntry {
    pub fn location(&self) -> Location {
        self.key.location()
    }

    pub fn material_code(&self) -> &str {
        &self.key.material_code
    }

    pub fn business_unit(&self) -> &str {
        &self.key.business_unit
    }

    pub fn warehouse(&self) -> &str {
        &self.key.warehouse
    }
}
