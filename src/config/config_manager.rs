// ==========================================
// WMS 库存调拨系统 - 配置管理器
// ==========================================
// 职责: 配置加载、查询、覆写管理
// 存储: config_kv 表 (key-value, scope_id='global')
// ==========================================

use crate::config::config_reader::RebalanceConfigReader;
use crate::config::rebalance_config::{
    DEFAULT_BLOCKED_WAREHOUSES, DEFAULT_CRITICAL_THRESHOLD, DEFAULT_WARN_MULTIPLIER,
};
use crate::db::{init_config_schema, open_sqlite_connection};
use async_trait::async_trait;
use rusqlite::{params, Connection};
use serde_json::json;
use std::collections::BTreeMap;
use std::error::Error;
use std::sync::{Arc, Mutex};

// ==========================================
// ConfigManager - 配置管理器
// ==========================================
pub struct ConfigManager {
    conn: Arc<Mutex<Connection>>,
}

impl ConfigManager {
    /// 创建新的 ConfigManager 实例（必要时建表）
    ///
    /// # 参数
    /// - db_path: 数据库文件路径
    pub fn new(db_path: &str) -> Result<Self, Box<dyn Error>> {
        let conn = open_sqlite_connection(db_path)?;
        init_config_schema(&conn)?;

        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    /// 从 config_kv 表读取配置值（scope_id='global'）
    ///
    /// # 返回
    /// - Some(String): 配置值
    /// - None: 配置不存在
    pub fn get_config_value(&self, key: &str) -> Result<Option<String>, Box<dyn Error>> {
        let conn = self.conn.lock().map_err(|e| format!("锁获取失败: {}", e))?;

        let result = conn.query_row(
            "SELECT value FROM config_kv WHERE scope_id = 'global' AND key = ?1",
            params![key],
            |row| row.get::<_, String>(0),
        );

        match result {
            Ok(value) => Ok(Some(value)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(Box::new(e)),
        }
    }

    /// 写入配置值（存在则覆盖）
    pub fn set_config_value(&self, key: &str, value: &str) -> Result<(), Box<dyn Error>> {
        let conn = self.conn.lock().map_err(|e| format!("锁获取失败: {}", e))?;
        conn.execute(
            "INSERT INTO config_kv (scope_id, key, value) VALUES ('global', ?1, ?2)
             ON CONFLICT(scope_id, key) DO UPDATE SET value = ?2, updated_at = datetime('now')",
            params![key, value],
        )?;
        tracing::debug!(config_key = key, "配置已更新");
        Ok(())
    }

    fn get_config_or_default(&self, key: &str, default: &str) -> Result<String, Box<dyn Error>> {
        Ok(self.get_config_value(key)?.unwrap_or_else(|| default.to_string()))
    }

    /// 读取数值配置，格式错误时回退默认值
    fn get_f64_or_default(&self, key: &str, default: f64) -> Result<f64, Box<dyn Error>> {
        let Some(value) = self.get_config_value(key)? else {
            return Ok(default);
        };
        Ok(value.trim().replace(',', ".").parse::<f64>().unwrap_or_else(|_| {
            tracing::warn!(config_key = key, raw_value = %value, "数值配置格式错误，使用默认值");
            default
        }))
    }

    /// 获取所有配置的快照（JSON格式，按键排序）
    pub fn get_config_snapshot(&self) -> Result<String, Box<dyn Error>> {
        let conn = self.conn.lock().map_err(|e| format!("锁获取失败: {}", e))?;

        let mut stmt =
            conn.prepare("SELECT key, value FROM config_kv WHERE scope_id = 'global' ORDER BY key")?;

        let mut config_map: BTreeMap<String, String> = BTreeMap::new();
        let rows = stmt.query_map([], |row| {
            Ok((row.get::<_, String>(0)?, row.get::<_, String>(1)?))
        })?;

        for row in rows {
            let (key, value) = row?;
            config_map.insert(key, value);
        }

        Ok(serde_json::to_string(&json!(config_map))?)
    }

    /// 从配置快照恢复配置
    ///
    /// # 返回
    /// - Ok(usize): 恢复的配置项数量
    ///
    /// # 注意
    /// - 覆盖同名 global 配置,不删除快照外的键
    pub fn restore_config_from_snapshot(&self, snapshot_json: &str) -> Result<usize, Box<dyn Error>> {
        let config_map: BTreeMap<String, String> = serde_json::from_str(snapshot_json)?;

        let mut conn = self.conn.lock().map_err(|e| format!("锁获取失败: {}", e))?;
        let tx = conn.transaction()?;

        let mut count = 0;
        for (key, value) in config_map.iter() {
            count += tx.execute(
                "INSERT INTO config_kv (scope_id, key, value) VALUES ('global', ?1, ?2)
                 ON CONFLICT(scope_id, key) DO UPDATE SET value = ?2",
                params![key, value],
            )?;
        }

        tx.commit()?;
        Ok(count)
    }
}

// ==========================================
// RebalanceConfigReader Trait 实现
// ==========================================
#[async_trait]
impl RebalanceConfigReader for ConfigManager {
    async fn get_critical_threshold(&self) -> Result<f64, Box<dyn Error>> {
        self.get_f64_or_default(config_keys::CRITICAL_THRESHOLD, DEFAULT_CRITICAL_THRESHOLD)
    }

    async fn get_warn_multiplier(&self) -> Result<f64, Box<dyn Error>> {
        self.get_f64_or_default(config_keys::WARN_MULTIPLIER, DEFAULT_WARN_MULTIPLIER)
    }

    async fn get_blocked_warehouses(&self) -> Result<Vec<String>, Box<dyn Error>> {
        let value = self.get_config_or_default(
            config_keys::BLOCKED_WAREHOUSES,
            &DEFAULT_BLOCKED_WAREHOUSES.join(","),
        )?;

        Ok(value
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect())
    }
}

// ==========================================
// 配置键常量
// ==========================================
pub mod config_keys {
    pub const CRITICAL_THRESHOLD: &str = "critical_threshold";
    pub const WARN_MULTIPLIER: &str = "warn_multiplier";
    pub const BLOCKED_WAREHOUSES: &str = "blocked_warehouses"; // 逗号分隔
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::NamedTempFile;

    fn manager() -> (NamedTempFile, ConfigManager) {
        let file = NamedTempFile::new().unwrap();
        let manager = ConfigManager::new(file.path().to_str().unwrap()).unwrap();
        (file, manager)
    }

    #[tokio::test]
    async fn test_defaults_when_empty() {
        let (_file, manager) = manager();
        let config = manager.load_rebalance_config().await.unwrap();

        assert_eq!(config.critical_threshold, 200.0);
        assert_eq!(config.warn_multiplier, 1.5);
        assert!(config.blocked_warehouses.contains(&"QUAL".to_string()));
    }

    #[tokio::test]
    async fn test_malformed_number_falls_back() {
        let (_file, manager) = manager();
        manager
            .set_config_value(config_keys::CRITICAL_THRESHOLD, "abc")
            .unwrap();
        assert_eq!(manager.get_critical_threshold().await.unwrap(), 200.0);

        manager
            .set_config_value(config_keys::CRITICAL_THRESHOLD, "150,5")
            .unwrap();
        assert_eq!(manager.get_critical_threshold().await.unwrap(), 150.5);
    }
}
