//! 池配置載入器
//!
//! TOML 格式的池配置：診斷旗標加上有序的物品種類列表。
//! 配置順序會被保留，重複 ID 的取捨（先出現者勝）發生在池建構階段。

use crate::alias::ItemTypeID;
use crate::error::{LoadError, Result};
use crate::item::ItemType;
use crate::pool::{ItemPool, PoolSetup};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// 單一物品種類的配置
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ItemTypeConfig {
    #[serde(default)]
    pub name: String,
    /// 種類 ID；缺漏時該條目會在池建構時被記錄並跳過
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub type_id: Option<ItemTypeID>,
    #[serde(default)]
    pub max_hp: i32,
    #[serde(default)]
    pub effect_duration: f32,
    /// 預熱數量
    #[serde(default)]
    pub prewarm: usize,
}

/// 池配置檔
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PoolConfig {
    /// 診斷模式：開啟池統計的詳細記錄
    #[serde(default)]
    pub diagnostics: bool,
    #[serde(default)]
    pub items: Vec<ItemTypeConfig>,
}

impl PoolConfig {
    /// 從指定路徑載入 TOML 配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| LoadError::IoError {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| {
            LoadError::DeserializeError {
                format: "TOML".to_string(),
                reason: e.to_string(),
            }
            .into()
        })
    }

    /// 轉換為 TOML 字串
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| {
            LoadError::SerializeError {
                format: "TOML".to_string(),
                reason: e.to_string(),
            }
            .into()
        })
    }

    /// 寫入到檔案
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let content = self.to_toml()?;
        fs::write(path, content).map_err(|e| {
            LoadError::IoError {
                path: path.display().to_string(),
                reason: e.to_string(),
            }
            .into()
        })
    }

    /// 轉成池設定列表（保留配置順序）
    pub fn setups(&self) -> Vec<PoolSetup<ItemType>> {
        self.items
            .iter()
            .map(|entry| PoolSetup {
                template: ItemType {
                    name: entry.name.clone(),
                    type_id: entry.type_id.clone(),
                    max_hp: entry.max_hp,
                    effect_duration: entry.effect_duration,
                },
                prewarm: entry.prewarm,
            })
            .collect()
    }

    /// 依配置建立池（套用診斷旗標；尚未預熱）
    pub fn build_pool(&self) -> ItemPool<ItemType> {
        let mut pool = ItemPool::build(self.setups());
        pool.set_verbose(self.diagnostics);
        pool
    }
}
