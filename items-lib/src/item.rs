//! 物品系統
//!
//! 池系統附帶的具體物品實作：[`ItemType`] 為模板，[`Item`] 為實例。
//! 消耗品的受傷／死亡事件屬於外部協作系統，不在此核心內。

use crate::alias::ItemTypeID;
use crate::poolable::{PoolTemplate, Poolable};
use serde::{Deserialize, Serialize};

/// 位置（中性位置為原點）
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Pos {
    pub x: i32,
    pub y: i32,
}

/// 物品模板
///
/// 對應配置資產中的一個物品種類定義。
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ItemType {
    #[serde(default)]
    pub name: String,
    /// 種類 ID；配置資料缺漏時為 `None`（池建構會跳過該模板）
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub type_id: Option<ItemTypeID>,
    #[serde(default)]
    pub max_hp: i32,
    /// 使用後效果持續秒數
    #[serde(default)]
    pub effect_duration: f32,
}

/// 池中的物品實例
#[derive(Debug, Clone)]
pub struct Item {
    type_id: ItemTypeID,
    pub name: String,
    pub hp: i32,
    max_hp: i32,
    pub pos: Pos,
    /// 進行中效果的剩餘秒數；無效果時為 0
    pub effect_timer: f32,
    effect_duration: f32,
    active: bool,
}

impl Item {
    fn from_type(template: &ItemType) -> Self {
        Self {
            // 池建構已保證模板帶有 ID
            type_id: template.type_id.clone().unwrap_or_default(),
            name: template.name.clone(),
            hp: template.max_hp,
            max_hp: template.max_hp,
            pos: Pos::default(),
            effect_timer: 0.0,
            effect_duration: template.effect_duration,
            active: false,
        }
    }

    /// 使用物品：啟動效果計時
    pub fn start_effect(&mut self) {
        self.effect_timer = self.effect_duration;
    }

    pub fn max_hp(&self) -> i32 {
        self.max_hp
    }
}

impl Poolable for Item {
    fn on_acquire(&mut self) {
        self.hp = self.max_hp;
        self.effect_timer = 0.0;
    }

    fn on_release(&mut self) {
        self.pos = Pos::default();
        self.effect_timer = 0.0;
    }

    fn type_id(&self) -> &ItemTypeID {
        &self.type_id
    }

    fn is_active(&self) -> bool {
        self.active
    }

    fn set_active(&mut self, active: bool) {
        self.active = active;
    }
}

impl PoolTemplate for ItemType {
    type Item = Item;

    fn item_type(&self) -> Option<&ItemTypeID> {
        self.type_id.as_ref()
    }

    fn instantiate(&self) -> Item {
        Item::from_type(self)
    }
}
