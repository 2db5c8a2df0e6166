//! 物品池管理
//!
//! 兩階段初始化：[`ItemPool::build`] 只建立池表，
//! [`ItemPool::prewarm_all`] 才開始生成實例，讓依賴系統能在
//! 任何實例出現之前完成觀察者註冊。
//!
//! 取出自隊首（最久閒置的實例優先），歸還進隊尾。

use crate::alias::{Handle, ItemTypeID};
use crate::identity::IdentityRegistry;
use crate::poolable::{PoolTemplate, Poolable};
use std::cell::RefCell;
use std::collections::{BTreeMap, VecDeque};
use std::rc::Rc;

/// 池設定：一個模板加上預熱數量
#[derive(Debug, Clone)]
pub struct PoolSetup<T> {
    pub template: T,
    pub prewarm: usize,
}

/// 單一種類的池記錄
struct PoolEntry<T: PoolTemplate> {
    template: T,
    prewarm: usize,
    /// 非現役實例佇列（FIFO）
    inactive: VecDeque<Handle<T::Item>>,
}

impl<T: PoolTemplate> PoolEntry<T> {
    fn spawn(&self) -> Handle<T::Item> {
        Rc::new(RefCell::new(self.template.instantiate()))
    }
}

/// 物品池管理者
///
/// 每個種類 ID 對應一個池記錄；實例在「池中非現役」與
/// 「已取出現役」兩種狀態間流轉，正常運作下不會被銷毀。
pub struct ItemPool<T: PoolTemplate> {
    entries: BTreeMap<ItemTypeID, PoolEntry<T>>,
    /// 診斷模式：每次池操作後記錄統計
    verbose: bool,
}

impl<T: PoolTemplate> ItemPool<T> {
    /// 第一階段：從設定建立池表，不生成任何實例
    ///
    /// 模板缺少種類 ID、或 ID 與既有記錄重複的設定會記錄後跳過
    /// （先出現者勝），其餘設定照常建立。
    pub fn build(setups: Vec<PoolSetup<T>>) -> Self {
        let mut entries: BTreeMap<ItemTypeID, PoolEntry<T>> = BTreeMap::new();

        for setup in setups {
            let type_id = match setup.template.item_type() {
                Some(id) => id.clone(),
                None => {
                    log::error!("模板缺少物品資料或種類 ID，跳過此設定");
                    continue;
                }
            };
            if entries.contains_key(&type_id) {
                log::error!("池表已有此種類 ID，跳過重複設定: {}", type_id);
                continue;
            }
            entries.insert(
                type_id,
                PoolEntry {
                    template: setup.template,
                    prewarm: setup.prewarm,
                    inactive: VecDeque::new(),
                },
            );
        }

        Self {
            entries,
            verbose: false,
        }
    }

    /// 開啟或關閉診斷模式
    pub fn set_verbose(&mut self, verbose: bool) {
        self.verbose = verbose;
    }

    /// 第二階段：為每個池記錄預先生成非現役實例
    pub fn prewarm_all(&mut self) {
        for (type_id, entry) in &mut self.entries {
            for _ in 0..entry.prewarm {
                let handle = entry.spawn();
                entry.inactive.push_back(handle);
            }
            if self.verbose {
                log::debug!("預熱完成: {} x{}", type_id, entry.prewarm);
            }
        }
    }

    /// 取出一個指定種類的實例
    ///
    /// 佇列為空時即時生成新實例（池成長無上限）。
    /// 池表沒有此種類時回傳 `None`，不改動任何池。
    /// 取出的實例會被標記為現役、呼叫 `on_acquire`，並註冊進身份註冊表。
    pub fn checkout(
        &mut self,
        registry: &mut IdentityRegistry<T::Item>,
        type_id: &ItemTypeID,
    ) -> Option<Handle<T::Item>> {
        let entry = match self.entries.get_mut(type_id) {
            Some(entry) => entry,
            None => {
                log::warn!("池表沒有此種類，無法取出: {}", type_id);
                return None;
            }
        };

        let handle = match entry.inactive.pop_front() {
            Some(handle) => handle,
            None => entry.spawn(),
        };

        {
            let mut item = handle.borrow_mut();
            item.set_active(true);
            item.on_acquire();
        }
        registry.register(type_id, handle.clone());

        if self.verbose {
            self.log_stats(type_id);
        }
        Some(handle)
    }

    /// 歸還實例
    ///
    /// 一律先取消註冊、呼叫 `on_release` 並標記為非現役；
    /// 若池表沒有對應的種類記錄，實例會被永久丟棄（記錄錯誤），
    /// 否則進入該種類的佇列尾端。
    pub fn give_back(&mut self, registry: &mut IdentityRegistry<T::Item>, handle: Handle<T::Item>) {
        let type_id = handle.borrow().type_id().clone();

        registry.unregister(&type_id);
        {
            let mut item = handle.borrow_mut();
            item.on_release();
            item.set_active(false);
        }

        match self.entries.get_mut(&type_id) {
            Some(entry) => entry.inactive.push_back(handle),
            None => {
                log::error!("池表沒有此種類，實例將被丟棄: {}", type_id);
                return;
            }
        }

        if self.verbose {
            self.log_stats(&type_id);
        }
    }

    /// 目前每個種類的非現役實例數（唯讀診斷）
    pub fn occupancy(&self) -> BTreeMap<ItemTypeID, usize> {
        self.entries
            .iter()
            .map(|(id, entry)| (id.clone(), entry.inactive.len()))
            .collect()
    }

    /// 池表中的種類數
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains(&self, type_id: &ItemTypeID) -> bool {
        self.entries.contains_key(type_id)
    }

    fn log_stats(&self, type_id: &ItemTypeID) {
        if let Some(entry) = self.entries.get(type_id) {
            log::debug!("池統計: {} 非現役 {}", type_id, entry.inactive.len());
        }
    }
}
