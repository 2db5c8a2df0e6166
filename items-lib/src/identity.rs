//! 身份註冊表
//!
//! 維護種類 ID 到現役物品實例的映射。每種 ID 同時最多只有
//! 一個實例被註冊；重複註冊採先到先贏，後來者直接被忽略。

use crate::alias::{Handle, ItemTypeID};
use crate::poolable::Poolable;
use std::collections::BTreeMap;

/// 身份註冊表
#[derive(Debug)]
pub struct IdentityRegistry<I: Poolable> {
    entries: BTreeMap<ItemTypeID, Handle<I>>,
}

impl<I: Poolable> Default for IdentityRegistry<I> {
    fn default() -> Self {
        Self {
            entries: BTreeMap::new(),
        }
    }
}

impl<I: Poolable> IdentityRegistry<I> {
    pub fn new() -> Self {
        Self::default()
    }

    /// 註冊現役實例
    ///
    /// 若該 ID 已被註冊則不做任何事（先到先贏）。
    pub fn register(&mut self, type_id: &ItemTypeID, handle: Handle<I>) {
        if self.entries.contains_key(type_id) {
            log::debug!("ID 已被註冊，忽略後來者: {}", type_id);
            return;
        }
        self.entries.insert(type_id.clone(), handle);
    }

    /// 取消註冊；若該 ID 未被註冊則不做任何事
    pub fn unregister(&mut self, type_id: &ItemTypeID) {
        self.entries.remove(type_id);
    }

    /// 查詢指定 ID 的現役實例
    pub fn lookup(&self, type_id: &ItemTypeID) -> Option<Handle<I>> {
        self.entries.get(type_id).cloned()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// 目前已註冊的所有 ID（診斷用）
    pub fn registered_ids(&self) -> Vec<&ItemTypeID> {
        self.entries.keys().collect()
    }
}
