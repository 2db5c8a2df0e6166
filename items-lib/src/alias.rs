//! 基礎型別別名

use std::cell::RefCell;
use std::rc::Rc;

/// 物品種類 ID（池表與身份註冊表共用的 key）
pub type ItemTypeID = String;

/// 單執行緒共享的物品實例把手
///
/// 實例在邏輯上只屬於池的非現役佇列或持有者其中一方，
/// 由取出/歸還流程維持這個不變量。
pub type Handle<T> = Rc<RefCell<T>>;
