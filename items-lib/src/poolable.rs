//! 可入池契約
//!
//! 參與物件池的物品實作 [`Poolable`]；
//! 生成實例的模板（原型資料）實作 [`PoolTemplate`]。

use crate::alias::ItemTypeID;

/// 可入池物品的能力契約
pub trait Poolable {
    /// 取出時呼叫：把暫態資料重設為剛生成的值（血量、計時器、旗標）。
    /// 必須冪等，且不得假設任何先前狀態。
    fn on_acquire(&mut self);

    /// 歸還時呼叫：清空狀態（位置歸回中性值、停止進行中的計時效果）。
    /// 呼叫兩次必須安全；歸還後實例要能無限期閒置。
    fn on_release(&mut self);

    /// 此實例的種類 ID
    fn type_id(&self) -> &ItemTypeID;

    /// 是否為現役狀態
    fn is_active(&self) -> bool;

    /// 設定現役狀態（由池管理呼叫）
    fn set_active(&mut self, active: bool);
}

/// 池模板：能生成某種 [`Poolable`] 實例的原型
pub trait PoolTemplate {
    type Item: Poolable;

    /// 模板的種類 ID；缺少物品資料或 ID 時回傳 `None`
    fn item_type(&self) -> Option<&ItemTypeID>;

    /// 從模板生成一個新實例（生成時為非現役狀態）
    fn instantiate(&self) -> Self::Item;
}
