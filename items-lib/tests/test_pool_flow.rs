//! 池流程情境測試
//!
//! 驗證取出/歸還協定的整體行為：佇列長度不變量、
//! 池耗盡時的即時生成、註冊表與現役狀態的同步。

use items_lib::{IdentityRegistry, Item, ItemPool, ItemType, PoolConfig, Poolable};
use std::rc::Rc;

const POOL_TOML: &str = r#"
    diagnostics = false

    [[items]]
    name = "治療藥水"
    type_id = "potion-hp"
    max_hp = 1
    prewarm = 2

    [[items]]
    name = "煙霧彈"
    type_id = "smoke-bomb"
    effect_duration = 5.0
    prewarm = 1
"#;

fn build_world() -> (ItemPool<ItemType>, IdentityRegistry<Item>) {
    let config = PoolConfig::from_toml_str(POOL_TOML).expect("解析池配置應成功");
    let mut pool = config.build_pool();
    pool.prewarm_all();
    (pool, IdentityRegistry::new())
}

// ============================================================================
// 測試：取出與註冊表同步
// ============================================================================

#[test]
fn test_checkout_is_active_and_registered_until_return() {
    let (mut pool, mut registry) = build_world();
    let id = "potion-hp".to_string();

    let handle = pool.checkout(&mut registry, &id).expect("checkout 應成功");
    assert!(handle.borrow().is_active(), "取出的實例應為現役");

    let found = registry.lookup(&id).expect("現役期間 lookup 應找到實例");
    assert!(Rc::ptr_eq(&found, &handle), "lookup 應回傳取出的那個實例");

    pool.give_back(&mut registry, handle.clone());
    assert!(!handle.borrow().is_active(), "歸還後實例應為非現役");
    assert!(registry.lookup(&id).is_none(), "歸還後註冊表不應再有該 ID");
}

#[test]
fn test_round_trip_preserves_queue_length() {
    let (mut pool, mut registry) = build_world();
    let id = "potion-hp".to_string();
    let before = pool.occupancy();

    let handle = pool.checkout(&mut registry, &id).expect("checkout 應成功");
    pool.give_back(&mut registry, handle);

    assert_eq!(
        pool.occupancy(),
        before,
        "checkout 後立即歸還，佇列長度應不變"
    );
}

// ============================================================================
// 測試：池耗盡情境
// ============================================================================

#[test]
fn test_exhaustion_allocates_on_demand() {
    let (mut pool, mut registry) = build_world();
    let id = "potion-hp".to_string();

    // 預熱 2 個：連取兩次把池抽乾
    let first = pool.checkout(&mut registry, &id).expect("第一次 checkout 應成功");
    let second = pool.checkout(&mut registry, &id).expect("第二次 checkout 應成功");
    assert_eq!(pool.occupancy().get("potion-hp"), Some(&0), "池應已抽乾");

    // 第三次取出：池為空，應即時生成而非失敗
    let third = pool.checkout(&mut registry, &id).expect("池耗盡時 checkout 仍應成功");
    assert!(!Rc::ptr_eq(&third, &first) && !Rc::ptr_eq(&third, &second));

    // 歸還一個後，池應有一個非現役實例
    pool.give_back(&mut registry, second.clone());
    assert_eq!(pool.occupancy().get("potion-hp"), Some(&1));

    // 再取出：佇列裡只有剛歸還的那個（FIFO）
    let next = pool.checkout(&mut registry, &id).expect("checkout 應成功");
    assert!(
        Rc::ptr_eq(&next, &second),
        "應拿到剛歸還的實例"
    );
}

// ============================================================================
// 測試：註冊表先到先贏
// ============================================================================

#[test]
fn test_two_active_instances_registry_keeps_first() {
    let (mut pool, mut registry) = build_world();
    let id = "potion-hp".to_string();

    let first = pool.checkout(&mut registry, &id).expect("checkout 應成功");
    let _second = pool.checkout(&mut registry, &id).expect("checkout 應成功");

    let found = registry.lookup(&id).expect("lookup 應找到實例");
    assert!(
        Rc::ptr_eq(&found, &first),
        "同種類有兩個現役實例時，註冊表應保留第一個"
    );
}

// ============================================================================
// 測試：歸還後狀態中性
// ============================================================================

#[test]
fn test_returned_instance_state_is_neutral() {
    let (mut pool, mut registry) = build_world();
    let id = "smoke-bomb".to_string();

    let handle = pool.checkout(&mut registry, &id).expect("checkout 應成功");
    {
        let mut item = handle.borrow_mut();
        item.pos = items_lib::Pos { x: 4, y: 2 };
        item.start_effect();
        assert_eq!(item.effect_timer, 5.0);
    }

    // 歸還前手動多呼叫一次 on_release，驗證重複呼叫不會破壞狀態
    handle.borrow_mut().on_release();
    pool.give_back(&mut registry, handle.clone());

    let item = handle.borrow();
    assert_eq!(item.pos, items_lib::Pos::default(), "位置應歸回原點");
    assert_eq!(item.effect_timer, 0.0, "效果計時應已停止");
    assert!(!item.is_active());
}

// ============================================================================
// 測試：配置錯誤的容錯
// ============================================================================

#[test]
fn test_malformed_entries_skipped_rest_proceeds() {
    let toml = r#"
        [[items]]
        name = "沒有 ID 的物品"
        prewarm = 3

        [[items]]
        name = "正常物品"
        type_id = "ok-item"
        prewarm = 1

        [[items]]
        name = "重複 ID"
        type_id = "ok-item"
        prewarm = 9
    "#;
    let config = PoolConfig::from_toml_str(toml).expect("解析池配置應成功");
    let mut pool = config.build_pool();
    pool.prewarm_all();

    assert_eq!(pool.len(), 1, "缺 ID 與重複 ID 的條目應被跳過");
    assert_eq!(
        pool.occupancy().get("ok-item"),
        Some(&1),
        "保留的是先出現的條目（prewarm = 1）"
    );
}
