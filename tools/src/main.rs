//! 池檢視工具
//!
//! 載入池配置，建立並預熱物品池，輸出佔用統計與註冊表內容。
//! 用法：`tools <池配置.toml>`（預設讀取 pool.toml）
//!
//! 設定 `RUST_LOG=debug` 可看到池的診斷記錄。

use items_lib::{Context, IdentityRegistry, PoolConfig, Result};

fn main() -> Result<()> {
    env_logger::init();

    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "pool.toml".to_string());
    let config =
        PoolConfig::from_file(&path).context(format!("載入池配置: {path}"))?;

    let mut pool = config.build_pool();
    pool.prewarm_all();

    println!("池表（{} 種）:", pool.len());
    for (type_id, inactive) in pool.occupancy() {
        println!("  {type_id}: 非現役 {inactive}");
    }

    // 每種各取出一個，展示現役狀態下的註冊表內容
    let mut registry = IdentityRegistry::new();
    let type_ids: Vec<_> = pool.occupancy().keys().cloned().collect();
    let mut held = Vec::new();
    for type_id in &type_ids {
        if let Some(handle) = pool.checkout(&mut registry, type_id) {
            held.push(handle);
        }
    }

    println!("註冊表（{} 筆）:", registry.len());
    for type_id in registry.registered_ids() {
        println!("  {type_id}");
    }

    // 全部歸還後池應回到預熱後的佔用
    for handle in held {
        pool.give_back(&mut registry, handle);
    }
    println!("歸還後:");
    for (type_id, inactive) in pool.occupancy() {
        println!("  {type_id}: 非現役 {inactive}");
    }

    Ok(())
}
