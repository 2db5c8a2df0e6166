//! 物品池與身份註冊核心函式庫
//!
//! 實作遊戲物品的物件池系統，包括：
//! - 身份註冊表（種類 ID 到現役物品實例的映射）
//! - 可入池契約（取出/歸還生命週期掛鉤）
//! - 物品池管理（兩階段初始化、預熱、取出、歸還、診斷）
//! - TOML 池配置的載入與儲存

pub mod alias;
pub mod config;
pub mod error;
pub mod identity;
pub mod item;
pub mod pool;
pub mod poolable;

// 重新導出常用類型
pub use alias::{Handle, ItemTypeID};
pub use config::{ItemTypeConfig, PoolConfig};
pub use error::{Context, Error, ErrorKind, LoadError, Result};
pub use identity::IdentityRegistry;
pub use item::{Item, ItemType, Pos};
pub use pool::{ItemPool, PoolSetup};
pub use poolable::{PoolTemplate, Poolable};
