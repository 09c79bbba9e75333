//! 配置管理
//!
//! 加载顺序：内置默认值 → `config.toml` → `config.{APP_ENV}.toml` → `PORTAL_*` 环境变量 → 显式覆盖。
//! 配置作为普通值显式传递，不保存在全局变量中。

mod r#impl;
mod structs;

pub use structs::*;
