//! College Portal - 学院管理门户客户端核心
//!
//! 成绩计算与校验、出勤统计、重复考试检查，以及与后端 REST 服务的类型化交互。
//!
//! # 架构
//! - `cache`: 参考数据展示缓存（Moka）
//! - `client`: 后端接口契约与 HTTP 实现
//! - `config`: 配置管理
//! - `errors`: 统一错误处理
//! - `models`: 数据模型定义
//! - `runtime`: 运行时生命周期管理
//! - `services`: 业务逻辑层
//! - `utils`: 工具函数

pub mod cache;
pub mod client;
pub mod config;
pub mod errors;
pub mod models;
pub mod runtime;
pub mod services;
pub mod utils;
