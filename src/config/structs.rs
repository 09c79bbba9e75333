use serde::{Deserialize, Serialize};

/// 应用配置结构体
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub app: AppSettings,
    pub api: ApiConfig,
    pub cache: CacheConfig,
}

/// 应用设置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppSettings {
    pub system_name: String,
    pub environment: String,
    pub log_level: String,
}

/// 后端接口配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    pub base_url: String,
    pub timeouts: TimeoutConfig,
    #[serde(skip_serializing, default)] // 不序列化，避免令牌出现在日志中
    pub token: String,
}

/// 超时配置 (毫秒)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimeoutConfig {
    pub request: u64,
    pub connect: u64,
}

/// 参考数据展示缓存配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CacheConfig {
    pub default_ttl: u64, // 秒
    pub max_capacity: u64,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            default_ttl: 300,
            max_capacity: 1_000,
        }
    }
}
