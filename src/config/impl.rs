use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, Environment, File};
use std::time::Duration;

use super::AppConfig;

impl AppConfig {
    /// 带默认值与文件、环境变量来源的构建器
    pub fn builder() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
        let builder = Config::builder()
            .set_default("app.system_name", "College Portal")?
            .set_default("app.environment", "development")?
            .set_default("app.log_level", "info")?
            .set_default("api.base_url", "http://localhost:5000/api")?
            .set_default("api.timeouts.request", 15_000)?
            .set_default("api.timeouts.connect", 5_000)?
            .set_default("api.token", "")?
            .set_default("cache.default_ttl", 300)?
            .set_default("cache.max_capacity", 1_000)?
            // 首先加载默认配置文件
            .add_source(File::with_name("config").required(false))
            // 然后根据环境加载特定配置文件
            .add_source(
                File::with_name(&format!(
                    "config.{}",
                    std::env::var("APP_ENV").unwrap_or_else(|_| "development".into())
                ))
                .required(false),
            )
            // 最后加载环境变量覆盖
            .add_source(
                Environment::with_prefix("PORTAL")
                    .separator("__")
                    .try_parsing(true),
            );

        Ok(builder)
    }

    /// 加载配置
    pub fn load() -> Result<Self, ConfigError> {
        let builder = Self::builder()?
            .set_override_option("app.environment", std::env::var("APP_ENV").ok())?
            .set_override_option("app.log_level", std::env::var("RUST_LOG").ok())?
            .set_override_option("api.base_url", std::env::var("PORTAL_API_URL").ok())?
            .set_override_option("api.token", std::env::var("PORTAL_TOKEN").ok())?;

        Self::from_builder(builder)
    }

    /// 从构建器生成配置并校验
    pub fn from_builder(builder: ConfigBuilder<DefaultState>) -> Result<Self, ConfigError> {
        let mut app_config: AppConfig = builder.build()?.try_deserialize()?;

        // 统一去掉末尾斜杠，便于拼接路径
        while app_config.api.base_url.ends_with('/') {
            app_config.api.base_url.pop();
        }
        if app_config.api.base_url.is_empty() {
            return Err(ConfigError::Message("api.base_url must not be empty".into()));
        }
        if app_config.api.timeouts.request == 0 {
            return Err(ConfigError::Message(
                "api.timeouts.request must be greater than 0".into(),
            ));
        }

        Ok(app_config)
    }

    /// 检查是否为生产环境
    pub fn is_production(&self) -> bool {
        self.app.environment == "production"
    }

    /// 检查是否为开发环境
    pub fn is_development(&self) -> bool {
        self.app.environment == "development"
    }

    /// 单次请求总超时
    pub fn request_timeout(&self) -> Duration {
        Duration::from_millis(self.api.timeouts.request)
    }

    /// 建立连接超时
    pub fn connect_timeout(&self) -> Duration {
        Duration::from_millis(self.api.timeouts.connect)
    }

    /// 拼接接口地址
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.api.base_url, path.trim_start_matches('/'))
    }
}
