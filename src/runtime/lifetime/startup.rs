use std::sync::Arc;
use tracing::{debug, warn};
use tracing_appender::non_blocking::WorkerGuard;

use crate::cache::{MokaCacheWrapper, ObjectCache};
use crate::client::{PortalApi, Session, create_client};
use crate::config::AppConfig;
use crate::errors::Result;
use crate::services::{AttendanceService, DashboardService, MarkService, ReferenceService};
use crate::utils::RequestSequencer;

/// 门户运行时上下文，由调用方持有
#[derive(Clone)]
pub struct PortalContext {
    pub config: AppConfig,
    pub api: Arc<dyn PortalApi>,
    pub cache: Arc<dyn ObjectCache>,
    pub sequencer: Arc<RequestSequencer>,
}

impl PortalContext {
    pub fn marks(&self) -> MarkService {
        MarkService::new(self.api.clone())
    }

    pub fn attendance(&self) -> AttendanceService {
        AttendanceService::new(self.api.clone())
    }

    pub fn references(&self) -> ReferenceService {
        ReferenceService::new(self.api.clone(), self.cache.clone())
    }

    pub fn dashboard(&self) -> DashboardService {
        DashboardService::new(self.api.clone())
    }

    /// 切换登录会话（登录、退出或换账号）
    ///
    /// 参考数据可能随角色不同而不同，切换后清空展示缓存并作废所有在途请求。
    pub async fn replace_session(&mut self, session: Session) -> Result<()> {
        self.api = create_client(&self.config, session)?;
        self.cache.invalidate_all().await;
        self.sequencer = Arc::new(RequestSequencer::new());
        debug!("Session replaced, display cache cleared");
        Ok(())
    }
}

/// 初始化日志
///
/// 返回的 guard 需要保持存活，否则缓冲中的日志会丢失。
/// 已经安装过全局 subscriber 时静默跳过。
pub fn init_tracing(config: &AppConfig) -> WorkerGuard {
    let stdout_log = std::io::stdout();
    let (non_blocking_writer, guard) = tracing_appender::non_blocking(stdout_log);
    let filter = tracing_subscriber::EnvFilter::new(&config.app.log_level);
    let tracing_format = tracing_subscriber::fmt::format()
        .with_level(true)
        .with_ansi(true);

    let tracing_builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(non_blocking_writer)
        .event_format(tracing_format);

    let result = if config.is_development() {
        tracing_builder
            .with_file(true)
            .with_line_number(true)
            .try_init()
    } else {
        tracing_builder.json().try_init()
    };
    if result.is_err() {
        debug!("Global tracing subscriber already installed");
    }

    guard
}

/// 根据配置与会话构建上下文
pub fn prepare_portal(config: AppConfig, session: Session) -> Result<PortalContext> {
    if !session.is_authenticated() {
        warn!("No session token configured, requests will be sent anonymously");
    }

    let api = create_client(&config, session)?;
    let cache: Arc<dyn ObjectCache> = Arc::new(MokaCacheWrapper::new(&config.cache));
    debug!(
        "Portal client ready for {} ({})",
        config.api.base_url, config.app.environment
    );

    Ok(PortalContext {
        config,
        api,
        cache,
        sequencer: Arc::new(RequestSequencer::new()),
    })
}

/// 从 `.env`、配置文件与环境变量构建上下文
pub fn prepare_portal_from_env() -> Result<PortalContext> {
    dotenv::dotenv().ok();

    let config = AppConfig::load()?;
    let session = if config.api.token.trim().is_empty() {
        Session::anonymous()
    } else {
        Session::from_token(config.api.token.trim())?
    };

    prepare_portal(config, session)
}
