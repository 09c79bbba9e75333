//! 统一错误处理模块
//!
//! 使用宏自动生成错误类型，支持错误代码和类型名称。
//! 后端返回的结构化错误单独使用 `Api` 变体承载 `{message, status, data}`。

use serde::Serialize;
use std::fmt;
use ts_rs::TS;

/// 归一化后的接口错误，前端直接据此渲染可关闭的提示条
#[derive(Debug, Clone, PartialEq, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/api.ts")]
pub struct ApiFailure {
    pub message: String,
    pub status: Option<u16>,
    pub data: Option<serde_json::Value>,
}

impl ApiFailure {
    pub fn new(message: impl Into<String>, status: Option<u16>) -> Self {
        Self {
            message: message.into(),
            status,
            data: None,
        }
    }

    pub fn with_data(mut self, data: serde_json::Value) -> Self {
        self.data = Some(data);
        self
    }
}

/// 定义错误类型的宏
///
/// 自动生成：
/// - enum 定义（附加固定的 `Api` 变体）
/// - code() 方法 - 返回错误代码
/// - error_type() 方法 - 返回错误类型名称
/// - message() 方法 - 返回错误详情
/// - 便捷构造函数
macro_rules! define_portal_errors {
    ($(
        $variant:ident($code:literal, $type_name:literal)
    ),* $(,)?) => {
        #[derive(Debug, Clone, PartialEq)]
        pub enum PortalError {
            $($variant(String),)*
            Api(ApiFailure),
        }

        impl PortalError {
            /// 获取错误代码
            pub fn code(&self) -> &'static str {
                match self {
                    $(PortalError::$variant(_) => $code,)*
                    PortalError::Api(_) => "P099",
                }
            }

            /// 获取错误类型名称
            pub fn error_type(&self) -> &'static str {
                match self {
                    $(PortalError::$variant(_) => $type_name,)*
                    PortalError::Api(_) => "API Error",
                }
            }

            /// 获取错误详情
            pub fn message(&self) -> &str {
                match self {
                    $(PortalError::$variant(msg) => msg,)*
                    PortalError::Api(failure) => &failure.message,
                }
            }
        }

        // 生成便捷构造函数
        paste::paste! {
            impl PortalError {
                $(
                    pub fn [<$variant:snake>]<T: Into<String>>(msg: T) -> Self {
                        PortalError::$variant(msg.into())
                    }
                )*
            }
        }
    };
}

define_portal_errors! {
    Validation("P001", "Validation Error"),
    InvalidInput("P002", "Invalid Input"),
    Network("P003", "Network Error"),
    Timeout("P004", "Request Timeout"),
    Serialization("P005", "Serialization Error"),
    DateParse("P006", "Date Parse Error"),
    Authentication("P007", "Authentication Error"),
    Configuration("P008", "Configuration Error"),
    NotFound("P009", "Resource Not Found"),
}

impl PortalError {
    /// 接口错误构造函数
    pub fn api(failure: ApiFailure) -> Self {
        PortalError::Api(failure)
    }

    /// 用户重新点击即可重试的错误
    pub fn is_retryable(&self) -> bool {
        match self {
            PortalError::Network(_) | PortalError::Timeout(_) => true,
            PortalError::Api(failure) => {
                matches!(failure.status, Some(status) if status >= 500 || status == 429)
            }
            _ => false,
        }
    }

    /// 获取 HTTP 状态码（仅接口错误）
    pub fn status(&self) -> Option<u16> {
        match self {
            PortalError::Api(failure) => failure.status,
            _ => None,
        }
    }

    /// 归一化为 `{message, status, data}`
    pub fn to_failure(&self) -> ApiFailure {
        match self {
            PortalError::Api(failure) => failure.clone(),
            other => ApiFailure::new(other.message(), None),
        }
    }

    /// 格式化为简洁输出
    pub fn format_simple(&self) -> String {
        match self {
            PortalError::Api(ApiFailure {
                status: Some(status),
                message,
                ..
            }) => format!("{} ({status}): {message}", self.error_type()),
            _ => format!("{}: {}", self.error_type(), self.message()),
        }
    }
}

impl fmt::Display for PortalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_simple())
    }
}

impl std::error::Error for PortalError {}

// 为常见的错误类型实现 From trait
impl From<reqwest::Error> for PortalError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            PortalError::Timeout(err.to_string())
        } else if err.is_decode() {
            PortalError::Serialization(err.to_string())
        } else if let Some(status) = err.status() {
            PortalError::Api(ApiFailure::new(err.to_string(), Some(status.as_u16())))
        } else {
            PortalError::Network(err.to_string())
        }
    }
}

impl From<serde_json::Error> for PortalError {
    fn from(err: serde_json::Error) -> Self {
        PortalError::Serialization(err.to_string())
    }
}

impl From<chrono::ParseError> for PortalError {
    fn from(err: chrono::ParseError) -> Self {
        PortalError::DateParse(err.to_string())
    }
}

impl From<config::ConfigError> for PortalError {
    fn from(err: config::ConfigError) -> Self {
        PortalError::Configuration(err.to_string())
    }
}

impl From<jsonwebtoken::errors::Error> for PortalError {
    fn from(err: jsonwebtoken::errors::Error) -> Self {
        PortalError::Authentication(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, PortalError>;
