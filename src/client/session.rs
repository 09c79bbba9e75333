use std::fmt;

use chrono::Utc;

use crate::errors::{PortalError, Result};
use crate::models::auth::entities::{AuthUser, UserRole};
use crate::utils::jwt::{Claims, JwtUtils};

/// 当前登录会话
///
/// 显式传递给 HTTP 客户端，不依赖任何全局存储。
#[derive(Clone, Default)]
pub struct Session {
    token: Option<String>,
    claims: Option<Claims>,
    user: Option<AuthUser>,
}

impl Session {
    /// 未登录会话，请求不携带令牌
    pub fn anonymous() -> Self {
        Self::default()
    }

    /// 从令牌创建会话，载荷无法解码时返回认证错误
    pub fn from_token(token: impl Into<String>) -> Result<Self> {
        let token = token.into();
        let claims = JwtUtils::decode_unverified(&token)?;
        Ok(Self {
            token: Some(token),
            claims: Some(claims),
            user: None,
        })
    }

    pub fn with_user(mut self, user: AuthUser) -> Self {
        self.user = Some(user);
        self
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    pub fn user(&self) -> Option<&AuthUser> {
        self.user.as_ref()
    }

    pub fn user_id(&self) -> Option<&str> {
        self.user
            .as_ref()
            .map(|u| u.id.as_str())
            .or_else(|| self.claims.as_ref().and_then(|c| c.sub.as_deref()))
    }

    pub fn role(&self) -> Option<UserRole> {
        self.user.as_ref().map(|u| u.role).or_else(|| {
            self.claims
                .as_ref()
                .and_then(|c| c.role.as_deref())
                .and_then(|r| r.parse().ok())
        })
    }

    pub fn is_expired(&self) -> bool {
        self.claims
            .as_ref()
            .is_some_and(|c| c.is_expired_at(Utc::now().timestamp()))
    }

    /// 取出请求用的令牌；已过期的令牌不会发送
    pub fn bearer_token(&self) -> Result<Option<&str>> {
        match &self.token {
            None => Ok(None),
            Some(_) if self.is_expired() => Err(PortalError::authentication(
                "Session has expired, please sign in again",
            )),
            Some(token) => Ok(Some(token.as_str())),
        }
    }
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("token", &self.token.as_ref().map(|_| "<redacted>"))
            .field("claims", &self.claims)
            .field("user", &self.user)
            .finish()
    }
}
