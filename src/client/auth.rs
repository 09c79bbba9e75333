use tracing::info;

use crate::client::Session;
use crate::client::http_client::HttpPortalApi;
use crate::config::AppConfig;
use crate::errors::{PortalError, Result};
use crate::models::auth::{requests::LoginRequest, responses::LoginResponse};

/// 登录并返回新会话
pub async fn login(config: &AppConfig, request: &LoginRequest) -> Result<Session> {
    if request.email.trim().is_empty() || request.password.is_empty() {
        return Err(PortalError::validation("Email and password are required"));
    }

    let client = HttpPortalApi::new(config, Session::anonymous())?;
    let response: LoginResponse = client
        .post_json("auth/login", &serde_json::to_value(request)?)
        .await?;

    let session = Session::from_token(response.token)?.with_user(response.user);
    info!(
        "Signed in as {} ({})",
        session.user_id().unwrap_or("unknown"),
        session
            .role()
            .map(|r| r.to_string())
            .unwrap_or_else(|| "unknown".into())
    );
    Ok(session)
}
