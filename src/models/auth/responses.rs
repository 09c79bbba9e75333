use serde::Deserialize;

use crate::models::auth::entities::AuthUser;

// 登录响应
#[derive(Debug, Clone, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    pub user: AuthUser,
}
