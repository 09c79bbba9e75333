//! 会话令牌解析
//!
//! 前端不持有签名密钥，这里只解码载荷读取用户与过期时间，
//! 签名校验由后端负责。

use jsonwebtoken::{Algorithm, DecodingKey, Validation, decode};
use serde::{Deserialize, Serialize};

// JWT Claims 结构体
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Claims {
    #[serde(default, alias = "id", alias = "userId")]
    pub sub: Option<String>, // 用户 ID
    #[serde(default)]
    pub role: Option<String>, // 用户角色
    #[serde(default)]
    pub exp: Option<i64>, // 过期时间戳
    #[serde(default)]
    pub iat: Option<i64>, // 签发时间
}

impl Claims {
    /// 在给定时间点是否已过期，无 exp 视为不过期
    pub fn is_expired_at(&self, now_ts: i64) -> bool {
        matches!(self.exp, Some(exp) if exp <= now_ts)
    }
}

pub struct JwtUtils;

impl JwtUtils {
    /// 不校验签名地解码载荷
    pub fn decode_unverified(token: &str) -> Result<Claims, jsonwebtoken::errors::Error> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.insecure_disable_signature_validation();
        validation.validate_exp = false;
        validation.validate_aud = false;
        validation.required_spec_claims.clear();

        decode::<Claims>(token, &DecodingKey::from_secret(&[]), &validation)
            .map(|token_data| token_data.claims)
    }
}
