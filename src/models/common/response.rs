use serde::Deserialize;

use crate::errors::{ApiFailure, PortalError, Result};

// 后端统一响应信封
#[derive(Debug, Clone, Deserialize)]
pub struct ApiResponse<T> {
    #[serde(default = "default_success")]
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    pub data: Option<T>,
}

fn default_success() -> bool {
    true
}

impl<T> ApiResponse<T> {
    /// 取出数据
    ///
    /// `success: false` 视为接口错误并保留后端消息；成功但缺少数据时返回 `NotFound`。
    pub fn into_data(self) -> Result<T> {
        if !self.success {
            let message = self
                .message
                .unwrap_or_else(|| "Request was not successful".to_string());
            return Err(PortalError::api(ApiFailure::new(message, None)));
        }
        self.data.ok_or_else(|| {
            PortalError::not_found(
                self.message
                    .unwrap_or_else(|| "Response did not contain data".to_string()),
            )
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_into_data() {
        let resp: ApiResponse<Vec<u32>> =
            serde_json::from_str(r#"{"success":true,"message":"ok","data":[1,2]}"#).unwrap();
        assert_eq!(resp.into_data().unwrap(), vec![1, 2]);
    }

    #[test]
    fn test_unsuccessful_envelope_keeps_backend_message() {
        let resp: ApiResponse<Vec<u32>> = serde_json::from_str(
            r#"{"success":false,"message":"Marks already exist for Quiz in division A"}"#,
        )
        .unwrap();
        let err = resp.into_data().unwrap_err();
        assert_eq!(err.code(), "P099");
        assert_eq!(
            err.to_failure(),
            ApiFailure::new("Marks already exist for Quiz in division A", None)
        );
    }

    #[test]
    fn test_unsuccessful_envelope_with_data_is_still_an_error() {
        let resp: ApiResponse<Vec<u32>> =
            serde_json::from_str(r#"{"success":false,"data":[1]}"#).unwrap();
        let err = resp.into_data().unwrap_err();
        assert_eq!(err.code(), "P099");
        assert_eq!(err.message(), "Request was not successful");
    }

    #[test]
    fn test_missing_data_is_not_found() {
        let resp: ApiResponse<Vec<u32>> =
            serde_json::from_str(r#"{"success":true,"message":"No marks found"}"#).unwrap();
        let err = resp.into_data().unwrap_err();
        assert_eq!(err.code(), "P009");
        assert_eq!(err.message(), "No marks found");
    }
}
