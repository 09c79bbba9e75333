use serde::Serialize;
use ts_rs::TS;

use crate::errors::{PortalError, Result};

/// 本地校验结果，收集全部问题以便一次展示
#[derive(Debug, Clone, Default, PartialEq, Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../frontend/src/types/generated/validation.ts")]
pub struct ValidationResult {
    pub is_valid: bool,
    pub errors: Vec<String>,
}

impl ValidationResult {
    pub fn from_errors(errors: Vec<String>) -> Self {
        Self {
            is_valid: errors.is_empty(),
            errors,
        }
    }

    pub fn error_message(&self) -> String {
        self.errors.join("; ")
    }

    /// 转换为 `Result`，失败时携带全部错误信息
    pub fn into_result(self) -> Result<()> {
        if self.is_valid {
            Ok(())
        } else {
            Err(PortalError::validation(self.error_message()))
        }
    }
}
