use serde::Serialize;
use ts_rs::TS;

use crate::models::marks::entities::{Grade, Mark};

/// 带展示字段的成绩
#[derive(Debug, Clone, PartialEq, Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../frontend/src/types/generated/marks.ts")]
pub struct MarkDisplay {
    pub mark: Mark,
    pub percentage: String,
    pub grade: Option<Grade>,
    pub formatted_date: String,
}

impl AsRef<Mark> for MarkDisplay {
    fn as_ref(&self) -> &Mark {
        &self.mark
    }
}
