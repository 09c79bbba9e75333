use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::models::attendance::entities::StudentAttendanceEntry;

/// 出勤表单原始内容
#[derive(Debug, Clone, Default, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../frontend/src/types/generated/attendance.ts")]
pub struct AttendanceDraft {
    #[serde(default)]
    pub subject_id: Option<String>,
    #[serde(default)]
    pub division: Option<String>,
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub attendance_records: Vec<AttendanceEntryDraft>,
}

#[derive(Debug, Clone, Default, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../frontend/src/types/generated/attendance.ts")]
pub struct AttendanceEntryDraft {
    #[serde(default)]
    pub student_id: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
}

impl AttendanceEntryDraft {
    pub fn new(student_id: impl Into<String>, status: impl Into<String>) -> Self {
        Self {
            student_id: Some(student_id.into()),
            status: Some(status.into()),
        }
    }
}

/// 校验通过后的出勤提交
#[derive(Debug, Clone, PartialEq, Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../frontend/src/types/generated/attendance.ts")]
pub struct CreateAttendanceRequest {
    pub subject_id: String,
    pub division: String,
    pub date: NaiveDate,
    pub attendance_records: Vec<StudentAttendanceEntry>,
}

/// 出勤列表筛选
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AttendanceListQuery {
    pub division: Option<String>,
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
}

impl AttendanceListQuery {
    pub fn for_division(division: impl Into<String>) -> Self {
        Self {
            division: Some(division.into()),
            ..Default::default()
        }
    }

    pub fn on_date(division: impl Into<String>, date: NaiveDate) -> Self {
        Self {
            division: Some(division.into()),
            from: Some(date),
            to: Some(date),
        }
    }

    pub fn to_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(division) = &self.division {
            pairs.push(("division", division.clone()));
        }
        if let Some(from) = &self.from {
            pairs.push(("from", from.to_string()));
        }
        if let Some(to) = &self.to {
            pairs.push(("to", to.to_string()));
        }
        pairs
    }
}
