use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::models::common::date::deserialize_flexible_date;

// 出勤状态
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export, export_to = "../frontend/src/types/generated/attendance.ts")]
pub enum AttendanceStatus {
    Present,
    Absent,
}

impl AttendanceStatus {
    pub const PRESENT: &'static str = "present";
    pub const ABSENT: &'static str = "absent";
}

impl<'de> Deserialize<'de> for AttendanceStatus {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

impl std::fmt::Display for AttendanceStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AttendanceStatus::Present => write!(f, "{}", AttendanceStatus::PRESENT),
            AttendanceStatus::Absent => write!(f, "{}", AttendanceStatus::ABSENT),
        }
    }
}

impl std::str::FromStr for AttendanceStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            AttendanceStatus::PRESENT => Ok(AttendanceStatus::Present),
            AttendanceStatus::ABSENT => Ok(AttendanceStatus::Absent),
            _ => Err(format!(
                "Invalid attendance status: '{s}'. Supported: present, absent"
            )),
        }
    }
}

// 单个学生的出勤条目
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../frontend/src/types/generated/attendance.ts")]
pub struct StudentAttendanceEntry {
    pub student_id: String,
    pub status: AttendanceStatus,
}

impl StudentAttendanceEntry {
    pub fn new(student_id: impl Into<String>, status: AttendanceStatus) -> Self {
        Self {
            student_id: student_id.into(),
            status,
        }
    }
}

// 某科目某分班某天的出勤记录
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../frontend/src/types/generated/attendance.ts")]
pub struct AttendanceRecord {
    #[serde(alias = "_id", default)]
    pub id: String,
    #[serde(deserialize_with = "deserialize_flexible_date")]
    pub date: NaiveDate,
    pub subject_id: String,
    pub division: String,
    #[serde(default)]
    pub attendance_records: Vec<StudentAttendanceEntry>,
}

impl AttendanceRecord {
    pub fn present_count(&self) -> usize {
        self.attendance_records
            .iter()
            .filter(|entry| entry.status == AttendanceStatus::Present)
            .count()
    }

    pub fn status_of(&self, student_id: &str) -> Option<AttendanceStatus> {
        self.attendance_records
            .iter()
            .find(|entry| entry.student_id == student_id)
            .map(|entry| entry.status)
    }
}
