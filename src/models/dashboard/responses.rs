use serde::Serialize;
use ts_rs::TS;

use crate::models::attendance::responses::AttendanceStats;
use crate::models::marks::entities::{ExamType, Grade};

/// 科目概览（教师首页）
#[derive(Debug, Clone, PartialEq, Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../frontend/src/types/generated/dashboard.ts")]
pub struct SubjectOverview {
    pub subject_id: String,
    pub division: String,
    pub attendance: AttendanceStats,
    pub exams: Vec<ExamSummary>,
}

/// 单个考试类型的成绩汇总
#[derive(Debug, Clone, PartialEq, Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../frontend/src/types/generated/dashboard.ts")]
pub struct ExamSummary {
    pub exam_type: ExamType,
    pub mark_count: u32,
    pub average_percentage: f64,
    pub grade_distribution: Vec<GradeCount>,
}

/// 等级分布
#[derive(Debug, Clone, PartialEq, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/dashboard.ts")]
pub struct GradeCount {
    pub grade: Grade,
    pub count: u32,
}
