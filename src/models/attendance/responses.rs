use serde::Serialize;
use ts_rs::TS;

/// 出勤汇总
#[derive(Debug, Clone, Default, PartialEq, Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../frontend/src/types/generated/attendance.ts")]
pub struct AttendanceStats {
    pub total_classes: u32,
    /// 出现过的不同学生数
    pub total_students: u32,
    pub total_student_records: u32,
    pub total_present_records: u32,
    pub overall_attendance_rate: f64,
    /// 每节课平均学生数（取整）
    pub average_attendance: u32,
}

/// 单个学生的出勤情况
#[derive(Debug, Clone, Default, PartialEq, Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../frontend/src/types/generated/attendance.ts")]
pub struct StudentAttendance {
    pub student_id: String,
    pub total_classes: u32,
    pub present: u32,
    pub absent: u32,
    pub attendance_percentage: f64,
}
