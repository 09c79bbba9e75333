use super::AttendanceService;
use crate::errors::Result;
use crate::models::attendance::{
    entities::AttendanceRecord,
    requests::AttendanceListQuery,
    responses::{AttendanceStats, StudentAttendance},
};
use crate::services::attendance::stats::{
    calculate_attendance_stats, calculate_student_attendance,
};
use crate::utils::RequestSequencer;

/// 出勤列表展示位，切换科目时沿用同一展示位
pub const ATTENDANCE_SLOT: &str = "attendance";

pub async fn list_attendance(
    service: &AttendanceService,
    subject_id: &str,
    query: &AttendanceListQuery,
) -> Result<Vec<AttendanceRecord>> {
    service.api().list_attendance(subject_id, query).await
}

pub async fn list_attendance_latest(
    service: &AttendanceService,
    sequencer: &RequestSequencer,
    subject_id: &str,
    query: &AttendanceListQuery,
) -> Result<Option<Vec<AttendanceRecord>>> {
    let ticket = sequencer.begin(ATTENDANCE_SLOT);
    let result = service.api().list_attendance(subject_id, query).await;

    match sequencer.settle(&ticket, result) {
        Some(result) => result.map(Some),
        None => Ok(None),
    }
}

pub async fn attendance_stats(
    service: &AttendanceService,
    subject_id: &str,
    query: &AttendanceListQuery,
) -> Result<AttendanceStats> {
    let records = service.api().list_attendance(subject_id, query).await?;
    Ok(calculate_attendance_stats(&records))
}

pub async fn student_attendance(
    service: &AttendanceService,
    subject_id: &str,
    query: &AttendanceListQuery,
    student_id: &str,
) -> Result<StudentAttendance> {
    let records = service.api().list_attendance(subject_id, query).await?;
    Ok(calculate_student_attendance(&records, student_id))
}
