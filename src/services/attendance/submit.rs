use chrono::NaiveDate;
use tracing::{info, warn};

use super::AttendanceService;
use crate::errors::Result;
use crate::models::attendance::{
    entities::AttendanceRecord,
    requests::{AttendanceDraft, AttendanceListQuery, CreateAttendanceRequest},
};

pub async fn submit_attendance(
    service: &AttendanceService,
    draft: AttendanceDraft,
) -> Result<AttendanceRecord> {
    let request = CreateAttendanceRequest::try_from(draft)?;

    let record = service.api().create_attendance(&request).await?;
    info!(
        "Recorded attendance for subject {} ({}) on {}: {}/{} present",
        request.subject_id,
        request.division,
        request.date,
        record.present_count(),
        record.attendance_records.len()
    );
    Ok(record)
}

/// 失败时记录日志并返回 `false`
pub async fn has_record_for_date(
    service: &AttendanceService,
    subject_id: &str,
    division: &str,
    date: NaiveDate,
) -> bool {
    let query = AttendanceListQuery::on_date(division.trim(), date);
    match service.api().list_attendance(subject_id, &query).await {
        Ok(records) => records
            .iter()
            .any(|r| r.date == date && r.division == division.trim()),
        Err(e) => {
            warn!(
                "Existing attendance check failed for subject {} ({} on {}): {}",
                subject_id, division, date, e
            );
            false
        }
    }
}
