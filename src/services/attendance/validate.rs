//! 出勤提交校验

use std::collections::HashSet;

use crate::errors::{PortalError, Result};
use crate::models::ValidationResult;
use crate::models::attendance::{
    entities::{AttendanceStatus, StudentAttendanceEntry},
    requests::{AttendanceDraft, CreateAttendanceRequest},
};
use crate::models::common::date::parse_date;
use crate::utils::validate::non_blank;

pub fn validate_attendance(draft: &AttendanceDraft) -> ValidationResult {
    let mut errors = Vec::new();

    if non_blank(draft.subject_id.as_deref()).is_none() {
        errors.push("Subject is required".to_string());
    }

    match non_blank(draft.division.as_deref()) {
        None => errors.push("Division is required".to_string()),
        Some(division) => {
            if let Err(e) = crate::utils::validate_division(division) {
                errors.push(e.to_string());
            }
        }
    }

    match non_blank(draft.date.as_deref()) {
        None => errors.push("Date is required".to_string()),
        Some(date) => {
            if parse_date(date).is_err() {
                errors.push(format!("Date '{date}' is not a valid date"));
            }
        }
    }

    if draft.attendance_records.is_empty() {
        errors.push("At least one student attendance entry is required".to_string());
    }

    let mut seen = HashSet::new();
    for (index, entry) in draft.attendance_records.iter().enumerate() {
        let Some(student_id) = non_blank(entry.student_id.as_deref()) else {
            errors.push(format!("Student ID is required for entry {}", index + 1));
            continue;
        };

        // 每名学生每次课只能有一个状态
        if !seen.insert(student_id) {
            errors.push(format!("Student {student_id} is listed more than once"));
        }

        match non_blank(entry.status.as_deref()) {
            None => errors.push(format!("Status is required for student {student_id}")),
            Some(status) => {
                if let Err(e) = status.parse::<AttendanceStatus>() {
                    errors.push(format!("Student {student_id}: {e}"));
                }
            }
        }
    }

    ValidationResult::from_errors(errors)
}

impl TryFrom<AttendanceDraft> for CreateAttendanceRequest {
    type Error = PortalError;

    fn try_from(draft: AttendanceDraft) -> Result<Self> {
        validate_attendance(&draft).into_result()?;

        let missing = |field: &str| PortalError::validation(format!("{field} is required"));
        let subject_id = non_blank(draft.subject_id.as_deref())
            .ok_or_else(|| missing("Subject"))?
            .to_string();
        let division = non_blank(draft.division.as_deref())
            .ok_or_else(|| missing("Division"))?
            .to_string();
        let date = parse_date(non_blank(draft.date.as_deref()).ok_or_else(|| missing("Date"))?)?;

        let attendance_records = draft
            .attendance_records
            .iter()
            .map(|entry| {
                let student_id = non_blank(entry.student_id.as_deref())
                    .ok_or_else(|| missing("Student ID"))?;
                let status = non_blank(entry.status.as_deref())
                    .ok_or_else(|| missing("Status"))?
                    .parse::<AttendanceStatus>()
                    .map_err(PortalError::validation)?;
                Ok(StudentAttendanceEntry::new(student_id, status))
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(CreateAttendanceRequest {
            subject_id,
            division,
            date,
            attendance_records,
        })
    }
}
