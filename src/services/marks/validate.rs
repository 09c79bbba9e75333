//! 成绩提交校验
//!
//! 收集全部问题而不是遇到第一个就返回，方便界面一次性展示。

use std::collections::HashSet;

use crate::errors::{PortalError, Result};
use crate::models::ValidationResult;
use crate::models::common::date::parse_date;
use crate::models::marks::{
    entities::ExamType,
    requests::{MarksDraft, MarksSubmission, StudentMark},
};
use crate::utils::validate::non_blank;

pub fn validate_marks_data(draft: &MarksDraft) -> ValidationResult {
    let mut errors = Vec::new();

    // 1. 必填字段
    match non_blank(draft.division.as_deref()) {
        None => errors.push("Division is required".to_string()),
        Some(division) => {
            if let Err(e) = crate::utils::validate_division(division) {
                errors.push(e.to_string());
            }
        }
    }

    match non_blank(draft.exam_type.as_deref()) {
        None => errors.push("Exam type is required".to_string()),
        Some(exam_type) => {
            if exam_type.parse::<ExamType>().is_err() {
                errors.push(format!("Invalid exam type: {exam_type}"));
            }
        }
    }

    match non_blank(draft.exam_date.as_deref()) {
        None => errors.push("Exam date is required".to_string()),
        Some(date) => {
            if parse_date(date).is_err() {
                errors.push(format!("Exam date '{date}' is not a valid date"));
            }
        }
    }

    // 2. 满分
    let max_marks = draft.max_marks.filter(|m| m.is_finite() && *m > 0.0);
    if max_marks.is_none() {
        errors.push("Max marks must be a positive number".to_string());
    }

    // 3. 学生成绩
    if draft.marks_data.is_empty() {
        errors.push("At least one student mark is required".to_string());
    }

    let mut seen = HashSet::new();
    for (index, entry) in draft.marks_data.iter().enumerate() {
        let Some(student_id) = non_blank(entry.student_id.as_deref()) else {
            errors.push(format!("Student ID is required for entry {}", index + 1));
            continue;
        };

        if !seen.insert(student_id) {
            errors.push(format!("Duplicate marks entry for student {student_id}"));
        }

        match entry.obtained_marks {
            None => errors.push(format!("Obtained marks are required for student {student_id}")),
            Some(obtained) if !obtained.is_finite() => {
                errors.push(format!("Obtained marks for student {student_id} must be a number"))
            }
            Some(obtained) if obtained < 0.0 => errors.push(format!(
                "Obtained marks for student {student_id} cannot be negative"
            )),
            Some(obtained) => {
                if let Some(max) = max_marks
                    && obtained > max
                {
                    errors.push(format!(
                        "Obtained marks for student {student_id} ({obtained}) cannot exceed maximum marks ({max})"
                    ));
                }
            }
        }
    }

    ValidationResult::from_errors(errors)
}

impl TryFrom<MarksDraft> for MarksSubmission {
    type Error = PortalError;

    fn try_from(draft: MarksDraft) -> Result<Self> {
        validate_marks_data(&draft).into_result()?;

        // 校验通过后以下字段均存在且合法
        let missing = |field: &str| PortalError::validation(format!("{field} is required"));
        let division = non_blank(draft.division.as_deref())
            .ok_or_else(|| missing("Division"))?
            .to_string();
        let exam_type = non_blank(draft.exam_type.as_deref())
            .ok_or_else(|| missing("Exam type"))?
            .parse::<ExamType>()
            .map_err(PortalError::validation)?;
        let exam_date = parse_date(non_blank(draft.exam_date.as_deref()).ok_or_else(|| missing("Exam date"))?)?;
        let max_marks = draft.max_marks.ok_or_else(|| missing("Max marks"))?;

        let marks_data = draft
            .marks_data
            .into_iter()
            .map(|entry| StudentMark {
                student_id: entry.student_id.unwrap_or_default().trim().to_string(),
                obtained_marks: entry.obtained_marks.unwrap_or_default(),
                remarks: entry.remarks.filter(|r| !r.trim().is_empty()),
            })
            .collect();

        Ok(MarksSubmission {
            division,
            exam_type,
            max_marks,
            exam_date,
            remarks: draft.remarks.filter(|r| !r.trim().is_empty()),
            marks_data,
        })
    }
}
