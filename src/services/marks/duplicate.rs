//! 重复考试类型检查
//!
//! 该检查只用于界面提示，任何失败都记录日志并视为“未发现重复”，
//! 冲突的最终判定由后端负责。

use tracing::{debug, warn};

use super::MarkService;
use crate::errors::{PortalError, Result};
use crate::models::marks::{entities::ExamType, requests::MarkListQuery};

pub async fn check_duplicate_exam_type(
    service: &MarkService,
    subject_id: &str,
    division: &str,
    exam_type: ExamType,
    exclude_mark_id: Option<&str>,
) -> bool {
    match find_other_marks(service, subject_id, division, exam_type, exclude_mark_id).await {
        Ok(count) => {
            debug!(
                "Duplicate check for {}/{}/{}: {} existing mark(s)",
                subject_id, division, exam_type, count
            );
            count > 0
        }
        Err(e) => {
            warn!(
                "Duplicate exam type check failed for subject {} ({} / {}): {}",
                subject_id, division, exam_type, e
            );
            false
        }
    }
}

async fn find_other_marks(
    service: &MarkService,
    subject_id: &str,
    division: &str,
    exam_type: ExamType,
    exclude_mark_id: Option<&str>,
) -> Result<usize> {
    if subject_id.trim().is_empty() || division.trim().is_empty() {
        return Err(PortalError::invalid_input(
            "Subject and division are required for the duplicate check",
        ));
    }

    let query = MarkListQuery::new(division.trim(), exam_type);
    let marks = service.api().list_marks(subject_id, &query).await?;

    // 后端可能忽略过滤参数，这里再按分班与考试类型筛一次
    Ok(marks
        .iter()
        .filter(|m| m.division == division.trim() && m.exam_type == exam_type)
        .filter(|m| exclude_mark_id != Some(m.id.as_str()))
        .count())
}
