use tracing::info;

use super::MarkService;
use crate::errors::{PortalError, Result};
use crate::models::marks::{
    entities::Mark,
    requests::{MarksDraft, MarksSubmission, UpdateMarkRequest},
};

/// 校验失败时不会发出任何网络请求
pub async fn submit_marks(
    service: &MarkService,
    subject_id: &str,
    draft: MarksDraft,
) -> Result<Vec<Mark>> {
    let submission = MarksSubmission::try_from(draft)?;

    let created = service.api().create_marks(subject_id, &submission).await?;
    info!(
        "Submitted {} mark(s) for subject {} ({} / {})",
        created.len(),
        subject_id,
        submission.division,
        submission.exam_type
    );
    Ok(created)
}

pub async fn update_mark(
    service: &MarkService,
    mark_id: &str,
    update: UpdateMarkRequest,
) -> Result<Mark> {
    validate_update(&update)?;

    let mark = service.api().update_mark(mark_id, &update).await?;
    info!("Updated mark {}", mark_id);
    Ok(mark)
}

pub async fn delete_mark(service: &MarkService, mark_id: &str) -> Result<()> {
    service.api().delete_mark(mark_id).await?;
    info!("Deleted mark {}", mark_id);
    Ok(())
}

/// 只有同时给出得分与满分时才能本地检查上限
fn validate_update(update: &UpdateMarkRequest) -> Result<()> {
    let mut errors = Vec::new();

    if let Some(max) = update.max_marks
        && !(max.is_finite() && max > 0.0)
    {
        errors.push("Max marks must be a positive number".to_string());
    }
    if let Some(obtained) = update.obtained_marks {
        if !obtained.is_finite() {
            errors.push("Obtained marks must be a number".to_string());
        } else if obtained < 0.0 {
            errors.push("Obtained marks cannot be negative".to_string());
        } else if let Some(max) = update.max_marks
            && max.is_finite()
            && max > 0.0
            && obtained > max
        {
            errors.push(format!(
                "Obtained marks ({obtained}) cannot exceed maximum marks ({max})"
            ));
        }
    }
    if update == &UpdateMarkRequest::default() {
        errors.push("Nothing to update".to_string());
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(PortalError::validation(errors.join("; ")))
    }
}
