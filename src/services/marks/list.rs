use super::MarkService;
use crate::errors::Result;
use crate::models::marks::{
    entities::Mark,
    requests::MarkListQuery,
    responses::MarkDisplay,
};
use crate::services::marks::display::format_marks_for_display;
use crate::utils::RequestSequencer;

/// 成绩列表展示位，切换科目时沿用同一展示位
pub const MARKS_SLOT: &str = "marks";

pub async fn list_marks(
    service: &MarkService,
    subject_id: &str,
    query: &MarkListQuery,
) -> Result<Vec<Mark>> {
    service.api().list_marks(subject_id, query).await
}

pub async fn list_marks_latest(
    service: &MarkService,
    sequencer: &RequestSequencer,
    subject_id: &str,
    query: &MarkListQuery,
) -> Result<Option<Vec<Mark>>> {
    let ticket = sequencer.begin(MARKS_SLOT);
    let result = service.api().list_marks(subject_id, query).await;

    // 过期请求的错误同样丢弃，避免覆盖新请求的状态
    match sequencer.settle(&ticket, result) {
        Some(result) => result.map(Some),
        None => Ok(None),
    }
}

pub async fn list_marks_for_display(
    service: &MarkService,
    subject_id: &str,
    query: &MarkListQuery,
) -> Result<Vec<MarkDisplay>> {
    let marks = service.api().list_marks(subject_id, query).await?;
    Ok(format_marks_for_display(&marks))
}
