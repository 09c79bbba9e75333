pub mod display;
pub mod duplicate;
pub mod grade;
pub mod list;
pub mod submit;
pub mod validate;

use std::sync::Arc;

use crate::client::PortalApi;
use crate::errors::Result;
use crate::models::marks::{
    entities::{ExamType, Mark},
    requests::{MarkListQuery, MarksDraft, UpdateMarkRequest},
    responses::MarkDisplay,
};
use crate::utils::RequestSequencer;

pub use display::format_marks_for_display;
pub use grade::{calculate_grade, calculate_percentage};
pub use validate::validate_marks_data;

/// 成绩业务
#[derive(Clone)]
pub struct MarkService {
    api: Arc<dyn PortalApi>,
}

impl MarkService {
    pub fn new(api: Arc<dyn PortalApi>) -> Self {
        Self { api }
    }

    pub(crate) fn api(&self) -> &Arc<dyn PortalApi> {
        &self.api
    }

    /// 列出科目成绩
    pub async fn list_marks(&self, subject_id: &str, query: &MarkListQuery) -> Result<Vec<Mark>> {
        list::list_marks(self, subject_id, query).await
    }

    /// 列出成绩，仅当该请求仍是展示位上最新的请求时返回结果
    pub async fn list_marks_latest(
        &self,
        sequencer: &RequestSequencer,
        subject_id: &str,
        query: &MarkListQuery,
    ) -> Result<Option<Vec<Mark>>> {
        list::list_marks_latest(self, sequencer, subject_id, query).await
    }

    /// 列出带百分比、等级与日期格式化的成绩
    pub async fn list_marks_for_display(
        &self,
        subject_id: &str,
        query: &MarkListQuery,
    ) -> Result<Vec<MarkDisplay>> {
        list::list_marks_for_display(self, subject_id, query).await
    }

    /// 校验并提交成绩
    pub async fn submit_marks(&self, subject_id: &str, draft: MarksDraft) -> Result<Vec<Mark>> {
        submit::submit_marks(self, subject_id, draft).await
    }

    /// 更新单条成绩
    pub async fn update_mark(&self, mark_id: &str, update: UpdateMarkRequest) -> Result<Mark> {
        submit::update_mark(self, mark_id, update).await
    }

    /// 删除单条成绩
    pub async fn delete_mark(&self, mark_id: &str) -> Result<()> {
        submit::delete_mark(self, mark_id).await
    }

    /// 检查是否已存在同分班同考试类型的成绩（仅用于提示）
    pub async fn check_duplicate_exam_type(
        &self,
        subject_id: &str,
        division: &str,
        exam_type: ExamType,
        exclude_mark_id: Option<&str>,
    ) -> bool {
        duplicate::check_duplicate_exam_type(self, subject_id, division, exam_type, exclude_mark_id)
            .await
    }
}
