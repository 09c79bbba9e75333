//! 成绩接口

use super::{HttpPortalApi, checked_id};
use crate::errors::Result;
use crate::models::marks::{
    entities::Mark,
    requests::{MarkListQuery, MarksSubmission, UpdateMarkRequest},
};

impl HttpPortalApi {
    /// 列出科目成绩
    pub async fn list_marks_impl(
        &self,
        subject_id: &str,
        query: &MarkListQuery,
    ) -> Result<Vec<Mark>> {
        let path = format!("subjects/{}/marks", checked_id(subject_id)?);
        self.get_json(&path, &query.to_pairs()).await
    }

    /// 提交成绩
    pub async fn create_marks_impl(
        &self,
        subject_id: &str,
        submission: &MarksSubmission,
    ) -> Result<Vec<Mark>> {
        let path = format!("subjects/{}/marks", checked_id(subject_id)?);
        self.post_json(&path, &serde_json::to_value(submission)?)
            .await
    }

    /// 更新成绩
    pub async fn update_mark_impl(&self, mark_id: &str, update: &UpdateMarkRequest) -> Result<Mark> {
        let path = format!("marks/{}", checked_id(mark_id)?);
        self.put_json(&path, &serde_json::to_value(update)?).await
    }

    /// 删除成绩
    pub async fn delete_mark_impl(&self, mark_id: &str) -> Result<()> {
        let path = format!("marks/{}", checked_id(mark_id)?);
        self.delete(&path).await
    }
}
