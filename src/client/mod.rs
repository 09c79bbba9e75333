//! 后端接口契约
//!
//! `PortalApi` 是与后端 REST 服务之间唯一的接缝，服务层只依赖该 trait，
//! 测试中可以替换为内存实现。

use std::sync::Arc;

use crate::config::AppConfig;
use crate::errors::Result;
use crate::models::{
    attendance::{
        entities::AttendanceRecord,
        requests::{AttendanceListQuery, CreateAttendanceRequest},
    },
    marks::{
        entities::Mark,
        requests::{MarkListQuery, MarksSubmission, UpdateMarkRequest},
    },
    reference::entities::{ReferenceEntity, ReferenceKind},
};

pub mod auth;
pub mod http_client;
pub mod session;

pub use session::Session;

#[async_trait::async_trait]
pub trait PortalApi: Send + Sync {
    /// 成绩
    // 列出某科目的成绩，可按分班与考试类型过滤
    async fn list_marks(&self, subject_id: &str, query: &MarkListQuery) -> Result<Vec<Mark>>;
    // 批量提交成绩
    async fn create_marks(
        &self,
        subject_id: &str,
        submission: &MarksSubmission,
    ) -> Result<Vec<Mark>>;
    // 更新单条成绩
    async fn update_mark(&self, mark_id: &str, update: &UpdateMarkRequest) -> Result<Mark>;
    // 删除单条成绩
    async fn delete_mark(&self, mark_id: &str) -> Result<()>;

    /// 出勤
    // 列出某科目的出勤记录
    async fn list_attendance(
        &self,
        subject_id: &str,
        query: &AttendanceListQuery,
    ) -> Result<Vec<AttendanceRecord>>;
    // 提交一次课的出勤
    async fn create_attendance(
        &self,
        request: &CreateAttendanceRequest,
    ) -> Result<AttendanceRecord>;

    /// 参考数据（学期、科目、学生、教师）
    async fn list_references(
        &self,
        kind: ReferenceKind,
        filters: &[(String, String)],
    ) -> Result<Vec<ReferenceEntity>>;
    async fn get_reference(&self, kind: ReferenceKind, id: &str)
    -> Result<Option<ReferenceEntity>>;
    async fn create_reference(
        &self,
        kind: ReferenceKind,
        body: &serde_json::Value,
    ) -> Result<ReferenceEntity>;
    async fn update_reference(
        &self,
        kind: ReferenceKind,
        id: &str,
        body: &serde_json::Value,
    ) -> Result<ReferenceEntity>;
    async fn delete_reference(&self, kind: ReferenceKind, id: &str) -> Result<()>;
}

pub fn create_client(config: &AppConfig, session: Session) -> Result<Arc<dyn PortalApi>> {
    let client = http_client::HttpPortalApi::new(config, session)?;
    Ok(Arc::new(client))
}
