pub mod list;
pub mod stats;
pub mod submit;
pub mod validate;

use chrono::NaiveDate;
use std::sync::Arc;

use crate::client::PortalApi;
use crate::errors::Result;
use crate::models::attendance::{
    entities::AttendanceRecord,
    requests::{AttendanceDraft, AttendanceListQuery},
    responses::{AttendanceStats, StudentAttendance},
};
use crate::utils::RequestSequencer;

pub use stats::{calculate_attendance_stats, calculate_student_attendance};
pub use validate::validate_attendance;

/// 出勤业务
#[derive(Clone)]
pub struct AttendanceService {
    api: Arc<dyn PortalApi>,
}

impl AttendanceService {
    pub fn new(api: Arc<dyn PortalApi>) -> Self {
        Self { api }
    }

    pub(crate) fn api(&self) -> &Arc<dyn PortalApi> {
        &self.api
    }

    /// 列出出勤记录
    pub async fn list_attendance(
        &self,
        subject_id: &str,
        query: &AttendanceListQuery,
    ) -> Result<Vec<AttendanceRecord>> {
        list::list_attendance(self, subject_id, query).await
    }

    /// 列出出勤记录，过期请求返回 `None`
    pub async fn list_attendance_latest(
        &self,
        sequencer: &RequestSequencer,
        subject_id: &str,
        query: &AttendanceListQuery,
    ) -> Result<Option<Vec<AttendanceRecord>>> {
        list::list_attendance_latest(self, sequencer, subject_id, query).await
    }

    /// 获取并汇总出勤
    pub async fn attendance_stats(
        &self,
        subject_id: &str,
        query: &AttendanceListQuery,
    ) -> Result<AttendanceStats> {
        list::attendance_stats(self, subject_id, query).await
    }

    /// 获取单个学生的出勤情况
    pub async fn student_attendance(
        &self,
        subject_id: &str,
        query: &AttendanceListQuery,
        student_id: &str,
    ) -> Result<StudentAttendance> {
        list::student_attendance(self, subject_id, query, student_id).await
    }

    /// 校验并提交出勤
    pub async fn submit_attendance(&self, draft: AttendanceDraft) -> Result<AttendanceRecord> {
        submit::submit_attendance(self, draft).await
    }

    /// 当天是否已有出勤记录（仅用于提示）
    pub async fn has_record_for_date(
        &self,
        subject_id: &str,
        division: &str,
        date: NaiveDate,
    ) -> bool {
        submit::has_record_for_date(self, subject_id, division, date).await
    }
}
