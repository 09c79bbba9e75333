//! 出勤接口

use super::{HttpPortalApi, checked_id};
use crate::errors::Result;
use crate::models::attendance::{
    entities::AttendanceRecord,
    requests::{AttendanceListQuery, CreateAttendanceRequest},
};

impl HttpPortalApi {
    /// 列出出勤记录
    pub async fn list_attendance_impl(
        &self,
        subject_id: &str,
        query: &AttendanceListQuery,
    ) -> Result<Vec<AttendanceRecord>> {
        let path = format!("subjects/{}/attendance", checked_id(subject_id)?);
        self.get_json(&path, &query.to_pairs()).await
    }

    /// 提交出勤
    pub async fn create_attendance_impl(
        &self,
        request: &CreateAttendanceRequest,
    ) -> Result<AttendanceRecord> {
        let path = format!("subjects/{}/attendance", checked_id(&request.subject_id)?);
        self.post_json(&path, &serde_json::to_value(request)?)
            .await
    }
}
