pub mod overview;

use std::sync::Arc;

use crate::client::PortalApi;
use crate::errors::Result;
use crate::models::dashboard::responses::SubjectOverview;

pub use overview::summarize_exams;

/// 教师首页概览
#[derive(Clone)]
pub struct DashboardService {
    api: Arc<dyn PortalApi>,
}

impl DashboardService {
    pub fn new(api: Arc<dyn PortalApi>) -> Self {
        Self { api }
    }

    pub(crate) fn api(&self) -> &Arc<dyn PortalApi> {
        &self.api
    }

    /// 某科目某分班的出勤与成绩概览
    pub async fn subject_overview(
        &self,
        subject_id: &str,
        division: &str,
    ) -> Result<SubjectOverview> {
        overview::subject_overview(self, subject_id, division).await
    }
}
