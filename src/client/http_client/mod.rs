//! 基于 reqwest 的后端客户端
//!
//! 所有请求共享一个连接池，带总超时与连接超时；
//! 非 2xx 响应统一归一化为 `ApiFailure`。

mod attendance;
mod marks;
mod reference;

use reqwest::{Method, StatusCode};
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::time::Instant;
use tracing::{Instrument, debug, debug_span, warn};
use uuid::Uuid;

use crate::client::{PortalApi, Session};
use crate::config::AppConfig;
use crate::errors::{ApiFailure, PortalError, Result};
use crate::models::{
    ApiResponse,
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
use crate::utils::validate_identifier;

pub const REQUEST_ID_HEADER: &str = "X-Request-Id";

/// HTTP 客户端实现
#[derive(Clone)]
pub struct HttpPortalApi {
    pub(crate) http: reqwest::Client,
    base_url: String,
    session: Session,
}

impl HttpPortalApi {
    /// 创建新的客户端实例
    pub fn new(config: &AppConfig, session: Session) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(config.request_timeout())
            .connect_timeout(config.connect_timeout())
            .build()
            .map_err(|e| PortalError::configuration(format!("HTTP 客户端初始化失败: {e}")))?;

        debug!(
            "HttpPortalApi initialized for {} (timeout {} ms)",
            config.api.base_url, config.api.timeouts.request
        );

        Ok(Self {
            http,
            base_url: config.api.base_url.clone(),
            session,
        })
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// 发送请求并返回成功响应的原始文本
    async fn send(
        &self,
        method: Method,
        path: &str,
        query: &[(&str, String)],
        body: Option<&Value>,
    ) -> Result<String> {
        let url = self.endpoint(path);
        let request_id = Uuid::new_v4();
        let span = debug_span!("api_request", %request_id, %method, %url);

        async move {
            let mut builder = self
                .http
                .request(method, &url)
                .header(REQUEST_ID_HEADER, request_id.to_string());
            if !query.is_empty() {
                builder = builder.query(query);
            }
            if let Some(token) = self.session.bearer_token()? {
                builder = builder.bearer_auth(token);
            }
            if let Some(body) = body {
                builder = builder.json(body);
            }

            let started = Instant::now();
            let response = builder.send().await.map_err(|e| {
                warn!("Request failed before a response was received: {e}");
                PortalError::from(e)
            })?;
            let status = response.status();
            let text = response.text().await?;

            debug!(
                status = status.as_u16(),
                elapsed_ms = started.elapsed().as_millis() as u64,
                "Backend responded"
            );

            if !status.is_success() {
                let err = normalize_error(status, &text);
                warn!("Backend returned an error: {}", err);
                return Err(err);
            }
            Ok(text)
        }
        .instrument(span)
        .await
    }

    /// 发送请求并取出信封中的数据
    async fn fetch<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        query: &[(&str, String)],
        body: Option<&Value>,
    ) -> Result<T> {
        let text = self.send(method, path, query, body).await?;
        let envelope: ApiResponse<T> = serde_json::from_str(&text)?;
        envelope.into_data()
    }

    pub(crate) async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T> {
        self.fetch(Method::GET, path, query, None).await
    }

    pub(crate) async fn post_json<T: DeserializeOwned>(&self, path: &str, body: &Value) -> Result<T> {
        self.fetch(Method::POST, path, &[], Some(body)).await
    }

    pub(crate) async fn put_json<T: DeserializeOwned>(&self, path: &str, body: &Value) -> Result<T> {
        self.fetch(Method::PUT, path, &[], Some(body)).await
    }

    pub(crate) async fn delete(&self, path: &str) -> Result<()> {
        self.send(Method::DELETE, path, &[], None).await?;
        Ok(())
    }
}

/// 校验路径中的 ID
pub(crate) fn checked_id(id: &str) -> Result<&str> {
    validate_identifier(id).map_err(|e| PortalError::invalid_input(format!("{e}: '{id}'")))?;
    Ok(id)
}

/// 将非 2xx 响应归一化为 `{message, status, data}`
pub fn normalize_error(status: StatusCode, body: &str) -> PortalError {
    let parsed = serde_json::from_str::<Value>(body).ok();

    let message = parsed
        .as_ref()
        .and_then(|v| {
            v.get("message")
                .or_else(|| v.get("error"))
                .and_then(Value::as_str)
        })
        .map(str::to_string)
        .unwrap_or_else(|| {
            status
                .canonical_reason()
                .map(str::to_string)
                .unwrap_or_else(|| format!("Request failed with status {}", status.as_u16()))
        });

    let failure = ApiFailure::new(message, Some(status.as_u16()));
    match parsed {
        Some(data) => PortalError::api(failure.with_data(data)),
        None => PortalError::api(failure),
    }
}

#[async_trait::async_trait]
impl PortalApi for HttpPortalApi {
    async fn list_marks(&self, subject_id: &str, query: &MarkListQuery) -> Result<Vec<Mark>> {
        self.list_marks_impl(subject_id, query).await
    }

    async fn create_marks(
        &self,
        subject_id: &str,
        submission: &MarksSubmission,
    ) -> Result<Vec<Mark>> {
        self.create_marks_impl(subject_id, submission).await
    }

    async fn update_mark(&self, mark_id: &str, update: &UpdateMarkRequest) -> Result<Mark> {
        self.update_mark_impl(mark_id, update).await
    }

    async fn delete_mark(&self, mark_id: &str) -> Result<()> {
        self.delete_mark_impl(mark_id).await
    }

    async fn list_attendance(
        &self,
        subject_id: &str,
        query: &AttendanceListQuery,
    ) -> Result<Vec<AttendanceRecord>> {
        self.list_attendance_impl(subject_id, query).await
    }

    async fn create_attendance(
        &self,
        request: &CreateAttendanceRequest,
    ) -> Result<AttendanceRecord> {
        self.create_attendance_impl(request).await
    }

    async fn list_references(
        &self,
        kind: ReferenceKind,
        filters: &[(String, String)],
    ) -> Result<Vec<ReferenceEntity>> {
        self.list_references_impl(kind, filters).await
    }

    async fn get_reference(
        &self,
        kind: ReferenceKind,
        id: &str,
    ) -> Result<Option<ReferenceEntity>> {
        self.get_reference_impl(kind, id).await
    }

    async fn create_reference(
        &self,
        kind: ReferenceKind,
        body: &Value,
    ) -> Result<ReferenceEntity> {
        self.create_reference_impl(kind, body).await
    }

    async fn update_reference(
        &self,
        kind: ReferenceKind,
        id: &str,
        body: &Value,
    ) -> Result<ReferenceEntity> {
        self.update_reference_impl(kind, id, body).await
    }

    async fn delete_reference(&self, kind: ReferenceKind, id: &str) -> Result<()> {
        self.delete_reference_impl(kind, id).await
    }
}
