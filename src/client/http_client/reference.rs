//! 参考数据接口

use serde_json::Value;

use super::{HttpPortalApi, checked_id};
use crate::errors::{PortalError, Result};
use crate::models::reference::entities::{ReferenceEntity, ReferenceKind};

impl HttpPortalApi {
    pub async fn list_references_impl(
        &self,
        kind: ReferenceKind,
        filters: &[(String, String)],
    ) -> Result<Vec<ReferenceEntity>> {
        let query: Vec<(&str, String)> = filters
            .iter()
            .map(|(key, value)| (key.as_str(), value.clone()))
            .collect();
        self.get_json(kind.collection(), &query).await
    }

    /// 获取单个实体，不存在时返回 `None`
    pub async fn get_reference_impl(
        &self,
        kind: ReferenceKind,
        id: &str,
    ) -> Result<Option<ReferenceEntity>> {
        let path = format!("{}/{}", kind.collection(), checked_id(id)?);
        match self.get_json(&path, &[]).await {
            Ok(entity) => Ok(Some(entity)),
            Err(e) if e.status() == Some(404) => Ok(None),
            Err(e) => Err(e),
        }
    }

    pub async fn create_reference_impl(
        &self,
        kind: ReferenceKind,
        body: &Value,
    ) -> Result<ReferenceEntity> {
        ensure_object(kind, body)?;
        self.post_json(kind.collection(), body).await
    }

    pub async fn update_reference_impl(
        &self,
        kind: ReferenceKind,
        id: &str,
        body: &Value,
    ) -> Result<ReferenceEntity> {
        ensure_object(kind, body)?;
        let path = format!("{}/{}", kind.collection(), checked_id(id)?);
        self.put_json(&path, body).await
    }

    pub async fn delete_reference_impl(&self, kind: ReferenceKind, id: &str) -> Result<()> {
        let path = format!("{}/{}", kind.collection(), checked_id(id)?);
        self.delete(&path).await
    }
}

fn ensure_object(kind: ReferenceKind, body: &Value) -> Result<()> {
    if body.is_object() {
        Ok(())
    } else {
        Err(PortalError::invalid_input(format!(
            "{kind} payload must be a JSON object"
        )))
    }
}
