pub mod list;
pub mod mutate;

use serde_json::Value;
use std::sync::Arc;

use crate::cache::ObjectCache;
use crate::client::PortalApi;
use crate::errors::Result;
use crate::models::reference::entities::{ReferenceEntity, ReferenceKind};

/// 参考数据（学期、科目、学生、教师）业务，读取走展示缓存
#[derive(Clone)]
pub struct ReferenceService {
    api: Arc<dyn PortalApi>,
    cache: Arc<dyn ObjectCache>,
}

impl ReferenceService {
    pub fn new(api: Arc<dyn PortalApi>, cache: Arc<dyn ObjectCache>) -> Self {
        Self { api, cache }
    }

    pub(crate) fn api(&self) -> &Arc<dyn PortalApi> {
        &self.api
    }

    pub(crate) fn cache(&self) -> &dyn ObjectCache {
        self.cache.as_ref()
    }

    /// 列出参考数据
    pub async fn list(
        &self,
        kind: ReferenceKind,
        filters: &[(String, String)],
    ) -> Result<Vec<ReferenceEntity>> {
        list::list(self, kind, filters).await
    }

    /// 获取单个实体，不存在时返回 `None`
    pub async fn get(&self, kind: ReferenceKind, id: &str) -> Result<Option<ReferenceEntity>> {
        list::get(self, kind, id).await
    }

    /// 丢弃该类型的缓存后重新拉取
    pub async fn refresh(
        &self,
        kind: ReferenceKind,
        filters: &[(String, String)],
    ) -> Result<Vec<ReferenceEntity>> {
        mutate::invalidate(self, kind).await;
        list::list(self, kind, filters).await
    }

    pub async fn create(&self, kind: ReferenceKind, body: &Value) -> Result<ReferenceEntity> {
        mutate::create(self, kind, body).await
    }

    pub async fn update(
        &self,
        kind: ReferenceKind,
        id: &str,
        body: &Value,
    ) -> Result<ReferenceEntity> {
        mutate::update(self, kind, id, body).await
    }

    pub async fn delete(&self, kind: ReferenceKind, id: &str) -> Result<()> {
        mutate::delete(self, kind, id).await
    }
}

/// 同一类型下所有缓存键的公共前缀
pub(crate) fn cache_prefix(kind: ReferenceKind) -> String {
    format!("reference:{}:", kind.collection())
}

/// 过滤条件排序后拼入缓存键，顺序不同的同一查询命中同一条目
pub(crate) fn list_cache_key(kind: ReferenceKind, filters: &[(String, String)]) -> String {
    let mut pairs: Vec<String> = filters.iter().map(|(k, v)| format!("{k}={v}")).collect();
    pairs.sort();
    format!("{}list?{}", cache_prefix(kind), pairs.join("&"))
}

pub(crate) fn entity_cache_key(kind: ReferenceKind, id: &str) -> String {
    format!("{}id:{id}", cache_prefix(kind))
}
