use serde_json::Value;
use tracing::{debug, info};

use super::{ReferenceService, cache_prefix};
use crate::errors::Result;
use crate::models::reference::entities::{ReferenceEntity, ReferenceKind};

/// 清除该类型下的所有缓存
pub async fn invalidate(service: &ReferenceService, kind: ReferenceKind) {
    let prefix = cache_prefix(kind);
    debug!("Invalidating cached entries under {}", prefix);
    service.cache().remove_prefix(&prefix).await;
}

pub async fn create(
    service: &ReferenceService,
    kind: ReferenceKind,
    body: &Value,
) -> Result<ReferenceEntity> {
    let entity = service.api().create_reference(kind, body).await?;
    invalidate(service, kind).await;
    info!("Created {} {}", kind, entity.id);
    Ok(entity)
}

pub async fn update(
    service: &ReferenceService,
    kind: ReferenceKind,
    id: &str,
    body: &Value,
) -> Result<ReferenceEntity> {
    let entity = service.api().update_reference(kind, id, body).await?;
    invalidate(service, kind).await;
    info!("Updated {} {}", kind, id);
    Ok(entity)
}

pub async fn delete(service: &ReferenceService, kind: ReferenceKind, id: &str) -> Result<()> {
    service.api().delete_reference(kind, id).await?;
    invalidate(service, kind).await;
    info!("Deleted {} {}", kind, id);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::MokaCacheWrapper;
    use crate::config::CacheConfig;
    use crate::services::test_support::{MockApi, reference};
    use serde_json::json;
    use std::sync::Arc;

    #[tokio::test]
    async fn test_mutations_invalidate_listing() {
        let api = Arc::new(MockApi::with_references(vec![(
            ReferenceKind::Student,
            reference("st1", "Asha"),
        )]));
        let cache = Arc::new(MokaCacheWrapper::new(&CacheConfig::default()));
        let service = ReferenceService::new(api.clone(), cache);

        assert_eq!(service.list(ReferenceKind::Student, &[]).await.unwrap().len(), 1);

        let created = service
            .create(ReferenceKind::Student, &json!({"name": "Ravi"}))
            .await
            .unwrap();
        let students = service.list(ReferenceKind::Student, &[]).await.unwrap();
        assert_eq!(students.len(), 2);
        assert_eq!(api.list_reference_calls(), 2);

        let updated = service
            .update(ReferenceKind::Student, &created.id, &json!({"name": "Ravi K"}))
            .await
            .unwrap();
        assert_eq!(updated.display_name(), "Ravi K");
        assert_eq!(
            service.get(ReferenceKind::Student, &created.id).await.unwrap(),
            Some(updated)
        );

        service.delete(ReferenceKind::Student, "st1").await.unwrap();
        let students = service.list(ReferenceKind::Student, &[]).await.unwrap();
        assert_eq!(students.len(), 1);
        assert_eq!(service.get(ReferenceKind::Student, "st1").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_refresh_bypasses_cache() {
        let api = Arc::new(MockApi::with_references(vec![]));
        let cache = Arc::new(MokaCacheWrapper::new(&CacheConfig::default()));
        let service = ReferenceService::new(api.clone(), cache);

        service.list(ReferenceKind::Semester, &[]).await.unwrap();
        service.refresh(ReferenceKind::Semester, &[]).await.unwrap();
        assert_eq!(api.list_reference_calls(), 2);
    }
}
