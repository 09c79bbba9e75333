use tracing::debug;

use super::{ReferenceService, entity_cache_key, list_cache_key};
use crate::cache::{get_json, insert_json};
use crate::errors::Result;
use crate::models::reference::entities::{ReferenceEntity, ReferenceKind};

pub async fn list(
    service: &ReferenceService,
    kind: ReferenceKind,
    filters: &[(String, String)],
) -> Result<Vec<ReferenceEntity>> {
    let key = list_cache_key(kind, filters);
    if let Some(entities) = get_json::<Vec<ReferenceEntity>>(service.cache(), &key).await {
        debug!("Cache hit for {}", key);
        return Ok(entities);
    }

    let entities = service.api().list_references(kind, filters).await?;
    insert_json(service.cache(), key, &entities).await;
    Ok(entities)
}

pub async fn get(
    service: &ReferenceService,
    kind: ReferenceKind,
    id: &str,
) -> Result<Option<ReferenceEntity>> {
    let key = entity_cache_key(kind, id);
    if let Some(entity) = get_json::<ReferenceEntity>(service.cache(), &key).await {
        return Ok(Some(entity));
    }

    // 不存在的结果不缓存
    let entity = service.api().get_reference(kind, id).await?;
    if let Some(entity) = &entity {
        insert_json(service.cache(), key, entity).await;
    }
    Ok(entity)
}
