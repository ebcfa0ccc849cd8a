use crate::application::client::Client;
use crate::application::services::EntityType;
use crate::constants::EXTERNAL_ID_SEGMENT;
use crate::error::{AppError, AppResult};
use crate::model::http::{ApiRequest, encode_path_segment};
use serde_json::{Map, Value, json};
use std::fmt::Display;
use std::sync::Arc;
use tracing::{debug, info};

/// Builds `externalid/{entity_type}/{segments...}`, percent-encoding every segment
///
/// The entity type is checked against [`EntityType::ALL`] first.
fn external_id_path(entity_type: &str, segments: &[&str]) -> AppResult<String> {
    let entity_type: EntityType = entity_type.parse()?;
    let mut path = format!("{EXTERNAL_ID_SEGMENT}/{entity_type}");
    for segment in segments {
        path.push('/');
        path.push_str(&encode_path_segment(segment)?);
    }
    Ok(path)
}

/// Reads `data.value` as text; numbers and other scalars are stringified, `null` is unset
fn read_value(data: &Value) -> Option<String> {
    match data.get("value") {
        Some(Value::String(value)) => Some(value.clone()),
        Some(Value::Null) | None => None,
        Some(other) => Some(other.to_string()),
    }
}

/// Service for the external identifier sub-API
///
/// Associates ServiceTrade entities with identifiers from other systems, and resolves
/// an external identifier back to its entity. The entity type is checked against
/// [`EntityType::ALL`] and every other segment is percent-encoded before any request
/// is made, so external values may contain `/`, `?`, `#` or spaces.
pub struct ExternalIdService {
    client: Arc<Client>,
}

impl ExternalIdService {
    /// Creates a new instance of the external id service
    pub fn new(client: Arc<Client>) -> Self {
        Self { client }
    }

    /// Gets all external ids of an entity, keyed by external system
    ///
    /// `GET /externalid/{entity_type}/{entity_id}`
    pub async fn get_all(
        &self,
        entity_type: &str,
        entity_id: impl Display,
    ) -> AppResult<Map<String, Value>> {
        let entity_id = entity_id.to_string();
        let path = external_id_path(entity_type, &[entity_id.as_str()])?;

        let data = self.client.send(ApiRequest::get(path)).await?.into_data()?;
        match data.get("values") {
            Some(Value::Object(values)) => Ok(values.clone()),
            Some(Value::Null) | None => Ok(Map::new()),
            Some(other) => Err(AppError::Protocol(format!(
                "`data.values` is not an object: {other}"
            ))),
        }
    }

    /// Gets the external id of an entity in one external system
    ///
    /// `None` when the id is unset; a non-string value is returned in its JSON text form,
    /// the same way [`ExternalIdService::set`] reports it.
    ///
    /// `GET /externalid/{entity_type}/{entity_id}/{external_system}`
    pub async fn get(
        &self,
        entity_type: &str,
        entity_id: impl Display,
        external_system: &str,
    ) -> AppResult<Option<String>> {
        let entity_id = entity_id.to_string();
        let path = external_id_path(entity_type, &[entity_id.as_str(), external_system])?;

        let data = self.client.send(ApiRequest::get(path)).await?.into_data()?;
        Ok(read_value(&data))
    }

    /// Finds the entity carrying an external id, as untyped data
    ///
    /// `GET /externalid/{entity_type}/{external_system}/{value}`
    pub async fn find_entity(
        &self,
        entity_type: &str,
        external_system: &str,
        value: &str,
    ) -> AppResult<Value> {
        let path = external_id_path(entity_type, &[external_system, value])?;

        debug!("Looking up {} by {} id {}", entity_type, external_system, value);
        self.client.send(ApiRequest::get(path)).await?.into_data()
    }

    /// Sets (creates or replaces) the external id of an entity
    ///
    /// `POST /externalid/{entity_type}/{entity_id}/{external_system}` with `{"value": ...}`
    pub async fn set(
        &self,
        entity_type: &str,
        entity_id: impl Display,
        external_system: &str,
        value: &str,
    ) -> AppResult<String> {
        let entity_id = entity_id.to_string();
        let path = external_id_path(entity_type, &[entity_id.as_str(), external_system])?;

        info!("Setting {} id for {} {}", external_system, entity_type, entity_id);
        self.write_value(ApiRequest::post(path, json!({ "value": value })))
            .await
    }

    /// Updates the external id of an entity
    ///
    /// `PUT /externalid/{entity_type}/{entity_id}/{external_system}` with `{"value": ...}`
    pub async fn update(
        &self,
        entity_type: &str,
        entity_id: impl Display,
        external_system: &str,
        value: &str,
    ) -> AppResult<String> {
        let entity_id = entity_id.to_string();
        let path = external_id_path(entity_type, &[entity_id.as_str(), external_system])?;

        self.write_value(ApiRequest::put(path, json!({ "value": value })))
            .await
    }

    /// Removes the external id of an entity by setting it to an empty value
    pub async fn remove(
        &self,
        entity_type: &str,
        entity_id: impl Display,
        external_system: &str,
    ) -> AppResult<String> {
        self.update(entity_type, entity_id, external_system, "")
            .await
    }

    async fn write_value(&self, request: ApiRequest) -> AppResult<String> {
        let data = self.client.send(request).await?.into_data()?;
        Ok(read_value(&data).unwrap_or_default())
    }
}
