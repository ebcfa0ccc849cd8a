/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/

//! Generic CRUD over any [`ResourceKind`]
//!
//! Each capability is written once as a free function over the transport, the
//! hydrator and the list parser. [`ResourceService`] exposes them through the
//! operation traits, and only for kinds carrying the matching capability marker:
//! `ResourceService<ServiceLine>` has `find` and `list`, but no `create`.

use crate::application::client::Client;
use crate::application::services::{
    Creatable, CreateResource, DeleteResource, Deletable, Filters, FindResource, Findable,
    ListResources, Listable, UpdateResource, Updatable,
};
use crate::error::{AppError, AppResult};
use crate::model::http::ApiRequest;
use crate::model::hydrate::hydrate;
use crate::model::list::{ListResponse, parse_list};
use crate::model::resource::{Resource, ResourceKind};
use async_trait::async_trait;
use serde_json::Value;
use std::marker::PhantomData;
use std::sync::Arc;
use tracing::debug;

/// `GET /segment/{id}` → hydrated resource
pub async fn find<K: Findable>(client: &Client, id: i64) -> AppResult<Resource<K>> {
    let payload = client
        .send(ApiRequest::get(format!("{}/{}", K::SEGMENT, id)))
        .await?;
    hydrate(payload.into_data()?)
}

/// `POST /segment` with `attrs` → hydrated resource
pub async fn create<K: Creatable>(client: &Client, attrs: Value) -> AppResult<Resource<K>> {
    let payload = client.send(ApiRequest::post(K::SEGMENT, attrs)).await?;
    hydrate(payload.into_data()?)
}

/// `GET /segment?filters&page&per_page` → one page of hydrated resources
pub async fn list<K: Listable>(
    client: &Client,
    filters: Filters,
    page: u32,
    per_page: u32,
) -> AppResult<ListResponse<Resource<K>>> {
    let request = ApiRequest::get(K::SEGMENT)
        .extend_query(filters.into_pairs())
        .query("page", page)
        .query("per_page", per_page);
    let payload = client.send(request).await?;
    let response = parse_list::<K>(payload, K::LIST_KEY, page, per_page)?;
    debug!(
        "{} page {} obtained: {} items",
        K::LIST_KEY,
        response.page(),
        response.len()
    );
    Ok(response)
}

/// `GET /parent/{parent_id}/segment?page&per_page` → one page of hydrated resources
pub async fn list_scoped<K: Listable>(
    client: &Client,
    parent_segment: &str,
    parent_id: i64,
    page: u32,
    per_page: u32,
) -> AppResult<ListResponse<Resource<K>>> {
    let path = format!("{}/{}/{}", parent_segment, parent_id, K::SEGMENT);
    let request = ApiRequest::get(path)
        .query("page", page)
        .query("per_page", per_page);
    let payload = client.send(request).await?;
    parse_list::<K>(payload, K::LIST_KEY, page, per_page)
}

/// `PUT /segment/{id}` with `attrs` → new hydrated resource
pub async fn update<K: Updatable>(
    client: &Client,
    id: i64,
    attrs: Value,
) -> AppResult<Resource<K>> {
    let payload = client
        .send(ApiRequest::put(format!("{}/{}", K::SEGMENT, id), attrs))
        .await?;
    hydrate(payload.into_data()?)
}

/// `DELETE /segment/{id}` → `true` on any non-error response
pub async fn delete<K: Deletable>(client: &Client, id: i64) -> AppResult<bool> {
    client
        .execute(ApiRequest::delete(format!("{}/{}", K::SEGMENT, id)))
        .await?;
    Ok(true)
}

/// Id of an already hydrated resource, required to address it on the server
fn require_id<K: ResourceKind>(resource: &Resource<K>) -> AppResult<i64> {
    resource.id().ok_or_else(|| {
        AppError::InvalidArgument(format!("{} resource has no id", K::SEGMENT))
    })
}

/// Service giving access to the operations of one resource kind
pub struct ResourceService<K: ResourceKind> {
    client: Arc<Client>,
    kind: PhantomData<fn() -> K>,
}

impl<K: ResourceKind> ResourceService<K> {
    /// Creates a new service over a shared client
    pub fn new(client: Arc<Client>) -> Self {
        Self {
            client,
            kind: PhantomData,
        }
    }

    /// Endpoint segment of the kind
    #[must_use]
    pub fn segment(&self) -> &'static str {
        K::SEGMENT
    }

    /// Gets the underlying client
    pub fn client(&self) -> Arc<Client> {
        self.client.clone()
    }
}

impl<K: Updatable> ResourceService<K> {
    /// Updates the entity a hydrated resource was read from
    ///
    /// `resource` is left untouched; the server's post-update state is returned.
    ///
    /// # Returns
    /// * `Err(AppError::InvalidArgument)` - `resource` carries no id; nothing is sent
    pub async fn update_resource(
        &self,
        resource: &Resource<K>,
        attrs: Value,
    ) -> AppResult<Resource<K>> {
        let id = require_id(resource)?;
        update::<K>(&self.client, id, attrs).await
    }
}

impl<K: Deletable> ResourceService<K> {
    /// Deletes the entity a hydrated resource was read from
    ///
    /// # Returns
    /// * `Err(AppError::InvalidArgument)` - `resource` carries no id; nothing is sent
    pub async fn delete_resource(&self, resource: &Resource<K>) -> AppResult<bool> {
        let id = require_id(resource)?;
        delete::<K>(&self.client, id).await
    }
}

impl<K: ResourceKind> Clone for ResourceService<K> {
    fn clone(&self) -> Self {
        Self::new(self.client.clone())
    }
}

#[async_trait]
impl<K: Findable> FindResource<K> for ResourceService<K> {
    async fn find(&self, id: i64) -> AppResult<Resource<K>> {
        find::<K>(&self.client, id).await
    }
}

#[async_trait]
impl<K: Creatable> CreateResource<K> for ResourceService<K> {
    async fn create(&self, attrs: Value) -> AppResult<Resource<K>> {
        create::<K>(&self.client, attrs).await
    }
}

#[async_trait]
impl<K: Listable> ListResources<K> for ResourceService<K> {
    async fn list(
        &self,
        filters: Filters,
        page: u32,
        per_page: u32,
    ) -> AppResult<ListResponse<Resource<K>>> {
        list::<K>(&self.client, filters, page, per_page).await
    }

    async fn list_scoped(
        &self,
        parent_segment: &str,
        parent_id: i64,
        page: u32,
        per_page: u32,
    ) -> AppResult<ListResponse<Resource<K>>> {
        list_scoped::<K>(&self.client, parent_segment, parent_id, page, per_page).await
    }
}

#[async_trait]
impl<K: Updatable> UpdateResource<K> for ResourceService<K> {
    async fn update(&self, id: i64, attrs: Value) -> AppResult<Resource<K>> {
        update::<K>(&self.client, id, attrs).await
    }
}

#[async_trait]
impl<K: Deletable> DeleteResource<K> for ResourceService<K> {
    async fn delete(&self, id: i64) -> AppResult<bool> {
        delete::<K>(&self.client, id).await
    }
}
