use crate::application::services::Filters;
use crate::constants::{DEFAULT_PAGE, DEFAULT_PER_PAGE};
use crate::error::AppResult;
use crate::model::list::ListResponse;
use crate::model::resource::{Resource, ResourceKind};
use async_trait::async_trait;
use serde_json::Value;

/// The kind supports `GET /segment/{id}`
pub trait Findable: ResourceKind {}
/// The kind supports `POST /segment`
pub trait Creatable: ResourceKind {}
/// The kind supports `GET /segment` with pagination
pub trait Listable: ResourceKind {}
/// The kind supports `PUT /segment/{id}`
pub trait Updatable: ResourceKind {}
/// The kind supports `DELETE /segment/{id}`
pub trait Deletable: ResourceKind {}

/// Fetches a single resource by id
#[async_trait]
pub trait FindResource<K: Findable> {
    /// Gets the resource with the given id
    async fn find(&self, id: i64) -> AppResult<Resource<K>>;
}

/// Creates resources
#[async_trait]
pub trait CreateResource<K: Creatable> {
    /// Creates a resource and returns the server's representation of it
    ///
    /// # Arguments
    /// * `attrs` - JSON object sent as the request body, keys as the API expects them
    async fn create(&self, attrs: Value) -> AppResult<Resource<K>>;
}

/// Lists resources page by page
#[async_trait]
pub trait ListResources<K: Listable> {
    /// Gets one page of resources matching `filters`
    ///
    /// # Arguments
    /// * `filters` - Resource-specific query filters, sent before `page` and `per_page`
    /// * `page` - Page number, starting at 1
    /// * `per_page` - Page size
    async fn list(
        &self,
        filters: Filters,
        page: u32,
        per_page: u32,
    ) -> AppResult<ListResponse<Resource<K>>>;

    /// Gets the first page of 100 resources matching `filters`
    async fn list_default(&self, filters: Filters) -> AppResult<ListResponse<Resource<K>>>
    where
        Self: Sync,
    {
        self.list(filters, DEFAULT_PAGE, DEFAULT_PER_PAGE).await
    }

    /// Gets one page of resources scoped to a parent entity
    ///
    /// Calls `GET /{parent_segment}/{parent_id}/{segment}`, e.g. the attachments of a job.
    async fn list_scoped(
        &self,
        parent_segment: &str,
        parent_id: i64,
        page: u32,
        per_page: u32,
    ) -> AppResult<ListResponse<Resource<K>>>;
}

/// Updates resources
#[async_trait]
pub trait UpdateResource<K: Updatable> {
    /// Updates a resource and returns a new instance with the server's post-update state
    async fn update(&self, id: i64, attrs: Value) -> AppResult<Resource<K>>;
}

/// Deletes resources
#[async_trait]
pub trait DeleteResource<K: Deletable> {
    /// Deletes a resource; `true` on any non-error response, whatever the body
    async fn delete(&self, id: i64) -> AppResult<bool>;
}
