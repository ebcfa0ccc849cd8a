/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/
use crate::error::{AppError, AppResult};
use crate::model::http::RawPayload;
use crate::model::hydrate::hydrate;
use crate::model::resource::{Resource, ResourceKind};
use serde_json::Value;
use tracing::debug;

/// One page of a paginated collection
///
/// Always holds `items.len() <= per_page` and `page >= 1`. Further pages are never
/// fetched automatically; use [`ListResponse::next_page`] to build the next request.
#[derive(Debug, Clone, PartialEq)]
pub struct ListResponse<T> {
    items: Vec<T>,
    page: u32,
    per_page: u32,
    total: u64,
    total_pages: Option<u32>,
}

impl<T> ListResponse<T> {
    /// Items of this page, in server order
    #[must_use]
    pub fn items(&self) -> &[T] {
        &self.items
    }

    /// Consumes the page and returns its items
    #[must_use]
    pub fn into_items(self) -> Vec<T> {
        self.items
    }

    /// Page number, starting at 1
    #[must_use]
    pub fn page(&self) -> u32 {
        self.page
    }

    /// Page size
    #[must_use]
    pub fn per_page(&self) -> u32 {
        self.per_page
    }

    /// Total number of items across all pages, as reported by the server
    #[must_use]
    pub fn total(&self) -> u64 {
        self.total
    }

    /// Total number of pages, when the server reports it
    #[must_use]
    pub fn total_pages(&self) -> Option<u32> {
        self.total_pages
    }

    /// Number of items on this page
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether this page has no items
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Iterator over the items
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    /// First item of the page
    #[must_use]
    pub fn first(&self) -> Option<&T> {
        self.items.first()
    }

    /// Last item of the page
    #[must_use]
    pub fn last(&self) -> Option<&T> {
        self.items.last()
    }

    /// Whether the server has more items after this page
    #[must_use]
    pub fn has_next_page(&self) -> bool {
        match self.total_pages {
            Some(total_pages) => self.page < total_pages,
            None => u64::from(self.page) * u64::from(self.per_page) < self.total,
        }
    }

    /// Number of the following page, when there is one
    #[must_use]
    pub fn next_page(&self) -> Option<u32> {
        if self.has_next_page() {
            self.page.checked_add(1)
        } else {
            None
        }
    }
}

impl<T> IntoIterator for ListResponse<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a ListResponse<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

/// Reads a non-negative integer, accepting numeric strings
fn read_u64(data: &Value, keys: &[&str]) -> Option<u64> {
    keys.iter()
        .filter_map(|key| data.get(*key))
        .find_map(|value| match value {
            Value::Number(n) => n.as_u64(),
            Value::String(s) => s.trim().parse().ok(),
            _ => None,
        })
}

fn read_u32(data: &Value, keys: &[&str]) -> Option<u32> {
    read_u64(data, keys).and_then(|v| u32::try_from(v).ok())
}

/// Parses a collection response into hydrated resources
///
/// # Arguments
/// * `payload` - Decoded response body
/// * `array_key` - Key of the array inside `data`, e.g. `webhooks`
/// * `page` - Page that was requested
/// * `per_page` - Page size that was requested
///
/// # Returns
/// * `Ok(ListResponse)` - Items in source order; an absent or `null` array is an empty page
/// * `Err(AppError::Protocol)` - `data` is missing, `data[array_key]` is not an array, or
///   one of its elements is not an object
pub fn parse_list<K: ResourceKind>(
    payload: RawPayload,
    array_key: &str,
    page: u32,
    per_page: u32,
) -> AppResult<ListResponse<Resource<K>>> {
    let mut data = payload.into_data()?;
    if !data.is_object() {
        return Err(AppError::Protocol(format!(
            "collection envelope `data` is not an object: {data}"
        )));
    }

    let raw_items = match data.get_mut(array_key).map(Value::take) {
        None | Some(Value::Null) => Vec::new(),
        Some(Value::Array(items)) => items,
        Some(other) => {
            return Err(AppError::Protocol(format!(
                "`data.{array_key}` is not an array: {other}"
            )));
        }
    };

    let items = raw_items
        .into_iter()
        .map(hydrate::<K>)
        .collect::<AppResult<Vec<_>>>()?;

    let page = read_u32(&data, &["page"]).unwrap_or(page).max(1);
    let mut per_page = read_u32(&data, &["per_page", "perPage"]).unwrap_or(per_page);
    let total = read_u64(&data, &["total"]).unwrap_or(items.len() as u64);
    let total_pages = read_u32(&data, &["totalPages", "total_pages"]);

    if items.len() > per_page as usize {
        debug!(
            "Server returned {} {} for per_page {}, adjusting page size",
            items.len(),
            array_key,
            per_page
        );
        per_page = u32::try_from(items.len()).unwrap_or(u32::MAX);
    }

    Ok(ListResponse {
        items,
        page,
        per_page,
        total,
        total_pages,
    })
}
