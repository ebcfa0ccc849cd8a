/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/

//! JSON to [`Resource`] hydration
//!
//! The wire uses camelCase keys; resources expose snake_case names. One transform is
//! applied to every key of every kind. Nested objects and arrays are kept as untyped
//! `serde_json::Value`s: relations are not hydrated into resources at this layer.

use crate::error::{AppError, AppResult};
use crate::model::resource::{Resource, ResourceKind};
use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::{Map, Value};

/// `HTTPCode` → `HTTP_Code`: an uppercase run followed by a capitalized word
static ACRONYM_BOUNDARY: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"([A-Z\d]+)([A-Z][a-z])").expect("static regex is valid"));

/// `hookUrl` → `hook_Url`: a lowercase letter or digit followed by an uppercase letter
static WORD_BOUNDARY: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"([a-z\d])([A-Z])").expect("static regex is valid"));

/// Converts a wire (camelCase) key to its snake_case field name
///
/// Keys that are already snake_case are returned unchanged.
///
/// ```
/// use servicetrade_client::model::hydrate::to_snake_case;
/// assert_eq!(to_snake_case("hookUrl"), "hook_url");
/// assert_eq!(to_snake_case("isGeneric"), "is_generic");
/// assert_eq!(to_snake_case("per_page"), "per_page");
/// ```
#[must_use]
pub fn to_snake_case(key: &str) -> String {
    if !key.chars().any(|c| c.is_ascii_uppercase() || c == '-') {
        return key.to_string();
    }
    let split = ACRONYM_BOUNDARY.replace_all(key, "${1}_${2}");
    let split = WORD_BOUNDARY.replace_all(&split, "${1}_${2}");
    split.replace('-', "_").to_lowercase()
}

/// Converts a snake_case field name back to its camelCase wire key
///
/// ```
/// use servicetrade_client::model::hydrate::to_camel_case;
/// assert_eq!(to_camel_case("hook_url"), "hookUrl");
/// assert_eq!(to_camel_case("id"), "id");
/// ```
#[must_use]
pub fn to_camel_case(name: &str) -> String {
    let mut parts = name.split('_').filter(|p| !p.is_empty());
    let mut out = String::with_capacity(name.len());
    if let Some(first) = parts.next() {
        out.push_str(first);
    }
    for part in parts {
        let mut chars = part.chars();
        if let Some(c) = chars.next() {
            out.extend(c.to_uppercase());
            out.push_str(chars.as_str());
        }
    }
    out
}

/// Renames every key of a JSON object to snake_case, values untouched
#[must_use]
pub fn snake_case_keys(object: Map<String, Value>) -> Map<String, Value> {
    object
        .into_iter()
        .map(|(key, value)| (to_snake_case(&key), value))
        .collect()
}

/// Hydrates a decoded JSON object into a resource of kind `K`
///
/// Never performs I/O. Missing fields simply read as `None` afterwards.
///
/// # Returns
/// * `Err(AppError::Protocol)` - `json` is not a JSON object
pub fn hydrate<K: ResourceKind>(json: Value) -> AppResult<Resource<K>> {
    match json {
        Value::Object(object) => Ok(Resource::from_attributes(snake_case_keys(object))),
        other => Err(AppError::Protocol(format!(
            "cannot hydrate {} from a non-object value: {}",
            K::SEGMENT,
            other
        ))),
    }
}
