/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/
use crate::model::hydrate::to_camel_case;
use serde_json::{Map, Value};
use std::fmt::Debug;
use std::marker::PhantomData;

/// Static description of one REST resource type
///
/// Implementations are zero-sized markers, normally produced by
/// [`resource_kind!`](crate::resource_kind).
pub trait ResourceKind: Debug + Clone + PartialEq + Send + Sync + 'static {
    /// Endpoint path segment, e.g. `webhook`
    const SEGMENT: &'static str;
    /// Key holding the array in list responses, e.g. `webhooks`
    const LIST_KEY: &'static str;
    /// Declared field names, snake_case
    const FIELDS: &'static [&'static str];
}

/// A hydrated entity of kind `K`
///
/// Holds every field of the payload under its snake_case name. Declared fields of `K`
/// have typed accessors on `Resource<K>`; anything else the server sends stays readable
/// through [`Resource::attribute`]. Instances are immutable: an update returns a new one.
#[derive(Debug, Clone, PartialEq)]
pub struct Resource<K: ResourceKind> {
    id: Option<i64>,
    uri: Option<String>,
    attributes: Map<String, Value>,
    kind: PhantomData<fn() -> K>,
}

impl<K: ResourceKind> Resource<K> {
    /// Builds a resource from snake_case attributes
    #[must_use]
    pub fn from_attributes(attributes: Map<String, Value>) -> Self {
        let id = attributes.get("id").and_then(coerce_i64);
        let uri = attributes
            .get("uri")
            .and_then(Value::as_str)
            .map(str::to_string);
        Self {
            id,
            uri,
            attributes,
            kind: PhantomData,
        }
    }

    /// Server id, when present
    #[must_use]
    pub fn id(&self) -> Option<i64> {
        self.id
    }

    /// Canonical URI of the entity, when present
    #[must_use]
    pub fn uri(&self) -> Option<&str> {
        self.uri.as_deref()
    }

    /// Raw value of any attribute, declared or not; `None` when absent or `null`
    #[must_use]
    pub fn attribute(&self, name: &str) -> Option<&Value> {
        self.attributes.get(name).filter(|v| !v.is_null())
    }

    /// String attribute
    #[must_use]
    pub fn get_str(&self, name: &str) -> Option<&str> {
        self.attribute(name).and_then(Value::as_str)
    }

    /// Integer attribute, accepting numeric strings
    #[must_use]
    pub fn get_i64(&self, name: &str) -> Option<i64> {
        self.attribute(name).and_then(coerce_i64)
    }

    /// Floating point attribute, accepting integers and numeric strings
    #[must_use]
    pub fn get_f64(&self, name: &str) -> Option<f64> {
        self.attribute(name).and_then(|v| match v {
            Value::Number(n) => n.as_f64(),
            Value::String(s) => s.trim().parse().ok(),
            _ => None,
        })
    }

    /// Boolean attribute
    #[must_use]
    pub fn get_bool(&self, name: &str) -> Option<bool> {
        self.attribute(name).and_then(Value::as_bool)
    }

    /// All hydrated attributes
    #[must_use]
    pub fn attributes(&self) -> &Map<String, Value> {
        &self.attributes
    }

    /// Whether `name` belongs to the declared fields of `K`
    #[must_use]
    pub fn is_declared(name: &str) -> bool {
        name == "id" || name == "uri" || K::FIELDS.contains(&name)
    }

    /// Attributes the kind does not declare
    pub fn extra_attributes(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.attributes
            .iter()
            .filter(|(name, _)| !Self::is_declared(name))
    }

    /// Converts back to a wire object with camelCase keys
    #[must_use]
    pub fn to_wire(&self) -> Value {
        Value::Object(
            self.attributes
                .iter()
                .map(|(name, value)| (to_camel_case(name), value.clone()))
                .collect(),
        )
    }

    /// Consumes the resource, returning its attributes
    #[must_use]
    pub fn into_attributes(self) -> Map<String, Value> {
        self.attributes
    }
}

fn coerce_i64(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

/// Declares a resource kind: marker type, endpoint, list key, capabilities and fields
///
/// Each field becomes a typed accessor on `Resource<Kind>`. Field types are `str`,
/// `i64`, `f64`, `bool` or `value` (untyped nested data). A field whose wire name is not
/// a valid identifier takes its key in parentheses: `item_type("type"): str`.
///
/// ```ignore
/// resource_kind! {
///     /// A webhook subscription
///     Webhook {
///         segment: "webhook",
///         list_key: "webhooks",
///         capabilities: [Findable, Creatable, Listable, Updatable, Deletable],
///         fields: {
///             hook_url: str,
///             enabled: bool,
///         }
///     }
/// }
/// ```
#[macro_export]
macro_rules! resource_kind {
    (@key $field:ident) => { stringify!($field) };
    (@key $field:ident, $key:literal) => { $key };

    (@accessor $field:ident, $key:expr, str) => {
        #[doc = concat!("`", stringify!($field), "` attribute")]
        #[must_use]
        pub fn $field(&self) -> Option<&str> {
            self.get_str($key)
        }
    };
    (@accessor $field:ident, $key:expr, i64) => {
        #[doc = concat!("`", stringify!($field), "` attribute")]
        #[must_use]
        pub fn $field(&self) -> Option<i64> {
            self.get_i64($key)
        }
    };
    (@accessor $field:ident, $key:expr, f64) => {
        #[doc = concat!("`", stringify!($field), "` attribute")]
        #[must_use]
        pub fn $field(&self) -> Option<f64> {
            self.get_f64($key)
        }
    };
    (@accessor $field:ident, $key:expr, bool) => {
        #[doc = concat!("`", stringify!($field), "` attribute")]
        #[must_use]
        pub fn $field(&self) -> Option<bool> {
            self.get_bool($key)
        }
    };
    (@accessor $field:ident, $key:expr, value) => {
        #[doc = concat!("`", stringify!($field), "` attribute, untyped")]
        #[must_use]
        pub fn $field(&self) -> Option<&::serde_json::Value> {
            self.attribute($key)
        }
    };

    (
        $(#[$meta:meta])*
        $kind:ident {
            segment: $segment:literal,
            list_key: $list_key:literal,
            capabilities: [$($cap:ident),* $(,)?],
            fields: {
                $($field:ident $(($key:literal))? : $ty:ident),* $(,)?
            }
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
        pub struct $kind;

        impl $crate::model::resource::ResourceKind for $kind {
            const SEGMENT: &'static str = $segment;
            const LIST_KEY: &'static str = $list_key;
            const FIELDS: &'static [&'static str] =
                &[$($crate::resource_kind!(@key $field $(, $key)?)),*];
        }

        $(impl $crate::application::services::$cap for $kind {})*

        impl $crate::model::resource::Resource<$kind> {
            $($crate::resource_kind!(@accessor $field, $crate::resource_kind!(@key $field $(, $key)?), $ty);)*
        }
    };
}
