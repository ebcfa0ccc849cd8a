use crate::error::AppError;
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};
use std::str::FromStr;

/// Ordered query filters for list endpoints
///
/// ```
/// use servicetrade_client::application::services::Filters;
///
/// let filters = Filters::new().with("status", "open").with("job_id", 42);
/// assert_eq!(filters.len(), 2);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Filters(Vec<(String, String)>);

impl Filters {
    /// Creates an empty filter set
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a filter, keeping insertion order
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Display) -> Self {
        self.push(key, value);
        self
    }

    /// Adds a filter in place
    pub fn push(&mut self, key: impl Into<String>, value: impl Display) {
        self.0.push((key.into(), value.to_string()));
    }

    /// Number of filters
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether no filter is set
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterator over the `(key, value)` pairs
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Consumes the filters, returning the pairs
    #[must_use]
    pub fn into_pairs(self) -> Vec<(String, String)> {
        self.0
    }
}

impl<K: Into<String>, V: Display> FromIterator<(K, V)> for Filters {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.to_string()))
                .collect(),
        )
    }
}

/// Entity types accepted by the external identifier sub-API
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityType {
    /// `asset`
    Asset,
    /// `company`
    Company,
    /// `contact`
    Contact,
    /// `contract`
    Contract,
    /// `deficiency`
    Deficiency,
    /// `location`
    Location,
    /// `job`
    Job,
    /// `jobitem`
    JobItem,
    /// `libitem`
    LibItem,
    /// `quote`
    Quote,
    /// `user`
    User,
}

impl EntityType {
    /// Every accepted entity type, in the API's documented order
    pub const ALL: [EntityType; 11] = [
        EntityType::Asset,
        EntityType::Company,
        EntityType::Contact,
        EntityType::Contract,
        EntityType::Deficiency,
        EntityType::Location,
        EntityType::Job,
        EntityType::JobItem,
        EntityType::LibItem,
        EntityType::Quote,
        EntityType::User,
    ];

    /// Path segment of the entity type
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            EntityType::Asset => "asset",
            EntityType::Company => "company",
            EntityType::Contact => "contact",
            EntityType::Contract => "contract",
            EntityType::Deficiency => "deficiency",
            EntityType::Location => "location",
            EntityType::Job => "job",
            EntityType::JobItem => "jobitem",
            EntityType::LibItem => "libitem",
            EntityType::Quote => "quote",
            EntityType::User => "user",
        }
    }
}

impl Display for EntityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl AsRef<str> for EntityType {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl FromStr for EntityType {
    type Err = AppError;

    /// Parses an entity type; matching is exact, so `Location` is rejected
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        EntityType::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| {
                let valid: Vec<&str> = EntityType::ALL.iter().map(EntityType::as_str).collect();
                AppError::InvalidArgument(format!(
                    "Invalid entity type '{s}'. Must be one of: {}",
                    valid.join(", ")
                ))
            })
    }
}
