/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/

//! # ServiceTrade Client Prelude
//!
//! Commonly used types and traits in one import.
//!
//! ```rust
//! use servicetrade_client::prelude::*;
//!
//! let config = Config::with_credentials("user", "secret");
//! let filters = Filters::new().with("status", "open");
//! ```

// ============================================================================
// CORE CONFIGURATION AND SETUP
// ============================================================================

/// Configuration for the ServiceTrade API client
pub use crate::application::config::{AuthMethod, Config, ConfigOptions, Credentials, RestApiConfig};

/// Library version information
pub use crate::{VERSION, version};

// ============================================================================
// ERROR HANDLING
// ============================================================================

/// Main error type for the library
pub use crate::error::{AppError, AppResult};

// ============================================================================
// AUTHENTICATION AND TRANSPORT
// ============================================================================

/// Session manager and session
pub use crate::application::auth::{Auth, Session};

/// Transport
pub use crate::application::client::Client;

/// Request and payload types
pub use crate::model::http::{ApiRequest, RawPayload};

// ============================================================================
// HYDRATION AND PAGINATION
// ============================================================================

/// Hydration
pub use crate::model::hydrate::{hydrate, to_camel_case, to_snake_case};

/// Paginated collections
pub use crate::model::list::{ListResponse, parse_list};

/// Generic resource
pub use crate::model::resource::{Resource, ResourceKind};

// ============================================================================
// SERVICES
// ============================================================================

/// Capability markers and operation traits
pub use crate::application::services::{
    Creatable, CreateResource, DeleteResource, Deletable, FindResource, Findable, ListResources,
    Listable, UpdateResource, Updatable,
};

/// Service implementations and their argument types
pub use crate::application::services::{EntityType, ExternalIdService, Filters, ResourceService};

/// Resource kinds
pub use crate::application::models::{
    Appointment, Attachment, JobItem, LibItem, ServiceLine, ServiceRequest, Webhook,
};

// ============================================================================
// UTILITIES
// ============================================================================

/// Logging utilities
pub use crate::utils::logger::setup_logger;

/// Global constants
pub use crate::constants::*;

// ============================================================================
// RE-EXPORTS FROM EXTERNAL CRATES
// ============================================================================

/// Re-export commonly used external types
pub use async_trait::async_trait;
pub use serde::{Deserialize, Serialize};
pub use serde_json::{Value, json};
pub use std::sync::Arc;
pub use tracing::{debug, error, info, warn};
