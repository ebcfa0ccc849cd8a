/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/

//! # ServiceTrade Client
//!
//! A client for the ServiceTrade REST API.
//!
//! The crate is organised around a small core:
//!
//! - [`application::auth`]: session management. Logs in through `POST /auth` on first
//!   use and presents the session as the `PHPSESSID` cookie.
//! - [`application::client`]: the transport. Every request that comes back 401/403 is
//!   retried once after a fresh login; everything else surfaces as an [`error::AppError`].
//! - [`model::hydrate`]: turns JSON objects into [`model::resource::Resource`] values,
//!   renaming camelCase keys to snake_case and keeping nested objects untyped.
//! - [`model::list`]: paginated collections.
//! - [`application::services`]: Find/Create/List/Update/Delete, written once and
//!   enabled per resource kind.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use servicetrade_client::prelude::*;
//! use std::sync::Arc;
//!
//! # async fn run() -> Result<(), AppError> {
//! let client = Arc::new(Client::new(Config::with_credentials("user", "secret"))?);
//! let webhooks = ResourceService::<Webhook>::new(client);
//!
//! let page = webhooks.list(Filters::new(), 1, 100).await?;
//! for webhook in page.items() {
//!     println!("{:?} -> {:?}", webhook.id(), webhook.hook_url());
//! }
//! # Ok(())
//! # }
//! ```

/// Application layer: configuration, session, transport and services
pub mod application;
/// Global constants
pub mod constants;
/// Error types
pub mod error;
/// Wire models, hydration and pagination
pub mod model;
/// Commonly used types and traits
pub mod prelude;
/// Environment and logging helpers
pub mod utils;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Returns the library version
#[must_use]
pub fn version() -> &'static str {
    VERSION
}
