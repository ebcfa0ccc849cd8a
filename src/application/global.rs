/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/

//! Process-wide configuration and shared client
//!
//! Code that cannot thread a [`Client`] through every call can configure the library
//! once and fetch the shared client from here. [`reset`] restores the blank
//! configuration and drops the cached client, so the next [`client`] call starts
//! Unauthenticated; test suites call it between cases. Clients obtained before a
//! reset keep their own session until they are dropped.
//!
//! # Example
//! ```ignore
//! use servicetrade_client::application::global;
//! use servicetrade_client::prelude::*;
//!
//! global::configure(ConfigOptions::new().username("u").password("p"));
//! let webhooks = global::service::<Webhook>()?;
//! let page = webhooks.list_default(Filters::new()).await?;
//! ```

use crate::application::client::Client;
use crate::application::config::{Config, ConfigOptions};
use crate::application::services::{ExternalIdService, ResourceService};
use crate::error::AppResult;
use crate::model::resource::ResourceKind;
use once_cell::sync::Lazy;
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};
use tracing::debug;

#[derive(Default)]
struct GlobalState {
    config: Config,
    client: Option<Arc<Client>>,
}

static STATE: Lazy<RwLock<GlobalState>> = Lazy::new(|| RwLock::new(GlobalState::default()));

fn read_state() -> RwLockReadGuard<'static, GlobalState> {
    STATE.read().unwrap_or_else(PoisonError::into_inner)
}

fn write_state() -> RwLockWriteGuard<'static, GlobalState> {
    STATE.write().unwrap_or_else(PoisonError::into_inner)
}

/// Applies `options` to the process-wide configuration
///
/// The cached client is dropped so the new settings take effect on the next [`client`].
pub fn configure(options: ConfigOptions) {
    let mut state = write_state();
    state.config.configure(options);
    state.client = None;
}

/// Replaces the process-wide configuration as a whole
pub fn set_config(config: Config) {
    let mut state = write_state();
    state.config = config;
    state.client = None;
}

/// Snapshot of the process-wide configuration
pub fn config() -> Config {
    read_state().config.clone()
}

/// Restores the blank configuration and drops the shared client
pub fn reset() {
    let mut state = write_state();
    state.config.reset();
    if state.client.take().is_some() {
        debug!("Shared client dropped on reset");
    }
}

/// Shared client built from the process-wide configuration
///
/// Built on first use; credentials are only checked when the first request logs in.
pub fn client() -> AppResult<Arc<Client>> {
    let cached = read_state().client.clone();
    if let Some(client) = cached {
        return Ok(client);
    }

    let mut state = write_state();
    if let Some(client) = &state.client {
        return Ok(client.clone());
    }
    let client = Arc::new(Client::new(state.config.clone())?);
    state.client = Some(client.clone());
    Ok(client)
}

/// Resource service of kind `K` over the shared client
pub fn service<K: ResourceKind>() -> AppResult<ResourceService<K>> {
    Ok(ResourceService::new(client()?))
}

/// External identifier service over the shared client
pub fn external_ids() -> AppResult<ExternalIdService> {
    Ok(ExternalIdService::new(client()?))
}
