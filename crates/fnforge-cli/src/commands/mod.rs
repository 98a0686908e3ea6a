//! Command implementations.

pub mod auth;
pub mod config;
pub mod functions;
pub mod tokens;

use std::sync::Arc;

use anyhow::Result;

use fnforge_api::ApiClient;

use crate::session::FileStore;

/// Open the persisted session store and build a client over it.
pub(crate) fn client() -> Result<(Arc<FileStore>, ApiClient)> {
    let store = Arc::new(FileStore::open()?);
    let client = ApiClient::new(store.clone());
    Ok((store, client))
}
