use async_trait::async_trait;

use crate::{exchange::RepositoryLookup, Result};

/// Upstream API adapter interface.
#[cfg_attr(feature = "testkit", mockall::automock)]
#[async_trait(?Send)]
pub trait ApiService: Send + Sync {
    /// Get a repository from its owner and name.
    async fn repositories_get(&self, owner: &str, name: &str) -> Result<RepositoryLookup>;
}
