//! Source trait for listing the versions a repository publishes

#[cfg(test)]
use mockall::automock;

use crate::version::error::SourceError;
use crate::version::types::VersionList;

/// Trait for fetching the version list of a repository from its source host
#[cfg_attr(test, automock)]
#[async_trait::async_trait]
pub trait VersionSource: Send + Sync {
    /// Fetches every version published by a repository
    ///
    /// # Arguments
    /// * `owner` - The account owning the repository (e.g., "go-yaml")
    /// * `name` - The repository name (e.g., "yaml")
    ///
    /// # Returns
    /// * `Ok(VersionList)` - Versions in the order the host reported them
    /// * `Err(SourceError)` - If the fetch fails
    async fn fetch_versions(&self, owner: &str, name: &str) -> Result<VersionList, SourceError>;
}
