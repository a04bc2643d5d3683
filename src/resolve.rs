//! Import path to repository context resolution

use thiserror::Error;
use tracing::{info, warn};

use crate::repo::{ImportPathParser, Repo, RepoError};
use crate::version::error::SourceError;
use crate::version::source::VersionSource;

#[derive(Debug, Error)]
pub enum ResolveError {
    #[error(transparent)]
    Repo(#[from] RepoError),

    #[error("Failed to fetch versions: {0}")]
    Source(#[from] SourceError),
}

/// Parse `import_path` and fill in the versions its repository publishes.
///
/// A requested major with no matching version still resolves; the page
/// falls back to unversioned links in that case.
pub async fn resolve_repo(
    parser: &ImportPathParser,
    source: &dyn VersionSource,
    import_path: &str,
) -> Result<Repo, ResolveError> {
    let mut repo = parser.parse(import_path)?;
    let owner = repo.github_owner();

    repo.all_versions = source.fetch_versions(&owner, &repo.name).await?;

    let requested = repo.major_version.major;
    if repo.all_versions.iter().any(|v| v.major == requested) {
        info!(
            "Resolved {} with {} versions",
            repo.gopkg_path(),
            repo.all_versions.len()
        );
    } else {
        warn!(
            "{} has no version for major {}, linking to master",
            repo.github_root(),
            requested
        );
    }
    Ok(repo)
}
