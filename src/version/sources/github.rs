//! GitHub git refs API source implementation

use std::time::Duration;

use serde::Deserialize;
use tracing::{debug, warn};

use crate::config::GitHubConfig;
use crate::version::error::SourceError;
use crate::version::source::VersionSource;
use crate::version::types::{Version, VersionList};

const TAG_PREFIX: &str = "refs/tags/";
const BRANCH_PREFIX: &str = "refs/heads/";

/// Entry of the GitHub `git/refs` listing
#[derive(Debug, Deserialize)]
struct GitRef {
    #[serde(rename = "ref")]
    name: String,
}

/// Version source backed by the GitHub REST API
///
/// Both tags and branches count as versions when their name parses,
/// so a `v2` branch serves major 2 before any `v2.x.y` tag exists.
pub struct GitHubSource {
    client: reqwest::Client,
    base_url: String,
}

impl GitHubSource {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, SourceError> {
        let client = reqwest::Client::builder()
            .user_agent("gopkg-page")
            .timeout(timeout)
            .build()?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn from_config(config: &GitHubConfig) -> Result<Self, SourceError> {
        Self::new(&config.api_url, Duration::from_millis(config.timeout_ms))
    }
}

#[async_trait::async_trait]
impl VersionSource for GitHubSource {
    async fn fetch_versions(&self, owner: &str, name: &str) -> Result<VersionList, SourceError> {
        let url = format!("{}/repos/{}/{}/git/refs", self.base_url, owner, name);

        let response = self
            .client
            .get(&url)
            .header("Accept", "application/vnd.github+json")
            .send()
            .await?;

        let status = response.status();

        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(SourceError::NotFound(format!("{}/{}", owner, name)));
        }

        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            let retry_after = response
                .headers()
                .get("retry-after")
                .and_then(|v| v.to_str().ok())
                .and_then(|v| v.parse().ok());
            return Err(SourceError::RateLimited {
                retry_after_secs: retry_after,
            });
        }

        if !status.is_success() {
            warn!("GitHub API returned status {}: {}", status, url);
            return Err(SourceError::InvalidResponse(format!(
                "Unexpected status: {}",
                status
            )));
        }

        let refs: Vec<GitRef> = response.json().await.map_err(|e| {
            warn!("Failed to parse GitHub refs response: {}", e);
            SourceError::InvalidResponse(e.to_string())
        })?;

        let versions = versions_from_refs(&refs);
        debug!(
            "Found {} versions among {} refs of {}/{}",
            versions.len(),
            refs.len(),
            owner,
            name
        );
        Ok(versions)
    }
}

fn versions_from_refs(refs: &[GitRef]) -> VersionList {
    refs.iter()
        .filter_map(|r| {
            r.name
                .strip_prefix(TAG_PREFIX)
                .or_else(|| r.name.strip_prefix(BRANCH_PREFIX))
        })
        .filter_map(|name| Version::parse(name).ok())
        .collect()
}
