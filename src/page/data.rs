use serde::Serialize;

use crate::page::name::clean_package_name;
use crate::repo::Repo;
use crate::version::latest::LatestVersions;
use crate::version::types::{Version, VersionList};

/// Everything the package page template needs for one render
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageData<'a> {
    pub repo: &'a Repo,
    /// Latest version of each major, highest first
    pub latest_versions: VersionList,
    /// Version the requested major resolves to; `None` when no such major exists
    pub full_version: Option<Version>,
    /// Identifier-safe alias for the package, empty when there is none
    pub clean_package_name: String,
}

impl<'a> PageData<'a> {
    pub fn assemble(repo: &'a Repo) -> Self {
        let latest = LatestVersions::from_versions(&repo.all_versions);
        Self {
            repo,
            latest_versions: latest.descending(),
            full_version: latest.for_major(repo.major_version.major),
            clean_package_name: clean_package_name(repo.package_name()),
        }
    }

    /// Git ref the source link points at: the resolved version, or `master`
    pub fn source_ref(&self) -> String {
        match self.full_version {
            Some(version) if self.repo.has_versions() => version.to_string(),
            _ => "master".to_string(),
        }
    }
}
