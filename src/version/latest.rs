//! Latest-version-per-major reduction
//!
//! Collapses a repository's full version list into the best version of each
//! major line. The comparison used everywhere is `Version`'s `Ord`, so the
//! per-major replacement and the final descending sort agree.

use std::collections::BTreeMap;

use tracing::debug;

use crate::version::types::{Version, VersionList};

/// Best version seen for every major number in a version list
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LatestVersions {
    by_major: BTreeMap<u64, Version>,
}

impl LatestVersions {
    /// Build the per-major mapping. Input order and duplicates do not matter.
    pub fn from_versions<'a, I>(versions: I) -> Self
    where
        I: IntoIterator<Item = &'a Version>,
    {
        let mut by_major: BTreeMap<u64, Version> = BTreeMap::new();
        for version in versions {
            by_major
                .entry(version.major)
                .and_modify(|best| {
                    if *best < *version {
                        *best = *version;
                    }
                })
                .or_insert(*version);
        }
        debug!("Reduced versions to {} major lines", by_major.len());
        Self { by_major }
    }

    /// The best version for `major`, or `None` when that major was never seen
    pub fn for_major(&self, major: u64) -> Option<Version> {
        self.by_major.get(&major).copied()
    }

    /// One entry per major, highest first
    pub fn descending(&self) -> VersionList {
        let mut latest: VersionList = self.by_major.values().copied().collect();
        latest.sort_by(|a, b| b.cmp(a));
        latest
    }
}

/// Latest version of every major line, sorted descending
pub fn reduce(versions: &[Version]) -> VersionList {
    LatestVersions::from_versions(versions).descending()
}

/// Latest version within `major`, if any version of that major exists
pub fn resolve_major(versions: &[Version], major: u64) -> Option<Version> {
    LatestVersions::from_versions(versions).for_major(major)
}
