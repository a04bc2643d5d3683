//! Version types shared by the reducer, the repository context and the page

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use serde::ser::SerializeStruct;
use serde::{Deserialize, Serialize, Serializer};

use crate::version::error::VersionError;

const UNSTABLE_SUFFIX: &str = "-unstable";

/// A gopkg.in style version: `v1`, `v1.2`, `v1.2.3`, optionally `-unstable`.
///
/// Missing minor/patch components sort before any present value, so `v1`
/// is less than `v1.0`, which is less than `v1.0.0`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
pub struct Version {
    pub major: u64,
    pub minor: Option<u64>,
    pub patch: Option<u64>,
    pub unstable: bool,
}

/// Versions in no particular order; duplicates are allowed.
pub type VersionList = Vec<Version>;

impl Version {
    pub fn new(major: u64, minor: u64, patch: u64) -> Self {
        Self {
            major,
            minor: Some(minor),
            patch: Some(patch),
            unstable: false,
        }
    }

    /// A major-only version such as `v2`
    pub fn major_only(major: u64) -> Self {
        Self {
            major,
            ..Self::default()
        }
    }

    /// Parse a version name like `v1.2.3-unstable`.
    ///
    /// The leading `v` is required and components must not carry leading zeros.
    pub fn parse(input: &str) -> Result<Self, VersionError> {
        let malformed = || VersionError::Malformed(input.to_string());

        let body = input.strip_prefix('v').ok_or_else(malformed)?;
        let (body, unstable) = match body.strip_suffix(UNSTABLE_SUFFIX) {
            Some(rest) => (rest, true),
            None => (body, false),
        };

        let components = body.split('.').count();
        if components > 3 || body.contains(['+', '-']) {
            return Err(malformed());
        }

        let parsed = pad_to_semver(body, components).ok_or_else(malformed)?;
        Ok(Self {
            major: parsed.major,
            minor: (components > 1).then_some(parsed.minor),
            patch: (components > 2).then_some(parsed.patch),
            unstable,
        })
    }

    /// Same version with minor and patch dropped, keeping the unstable marker
    pub fn major_root(&self) -> Self {
        Self {
            minor: None,
            patch: None,
            ..*self
        }
    }
}

/// Validate numeric components through `semver` by padding `1` / `1.2` with zeros.
fn pad_to_semver(body: &str, components: usize) -> Option<semver::Version> {
    let padded = match components {
        1 => format!("{}.0.0", body),
        2 => format!("{}.0", body),
        _ => body.to_string(),
    };
    semver::Version::parse(&padded).ok()
}

impl Ord for Version {
    fn cmp(&self, other: &Self) -> Ordering {
        self.major
            .cmp(&other.major)
            .then_with(|| self.minor.cmp(&other.minor))
            .then_with(|| self.patch.cmp(&other.patch))
            // unstable sorts before stable
            .then_with(|| other.unstable.cmp(&self.unstable))
    }
}

impl PartialOrd for Version {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "v{}", self.major)?;
        if let Some(minor) = self.minor {
            write!(f, ".{}", minor)?;
            if let Some(patch) = self.patch {
                write!(f, ".{}", patch)?;
            }
        }
        if self.unstable {
            f.write_str(UNSTABLE_SUFFIX)?;
        }
        Ok(())
    }
}

/// Serialized with its components plus the display `name`, so templates can
/// both compare majors and print the version.
impl Serialize for Version {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("Version", 5)?;
        state.serialize_field("major", &self.major)?;
        state.serialize_field("minor", &self.minor)?;
        state.serialize_field("patch", &self.patch)?;
        state.serialize_field("unstable", &self.unstable)?;
        state.serialize_field("name", &self.to_string())?;
        state.end()
    }
}

impl FromStr for Version {
    type Err = VersionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
