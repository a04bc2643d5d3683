//! Repository context and import path parsing
//!
//! Import paths have the form `host/[user/]name.vN[/sub/path]`. Without a
//! user the package lives at `github.com/go-name/name`.

use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::version::types::{Version, VersionList};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RepoError {
    #[error("Invalid import path: {0}")]
    InvalidImportPath(String),
}

/// Resolved repository a page is rendered for
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Repo {
    /// Host the import path lives under (e.g., "gopkg.in")
    pub host: String,
    pub user: Option<String>,
    pub name: String,
    /// Empty, or a path starting with `/`
    pub sub_path: String,
    /// Major version requested through the import path
    pub major_version: Version,
    /// Every version known for the repository, unordered
    pub all_versions: VersionList,
}

impl Repo {
    /// Name the Go package declares: the last sub path segment, or the repo name
    pub fn package_name(&self) -> &str {
        self.sub_path
            .rsplit('/')
            .next()
            .filter(|segment| !segment.is_empty())
            .unwrap_or(&self.name)
    }

    /// Whether any versions are known, so links may point at a version ref
    pub fn has_versions(&self) -> bool {
        !self.all_versions.is_empty()
    }

    /// Import root for a given version, e.g. `gopkg.in/user/pkg.v2`
    pub fn gopkg_version_root(&self, version: &Version) -> String {
        let major = version.major_root();
        match &self.user {
            Some(user) => format!("{}/{}/{}.{}", self.host, user, self.name, major),
            None => format!("{}/{}.{}", self.host, self.name, major),
        }
    }

    /// Import root for the requested major
    pub fn gopkg_root(&self) -> String {
        self.gopkg_version_root(&self.major_version)
    }

    /// Full import path including the sub path
    pub fn gopkg_path(&self) -> String {
        format!("{}{}", self.gopkg_root(), self.sub_path)
    }

    /// Owner of the backing GitHub repository
    pub fn github_owner(&self) -> String {
        match &self.user {
            Some(user) => user.clone(),
            None => format!("go-{}", self.name),
        }
    }

    /// Backing repository location, e.g. `github.com/go-yaml/yaml`
    pub fn github_root(&self) -> String {
        format!("github.com/{}/{}", self.github_owner(), self.name)
    }
}

/// Parser for redirector import paths
pub struct ImportPathParser {
    host: String,
    path_re: Regex,
}

impl ImportPathParser {
    pub fn new(host: &str) -> Self {
        let pattern = format!(
            concat!(
                r"^(?:https?://)?(?:{}/)?",
                r"(?:([a-zA-Z0-9][-a-zA-Z0-9]+)/)?",
                r"([a-zA-Z][-.a-zA-Z0-9]*)\.",
                r"((?:v0|v[1-9][0-9]*)(?:\.0|\.[1-9][0-9]*){{0,2}}(?:-unstable)?)",
                r"(?:\.git)?",
                r"((?:/[a-zA-Z0-9][-.a-zA-Z0-9]*)*)$"
            ),
            regex::escape(host)
        );
        Self {
            host: host.to_string(),
            path_re: Regex::new(&pattern).unwrap(),
        }
    }

    /// Parse an import path into a repository context with no known versions
    pub fn parse(&self, import_path: &str) -> Result<Repo, RepoError> {
        let invalid = || RepoError::InvalidImportPath(import_path.to_string());

        let caps = self.path_re.captures(import_path).ok_or_else(invalid)?;
        let major_version = caps
            .get(3)
            .and_then(|m| Version::parse(m.as_str()).ok())
            .ok_or_else(invalid)?;

        Ok(Repo {
            host: self.host.clone(),
            user: caps.get(1).map(|m| m.as_str().to_string()),
            name: caps.get(2).map_or("", |m| m.as_str()).to_string(),
            sub_path: caps.get(4).map_or("", |m| m.as_str()).to_string(),
            major_version,
            all_versions: VersionList::new(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn parser() -> ImportPathParser {
        ImportPathParser::new("gopkg.in")
    }

    #[rstest]
    #[case("gopkg.in/yaml.v2", None, "yaml", "v2", "")]
    #[case("yaml.v2", None, "yaml", "v2", "")]
    #[case("https://gopkg.in/yaml.v2", None, "yaml", "v2", "")]
    #[case("gopkg.in/go-yaml/yaml.v3", Some("go-yaml"), "yaml", "v3", "")]
    #[case("gopkg.in/mgo.v2/bson", None, "mgo", "v2", "/bson")]
    #[case("gopkg.in/user/pkg.v1.2/a/b", Some("user"), "pkg", "v1.2", "/a/b")]
    #[case("gopkg.in/pkg.v0.git", None, "pkg", "v0", "")]
    #[case("gopkg.in/pkg.v4-unstable", None, "pkg", "v4-unstable", "")]
    #[case("gopkg.in/user/my.pkg.v1", Some("user"), "my.pkg", "v1", "")]
    fn parse_accepts_import_paths(
        #[case] input: &str,
        #[case] user: Option<&str>,
        #[case] name: &str,
        #[case] version: &str,
        #[case] sub_path: &str,
    ) {
        let repo = parser().parse(input).unwrap();

        assert_eq!(repo.host, "gopkg.in");
        assert_eq!(repo.user.as_deref(), user);
        assert_eq!(repo.name, name);
        assert_eq!(repo.major_version.to_string(), version);
        assert_eq!(repo.sub_path, sub_path);
        assert!(repo.all_versions.is_empty());
    }

    #[rstest]
    #[case("gopkg.in/yaml")] // no version
    #[case("gopkg.in/yaml.v02")]
    #[case("gopkg.in/yaml.2")]
    #[case("gopkg.in/a/b/c.v1")]
    #[case("gopkg.in/yaml.v1.2.3.4")]
    #[case("gopkg.in/2yaml.v1")]
    #[case("gopkg.in/yaml.v1/")]
    #[case("")]
    fn parse_rejects_invalid_import_paths(#[case] input: &str) {
        assert_eq!(
            parser().parse(input),
            Err(RepoError::InvalidImportPath(input.to_string()))
        );
    }

    fn repo(user: Option<&str>, name: &str, major: &str, sub_path: &str) -> Repo {
        Repo {
            host: "gopkg.in".to_string(),
            user: user.map(str::to_string),
            name: name.to_string(),
            sub_path: sub_path.to_string(),
            major_version: major.parse().unwrap(),
            all_versions: VersionList::new(),
        }
    }

    #[test]
    fn urls_without_user_use_go_prefixed_owner() {
        let repo = repo(None, "yaml", "v2", "");

        assert_eq!(repo.gopkg_root(), "gopkg.in/yaml.v2");
        assert_eq!(repo.gopkg_path(), "gopkg.in/yaml.v2");
        assert_eq!(repo.github_owner(), "go-yaml");
        assert_eq!(repo.github_root(), "github.com/go-yaml/yaml");
    }

    #[test]
    fn urls_with_user_and_sub_path() {
        let repo = repo(Some("fsnotify"), "fsnotify", "v1", "/internal");

        assert_eq!(repo.gopkg_root(), "gopkg.in/fsnotify/fsnotify.v1");
        assert_eq!(repo.gopkg_path(), "gopkg.in/fsnotify/fsnotify.v1/internal");
        assert_eq!(repo.github_root(), "github.com/fsnotify/fsnotify");
    }

    #[rstest]
    #[case("v3.1.4", "gopkg.in/yaml.v3")]
    #[case("v3", "gopkg.in/yaml.v3")]
    #[case("v5.0.0-unstable", "gopkg.in/yaml.v5-unstable")]
    fn gopkg_version_root_drops_minor_and_patch(#[case] version: &str, #[case] expected: &str) {
        let repo = repo(None, "yaml", "v2", "/sub");
        assert_eq!(
            repo.gopkg_version_root(&version.parse().unwrap()),
            expected
        );
    }

    #[rstest]
    #[case("", "mgo")]
    #[case("/bson", "bson")]
    #[case("/internal/json", "json")]
    fn package_name_is_last_path_segment(#[case] sub_path: &str, #[case] expected: &str) {
        assert_eq!(repo(None, "mgo", "v2", sub_path).package_name(), expected);
    }

    #[test]
    fn has_versions_reflects_version_list() {
        let mut repo = repo(None, "yaml", "v2", "");
        assert!(!repo.has_versions());

        repo.all_versions.push(Version::new(2, 0, 0));
        assert!(repo.has_versions());
    }
}
