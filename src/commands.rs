//! Command implementations behind the `gopkg-page` binary

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use anyhow::Context;
use tracing::info;

use crate::config::PageConfig;
use crate::page::name::clean_package_name;
use crate::page::render::{render_package_page, try_render_package_page};
use crate::page::template::PageTemplate;
use crate::repo::{ImportPathParser, Repo};
use crate::resolve::resolve_repo;
use crate::version::latest::reduce;
use crate::version::sources::GitHubSource;
use crate::version::types::{Version, VersionList};

/// Build the repository context, using `versions` when given instead of
/// asking GitHub.
pub async fn load_repo(
    config: &PageConfig,
    import_path: &str,
    versions: &[String],
) -> anyhow::Result<Repo> {
    let parser = ImportPathParser::new(&config.host);

    if versions.is_empty() {
        let source = GitHubSource::from_config(&config.github)?;
        return Ok(resolve_repo(&parser, &source, import_path).await?);
    }

    let mut repo = parser.parse(import_path)?;
    repo.all_versions = versions
        .iter()
        .map(|v| Version::parse(v))
        .collect::<Result<VersionList, _>>()?;
    Ok(repo)
}

/// Render the page for `repo` to `output`, or stdout when `None`.
///
/// Failures writing to a file are returned; failures on stdout are logged.
pub fn render(config: &PageConfig, repo: &Repo, output: Option<&Path>) -> anyhow::Result<()> {
    let template = PageTemplate::default_page(&config.docs_host)?;

    match output {
        Some(path) => {
            let file = File::create(path).with_context(|| format!("creating {:?}", path))?;
            let mut out = BufWriter::new(file);
            try_render_package_page(&template, repo, &mut out)?;
            info!("Wrote {} to {:?}", repo.gopkg_path(), path);
        }
        None => {
            let stdout = std::io::stdout();
            render_package_page(&template, repo, &mut stdout.lock());
        }
    }
    Ok(())
}

/// Print the latest version of each major line, highest first
pub fn print_versions<W: Write>(repo: &Repo, out: &mut W) -> anyhow::Result<()> {
    for version in reduce(&repo.all_versions) {
        let marker = if version.major == repo.major_version.major {
            " *"
        } else {
            ""
        };
        writeln!(out, "v{} -> {}{}", version.major, version, marker)?;
    }
    Ok(())
}

/// Print the clean alias of a package name, or nothing when there is none
pub fn print_clean_name<W: Write>(name: &str, out: &mut W) -> anyhow::Result<()> {
    let clean = clean_package_name(name);
    if !clean.is_empty() {
        writeln!(out, "{}", clean)?;
    }
    Ok(())
}
