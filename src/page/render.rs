use std::io::Write;

use tracing::{debug, error};

use crate::page::data::PageData;
use crate::page::template::{PageTemplate, RenderError};
use crate::repo::Repo;

/// Assemble the page for `repo` and write it to `out`.
pub fn try_render_package_page<W: Write>(
    template: &PageTemplate,
    repo: &Repo,
    out: &mut W,
) -> Result<(), RenderError> {
    let data = PageData::assemble(repo);
    debug!(
        "Rendering {} with {} major lines (resolved: {:?})",
        repo.gopkg_path(),
        data.latest_versions.len(),
        data.full_version.map(|v| v.to_string())
    );
    template.render(&data, out)
}

/// Render the package page, logging a failed write instead of returning it.
///
/// The output may be partially written when this fails; nothing is retried.
pub fn render_package_page<W: Write>(template: &PageTemplate, repo: &Repo, out: &mut W) {
    if let Err(e) = try_render_package_page(template, repo, out) {
        error!("Error rendering package page for {}: {}", repo.gopkg_path(), e);
    }
}
