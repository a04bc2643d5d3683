//! Package page template
//!
//! The bundled markup is registered once with a handlebars registry. A
//! `PageTemplate` is immutable after that and can be shared by every render
//! without locking.

use std::io::Write;

use handlebars::{Handlebars, JsonValue, handlebars_helper};
use serde::Serialize;
use thiserror::Error;

use crate::page::data::PageData;
use crate::repo::Repo;
use crate::version::types::Version;

const PAGE_HTML: &str = include_str!("assets/page.html");
const PAGE_TEMPLATE_NAME: &str = "page";

#[derive(Debug, Error)]
pub enum TemplateError {
    #[error("Invalid page template: {0}")]
    Invalid(#[from] handlebars::TemplateError),
}

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("Failed to render page: {0}")]
    Template(#[from] handlebars::RenderError),

    #[error("Failed to write page: {0}")]
    Io(#[from] std::io::Error),
}

handlebars_helper!(eq: |a: JsonValue, b: JsonValue| a == b);
handlebars_helper!(gopkg_version_root: |repo: Repo, version: Version| repo.gopkg_version_root(&version));
handlebars_helper!(js_string: |s: str| js_string_literal(s));

/// Values the page markup references, on top of the assembled page data
#[derive(Serialize)]
struct PageContext<'a> {
    #[serde(flatten)]
    page: &'a PageData<'a>,
    package_name: &'a str,
    gopkg_path: String,
    github_root: String,
    source_ref: String,
    docs_url: String,
}

/// Package page template, registered once at startup
#[derive(Debug, Clone)]
pub struct PageTemplate {
    registry: Handlebars<'static>,
    docs_host: String,
}

impl PageTemplate {
    /// Register template markup. Documentation links point at `docs_host`.
    pub fn parse(source: &str, docs_host: &str) -> Result<Self, TemplateError> {
        let mut registry = Handlebars::new();
        registry.register_template_string(PAGE_TEMPLATE_NAME, source)?;
        registry.register_helper("eq", Box::new(eq));
        registry.register_helper("gopkgVersionRoot", Box::new(gopkg_version_root));
        registry.register_helper("jsString", Box::new(js_string));

        Ok(Self {
            registry,
            docs_host: docs_host.to_string(),
        })
    }

    /// The bundled package page markup
    pub fn default_page(docs_host: &str) -> Result<Self, TemplateError> {
        Self::parse(PAGE_HTML, docs_host)
    }

    /// Write the page for `data` to `out`
    pub fn render<W: Write>(&self, data: &PageData<'_>, out: &mut W) -> Result<(), RenderError> {
        let html = self.render_to_string(data)?;
        out.write_all(html.as_bytes())?;
        out.flush()?;
        Ok(())
    }

    pub fn render_to_string(&self, data: &PageData<'_>) -> Result<String, RenderError> {
        let repo = data.repo;
        let context = PageContext {
            page: data,
            package_name: repo.package_name(),
            gopkg_path: repo.gopkg_path(),
            github_root: repo.github_root(),
            source_ref: data.source_ref(),
            docs_url: format!("https://{}/{}", self.docs_host, repo.gopkg_path()),
        };
        Ok(self.registry.render(PAGE_TEMPLATE_NAME, &context)?)
    }
}

/// Quote `s` as a JavaScript string literal that is safe inside a `<script>`
/// element.
fn js_string_literal(s: &str) -> String {
    serde_json::to_string(s)
        .unwrap_or_default()
        .replace('<', "\\u003c")
        .replace('>', "\\u003e")
        .replace('&', "\\u0026")
}
