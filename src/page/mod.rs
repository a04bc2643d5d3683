//! Package landing page
//!
//! # Modules
//!
//! - [`name`]: Clean display name derived from the raw package name
//! - [`data`]: Per-render page data assembled from a `Repo`
//! - [`template`]: Template parsed once and rendered per request
//! - [`render`]: Render entry points with failure logging

pub mod data;
pub mod name;
pub mod render;
pub mod template;

pub use data::PageData;
pub use name::clean_package_name;
pub use render::{render_package_page, try_render_package_page};
pub use template::{PageTemplate, RenderError, TemplateError};
