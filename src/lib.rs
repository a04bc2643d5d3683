//! Landing page renderer for a gopkg.in style versioned package redirector.
//!
//! Given an import path such as `gopkg.in/yaml.v2` and the versions its
//! repository publishes, renders a page with the import path, source and
//! documentation links, and the latest version of every major line.

pub mod commands;
pub mod config;
pub mod logging;
pub mod page;
pub mod repo;
pub mod resolve;
pub mod version;
