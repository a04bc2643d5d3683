//! Version layer: parsing, ordering, per-major reduction and version sources
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐
//! │   Source    │────▶│ VersionList │────▶│   Latest    │
//! │  (fetch)    │     │   (types)   │     │  (reduce)   │
//! └─────────────┘     └─────────────┘     └─────────────┘
//!        │
//!        ▼
//! ┌─────────────┐
//! │   Sources   │
//! │  (GitHub)   │
//! └─────────────┘
//! ```
//!
//! # Modules
//!
//! - [`types`]: `Version` with its total ordering, and `VersionList`
//! - [`latest`]: Latest version per major line
//! - [`source`]: Source trait for listing a repository's versions
//! - [`sources`]: Concrete sources (GitHub)
//! - [`error`]: Error types for version parsing and source fetches

pub mod error;
pub mod latest;
pub mod source;
pub mod sources;
pub mod types;

pub use latest::{LatestVersions, reduce, resolve_major};
pub use types::{Version, VersionList};
