//! ramz - media loading and lead submission core for the Al-Ramz agency site
//!
//! This library holds the parts of the site that carry state: tracking
//! how far each gallery image and showreel video has loaded, deciding when
//! to fetch bytes ahead of the visitor, laying galleries out in blocks, and
//! forwarding contact leads to the management system.
//!
//! # High-Level API
//!
//! For most use cases, [`session::GallerySession`] wires the media pieces
//! together and [`contact::ContactSubmissionPipeline`] handles the form:
//!
//! ```ignore
//! use ramz::config::ConfigFile;
//! use ramz::session::{GallerySession, MediaSource};
//!
//! let config = ConfigFile::load()?.with_env_overrides()?;
//! let session = GallerySession::new(
//!     client,
//!     tracker,
//!     config.prefetch_config(),
//!     config.observe_options(),
//! );
//! let blocks = session.open(&sources);
//! ```

pub mod asset;
pub mod config;
pub mod contact;
pub mod gallery;
pub mod http;
pub mod i18n;
pub mod logging;
pub mod prefetch;
pub mod session;
pub mod visibility;

/// Version of the ramz library and CLI.
///
/// This is synchronized across all components in the workspace.
/// The version is defined in `Cargo.toml` and injected at compile time.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
