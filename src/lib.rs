//! gallerysync - keeps a web page's gallery image list in sync with disk
//!
//! gallerysync scans an image directory and rewrites the `const images = [...];`
//! declaration in a page script so that it lists exactly the images present.
//!
//! ## Core Features
//!
//! - **Extension Filtering**: Only direct-child files with an accepted extension are listed
//! - **Stable Output**: Entries are sorted, so unchanged directories never rewrite the script
//! - **Configuration Management**: YAML-based configuration with XDG compliance
//! - **Explicit Outcomes**: Missing directories and missing declarations are reported, not silent
//!
//! ## Modules
//!
//! - [`config`]: Configuration management and parsing
//! - [`scan`]: Image directory scanning
//! - [`render`]: Declaration rendering
//! - [`splice`]: Declaration matching and substitution
//! - [`sync`]: Synchronization run orchestration

pub mod config;
pub mod error;
pub mod render;
pub mod scan;
pub mod splice;
pub mod sync;

pub use config::Config;
pub use error::SyncError;
pub use scan::ImageEntry;
pub use sync::{SyncOutcome, SyncReport, Synchronizer};
