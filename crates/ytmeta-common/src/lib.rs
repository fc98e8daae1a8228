//! Ytmeta-Common: Shared types, constants, and utilities.
//!
//! This crate provides common functionality used across ytmeta:
//!
//! - **Core Types**: Enums for item kinds, image types, and person types
//! - **Path Utilities**: Sidecar location and extension helpers
//! - **Error Handling**: Common error types and result aliases
//!
//! # Examples
//!
//! ```
//! use ytmeta_common::{ItemKind, Error, Result};
//! use ytmeta_common::paths::sidecar_file_name;
//! use std::path::Path;
//!
//! assert!(ItemKind::Episode.supports_sidecar_metadata());
//! assert_eq!(
//!     sidecar_file_name(Path::new("clip.webm")).as_deref(),
//!     Some("clip.info.json")
//! );
//!
//! fn example() -> Result<()> {
//!     Err(Error::not_found("clip.info.json"))
//! }
//! ```

pub mod error;
pub mod paths;
pub mod types;

pub use error::{Error, Result};
pub use types::*;
