//! Sidecar metadata pipeline.
//!
//! Turns the `.info.json` files written by youtube-dl / yt-dlp into item
//! metadata without touching the network.
//!
//! # Module layout
//!
//! - [`sidecar`] -- The descriptor data contract and file location.
//! - [`extractor`] -- Extractor name → canonical provider key resolution.
//! - [`mapper`] -- Applies descriptor fields onto an item.
//! - [`person`] -- Uploader credit derivation.
//! - [`change`] -- Sidecar staleness detection.
//! - [`provider`] -- The refresh entry point tying the above together.
//! - [`external_ids`] -- Link templates for the ids written.

pub mod change;
pub mod external_ids;
pub mod extractor;
pub mod item;
pub mod mapper;
pub mod person;
pub mod provider;
pub mod sidecar;

pub use extractor::ExtractorRegistry;
pub use item::{Episode, MediaItem, MetadataResult, PersonCredit, ProviderIds, SidecarMetadata};
pub use mapper::apply_sidecar;
pub use provider::SidecarProvider;
pub use sidecar::{read_sidecar, sidecar_path, SidecarDescriptor};
