//! Local thumbnail selection.
//!
//! The downloader may leave several thumbnails next to a video
//! (`clip.jpg`, `clip.webp`, `clip_2.jpg`, ...). The widest one becomes the
//! item's primary image.

use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::{debug, warn};
use ytmeta_common::paths::{file_stem_str, normalize_extension};
use ytmeta_common::{ImageType, ItemKind};

use super::probe::{DirectoryService, FileEntry, ImageDimensions, ImageProbe};
use crate::metadata::MediaItem;

/// Provider name shown to the host.
pub const PROVIDER_NAME: &str = "YouTube Metadata";

/// A measured image file related to an item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageCandidate {
    pub file: FileEntry,
    pub dimensions: ImageDimensions,
}

/// An image assigned to an item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LocalImageInfo {
    pub path: PathBuf,
    pub image_type: ImageType,
}

/// Pick the widest supported image whose name starts with the item's stem.
///
/// Files are considered in listing order and a later file replaces the
/// current pick only when strictly wider. Files the probe cannot measure
/// are skipped. Returns `None` when nothing qualifies.
pub fn select_primary_image(
    item_path: &Path,
    entries: &[FileEntry],
    probe: &dyn ImageProbe,
) -> Option<ImageCandidate> {
    let stem = file_stem_str(item_path)?;
    let formats = probe.supported_input_formats();

    let mut best: Option<ImageCandidate> = None;
    for file in entries {
        if !file.name.starts_with(stem) {
            continue;
        }
        if !formats.contains(&normalize_extension(&file.extension)) {
            continue;
        }

        let dimensions = match probe.dimensions(&file.path) {
            Ok(dimensions) => dimensions,
            Err(e) => {
                warn!(path = %file.path.display(), error = %e, "Skipping unreadable image");
                continue;
            }
        };

        let current_width = best.as_ref().map_or(0, |b| b.dimensions.width);
        if dimensions.width > current_width {
            best = Some(ImageCandidate {
                file: file.clone(),
                dimensions,
            });
        }
    }

    best
}

/// Local image provider: lists the item's folder and picks its primary image.
pub struct LocalImageProvider<D, P> {
    directory: D,
    probe: P,
}

impl<D: DirectoryService, P: ImageProbe> LocalImageProvider<D, P> {
    pub fn new(directory: D, probe: P) -> Self {
        Self { directory, probe }
    }

    pub fn name(&self) -> &'static str {
        PROVIDER_NAME
    }

    /// Runs ahead of providers with a higher order.
    pub fn order(&self) -> i32 {
        1
    }

    pub fn supports(&self, kind: ItemKind) -> bool {
        kind.supports_sidecar_metadata()
    }

    /// Select the primary image for `item`, measured.
    pub fn select(&self, item: &MediaItem) -> Option<ImageCandidate> {
        let folder = item.containing_folder()?;
        let entries = match self.directory.list_files(folder) {
            Ok(entries) => entries,
            Err(e) => {
                warn!(folder = %folder.display(), error = %e, "Failed to list item folder");
                return None;
            }
        };

        let selected = select_primary_image(&item.path, &entries, &self.probe);
        if let Some(candidate) = &selected {
            debug!(
                file = %candidate.file.name,
                width = candidate.dimensions.width,
                height = candidate.dimensions.height,
                "Picked primary image"
            );
        }
        selected
    }

    /// Images for `item`: empty, or a single primary image.
    pub fn get_images(&self, item: &MediaItem) -> Vec<LocalImageInfo> {
        self.select(item)
            .map(|candidate| LocalImageInfo {
                path: candidate.file.path,
                image_type: ImageType::Primary,
            })
            .into_iter()
            .collect()
    }
}
