//! Library directory scanner.
//!
//! Walks a directory for video files that have a sidecar and refreshes each
//! one. Items are independent, so they are processed in parallel.

use std::path::{Path, PathBuf};

use rayon::prelude::*;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};
use walkdir::WalkDir;
use ytmeta_common::paths::is_video_file;

use crate::images::{DirectoryService, ImageProbe, LocalImageProvider};
use crate::metadata::{sidecar_path, MediaItem, SidecarMetadata, SidecarProvider};

/// Scanner for refreshing every sidecar-backed video under a directory.
pub struct Scanner<D, P> {
    provider: SidecarProvider,
    images: LocalImageProvider<D, P>,
}

/// Result of scanning a single file.
#[derive(Debug)]
pub struct ScanResult {
    pub path: PathBuf,
    pub metadata: Option<SidecarMetadata>,
    pub people: usize,
    pub primary_image: Option<PathBuf>,
    /// Set when the refresh failed (e.g. a malformed date).
    pub error: Option<String>,
}

impl<D: DirectoryService, P: ImageProbe> Scanner<D, P> {
    pub fn new(provider: SidecarProvider, images: LocalImageProvider<D, P>) -> Self {
        Self { provider, images }
    }

    /// Video files under `path` that have a sidecar next to them.
    pub fn discover(&self, path: &Path) -> Vec<PathBuf> {
        WalkDir::new(path)
            .follow_links(true)
            .sort_by_file_name()
            .into_iter()
            .filter_map(|e| e.ok())
            .filter(|e| e.file_type().is_file())
            .map(|e| e.into_path())
            .filter(|p| is_video_file(p))
            .filter(|p| sidecar_path(p).is_some_and(|s| s.exists()))
            .collect()
    }

    /// Scan a directory. Results are in path order.
    pub fn scan_directory(&self, path: &Path, cancel: &CancellationToken) -> Vec<ScanResult> {
        info!("Scanning directory: {:?}", path);

        let files = self.discover(path);
        debug!("Found {} videos with sidecars", files.len());

        let results: Vec<ScanResult> = files
            .par_iter()
            .map(|file| self.scan_file(file, cancel))
            .collect();

        info!(
            "Scan complete: {} of {} files refreshed from {:?}",
            results.iter().filter(|r| r.metadata.is_some()).count(),
            results.len(),
            path
        );
        results
    }

    /// Refresh a single file and select its primary image.
    pub fn scan_file(&self, path: &Path, cancel: &CancellationToken) -> ScanResult {
        let mut result = ScanResult {
            path: path.to_path_buf(),
            metadata: None,
            people: 0,
            primary_image: None,
            error: None,
        };

        match self.provider.refresh(path, cancel) {
            Ok(refreshed) => {
                result.people = refreshed.people.len();
                result.metadata = refreshed.item;
            }
            Err(e) => {
                warn!("Failed to refresh {:?}: {}", path, e);
                result.error = Some(e.to_string());
            }
        }

        let kind = match &result.metadata {
            Some(metadata) => metadata.item().kind,
            None => ytmeta_common::ItemKind::Movie,
        };
        let item = MediaItem::new(path, kind);
        result.primary_image = self
            .images
            .get_images(&item)
            .into_iter()
            .next()
            .map(|image| image.path);

        result
    }
}
