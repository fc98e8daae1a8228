//! Local metadata provider backed by `.info.json` sidecars.
//!
//! [`SidecarProvider`] is the refresh entry point: it locates the sidecar
//! for an item path, parses it, decides whether the item is a standalone
//! work or an episode, and maps the sidecar onto a fresh item.

use std::path::Path;

use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};
use ytmeta_common::{Error, ItemKind, Result};

use super::change;
use super::extractor::ExtractorRegistry;
use super::item::{Episode, MediaItem, MetadataResult, SidecarMetadata};
use super::mapper::apply_sidecar;
use super::person::derive_uploader;
use super::sidecar::{read_sidecar, sidecar_path, SidecarDescriptor};

/// Provider name shown to the host.
pub const PROVIDER_NAME: &str = "YouTube Metadata";

/// Reads sidecars and produces enriched items.
///
/// Stateless apart from its extractor table; share it freely across threads.
#[derive(Debug, Clone, Default)]
pub struct SidecarProvider {
    registry: ExtractorRegistry,
}

impl SidecarProvider {
    /// Create a provider using the given extractor table.
    pub fn new(registry: ExtractorRegistry) -> Self {
        Self { registry }
    }

    pub fn name(&self) -> &'static str {
        PROVIDER_NAME
    }

    /// Whether the provider handles items of this kind.
    pub fn supports(&self, kind: ItemKind) -> bool {
        kind.supports_sidecar_metadata()
    }

    pub fn registry(&self) -> &ExtractorRegistry {
        &self.registry
    }

    /// Refresh an item, choosing standalone or episode from the sidecar.
    ///
    /// A missing or structurally invalid sidecar yields an empty result, as
    /// does a path without a UTF-8 file name.
    ///
    /// # Errors
    ///
    /// [`Error::Cancelled`] if `cancel` fired before the sidecar was read,
    /// [`Error::Parse`] for a malformed date, [`Error::Io`] for read failures
    /// other than a missing file.
    pub fn refresh(
        &self,
        item_path: &Path,
        cancel: &CancellationToken,
    ) -> Result<MetadataResult<SidecarMetadata>> {
        let Some(descriptor) = self.load(item_path, cancel)? else {
            return Ok(MetadataResult::empty());
        };

        if descriptor.is_episode() {
            let result = self.build_episode(item_path, &descriptor)?;
            Ok(wrap(result, SidecarMetadata::Episode))
        } else {
            let result = self.build_standalone(item_path, &descriptor)?;
            Ok(wrap(result, SidecarMetadata::Standalone))
        }
    }

    /// Metadata for a movie. Sidecars naming a series yield no metadata.
    pub fn get_movie_metadata(
        &self,
        item_path: &Path,
        cancel: &CancellationToken,
    ) -> Result<MetadataResult<MediaItem>> {
        match self.load(item_path, cancel)? {
            Some(descriptor) if !descriptor.is_episode() => {
                self.build_standalone(item_path, &descriptor)
            }
            Some(_) => {
                debug!(path = %item_path.display(), "Sidecar describes an episode; not a movie");
                Ok(MetadataResult::empty())
            }
            None => Ok(MetadataResult::empty()),
        }
    }

    /// Metadata for an episode. Sidecars without a series yield no metadata.
    pub fn get_episode_metadata(
        &self,
        item_path: &Path,
        cancel: &CancellationToken,
    ) -> Result<MetadataResult<Episode>> {
        match self.load(item_path, cancel)? {
            Some(descriptor) if descriptor.is_episode() => {
                self.build_episode(item_path, &descriptor)
            }
            Some(_) => {
                debug!(path = %item_path.display(), "Sidecar has no series; not an episode");
                Ok(MetadataResult::empty())
            }
            None => Ok(MetadataResult::empty()),
        }
    }

    /// Whether the item's sidecar is newer than its last save.
    pub fn has_changed(&self, item: &MediaItem) -> bool {
        change::has_changed(&item.path, item.date_last_saved)
    }

    /// Read the sidecar for `item_path`, mapping "no usable metadata" to `None`.
    fn load(
        &self,
        item_path: &Path,
        cancel: &CancellationToken,
    ) -> Result<Option<SidecarDescriptor>> {
        let Some(path) = sidecar_path(item_path) else {
            warn!(path = %item_path.display(), "No UTF-8 file name to derive a sidecar from");
            return Ok(None);
        };

        if cancel.is_cancelled() {
            return Err(Error::Cancelled);
        }

        match read_sidecar(&path) {
            Ok(descriptor) => Ok(Some(descriptor)),
            Err(Error::NotFound(_)) => {
                info!(path = %path.display(), "Could not find sidecar");
                Ok(None)
            }
            Err(e @ Error::Json(_)) => {
                warn!(path = %path.display(), error = %e, "Ignoring unreadable sidecar");
                Ok(None)
            }
            Err(e) => Err(e),
        }
    }

    fn build_standalone(
        &self,
        item_path: &Path,
        descriptor: &SidecarDescriptor,
    ) -> Result<MetadataResult<MediaItem>> {
        let mut item = MediaItem::new(item_path, ItemKind::Movie);
        apply_sidecar(&mut item, descriptor, &self.registry)?;
        Ok(self.finish(item, descriptor))
    }

    fn build_episode(
        &self,
        item_path: &Path,
        descriptor: &SidecarDescriptor,
    ) -> Result<MetadataResult<Episode>> {
        let mut episode = Episode::new(item_path);
        episode.series_name = descriptor.series.clone();
        episode.index_number = descriptor.episode_number;
        episode.parent_index_number = descriptor.season_number;

        apply_sidecar(&mut episode, descriptor, &self.registry)?;
        Ok(self.finish(episode, descriptor))
    }

    fn finish<T>(&self, item: T, descriptor: &SidecarDescriptor) -> MetadataResult<T> {
        let mut result = MetadataResult::with_item(item);
        let canonical = self.registry.resolve(&descriptor.extractor_key);
        if let Some(uploader) = derive_uploader(descriptor, &canonical) {
            result.add_person(uploader);
        }
        result
    }
}

fn wrap<T>(
    result: MetadataResult<T>,
    variant: impl FnOnce(T) -> SidecarMetadata,
) -> MetadataResult<SidecarMetadata> {
    MetadataResult {
        has_metadata: result.has_metadata,
        item: result.item.map(variant),
        people: result.people,
    }
}
