//! Extractor name resolution.
//!
//! youtube-dl names its site extractors inconsistently (`Youtube`, `NRKTV`,
//! `NRKTVEpisode`, ...). [`ExtractorRegistry`] maps those names onto the
//! canonical provider keys used for external ids, and records which
//! providers need their id taken from `playlist_id` instead of `id`.

use std::collections::{BTreeSet, HashMap};
use std::sync::LazyLock;

use tracing::warn;

use super::sidecar::SidecarDescriptor;

/// Built-in extractor → canonical key mappings.
const BUILTIN_MAPPINGS: &[(&str, &str)] = &[("NRKTV", "NRK")];

/// Canonical keys whose `id` does not produce a working link.
/// The NRK extractors put the program id in `playlist_id`.
const BUILTIN_PLAYLIST_ID_KEYS: &[&str] = &["NRK"];

static BUILTIN: LazyLock<ExtractorRegistry> = LazyLock::new(ExtractorRegistry::new);

/// Case-insensitive extractor → canonical key table plus the known-bug
/// override list.
#[derive(Debug, Clone)]
pub struct ExtractorRegistry {
    /// Keyed by ASCII-lowercased extractor name.
    mappings: HashMap<String, String>,
    playlist_id_keys: BTreeSet<String>,
}

impl ExtractorRegistry {
    /// A registry containing only the built-in entries.
    pub fn new() -> Self {
        let mut registry = Self {
            mappings: HashMap::new(),
            playlist_id_keys: BTreeSet::new(),
        };
        for (extractor, canonical) in BUILTIN_MAPPINGS {
            registry.insert_mapping(extractor, canonical);
        }
        for key in BUILTIN_PLAYLIST_ID_KEYS {
            registry.insert_playlist_id_key(key);
        }
        registry
    }

    /// Process-wide built-in registry, initialised on first use.
    pub fn builtin() -> &'static ExtractorRegistry {
        &BUILTIN
    }

    /// Add or replace a mapping. Later entries for the same extractor
    /// (compared case-insensitively) win.
    pub fn insert_mapping(&mut self, extractor: &str, canonical: &str) {
        self.mappings
            .insert(extractor.to_ascii_lowercase(), canonical.to_string());
    }

    /// Mark a canonical key as taking its external id from `playlist_id`.
    pub fn insert_playlist_id_key(&mut self, canonical: &str) {
        self.playlist_id_keys.insert(canonical.to_string());
    }

    /// Resolve an extractor name to its canonical provider key.
    ///
    /// Names absent from the table pass through unchanged.
    pub fn resolve(&self, extractor_key: &str) -> String {
        self.mappings
            .get(&extractor_key.to_ascii_lowercase())
            .cloned()
            .unwrap_or_else(|| extractor_key.to_string())
    }

    /// Whether `canonical` is on the known-bug override list.
    pub fn uses_playlist_id(&self, canonical: &str) -> bool {
        self.playlist_id_keys.contains(canonical)
    }

    /// The external id to record for `canonical`.
    ///
    /// This is the descriptor's `id`, except for keys on the override list,
    /// which use `playlist_id`. If such a descriptor has no `playlist_id` the
    /// plain `id` is used and a warning is logged.
    pub fn effective_id(&self, canonical: &str, descriptor: &SidecarDescriptor) -> String {
        if !self.uses_playlist_id(canonical) {
            return descriptor.id.clone();
        }

        match &descriptor.playlist_id {
            Some(playlist_id) => playlist_id.clone(),
            None => {
                warn!(
                    provider = canonical,
                    id = %descriptor.id,
                    "Sidecar has no playlist_id; falling back to id"
                );
                descriptor.id.clone()
            }
        }
    }
}

impl Default for ExtractorRegistry {
    fn default() -> Self {
        Self::new()
    }
}
