use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::images::ImageCrateProbe;
use crate::metadata::ExtractorRegistry;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub extractors: ExtractorConfig,

    #[serde(default)]
    pub images: ImageConfig,
}

impl Config {
    /// Built-in extractor table extended with the configured entries.
    pub fn extractor_registry(&self) -> ExtractorRegistry {
        let mut registry = ExtractorRegistry::new();
        for (extractor, canonical) in &self.extractors.mappings {
            registry.insert_mapping(extractor, canonical);
        }
        for key in &self.extractors.playlist_id_keys {
            registry.insert_playlist_id_key(key);
        }
        registry
    }

    /// Image probe restricted to the configured extensions.
    pub fn image_probe(&self) -> ImageCrateProbe {
        ImageCrateProbe::with_extensions(&self.images.extensions)
    }
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ExtractorConfig {
    /// Extra extractor → canonical key mappings (extractor matched case-insensitively)
    #[serde(default)]
    pub mappings: BTreeMap<String, String>,

    /// Canonical keys whose external id is taken from `playlist_id`
    #[serde(default)]
    pub playlist_id_keys: Vec<String>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ImageConfig {
    /// Image extensions to consider (empty = every format the probe can read)
    #[serde(default)]
    pub extensions: Vec<String>,
}
