//! Host-facing item and result types.
//!
//! [`MediaItem`] holds the fields a sidecar refresh may write. Episodes wrap
//! it with their series fields; both expose the shared fields through
//! `AsMut<MediaItem>` so the mapper is written once.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ytmeta_common::{ItemKind, PersonType};

/// External provider ids keyed by canonical provider key.
pub type ProviderIds = BTreeMap<String, String>;

/// A library item (movie, music video, trailer, or the shared part of an episode).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MediaItem {
    pub kind: ItemKind,
    pub path: PathBuf,
    pub name: Option<String>,
    pub overview: Option<String>,
    pub provider_ids: ProviderIds,
    pub production_year: Option<i32>,
    pub premiere_date: Option<DateTime<Utc>>,
    /// Insertion-ordered, no duplicates.
    pub tags: Vec<String>,
    /// Insertion-ordered, no duplicates.
    pub genres: Vec<String>,
    /// When the host last persisted this item's metadata.
    pub date_last_saved: DateTime<Utc>,
}

impl MediaItem {
    /// Create an empty item for `path`. `date_last_saved` starts at the Unix
    /// epoch so any existing sidecar counts as newer.
    pub fn new(path: impl Into<PathBuf>, kind: ItemKind) -> Self {
        Self {
            kind,
            path: path.into(),
            name: None,
            overview: None,
            provider_ids: ProviderIds::new(),
            production_year: None,
            premiere_date: None,
            tags: Vec::new(),
            genres: Vec::new(),
            date_last_saved: DateTime::<Utc>::UNIX_EPOCH,
        }
    }

    /// Directory the item lives in: the path itself for folder items,
    /// otherwise its parent.
    pub fn containing_folder(&self) -> Option<&Path> {
        if self.path.is_dir() {
            Some(&self.path)
        } else {
            self.path.parent()
        }
    }

    /// Add a tag unless an identical one is already present.
    pub fn add_tag(&mut self, tag: &str) {
        push_unique(&mut self.tags, tag);
    }

    /// Add a genre unless an identical one is already present.
    pub fn add_genre(&mut self, genre: &str) {
        push_unique(&mut self.genres, genre);
    }
}

fn push_unique(values: &mut Vec<String>, value: &str) {
    if !values.iter().any(|v| v == value) {
        values.push(value.to_string());
    }
}

impl AsMut<MediaItem> for MediaItem {
    fn as_mut(&mut self) -> &mut MediaItem {
        self
    }
}

/// An episode of a series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Episode {
    #[serde(flatten)]
    pub item: MediaItem,
    pub series_name: Option<String>,
    /// Episode number within the season.
    pub index_number: Option<i32>,
    /// Season number.
    pub parent_index_number: Option<i32>,
}

impl Episode {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            item: MediaItem::new(path, ItemKind::Episode),
            series_name: None,
            index_number: None,
            parent_index_number: None,
        }
    }
}

impl AsMut<MediaItem> for Episode {
    fn as_mut(&mut self) -> &mut MediaItem {
        &mut self.item
    }
}

/// Item produced by a refresh, chosen by whether the sidecar names a series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SidecarMetadata {
    Standalone(MediaItem),
    Episode(Episode),
}

impl SidecarMetadata {
    /// Shared fields of either variant.
    pub fn item(&self) -> &MediaItem {
        match self {
            Self::Standalone(item) => item,
            Self::Episode(episode) => &episode.item,
        }
    }
}

/// A person credited on an item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonCredit {
    pub name: String,
    pub person_type: PersonType,
    pub provider_ids: ProviderIds,
}

/// Outcome of a metadata request.
///
/// `has_metadata == false` means no usable sidecar was found; `item` is then
/// `None` and `people` is empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetadataResult<T> {
    pub has_metadata: bool,
    pub item: Option<T>,
    pub people: Vec<PersonCredit>,
}

impl<T> MetadataResult<T> {
    pub fn empty() -> Self {
        Self {
            has_metadata: false,
            item: None,
            people: Vec::new(),
        }
    }

    pub fn with_item(item: T) -> Self {
        Self {
            has_metadata: true,
            item: Some(item),
            people: Vec::new(),
        }
    }

    /// Append a credit; existing credits are left alone.
    pub fn add_person(&mut self, person: PersonCredit) {
        self.people.push(person);
    }
}

impl<T> Default for MetadataResult<T> {
    fn default() -> Self {
        Self::empty()
    }
}
