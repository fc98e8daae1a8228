//! Core type definitions for media items, images, and credits.
//!
//! All enums are serialized in lowercase for compatibility with Jellyfin API
//! expectations.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of library item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemKind {
    /// A single movie.
    Movie,
    /// A music video.
    MusicVideo,
    /// A single episode within a season.
    Episode,
    /// A trailer.
    Trailer,
    /// A TV series (show).
    Series,
    /// A season within a series.
    Season,
    /// An audio track.
    Audio,
}

impl ItemKind {
    /// Whether sidecar metadata and local image selection apply to this kind.
    pub fn supports_sidecar_metadata(self) -> bool {
        matches!(
            self,
            Self::Movie | Self::MusicVideo | Self::Episode | Self::Trailer
        )
    }
}

impl fmt::Display for ItemKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Movie => write!(f, "movie"),
            Self::MusicVideo => write!(f, "musicvideo"),
            Self::Episode => write!(f, "episode"),
            Self::Trailer => write!(f, "trailer"),
            Self::Series => write!(f, "series"),
            Self::Season => write!(f, "season"),
            Self::Audio => write!(f, "audio"),
        }
    }
}

/// Type of item image/artwork.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImageType {
    /// Primary poster/thumbnail image.
    Primary,
}

impl fmt::Display for ImageType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Primary => write!(f, "primary"),
        }
    }
}

/// Role of a person credit.
///
/// The host has no dedicated uploader role, so channel owners are credited
/// as [`PersonType::Director`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PersonType {
    Director,
}

impl fmt::Display for PersonType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Director => write!(f, "Director"),
        }
    }
}
