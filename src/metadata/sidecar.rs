//! The `.info.json` sidecar descriptor written by youtube-dl / yt-dlp.
//!
//! Parsing is structural: every field is optional, unknown fields are
//! ignored, and values are passed through without validation. Consumers
//! (the mapper in particular) decide what a malformed value means.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Deserializer, Serialize};
use tracing::debug;
use ytmeta_common::paths::sidecar_file_name;
use ytmeta_common::{Error, Result};

/// Typed view of a sidecar file. Read-only once parsed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SidecarDescriptor {
    /// Upstream unique identifier.
    pub id: String,
    /// Name of the site extractor that produced the file (inconsistent casing).
    pub extractor_key: String,
    /// Human-readable uploader name.
    pub uploader: Option<String>,
    pub uploader_id: Option<String>,
    pub channel_id: Option<String>,
    /// Capture time in seconds since the Unix epoch.
    #[serde(deserialize_with = "lenient_i64")]
    pub timestamp: Option<i64>,
    /// `YYYYMMDD`
    pub upload_date: Option<String>,
    /// `YYYYMMDD`
    pub release_date: Option<String>,
    pub title: Option<String>,
    #[serde(rename = "fulltitle")]
    pub full_title: Option<String>,
    pub description: Option<String>,
    pub thumbnail: Option<String>,
    pub season_number: Option<i32>,
    pub episode_number: Option<i32>,
    pub age_limit: Option<i32>,
    /// Presence marks the item as an episode of a series.
    pub series: Option<String>,
    pub tags: Option<Vec<String>>,
    pub categories: Option<Vec<String>>,
    /// Substitute identifier for extractors whose `id` does not link.
    pub playlist_id: Option<String>,
}

impl SidecarDescriptor {
    /// Parse a descriptor from JSON text.
    pub fn from_json(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }

    /// Whether the descriptor describes an episode rather than a standalone work.
    pub fn is_episode(&self) -> bool {
        self.series.is_some()
    }
}

/// Timestamps are integral in practice, but some extractors emit floats.
fn lenient_i64<'de, D>(deserializer: D) -> std::result::Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Number {
        Int(i64),
        Float(f64),
    }

    Ok(match Option::<Number>::deserialize(deserializer)? {
        Some(Number::Int(n)) => Some(n),
        Some(Number::Float(f)) => Some(f.trunc() as i64),
        None => None,
    })
}

/// Locate the sidecar for an item path.
///
/// The sidecar lives in the item's directory (the path itself when it is a
/// directory, otherwise its parent) and is named `<stem>.info.json`. The file
/// is not required to exist.
pub fn sidecar_path(item_path: &Path) -> Option<PathBuf> {
    let file_name = sidecar_file_name(item_path)?;
    let dir = if item_path.is_dir() {
        item_path
    } else {
        item_path.parent()?
    };
    Some(dir.join(file_name))
}

/// Read and parse a sidecar file.
///
/// # Errors
///
/// [`Error::NotFound`] when the file does not exist, [`Error::Json`] when it
/// is not a structurally valid descriptor, [`Error::Io`] for other read
/// failures.
pub fn read_sidecar(path: &Path) -> Result<SidecarDescriptor> {
    let text = match std::fs::read_to_string(path) {
        Ok(text) => text,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            return Err(Error::not_found(path.display().to_string()));
        }
        Err(e) => return Err(e.into()),
    };

    let descriptor = SidecarDescriptor::from_json(&text)?;
    debug!(
        path = %path.display(),
        id = %descriptor.id,
        extractor = %descriptor.extractor_key,
        "Parsed sidecar"
    );
    Ok(descriptor)
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn parses_known_fields_and_ignores_unknown() {
        let json = r#"{
            "id": "dQw4w9WgXcQ",
            "extractor_key": "Youtube",
            "uploader": "Rick Astley",
            "channel_id": "UCuAXFkgsw1L7xaCfnd5JJOw",
            "timestamp": 1256453919,
            "upload_date": "20091025",
            "fulltitle": "Never Gonna Give You Up",
            "tags": ["rick", "astley"],
            "formats": [{"format_id": "22"}],
            "view_count": 1500000000
        }"#;

        let d = SidecarDescriptor::from_json(json).unwrap();
        assert_eq!(d.id, "dQw4w9WgXcQ");
        assert_eq!(d.extractor_key, "Youtube");
        assert_eq!(d.uploader.as_deref(), Some("Rick Astley"));
        assert_eq!(d.timestamp, Some(1256453919));
        assert_eq!(d.full_title.as_deref(), Some("Never Gonna Give You Up"));
        assert_eq!(d.tags, Some(vec!["rick".to_string(), "astley".to_string()]));
        assert!(d.series.is_none());
        assert!(!d.is_episode());
    }

    #[test]
    fn missing_and_null_fields_are_absent() {
        let d = SidecarDescriptor::from_json(r#"{"series": null, "tags": null}"#).unwrap();
        assert_eq!(d, SidecarDescriptor::default());
    }

    #[test]
    fn float_timestamp_is_truncated() {
        let d = SidecarDescriptor::from_json(r#"{"timestamp": 1600000000.75}"#).unwrap();
        assert_eq!(d.timestamp, Some(1600000000));
    }

    #[test]
    fn malformed_dates_pass_through() {
        let d = SidecarDescriptor::from_json(r#"{"release_date": "not-a-date"}"#).unwrap();
        assert_eq!(d.release_date.as_deref(), Some("not-a-date"));
    }

    #[test]
    fn type_mismatch_is_json_error() {
        let err = SidecarDescriptor::from_json(r#"{"tags": "single"}"#).unwrap_err();
        assert_matches!(err, Error::Json(_));
    }

    #[test]
    fn read_missing_file_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let err = read_sidecar(&dir.path().join("absent.info.json")).unwrap_err();
        assert_matches!(err, Error::NotFound(_));
    }

    #[test]
    fn sidecar_path_for_file_and_directory() {
        let dir = tempfile::tempdir().unwrap();
        let video = dir.path().join("clip.webm");
        assert_eq!(sidecar_path(&video).unwrap(), dir.path().join("clip.info.json"));

        let sub = dir.path().join("Channel");
        std::fs::create_dir(&sub).unwrap();
        assert_eq!(
            sidecar_path(&sub).unwrap(),
            sub.join("Channel.info.json")
        );
    }
}
