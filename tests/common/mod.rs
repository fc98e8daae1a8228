//! Shared fixtures for integration tests.
//!
//! [`TestLibrary`] is a scratch directory into which tests drop videos,
//! `.info.json` sidecars, and real PNG thumbnails.

#![allow(dead_code)]

use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// Scratch media folder, removed on drop.
pub struct TestLibrary {
    dir: TempDir,
}

impl TestLibrary {
    pub fn new() -> Self {
        Self {
            dir: tempfile::tempdir().expect("failed to create temp dir"),
        }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Create an empty `<stem>.mkv` and return its path.
    pub fn add_video(&self, stem: &str) -> PathBuf {
        let path = self.dir.path().join(format!("{stem}.mkv"));
        std::fs::write(&path, b"").expect("failed to write video");
        path
    }

    /// Create `<stem>.mkv` with a sidecar containing `sidecar`.
    pub fn add_video_with_sidecar(&self, stem: &str, sidecar: serde_json::Value) -> PathBuf {
        self.write_sidecar(stem, &sidecar.to_string());
        self.add_video(stem)
    }

    /// Write raw sidecar text for `stem`.
    pub fn write_sidecar(&self, stem: &str, text: &str) -> PathBuf {
        let path = self.dir.path().join(format!("{stem}.info.json"));
        std::fs::write(&path, text).expect("failed to write sidecar");
        path
    }

    /// Save a real image of the given size; the format follows the extension.
    pub fn add_image(&self, name: &str, width: u32, height: u32) -> PathBuf {
        let path = self.dir.path().join(name);
        image::RgbImage::new(width, height)
            .save(&path)
            .expect("failed to write image");
        path
    }

    /// Write arbitrary bytes under `name`.
    pub fn add_file(&self, name: &str, contents: &[u8]) -> PathBuf {
        let path = self.dir.path().join(name);
        std::fs::write(&path, contents).expect("failed to write file");
        path
    }
}

/// A typical YouTube sidecar.
pub fn youtube_sidecar() -> serde_json::Value {
    serde_json::json!({
        "id": "dQw4w9WgXcQ",
        "extractor_key": "Youtube",
        "uploader": "Rick Astley",
        "uploader_id": "RickAstleyVEVO",
        "channel_id": "UCuAXFkgsw1L7xaCfnd5JJOw",
        "timestamp": 1256453919,
        "upload_date": "20091025",
        "title": "Never Gonna Give You Up",
        "fulltitle": "Rick Astley - Never Gonna Give You Up (Official Music Video)",
        "description": "The official video for Never Gonna Give You Up",
        "thumbnail": "https://i.ytimg.com/vi/dQw4w9WgXcQ/maxresdefault.jpg",
        "age_limit": 0,
        "tags": ["rick astley", " Never Gonna Give You Up ", "rick astley", ""],
        "categories": ["Music"],
        "formats": [{"format_id": "18", "ext": "mp4"}],
        "view_count": 1234567890
    })
}
