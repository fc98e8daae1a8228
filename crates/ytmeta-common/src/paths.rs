//! Path utilities for sidecar naming and extension checks.
//!
//! The downloader writes `<stem>.info.json` next to each media file and
//! thumbnails such as `<stem>.jpg` or `<stem>_2.webp`; these helpers derive
//! those names from an item path.

use std::path::Path;

/// Suffix appended to an item's file stem to locate its sidecar file.
pub const SIDECAR_SUFFIX: &str = ".info.json";

/// List of supported video file extensions.
const VIDEO_EXTENSIONS: &[&str] = &[
    "mkv", "mp4", "avi", "m4v", "ts", "webm", "mov", "wmv", "flv",
];

/// Check if a path has a video file extension.
///
/// # Examples
///
/// ```
/// use std::path::Path;
/// use ytmeta_common::paths::is_video_file;
///
/// assert!(is_video_file(Path::new("clip.webm")));
/// assert!(!is_video_file(Path::new("clip.info.json")));
/// ```
pub fn is_video_file(path: &Path) -> bool {
    normalized_extension(path)
        .map(|ext| VIDEO_EXTENSIONS.contains(&ext.as_str()))
        .unwrap_or(false)
}

/// The file name of `path` without its final extension, as UTF-8.
pub fn file_stem_str(path: &Path) -> Option<&str> {
    path.file_stem().and_then(|s| s.to_str())
}

/// Lowercased extension of `path`, without the leading dot.
///
/// # Examples
///
/// ```
/// use std::path::Path;
/// use ytmeta_common::paths::normalized_extension;
///
/// assert_eq!(normalized_extension(Path::new("thumb.JPG")).as_deref(), Some("jpg"));
/// assert_eq!(normalized_extension(Path::new("README")), None);
/// ```
pub fn normalized_extension(path: &Path) -> Option<String> {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(normalize_extension)
}

/// Lowercase an extension string and strip any leading dots.
pub fn normalize_extension(ext: &str) -> String {
    ext.trim_start_matches('.').to_lowercase()
}

/// Sidecar file name for an item path: `<stem>.info.json`.
pub fn sidecar_file_name(item_path: &Path) -> Option<String> {
    file_stem_str(item_path).map(|stem| format!("{stem}{SIDECAR_SUFFIX}"))
}
