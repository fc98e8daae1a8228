//! Directory listing and image dimension probing.
//!
//! Both are collaborators of the image selector and sit behind traits so
//! hosts can supply their own. The defaults read the local filesystem and
//! decode image headers with the `image` crate.

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use walkdir::WalkDir;
use ytmeta_common::paths::normalize_extension;
use ytmeta_common::{Error, Result};

/// A file in a directory listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileEntry {
    /// File name including extension.
    pub name: String,
    /// Extension including the leading dot (`".jpg"`), empty when none.
    pub extension: String,
    pub path: PathBuf,
    pub modified: Option<DateTime<Utc>>,
}

impl FileEntry {
    /// Build an entry from a path, without touching the filesystem.
    pub fn from_path(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        let extension = path
            .extension()
            .map(|e| format!(".{}", e.to_string_lossy()))
            .unwrap_or_default();
        Self {
            name,
            extension,
            path,
            modified: None,
        }
    }
}

/// Lists the files directly inside a directory.
pub trait DirectoryService: Send + Sync {
    fn list_files(&self, dir: &Path) -> std::io::Result<Vec<FileEntry>>;
}

/// [`DirectoryService`] over the local filesystem. Entries are sorted by name.
#[derive(Debug, Clone, Copy, Default)]
pub struct FsDirectoryService;

impl DirectoryService for FsDirectoryService {
    fn list_files(&self, dir: &Path) -> std::io::Result<Vec<FileEntry>> {
        let mut files = Vec::new();
        for entry in WalkDir::new(dir)
            .min_depth(1)
            .max_depth(1)
            .sort_by_file_name()
        {
            let entry = entry.map_err(std::io::Error::from)?;
            if !entry.file_type().is_file() {
                continue;
            }

            let mut file = FileEntry::from_path(entry.path());
            file.modified = entry
                .metadata()
                .ok()
                .and_then(|m| m.modified().ok())
                .map(DateTime::<Utc>::from);
            files.push(file);
        }
        Ok(files)
    }
}

/// Pixel dimensions of an image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ImageDimensions {
    pub width: u32,
    pub height: u32,
}

/// Reports which image formats it understands and measures image files.
pub trait ImageProbe: Send + Sync {
    /// Lowercase extensions without the leading dot.
    fn supported_input_formats(&self) -> &BTreeSet<String>;

    fn dimensions(&self, path: &Path) -> Result<ImageDimensions>;
}

/// [`ImageProbe`] backed by the `image` crate. Only headers are decoded.
#[derive(Debug, Clone)]
pub struct ImageCrateProbe {
    formats: BTreeSet<String>,
}

impl ImageCrateProbe {
    /// Probe accepting every format the `image` crate can read.
    pub fn new() -> Self {
        let formats = image::ImageFormat::all()
            .filter(|format| format.reading_enabled())
            .flat_map(|format| format.extensions_str().iter())
            .map(|ext| normalize_extension(ext))
            .collect();
        Self { formats }
    }

    /// Restrict the supported set to `extensions`. An empty list keeps every
    /// readable format; extensions the `image` crate cannot read are dropped.
    pub fn with_extensions<S: AsRef<str>>(extensions: &[S]) -> Self {
        let mut probe = Self::new();
        if !extensions.is_empty() {
            let wanted: BTreeSet<String> = extensions
                .iter()
                .map(|e| normalize_extension(e.as_ref()))
                .collect();
            probe.formats.retain(|f| wanted.contains(f));
        }
        probe
    }
}

impl Default for ImageCrateProbe {
    fn default() -> Self {
        Self::new()
    }
}

impl ImageProbe for ImageCrateProbe {
    fn supported_input_formats(&self) -> &BTreeSet<String> {
        &self.formats
    }

    fn dimensions(&self, path: &Path) -> Result<ImageDimensions> {
        let (width, height) = image::image_dimensions(path)
            .map_err(|e| Error::probe(format!("{}: {}", path.display(), e)))?;
        Ok(ImageDimensions { width, height })
    }
}
