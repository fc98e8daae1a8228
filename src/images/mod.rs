//! Local image selection.
//!
//! Picks an item's primary image from thumbnails the downloader left in the
//! item's folder. Directory listing and dimension probing are pluggable via
//! [`DirectoryService`] and [`ImageProbe`].

mod probe;
mod selector;

pub use probe::{
    DirectoryService, FileEntry, FsDirectoryService, ImageCrateProbe, ImageDimensions, ImageProbe,
};
pub use selector::{select_primary_image, ImageCandidate, LocalImageInfo, LocalImageProvider};
