//! Ytmeta - local metadata for youtube-dl / yt-dlp downloads
//!
//! Reads the `.info.json` sidecars the downloader leaves next to each video
//! and the thumbnails it saves, and turns them into library metadata and a
//! primary image. Nothing is fetched from the network.

pub mod config;
pub mod images;
pub mod metadata;
pub mod scanner;
