//! Local image selection against real files.
//!
//! Thumbnails are written as real images so the default `image`-crate probe
//! measures them from their headers.

mod common;

use common::TestLibrary;
use ytmeta::images::{
    select_primary_image, DirectoryService, FsDirectoryService, ImageCrateProbe,
    LocalImageProvider,
};
use ytmeta::metadata::MediaItem;
use ytmeta_common::{ImageType, ItemKind};

fn provider() -> LocalImageProvider<FsDirectoryService, ImageCrateProbe> {
    LocalImageProvider::new(FsDirectoryService, ImageCrateProbe::new())
}

#[test]
fn widest_thumbnail_wins() {
    let lib = TestLibrary::new();
    let video = lib.add_video("a");
    lib.add_image("a.png", 100, 100);
    lib.add_image("a_2.png", 200, 50);
    lib.add_file("a.txt", b"notes");

    let images = provider().get_images(&MediaItem::new(&video, ItemKind::Movie));
    assert_eq!(images.len(), 1);
    assert_eq!(images[0].path, lib.path().join("a_2.png"));
    assert_eq!(images[0].image_type, ImageType::Primary);
}

#[test]
fn unrelated_images_are_ignored() {
    let lib = TestLibrary::new();
    let video = lib.add_video("clip");
    lib.add_image("other.png", 1920, 1080);
    lib.add_image("Clip.png", 1920, 1080);

    let images = provider().get_images(&MediaItem::new(&video, ItemKind::Movie));
    assert!(images.is_empty());
}

#[test]
fn corrupt_thumbnail_does_not_abort_selection() {
    let lib = TestLibrary::new();
    let video = lib.add_video("clip");
    lib.add_file("clip.jpg", b"\xFF\xD8\xFF truncated");
    lib.add_image("clip_1.png", 320, 180);

    let picked = provider()
        .select(&MediaItem::new(&video, ItemKind::Episode))
        .unwrap();
    assert_eq!(picked.file.name, "clip_1.png");
    assert_eq!(picked.dimensions.width, 320);
    assert_eq!(picked.dimensions.height, 180);
}

#[test]
fn equal_widths_keep_first_listed() {
    let lib = TestLibrary::new();
    let video = lib.add_video("clip");
    lib.add_image("clip.png", 640, 360);
    lib.add_image("clip_b.png", 640, 480);

    let entries = FsDirectoryService.list_files(lib.path()).unwrap();
    let picked = select_primary_image(&video, &entries, &ImageCrateProbe::new()).unwrap();
    assert_eq!(picked.file.name, "clip.png");
}

#[test]
fn configured_extensions_limit_candidates() {
    let lib = TestLibrary::new();
    let video = lib.add_video("clip");
    lib.add_image("clip.png", 1280, 720);
    lib.add_image("clip.bmp", 1920, 1080);

    let provider = LocalImageProvider::new(
        FsDirectoryService,
        ImageCrateProbe::with_extensions(&["png"]),
    );
    let images = provider.get_images(&MediaItem::new(&video, ItemKind::Movie));
    assert_eq!(images[0].path, lib.path().join("clip.png"));
}

#[test]
fn missing_folder_gives_no_images() {
    let lib = TestLibrary::new();
    let video = lib.path().join("gone").join("clip.mkv");

    assert!(provider()
        .get_images(&MediaItem::new(&video, ItemKind::Movie))
        .is_empty());
}

#[test]
fn provider_capabilities() {
    let provider = provider();
    assert_eq!(provider.name(), "YouTube Metadata");
    assert_eq!(provider.order(), 1);
    assert!(provider.supports(ItemKind::Trailer));
    assert!(!provider.supports(ItemKind::Season));
}
