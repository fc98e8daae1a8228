mod cli;

use ytmeta::{
    config,
    images::{FsDirectoryService, LocalImageProvider},
    metadata::{MediaItem, SidecarProvider},
    scanner::Scanner,
};
use ytmeta_common::ItemKind;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use clap::Parser;
use cli::{Cli, Commands};
use std::path::Path;
use tokio_util::sync::CancellationToken;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Respect RUST_LOG env var if set, otherwise use defaults based on verbose flag
    let env_filter = std::env::var("RUST_LOG").unwrap_or_else(|_| {
        if cli.verbose {
            "ytmeta=debug,ytmeta_common=debug".to_string()
        } else {
            "ytmeta=info".to_string()
        }
    });

    tracing_subscriber::fmt()
        .with_env_filter(&env_filter)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Show { path } => show(&path, cli.config.as_deref()),
        Commands::Image { path } => image(&path, cli.config.as_deref()),
        Commands::Changed { path, since } => changed(&path, &since),
        Commands::Scan { dir } => scan(&dir, cli.config.as_deref()),
        Commands::Validate {
            config: config_path,
        } => {
            let path = config_path.or(cli.config);
            validate_config(path.as_deref())
        }
        Commands::Version => {
            println!("ytmeta {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
    }
}

fn show(path: &Path, config_path: Option<&Path>) -> Result<()> {
    let config = config::load_config_or_default(config_path)?;
    let provider = SidecarProvider::new(config.extractor_registry());

    let result = provider
        .refresh(path, &CancellationToken::new())
        .with_context(|| format!("Failed to refresh {:?}", path))?;

    if !result.has_metadata {
        tracing::info!("No sidecar metadata for {:?}", path);
    }

    println!("{}", serde_json::to_string_pretty(&result)?);
    Ok(())
}

fn image(path: &Path, config_path: Option<&Path>) -> Result<()> {
    let config = config::load_config_or_default(config_path)?;
    let images = LocalImageProvider::new(FsDirectoryService, config.image_probe());

    let item = MediaItem::new(path, ItemKind::Movie);
    match images.select(&item) {
        Some(candidate) => println!(
            "{} ({}x{})",
            candidate.file.path.display(),
            candidate.dimensions.width,
            candidate.dimensions.height
        ),
        None => println!("No image found"),
    }

    Ok(())
}

fn changed(path: &Path, since: &str) -> Result<()> {
    let since: DateTime<Utc> = DateTime::parse_from_rfc3339(since)
        .with_context(|| format!("Invalid --since timestamp: {}", since))?
        .with_timezone(&Utc);

    println!("{}", ytmeta::metadata::change::has_changed(path, since));
    Ok(())
}

fn scan(dir: &Path, config_path: Option<&Path>) -> Result<()> {
    if !dir.is_dir() {
        anyhow::bail!("Not a directory: {:?}", dir);
    }

    let config = config::load_config_or_default(config_path)?;
    let scanner = Scanner::new(
        SidecarProvider::new(config.extractor_registry()),
        LocalImageProvider::new(FsDirectoryService, config.image_probe()),
    );

    let results = scanner.scan_directory(dir, &CancellationToken::new());

    let mut refreshed = 0;
    let mut failed = 0;
    for result in &results {
        match (&result.metadata, &result.error) {
            (Some(metadata), _) => {
                refreshed += 1;
                let item = metadata.item();
                println!(
                    "✓ {} [{}] {}",
                    result.path.display(),
                    item.kind,
                    item.name.as_deref().unwrap_or("<untitled>")
                );
            }
            (None, Some(error)) => {
                failed += 1;
                println!("✗ {} - {}", result.path.display(), error);
            }
            (None, None) => println!("- {} (no usable sidecar)", result.path.display()),
        }
        if let Some(image) = &result.primary_image {
            println!("    image: {}", image.display());
        }
    }

    println!();
    println!(
        "{} files, {} refreshed, {} failed",
        results.len(),
        refreshed,
        failed
    );

    Ok(())
}

fn validate_config(path: Option<&Path>) -> Result<()> {
    match path {
        Some(p) => {
            println!("Validating config: {:?}", p);
            let config = config::load_config(p)?;
            println!("✓ Configuration is valid");
            println!(
                "  Extractor mappings: {}",
                config.extractors.mappings.len()
            );
            println!(
                "  Playlist-id providers: {}",
                config.extractors.playlist_id_keys.len()
            );
            println!("  Image extensions: {}", config.images.extensions.len());
        }
        None => {
            println!("No config file specified, using defaults");
        }
    }

    Ok(())
}
