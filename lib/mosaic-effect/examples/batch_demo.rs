/// Batch example
/// Applies every transform to one image file and prints where each result went.
use anyhow::{Context, Result};
use mosaic_effect::{TransformConfig, TransformKind, process_file};
use std::path::PathBuf;

fn main() -> Result<()> {
    env_logger::init();

    let source = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .context("usage: batch_demo <image>")?;

    let config = TransformConfig::new()
        .with_transforms(TransformKind::all().to_vec())
        .with_block_size(12);

    let report = process_file(&source, None, &config)?;

    for (kind, path) in report.succeeded() {
        println!("✓ {:<10} {}", kind.name(), path.display());
    }
    for (kind, e) in report.failed() {
        println!("✗ {:<10} {}", kind.name(), e);
    }

    Ok(())
}
