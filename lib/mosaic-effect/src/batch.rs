//! Apply a selection of transforms to one source image and save each result.
//!
//! Every transform starts from the original image; outputs are never chained.
//! A transform that fails to compute or save is recorded and the rest of the
//! selection still runs.

use crate::{Effect, ImageEffectError, ImageEffectResult, TransformConfig, TransformKind, io};
use image::RgbImage;
use std::path::{Path, PathBuf};

#[derive(Debug)]
pub struct TransformOutcome {
    pub kind: TransformKind,
    pub result: ImageEffectResult<RgbImage>,
}

/// Run every selected transform against `image`, in selection order.
pub fn apply_transforms(image: &RgbImage, config: &TransformConfig) -> Vec<TransformOutcome> {
    config
        .selected()
        .into_iter()
        .map(|kind| TransformOutcome {
            kind,
            result: kind.effect(config.block_size).apply(image),
        })
        .collect()
}

#[derive(Debug)]
pub struct BatchReport {
    pub source: PathBuf,
    pub outputs: Vec<(TransformKind, ImageEffectResult<PathBuf>)>,
}

impl BatchReport {
    pub fn succeeded(&self) -> impl Iterator<Item = (TransformKind, &Path)> {
        self.outputs
            .iter()
            .filter_map(|(kind, result)| result.as_ref().ok().map(|path| (*kind, path.as_path())))
    }

    pub fn failed(&self) -> impl Iterator<Item = (TransformKind, &ImageEffectError)> {
        self.outputs
            .iter()
            .filter_map(|(kind, result)| result.as_ref().err().map(|e| (*kind, e)))
    }

    pub fn is_success(&self) -> bool {
        self.outputs.iter().all(|(_, result)| result.is_ok())
    }
}

/// Load `source`, apply every transform selected in `config` and save each
/// result as `<stem>_<transform><ext>` in `out_dir`, or next to the source
/// when `out_dir` is `None`.
///
/// Fails only when the configuration is invalid or the source cannot be
/// loaded. Per-transform failures are reported in the returned
/// `BatchReport`.
pub fn process_file(
    source: impl AsRef<Path>,
    out_dir: Option<&Path>,
    config: &TransformConfig,
) -> ImageEffectResult<BatchReport> {
    config.validate()?;

    let source = source.as_ref();
    let image = io::load_image(source)?;

    let outputs = config
        .selected()
        .into_iter()
        .map(|kind| {
            let result = run_one(&image, source, out_dir, kind, config.block_size);
            match &result {
                Ok(path) => log::info!("{kind} image saved to: {}", path.display()),
                Err(e) => log::warn!("{kind} transformation failed: {e}"),
            }
            (kind, result)
        })
        .collect();

    Ok(BatchReport {
        source: source.to_path_buf(),
        outputs,
    })
}

fn run_one(
    image: &RgbImage,
    source: &Path,
    out_dir: Option<&Path>,
    kind: TransformKind,
    block_size: u32,
) -> ImageEffectResult<PathBuf> {
    let transformed = kind.effect(block_size).apply(image)?;
    let path = io::output_path(source, out_dir, kind);
    io::save_image(&transformed, &path)?;
    Ok(path)
}
