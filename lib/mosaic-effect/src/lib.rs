pub mod base_effect;
pub mod batch;
pub mod block;
pub mod config;
pub mod io;
pub mod stylized_effect;
pub mod transform;

pub use batch::{BatchReport, TransformOutcome, apply_transforms, process_file};
pub use block::{BlockCell, BlockGrid, BlockSample, compute_block_colors};
pub use config::TransformConfig;
pub use image::{Rgb, RgbImage};
pub use transform::TransformKind;

use std::path::PathBuf;

pub type ImageEffectResult<T> = Result<T, ImageEffectError>;

#[derive(thiserror::Error, Debug)]
pub enum ImageEffectError {
    #[error("Invalid block size: {0} (must be at least 1)")]
    InvalidBlockSize(u32),

    #[error("No transform selected")]
    NoTransformSelected,

    #[error("Unable to read {}: {source}", path.display())]
    Unreadable {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Unable to decode {}: {source}", path.display())]
    Decode {
        path: PathBuf,
        source: image::ImageError,
    },

    #[error("Unsupported output format: {}", .0.display())]
    UnsupportedFormat(PathBuf),

    #[error("Unable to encode {}: {source}", path.display())]
    Encode {
        path: PathBuf,
        source: image::ImageError,
    },

    #[error("Unable to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Coarse error class, so a front end can pick a message without matching
/// every variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Bad configuration or an unusable source path.
    InvalidInput,
    /// The image could not be decoded, encoded or written.
    Encoding,
}

impl ImageEffectError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ImageEffectError::InvalidBlockSize(_)
            | ImageEffectError::NoTransformSelected
            | ImageEffectError::Unreadable { .. } => ErrorKind::InvalidInput,

            ImageEffectError::Decode { .. }
            | ImageEffectError::UnsupportedFormat(_)
            | ImageEffectError::Encode { .. }
            | ImageEffectError::Write { .. } => ErrorKind::Encoding,
        }
    }
}

/// A pure image-to-image transform. The input is never modified.
pub trait Effect {
    fn apply(&self, image: &RgbImage) -> ImageEffectResult<RgbImage>;
}

#[derive(Debug, Clone)]
pub enum ImageEffect {
    // Block effects
    Pixelate(stylized_effect::PixelateConfig),
    DotMosaic(stylized_effect::DotMosaicConfig),

    // Base effects
    Grayscale(base_effect::GrayscaleConfig),
    Invert,
}

impl Effect for ImageEffect {
    fn apply(&self, image: &RgbImage) -> ImageEffectResult<RgbImage> {
        match self {
            ImageEffect::Pixelate(config) => config.apply(image),
            ImageEffect::DotMosaic(config) => config.apply(image),
            ImageEffect::Grayscale(config) => config.apply(image),
            ImageEffect::Invert => Ok(base_effect::invert(image)),
        }
    }
}
