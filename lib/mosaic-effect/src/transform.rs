use crate::{
    ImageEffect,
    base_effect::GrayscaleConfig,
    stylized_effect::{DotMosaicConfig, PixelateConfig},
};
use std::fmt;

/// The fixed set of named transforms a batch can select from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TransformKind {
    Pixelate,
    DotMosaic,
    Grayscale,
    Invert,
}

impl TransformKind {
    pub fn name(&self) -> &'static str {
        match self {
            TransformKind::Pixelate => "Pixelate",
            TransformKind::DotMosaic => "Dot Mosaic",
            TransformKind::Grayscale => "Grayscale",
            TransformKind::Invert => "Invert",
        }
    }

    /// Suffix used in output file names: the name, lowercased, without spaces.
    pub fn file_suffix(&self) -> String {
        self.name().replace(' ', "").to_lowercase()
    }

    /// Whether the transform samples the image in blocks and so needs a
    /// block size.
    pub fn is_block_based(&self) -> bool {
        matches!(self, TransformKind::Pixelate | TransformKind::DotMosaic)
    }

    pub fn effect(&self, block_size: u32) -> ImageEffect {
        match self {
            TransformKind::Pixelate => {
                ImageEffect::Pixelate(PixelateConfig::new().with_block_size(block_size))
            }
            TransformKind::DotMosaic => {
                ImageEffect::DotMosaic(DotMosaicConfig::new().with_block_size(block_size))
            }
            TransformKind::Grayscale => ImageEffect::Grayscale(GrayscaleConfig::new()),
            TransformKind::Invert => ImageEffect::Invert,
        }
    }

    pub fn all() -> &'static [TransformKind] {
        &[
            TransformKind::Pixelate,
            TransformKind::DotMosaic,
            TransformKind::Grayscale,
            TransformKind::Invert,
        ]
    }
}

impl fmt::Display for TransformKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Effect;
    use image::{Rgb, RgbImage};

    #[test]
    fn test_file_suffix() {
        let suffixes: Vec<_> = TransformKind::all()
            .iter()
            .map(|kind| kind.file_suffix())
            .collect();
        assert_eq!(suffixes, ["pixelate", "dotmosaic", "grayscale", "invert"]);
    }

    #[test]
    fn test_block_based() {
        assert!(TransformKind::Pixelate.is_block_based());
        assert!(TransformKind::DotMosaic.is_block_based());
        assert!(!TransformKind::Grayscale.is_block_based());
        assert!(!TransformKind::Invert.is_block_based());
    }

    #[test]
    fn test_effect_dispatch() {
        let img = RgbImage::from_pixel(4, 4, Rgb([255, 0, 0]));

        let out = TransformKind::Pixelate.effect(2).apply(&img).unwrap();
        assert_eq!(out, img);

        let out = TransformKind::Grayscale.effect(0).apply(&img).unwrap();
        assert_eq!(*out.get_pixel(0, 0), Rgb([76, 76, 76]));

        let out = TransformKind::Invert.effect(0).apply(&img).unwrap();
        assert_eq!(*out.get_pixel(3, 3), Rgb([0, 255, 255]));

        assert!(TransformKind::DotMosaic.effect(0).apply(&img).is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(TransformKind::DotMosaic.to_string(), "Dot Mosaic");
    }
}
