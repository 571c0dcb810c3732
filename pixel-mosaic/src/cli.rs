use clap::{Parser, ValueEnum};
use mosaic_effect::{TransformConfig, TransformKind};
use std::path::PathBuf;

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum TransformArg {
    Pixelate,
    DotMosaic,
    Grayscale,
    Invert,
}

impl From<TransformArg> for TransformKind {
    fn from(arg: TransformArg) -> Self {
        match arg {
            TransformArg::Pixelate => TransformKind::Pixelate,
            TransformArg::DotMosaic => TransformKind::DotMosaic,
            TransformArg::Grayscale => TransformKind::Grayscale,
            TransformArg::Invert => TransformKind::Invert,
        }
    }
}

#[derive(Parser, Debug)]
#[command(
    version,
    about = "Pixelate, dot-mosaic, grayscale or invert an image.",
    long_about = "Each selected transform is applied to the original image and saved as \
                  <name>_<transform><ext>, next to the source or in --output-dir."
)]
pub struct Args {
    /// Source image (PNG, JPEG, BMP or GIF)
    #[arg(value_name = "FILE")]
    pub input: PathBuf,

    /// Directory for the results, defaults to the source directory
    #[arg(short, long, value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Block edge length in pixels for pixelate and dot-mosaic
    #[arg(
        short,
        long,
        value_name = "PIXELS",
        default_value_t = 10,
        value_parser = clap::value_parser!(u32).range(1..)
    )]
    pub block_size: u32,

    /// Transform to apply, can be given more than once
    #[arg(
        short,
        long = "transform",
        value_name = "KIND",
        value_enum,
        required_unless_present = "all"
    )]
    pub transforms: Vec<TransformArg>,

    /// Apply every transform
    #[arg(long, conflicts_with = "transforms")]
    pub all: bool,
}

impl Args {
    pub fn transform_config(&self) -> TransformConfig {
        let transforms = if self.all {
            TransformKind::all().to_vec()
        } else {
            self.transforms.iter().map(|&t| t.into()).collect()
        };

        TransformConfig::new()
            .with_transforms(transforms)
            .with_block_size(self.block_size)
    }
}
