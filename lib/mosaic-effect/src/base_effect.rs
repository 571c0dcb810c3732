use crate::{Effect, ImageEffectResult};
use derivative::Derivative;
use derive_setters::Setters;
use image::RgbImage;
use rayon::prelude::*;

/// Invert the colors of an image
pub fn invert(image: &RgbImage) -> RgbImage {
    let mut result = image.clone();

    result.par_chunks_exact_mut(3).for_each(|pixel| {
        pixel[0] = 255 - pixel[0];
        pixel[1] = 255 - pixel[1];
        pixel[2] = 255 - pixel[2];
    });

    result
}

/// Grayscale effect configuration
#[derive(Debug, Clone, Derivative, Setters)]
#[derivative(Default)]
#[setters(prefix = "with_")]
#[non_exhaustive]
pub struct GrayscaleConfig {
    #[derivative(Default(value = "GrayscaleMode::Luminance"))]
    pub mode: GrayscaleMode,
}

impl GrayscaleConfig {
    pub fn new() -> Self {
        Self::default()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GrayscaleMode {
    Average,
    Luminance,
    RedChannel,
    GreenChannel,
    BlueChannel,
}

impl GrayscaleMode {
    pub fn gray(&self, r: u8, g: u8, b: u8) -> u8 {
        match self {
            GrayscaleMode::Average => ((r as u32 + g as u32 + b as u32) / 3) as u8,
            // Human perception: 0.299*R + 0.587*G + 0.114*B, in integer
            // arithmetic so an already gray pixel maps to itself.
            GrayscaleMode::Luminance => {
                ((299 * r as u32 + 587 * g as u32 + 114 * b as u32) / 1000) as u8
            }
            GrayscaleMode::RedChannel => r,
            GrayscaleMode::GreenChannel => g,
            GrayscaleMode::BlueChannel => b,
        }
    }
}

impl Effect for GrayscaleConfig {
    fn apply(&self, image: &RgbImage) -> ImageEffectResult<RgbImage> {
        let mut result = image.clone();
        let mode = self.mode;

        result.par_chunks_exact_mut(3).for_each(|pixel| {
            let gray = mode.gray(pixel[0], pixel[1], pixel[2]);
            pixel[0] = gray;
            pixel[1] = gray;
            pixel[2] = gray;
        });

        Ok(result)
    }
}
