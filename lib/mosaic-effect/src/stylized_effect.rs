use crate::{
    Effect, ImageEffectResult,
    block::{BlockSample, compute_block_colors},
};
use derivative::Derivative;
use derive_setters::Setters;
use image::{Rgb, RgbImage};
use imageproc::{drawing::draw_filled_rect_mut, rect::Rect};

const BACKGROUND: Rgb<u8> = Rgb([255, 255, 255]);

/// Pixelate effect configuration
#[derive(Debug, Clone, Derivative, Setters)]
#[derivative(Default)]
#[setters(prefix = "with_")]
#[non_exhaustive]
pub struct PixelateConfig {
    #[derivative(Default(value = "10"))]
    pub block_size: u32,
}

impl PixelateConfig {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Effect for PixelateConfig {
    fn apply(&self, image: &RgbImage) -> ImageEffectResult<RgbImage> {
        let samples = compute_block_colors(image, self.block_size)?;
        Ok(render_pixelate(image.width(), image.height(), &samples))
    }
}

/// Dot mosaic effect configuration
#[derive(Debug, Clone, Derivative, Setters)]
#[derivative(Default)]
#[setters(prefix = "with_")]
#[non_exhaustive]
pub struct DotMosaicConfig {
    #[derivative(Default(value = "10"))]
    pub block_size: u32,
}

impl DotMosaicConfig {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Effect for DotMosaicConfig {
    fn apply(&self, image: &RgbImage) -> ImageEffectResult<RgbImage> {
        let samples = compute_block_colors(image, self.block_size)?;
        Ok(render_dot_mosaic(
            image.width(),
            image.height(),
            self.block_size,
            &samples,
        ))
    }
}

/// Fill every sampled cell with its average color.
///
/// When `samples` tile the image, as `compute_block_colors` guarantees, every
/// output pixel is written exactly once.
pub fn render_pixelate(width: u32, height: u32, samples: &[BlockSample]) -> RgbImage {
    let mut canvas = RgbImage::new(width, height);

    for sample in samples {
        let cell = &sample.cell;
        if cell.width() == 0 || cell.height() == 0 {
            continue;
        }

        let rect = Rect::at(cell.x as i32, cell.y as i32).of_size(cell.width(), cell.height());
        draw_filled_rect_mut(&mut canvas, rect, sample.color);
    }

    canvas
}

/// Draw one filled dot per sampled cell on a white canvas.
///
/// Center is `(x + block_size / 2, y + block_size / 2)` and radius is
/// `block_size / 2`, both taken from the configured block size even for the
/// clipped cells on the right and bottom edges. A pixel belongs to the dot
/// when its squared distance to the center is at most `radius²`.
///
/// Dots are confined to their own cell. With an even block size the full
/// circle would reach one pixel into the next cell, which that cell's dot
/// overwrites anyway, so adjacent dots touch without overlapping.
pub fn render_dot_mosaic(
    width: u32,
    height: u32,
    block_size: u32,
    samples: &[BlockSample],
) -> RgbImage {
    let mut canvas = RgbImage::from_pixel(width, height, BACKGROUND);
    let radius = (block_size / 2) as i64;
    let radius_sq = radius * radius;

    for sample in samples {
        let cell = &sample.cell;
        let center_x = cell.x as i64 + radius;
        let center_y = cell.y as i64 + radius;

        for y in cell.y..cell.y_end.min(height) {
            let dy = y as i64 - center_y;
            for x in cell.x..cell.x_end.min(width) {
                let dx = x as i64 - center_x;
                if dx * dx + dy * dy <= radius_sq {
                    canvas.put_pixel(x, y, sample.color);
                }
            }
        }
    }

    canvas
}
