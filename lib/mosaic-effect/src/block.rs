//! Block grid partitioning and per-block color averaging.
//!
//! Both block effects (pixelate and dot mosaic) sample the source through
//! this module and only differ in how each averaged block is drawn.

use crate::{ImageEffectError, ImageEffectResult};
use image::{Rgb, RgbImage};
use rayon::prelude::*;

/// Half-open pixel box `[x, x_end) x [y, y_end)` covered by one grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BlockCell {
    pub x: u32,
    pub y: u32,
    pub x_end: u32,
    pub y_end: u32,
}

impl BlockCell {
    pub fn width(&self) -> u32 {
        self.x_end - self.x
    }

    pub fn height(&self) -> u32 {
        self.y_end - self.y
    }

    pub fn pixel_count(&self) -> u64 {
        self.width() as u64 * self.height() as u64
    }

    pub fn contains(&self, x: u32, y: u32) -> bool {
        (self.x..self.x_end).contains(&x) && (self.y..self.y_end).contains(&y)
    }
}

/// One grid cell together with the mean color of the source pixels it covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlockSample {
    pub cell: BlockCell,
    pub color: Rgb<u8>,
}

/// Partition of a `width x height` image into square blocks of `block_size`.
///
/// The last column and row are clipped to the image, so they may be narrower
/// than `block_size`. Cells never extend past the image and never overlap.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlockGrid {
    width: u32,
    height: u32,
    block_size: u32,
}

impl BlockGrid {
    pub fn new(width: u32, height: u32, block_size: u32) -> ImageEffectResult<Self> {
        if block_size == 0 {
            return Err(ImageEffectError::InvalidBlockSize(block_size));
        }

        Ok(Self {
            width,
            height,
            block_size,
        })
    }

    pub fn for_image(image: &RgbImage, block_size: u32) -> ImageEffectResult<Self> {
        Self::new(image.width(), image.height(), block_size)
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn block_size(&self) -> u32 {
        self.block_size
    }

    /// Number of cells per row, `ceil(width / block_size)`.
    pub fn columns(&self) -> u32 {
        self.width.div_ceil(self.block_size)
    }

    /// Number of cell rows, `ceil(height / block_size)`.
    pub fn rows(&self) -> u32 {
        self.height.div_ceil(self.block_size)
    }

    pub fn len(&self) -> usize {
        self.columns() as usize * self.rows() as usize
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Cell at grid position (`column`, `row`), clipped to the image.
    pub fn cell(&self, column: u32, row: u32) -> BlockCell {
        let x = column * self.block_size;
        let y = row * self.block_size;

        BlockCell {
            x,
            y,
            x_end: x.saturating_add(self.block_size).min(self.width),
            y_end: y.saturating_add(self.block_size).min(self.height),
        }
    }

    /// Cells of one grid row, left to right.
    pub fn row_cells(self, row: u32) -> impl Iterator<Item = BlockCell> {
        (0..self.columns()).map(move |column| self.cell(column, row))
    }

    /// All cells in row-major order.
    pub fn cells(self) -> impl Iterator<Item = BlockCell> {
        (0..self.rows()).flat_map(move |row| self.row_cells(row))
    }
}

/// Floor mean of each channel over the pixels of `cell`.
pub fn average_color(image: &RgbImage, cell: &BlockCell) -> Rgb<u8> {
    let mut r_sum = 0u64;
    let mut g_sum = 0u64;
    let mut b_sum = 0u64;

    for y in cell.y..cell.y_end {
        for x in cell.x..cell.x_end {
            let pixel = image.get_pixel(x, y);
            r_sum += pixel[0] as u64;
            g_sum += pixel[1] as u64;
            b_sum += pixel[2] as u64;
        }
    }

    let count = cell.pixel_count().max(1);
    Rgb([
        (r_sum / count) as u8,
        (g_sum / count) as u8,
        (b_sum / count) as u8,
    ])
}

/// Split `image` into `block_size` blocks and average each one.
///
/// Samples are returned in row-major order. Rows of cells are averaged in
/// parallel; the result is identical to a sequential pass.
pub fn compute_block_colors(
    image: &RgbImage,
    block_size: u32,
) -> ImageEffectResult<Vec<BlockSample>> {
    let grid = BlockGrid::for_image(image, block_size)?;

    log::debug!(
        "averaging {}x{} image into {}x{} blocks of {}",
        grid.width(),
        grid.height(),
        grid.columns(),
        grid.rows(),
        block_size
    );

    let samples = (0..grid.rows())
        .into_par_iter()
        .flat_map_iter(move |row| {
            grid.row_cells(row).map(move |cell| BlockSample {
                cell,
                color: average_color(image, &cell),
            })
        })
        .collect();

    Ok(samples)
}
