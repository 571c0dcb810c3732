/// Block effects example
/// Renders pixelate and dot mosaic versions of a generated gradient at
/// several block sizes.
use anyhow::Result;
use mosaic_effect::{Effect, ImageEffect, Rgb, RgbImage, io};
use mosaic_effect::stylized_effect::{DotMosaicConfig, PixelateConfig};
use std::path::Path;

fn main() -> Result<()> {
    env_logger::init();

    let output_dir = Path::new("tmp");
    std::fs::create_dir_all(output_dir)?;

    let img = RgbImage::from_fn(800, 600, |x, y| {
        Rgb([
            (x * 255 / 800) as u8,
            (y * 255 / 600) as u8,
            ((x + y) * 255 / 1400) as u8,
        ])
    });

    let block_sizes = [4, 8, 12, 16, 20, 30];

    for block_size in block_sizes {
        let pixelate = ImageEffect::Pixelate(PixelateConfig::new().with_block_size(block_size));
        let filename = format!("pixelate_b{}.png", block_size);
        io::save_image(&pixelate.apply(&img)?, output_dir.join(&filename))?;
        println!("✓ Generated {}", filename);

        let dots = ImageEffect::DotMosaic(DotMosaicConfig::new().with_block_size(block_size));
        let filename = format!("dotmosaic_b{}.png", block_size);
        io::save_image(&dots.apply(&img)?, output_dir.join(&filename))?;
        println!("✓ Generated {}", filename);
    }

    println!("\n✓ All block effects applied successfully!");
    println!("  Images saved to: tmp/");

    Ok(())
}
