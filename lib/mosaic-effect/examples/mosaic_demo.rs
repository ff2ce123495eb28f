/// Mosaic effect example
/// Demonstrates different block sizes on the working-size image
use image::ImageReader;
use mosaic_effect::{Effect, MosaicConfig, resize_to_working};
use std::path::Path;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let output_dir = Path::new("tmp");
    std::fs::create_dir_all(output_dir)?;

    // Load test image and bring it to the canonical working size
    let img_path = Path::new("data/test.png");
    let img = ImageReader::open(img_path)?.decode()?.to_rgb8();
    let working = resize_to_working(&img)?;

    let block_sizes = [4, 8, 12, 16, 20, 30];

    for block_size in block_sizes {
        let mut test_img = working.clone();
        let effect = MosaicConfig::new().with_block_size(block_size);

        effect.apply(&mut test_img)?;

        let filename = format!("mosaic_b{}.png", block_size);
        test_img.save(output_dir.join(&filename))?;
        println!("✓ Generated {}", filename);
    }

    println!("\n✓ All mosaic effects applied successfully!");
    println!("  Images saved to: tmp/");

    Ok(())
}
