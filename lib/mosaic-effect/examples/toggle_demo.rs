/// ImageState example
/// Loads an image, then saves whichever buffer the toggle selects
use anyhow::Result;
use image::ImageReader;
use mosaic_effect::ImageState;
use std::path::Path;

fn main() -> Result<()> {
    env_logger::init();

    let output_dir = Path::new("tmp");
    std::fs::create_dir_all(output_dir)?;

    let img = ImageReader::open("data/test.png")?.decode()?.to_rgb8();

    let mut state = ImageState::new();
    state.load(&img)?;

    state.active_buffer()?.save(output_dir.join("view_original.png"))?;

    state.toggle()?;
    state.active_buffer()?.save(output_dir.join("view_mosaic.png"))?;

    println!("✓ Saved view_original.png and view_mosaic.png to tmp/");

    Ok(())
}
