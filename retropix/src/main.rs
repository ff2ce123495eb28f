use anyhow::{Context, Result};
use clap::Parser;
use image::ImageReader;
use log::info;
use mosaic_effect::{DEFAULT_BLOCK_SIZE, ImageState, MosaicConfig};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(version, about = "Retro mosaic effect for raster images")]
struct Cli {
    /// Input image path
    input: PathBuf,

    /// Output image path (format from extension, PNG recommended)
    #[arg(short, long)]
    output: PathBuf,

    /// Mosaic block edge length in pixels
    #[arg(long, default_value_t = DEFAULT_BLOCK_SIZE)]
    block_size: u32,

    /// Write the resized original instead of the mosaic
    #[arg(long)]
    original: bool,
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    // Decode to 8-bit RGB, dropping any alpha channel
    let raw = ImageReader::open(&cli.input)
        .with_context(|| format!("open {}", cli.input.display()))?
        .decode()
        .with_context(|| format!("decode {}", cli.input.display()))?
        .to_rgb8();

    info!(
        "loaded {} ({}x{})",
        cli.input.display(),
        raw.width(),
        raw.height()
    );

    let mut state = ImageState::new();
    state
        .load_with(&raw, &MosaicConfig::new().with_block_size(cli.block_size))
        .context("mosaic pipeline failed")?;

    if !cli.original {
        state.toggle()?;
    }

    let buffer = state.active_buffer()?;
    buffer
        .save(&cli.output)
        .with_context(|| format!("save {}", cli.output.display()))?;

    info!(
        "saved {} ({}x{}, block size {})",
        cli.output.display(),
        buffer.width(),
        buffer.height(),
        cli.block_size
    );

    Ok(())
}
