//! Retro mosaic effect for 8-bit RGB raster images.
//!
//! The pipeline resamples an arbitrary input image to a canonical
//! working size, then replaces square blocks of pixels with their
//! average color. The image keeps its working dimensions; only the
//! apparent resolution drops.
//!
//! # Examples
//! ```no_run
//! use image::ImageReader;
//! use mosaic_effect::{pixelate, resize_to_working, DEFAULT_BLOCK_SIZE};
//!
//! fn main() -> anyhow::Result<()> {
//!     let img = ImageReader::open("data/test.png")?.decode()?.to_rgb8();
//!     let working = resize_to_working(&img)?;
//!     let mosaic = pixelate(&working, DEFAULT_BLOCK_SIZE)?;
//!     mosaic.save("tmp/mosaic.png")?;
//!     Ok(())
//! }
//! ```

use image::RgbImage;

pub mod mosaic;
pub mod resize;
pub mod state;

pub use mosaic::{MosaicConfig, average_color, pixelate};
pub use resize::{resize, resize_to_working};
pub use state::ImageState;

/// Canonical working resolution every loaded image is resampled to.
pub const WORKING_SIZE: u32 = 256;

/// Default mosaic block edge length in pixels.
pub const DEFAULT_BLOCK_SIZE: u32 = 16;

pub type MosaicResult<T> = Result<T, MosaicError>;

#[derive(thiserror::Error, Debug)]
pub enum MosaicError {
    #[error("Invalid dimension: {0}")]
    InvalidDimension(String),
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),
    #[error("No image loaded")]
    NotLoaded,
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),
}

pub trait Effect {
    fn apply(&self, image: &mut RgbImage) -> MosaicResult<()>;
}
