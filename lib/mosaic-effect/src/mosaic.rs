use crate::{Effect, MosaicError, MosaicResult};
use derivative::Derivative;
use derive_setters::Setters;
use image::{Rgb, RgbImage};
use log::debug;

/// Mosaic effect configuration
#[derive(Debug, Clone, Derivative, Setters)]
#[derivative(Default)]
#[setters(prefix = "with_")]
#[non_exhaustive]
pub struct MosaicConfig {
    #[derivative(Default(value = "crate::DEFAULT_BLOCK_SIZE"))]
    block_size: u32,
}

impl MosaicConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn block_size(&self) -> u32 {
        self.block_size
    }
}

/// Mean color over the block at (`origin_x`, `origin_y`), clamped to the
/// image bounds. Channel sums are divided by the visited-sample count
/// with truncating integer division.
///
/// The origin must lie inside the image; the tiling loop in
/// [`Effect::apply`] guarantees that, so the count is always at least 1.
pub fn average_color(
    image: &RgbImage,
    origin_x: u32,
    origin_y: u32,
    block_size: u32,
) -> Rgb<u8> {
    debug_assert!(origin_x < image.width() && origin_y < image.height());
    debug_assert!(block_size > 0);

    let x_end = (origin_x + block_size).min(image.width());
    let y_end = (origin_y + block_size).min(image.height());

    let mut r_sum = 0u32;
    let mut g_sum = 0u32;
    let mut b_sum = 0u32;
    let mut count = 0u32;

    for y in origin_y..y_end {
        for x in origin_x..x_end {
            let pixel = image.get_pixel(x, y);
            r_sum += pixel[0] as u32;
            g_sum += pixel[1] as u32;
            b_sum += pixel[2] as u32;
            count += 1;
        }
    }

    Rgb([
        (r_sum / count) as u8,
        (g_sum / count) as u8,
        (b_sum / count) as u8,
    ])
}

impl Effect for MosaicConfig {
    fn apply(&self, image: &mut RgbImage) -> MosaicResult<()> {
        if self.block_size == 0 {
            return Err(MosaicError::InvalidParameter(
                "block size must be positive".to_string(),
            ));
        }

        let width = image.width();
        let height = image.height();
        let block_size = self.block_size;

        debug!("mosaic {}x{}, block size {}", width, height, block_size);

        let mut result = image.clone();

        for y in (0..height).step_by(block_size as usize) {
            for x in (0..width).step_by(block_size as usize) {
                let avg = average_color(image, x, y, block_size);

                let y_end = (y + block_size).min(height);
                let x_end = (x + block_size).min(width);

                // Fill the block's in-bounds extent with the average
                for by in y..y_end {
                    for bx in x..x_end {
                        result.put_pixel(bx, by, avg);
                    }
                }
            }
        }

        *image = result;
        Ok(())
    }
}

/// Apply the mosaic effect to `source`, returning a new buffer with the
/// same dimensions.
///
/// # Errors
/// Returns `MosaicError::InvalidParameter` if `block_size` is zero.
pub fn pixelate(source: &RgbImage, block_size: u32) -> MosaicResult<RgbImage> {
    let mut result = source.clone();
    MosaicConfig::new()
        .with_block_size(block_size)
        .apply(&mut result)?;
    Ok(result)
}
