use crate::{MosaicError, MosaicResult, WORKING_SIZE};
use image::{RgbImage, imageops, imageops::FilterType};
use log::debug;

/// Resample `source` to `target_width` x `target_height` with bilinear
/// interpolation, returning a new buffer.
///
/// Bilinear sampling keeps the shrink smooth instead of aliased, which
/// is what the mosaic pass expects to average over.
///
/// # Errors
/// Returns `MosaicError::InvalidDimension` if either target dimension
/// is zero or `source` has zero area.
pub fn resize(source: &RgbImage, target_width: u32, target_height: u32) -> MosaicResult<RgbImage> {
    if target_width == 0 || target_height == 0 {
        return Err(MosaicError::InvalidDimension(format!(
            "target size {}x{} must be positive",
            target_width, target_height
        )));
    }

    if source.width() == 0 || source.height() == 0 {
        return Err(MosaicError::InvalidDimension(format!(
            "source size {}x{} has zero area",
            source.width(),
            source.height()
        )));
    }

    debug!(
        "resize {}x{} -> {}x{}",
        source.width(),
        source.height(),
        target_width,
        target_height
    );

    // Already at target size, no resampling needed
    if source.width() == target_width && source.height() == target_height {
        return Ok(source.clone());
    }

    Ok(imageops::resize(
        source,
        target_width,
        target_height,
        FilterType::Triangle,
    ))
}

/// Resample `source` to the canonical working resolution.
pub fn resize_to_working(source: &RgbImage) -> MosaicResult<RgbImage> {
    resize(source, WORKING_SIZE, WORKING_SIZE)
}
