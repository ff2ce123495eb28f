use crate::{Effect, MosaicError, MosaicResult, mosaic::MosaicConfig, resize::resize_to_working};
use image::RgbImage;
use log::debug;

/// View-selection state machine over the two pipeline outputs.
///
/// Starts empty; every successful [`ImageState::load`] replaces both
/// buffers and resets the view to the original. The buffers always have
/// equal dimensions and are independent allocations.
#[derive(Debug, Default)]
pub struct ImageState {
    original: Option<RgbImage>,
    pixelated: Option<RgbImage>,
    showing_pixelated: bool,
}

impl ImageState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_loaded(&self) -> bool {
        self.original.is_some()
    }

    /// Run the full pipeline on `raw` with the default block size and
    /// commit the result.
    pub fn load(&mut self, raw: &RgbImage) -> MosaicResult<()> {
        self.load_with(raw, &MosaicConfig::new())
    }

    /// Run the full pipeline on `raw`: resample to the working size,
    /// then compute the mosaic buffer per `config`.
    ///
    /// Both buffers are computed before any state is replaced, so a
    /// failed load leaves a previously loaded state untouched.
    pub fn load_with(&mut self, raw: &RgbImage, config: &MosaicConfig) -> MosaicResult<()> {
        let original = resize_to_working(raw)?;
        let mut pixelated = original.clone();
        config.apply(&mut pixelated)?;

        debug!(
            "loaded {}x{} -> working {}x{}, block size {}",
            raw.width(),
            raw.height(),
            original.width(),
            original.height(),
            config.block_size()
        );

        self.original = Some(original);
        self.pixelated = Some(pixelated);
        self.showing_pixelated = false;
        Ok(())
    }

    /// Flip the view between original and mosaic, returning the new
    /// flag value.
    ///
    /// # Errors
    /// Returns `MosaicError::NotLoaded` when no image is loaded.
    pub fn toggle(&mut self) -> MosaicResult<bool> {
        if !self.is_loaded() {
            return Err(MosaicError::NotLoaded);
        }

        self.showing_pixelated = !self.showing_pixelated;
        Ok(self.showing_pixelated)
    }

    /// The buffer the display collaborator should render right now.
    ///
    /// # Errors
    /// Returns `MosaicError::NotLoaded` when no image is loaded.
    pub fn active_buffer(&self) -> MosaicResult<&RgbImage> {
        let (original, pixelated) = match (&self.original, &self.pixelated) {
            (Some(original), Some(pixelated)) => (original, pixelated),
            _ => return Err(MosaicError::NotLoaded),
        };

        Ok(if self.showing_pixelated {
            pixelated
        } else {
            original
        })
    }

    /// The mosaic buffer, the one the save path encodes.
    ///
    /// # Errors
    /// Returns `MosaicError::NotLoaded` when no image is loaded.
    pub fn pixelated(&self) -> MosaicResult<&RgbImage> {
        self.pixelated.as_ref().ok_or(MosaicError::NotLoaded)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{MosaicError, WORKING_SIZE};
    use image::Rgb;

    /// Test that every operation needing an image reports NotLoaded on
    /// the empty state
    #[test]
    fn test_empty_state_errors() {
        let mut state = ImageState::new();

        assert!(!state.is_loaded());
        assert!(matches!(state.toggle(), Err(MosaicError::NotLoaded)));
        assert!(matches!(state.active_buffer(), Err(MosaicError::NotLoaded)));
        assert!(matches!(state.pixelated(), Err(MosaicError::NotLoaded)));
    }

    /// Test that loading a 300x300 solid red image yields solid red
    /// working and mosaic buffers at the working size
    #[test]
    fn test_load_solid_red() {
        let raw = RgbImage::from_pixel(300, 300, Rgb([255, 0, 0]));
        let mut state = ImageState::new();
        state.load(&raw).unwrap();

        assert!(state.is_loaded());

        let original = state.active_buffer().unwrap();
        assert_eq!(original.dimensions(), (WORKING_SIZE, WORKING_SIZE));
        assert!(original.pixels().all(|p| *p == Rgb([255, 0, 0])));

        let pixelated = state.pixelated().unwrap();
        assert_eq!(pixelated.dimensions(), (WORKING_SIZE, WORKING_SIZE));
        assert!(pixelated.pixels().all(|p| *p == Rgb([255, 0, 0])));
    }

    /// Test that toggling switches the active buffer and load resets it
    #[test]
    fn test_toggle_selects_buffer() {
        let raw = RgbImage::from_fn(300, 200, |x, y| Rgb([(x % 256) as u8, (y % 256) as u8, 0]));
        let mut state = ImageState::new();
        state.load(&raw).unwrap();

        // Fresh load shows the original
        let original = state.active_buffer().unwrap().clone();

        assert!(state.toggle().unwrap());
        assert_eq!(state.active_buffer().unwrap(), state.pixelated().unwrap());

        assert!(!state.toggle().unwrap());
        assert_eq!(*state.active_buffer().unwrap(), original);

        // Reload resets the view to the original
        state.toggle().unwrap();
        state.load(&raw).unwrap();
        assert_eq!(*state.active_buffer().unwrap(), original);
    }

    /// Test that a custom block size flows through load_with
    #[test]
    fn test_load_with_block_size() {
        let raw = RgbImage::from_fn(256, 256, |x, _| Rgb([(x % 256) as u8, 0, 0]));
        let mut state = ImageState::new();
        state
            .load_with(&raw, &MosaicConfig::new().with_block_size(32))
            .unwrap();

        let pixelated = state.pixelated().unwrap();
        // Every 32x32 block is a single color
        let first = *pixelated.get_pixel(0, 0);
        assert!((0..32).all(|x| (0..32).all(|y| *pixelated.get_pixel(x, y) == first)));
    }

    /// Test that a failed load keeps the previous state intact
    #[test]
    fn test_failed_load_preserves_state() {
        let raw = RgbImage::from_pixel(300, 300, Rgb([0, 255, 0]));
        let mut state = ImageState::new();
        state.load(&raw).unwrap();
        state.toggle().unwrap();

        let before = state.active_buffer().unwrap().clone();

        let empty = RgbImage::new(0, 0);
        assert!(state.load(&empty).is_err());

        // Buffers and view flag survive the failed load
        assert!(state.is_loaded());
        assert_eq!(*state.active_buffer().unwrap(), before);

        let bad_config = MosaicConfig::new().with_block_size(0);
        assert!(state.load_with(&raw, &bad_config).is_err());
        assert_eq!(*state.active_buffer().unwrap(), before);
    }
}
