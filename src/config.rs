//! Display settings. The defaults are what the demo runs with.

use crate::color::{Alpha, Rgbaq};
use crate::error::Error;

/// Largest frame buffer dimension the GS can address.
pub const GS_MAX_DIMENSION: u32 = 2048;

/// Background the demo clears to.
pub const CLEAR_COLOR: Rgbaq = Rgbaq::new(0x00, 0x00, 0x3f, 0x80, 0x00);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VideoMode {
    #[default]
    Ntsc,
    Pal,
}

impl VideoMode {
    /// Frame size gsKit picks for the mode in interlaced field mode.
    pub const fn resolution(self) -> (u32, u32) {
        match self {
            VideoMode::Ntsc => (640, 448),
            VideoMode::Pal => (640, 512),
        }
    }
}

/// Texture coordinate wrapping; numbered the way the shim expects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ClampMode {
    #[default]
    Repeat = 0,
    Clamp = 1,
    RegionClamp = 2,
    RegionRepeat = 3,
}

/// Whether gsKit's draw queue is rebuilt every frame or replayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FlipMode {
    #[default]
    OneShot,
    Persistent,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DisplayConfig {
    pub mode: VideoMode,
    pub clear_color: Rgbaq,
    pub prim_alpha_enable: bool,
    pub prim_alpha: Alpha,
    pub clamp: ClampMode,
    pub flip: FlipMode,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            mode: VideoMode::Ntsc,
            clear_color: CLEAR_COLOR,
            prim_alpha_enable: true,
            prim_alpha: Alpha::SOURCE_OVER,
            clamp: ClampMode::Repeat,
            flip: FlipMode::OneShot,
        }
    }
}

impl DisplayConfig {
    pub fn with_mode(mode: VideoMode) -> Self {
        Self {
            mode,
            ..Self::default()
        }
    }

    pub fn resolution(&self) -> (u32, u32) {
        self.mode.resolution()
    }
}

/// Rejects sizes the GS cannot hold.
pub fn check_resolution(width: u32, height: u32) -> Result<(), Error> {
    if width == 0 || height == 0 || width > GS_MAX_DIMENSION || height > GS_MAX_DIMENSION {
        return Err(Error::InvalidResolution { width, height });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_demo() {
        let config = DisplayConfig::default();
        assert_eq!(config.clear_color, Rgbaq::new(0, 0, 0x3f, 0x80, 0));
        assert_eq!(config.prim_alpha, Alpha::new(0, 1, 0, 1, 0));
        assert!(config.prim_alpha_enable);
        assert_eq!(config.clamp, ClampMode::Repeat);
        assert_eq!(config.flip, FlipMode::OneShot);
        assert_eq!(config.resolution(), (640, 448));
    }

    #[test]
    fn pal_is_taller() {
        assert_eq!(DisplayConfig::with_mode(VideoMode::Pal).resolution(), (640, 512));
    }

    #[test]
    fn resolution_limits() {
        assert!(check_resolution(640, 448).is_ok());
        assert!(check_resolution(2048, 2048).is_ok());
        assert_eq!(
            check_resolution(0, 448),
            Err(Error::InvalidResolution { width: 0, height: 448 })
        );
        assert!(check_resolution(640, 4096).is_err());
    }
}
