//! GS register values used by the demo.

use embedded_graphics::pixelcolor::Rgb888;
use embedded_graphics::prelude::RgbColor;

/// Alpha value the GS treats as 1.0.
pub const ALPHA_ONE: u8 = 0x80;

/// Packed RGBAQ register: vertex colour plus the Q texture coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgbaq(pub u64);

impl Rgbaq {
    pub const fn new(r: u8, g: u8, b: u8, a: u8, q: u32) -> Self {
        Self(r as u64 | (g as u64) << 8 | (b as u64) << 16 | (a as u64) << 24 | (q as u64) << 32)
    }

    /// Opaque colour with Q = 0.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, ALPHA_ONE, 0)
    }

    pub const fn r(self) -> u8 {
        self.0 as u8
    }

    pub const fn g(self) -> u8 {
        (self.0 >> 8) as u8
    }

    pub const fn b(self) -> u8 {
        (self.0 >> 16) as u8
    }

    pub const fn a(self) -> u8 {
        (self.0 >> 24) as u8
    }

    pub const fn q(self) -> u32 {
        (self.0 >> 32) as u32
    }
}

impl From<Rgbaq> for Rgb888 {
    fn from(c: Rgbaq) -> Self {
        Rgb888::new(c.r(), c.g(), c.b())
    }
}

/// Colour operand of the blend equation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorSel {
    Source = 0,
    Dest = 1,
    Zero = 2,
}

/// Alpha operand of the blend equation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlphaSel {
    Source = 0,
    Dest = 1,
    Fix = 2,
}

/// Packed ALPHA register.
///
/// The GS blends as `((A - B) * C >> 7) + D`, each result channel clamped to
/// 0..=255.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Alpha(pub u64);

impl Alpha {
    /// Classic source-over: `(Cs - Cd) * As + Cd`.
    pub const SOURCE_OVER: Alpha = Alpha::new(0, 1, 0, 1, 0);

    pub const fn new(a: u8, b: u8, c: u8, d: u8, fix: u8) -> Self {
        Self(
            (a & 3) as u64
                | ((b & 3) as u64) << 2
                | ((c & 3) as u64) << 4
                | ((d & 3) as u64) << 6
                | (fix as u64) << 32,
        )
    }

    pub const fn from_sel(a: ColorSel, b: ColorSel, c: AlphaSel, d: ColorSel, fix: u8) -> Self {
        Self::new(a as u8, b as u8, c as u8, d as u8, fix)
    }

    pub const fn a(self) -> u8 {
        (self.0 & 3) as u8
    }

    pub const fn b(self) -> u8 {
        ((self.0 >> 2) & 3) as u8
    }

    pub const fn c(self) -> u8 {
        ((self.0 >> 4) & 3) as u8
    }

    pub const fn d(self) -> u8 {
        ((self.0 >> 6) & 3) as u8
    }

    pub const fn fix(self) -> u8 {
        (self.0 >> 32) as u8
    }

    /// Blends a source pixel over a destination pixel the way the GS does.
    pub fn blend(self, src: Rgb888, src_alpha: u8, dst: Rgb888, dst_alpha: u8) -> Rgb888 {
        let coeff = i32::from(match self.c() {
            0 => src_alpha,
            1 => dst_alpha,
            _ => self.fix(),
        });

        let channel = |cs: u8, cd: u8| -> u8 {
            let pick = |sel: u8| match sel {
                0 => cs as i32,
                1 => cd as i32,
                _ => 0,
            };
            let v = ((pick(self.a()) - pick(self.b())) * coeff >> 7) + pick(self.d());
            v.clamp(0, 255) as u8
        };

        Rgb888::new(
            channel(src.r(), dst.r()),
            channel(src.g(), dst.g()),
            channel(src.b(), dst.b()),
        )
    }
}

impl Default for Alpha {
    fn default() -> Self {
        Self::SOURCE_OVER
    }
}
