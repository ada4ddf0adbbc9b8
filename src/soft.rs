//! In-memory stand-in for the GS, rasterised with embedded-graphics.
//!
//! Sprites cover `[x1, x2) x [y1, y2)` like the GS does; triangles and lines
//! use embedded-graphics' rasterisers, which agree with the hardware to within
//! a pixel on edges.

use alloc::{vec, vec::Vec};
use core::convert::Infallible;

use embedded_graphics::{
    draw_target::DrawTarget,
    pixelcolor::Rgb888,
    prelude::{OriginDimensions, Point, Primitive, RgbColor, Size},
    primitives::{Line, PrimitiveStyle, Rectangle, Triangle},
    Drawable, Pixel,
};

use crate::backend::GsBackend;
use crate::color::{Alpha, Rgbaq, ALPHA_ONE};
use crate::config::{self, DisplayConfig};
use crate::error::Error;
use crate::vertex::Vertex;

pub struct Framebuffer {
    width: u32,
    height: u32,
    pixels: Vec<Rgb888>,
    alpha: Vec<u8>,
    blend: Option<Alpha>,
    src_alpha: u8,
    flips: u64,
}

impl Framebuffer {
    pub fn new(width: u32, height: u32) -> Result<Self, Error> {
        config::check_resolution(width, height)?;
        let len = (width * height) as usize;
        Ok(Self {
            width,
            height,
            pixels: vec![Rgb888::BLACK; len],
            alpha: vec![0; len],
            blend: None,
            src_alpha: ALPHA_ONE,
            flips: 0,
        })
    }

    /// Framebuffer sized and blended as `config` asks.
    pub fn from_config(config: &DisplayConfig) -> Result<Self, Error> {
        let (width, height) = config.resolution();
        let mut fb = Self::new(width, height)?;
        if config.prim_alpha_enable {
            fb.blend = Some(config.prim_alpha);
        }
        log::debug!(
            "software framebuffer {}x{}, blending {:?}",
            width,
            height,
            fb.blend
        );
        Ok(fb)
    }

    pub fn set_blend(&mut self, blend: Option<Alpha>) {
        self.blend = blend;
    }

    pub fn flips(&self) -> u64 {
        self.flips
    }

    pub fn pixel(&self, x: u32, y: u32) -> Option<Rgb888> {
        self.index(x as i32, y as i32).map(|i| self.pixels[i])
    }

    pub fn pixel_alpha(&self, x: u32, y: u32) -> Option<u8> {
        self.index(x as i32, y as i32).map(|i| self.alpha[i])
    }

    /// Contents as packed 8-bit RGB rows, top row first.
    pub fn rgb_bytes(&self) -> Vec<u8> {
        self.pixels
            .iter()
            .flat_map(|p| [p.r(), p.g(), p.b()])
            .collect()
    }

    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || y < 0 || x >= self.width as i32 || y >= self.height as i32 {
            return None;
        }
        Some(y as usize * self.width as usize + x as usize)
    }

    fn with_alpha(&mut self, color: Rgbaq) -> Rgb888 {
        self.src_alpha = color.a();
        color.into()
    }
}

fn done(result: Result<(), Infallible>) {
    match result {
        Ok(()) => {}
        Err(never) => match never {},
    }
}

impl OriginDimensions for Framebuffer {
    fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }
}

impl DrawTarget for Framebuffer {
    type Color = Rgb888;
    type Error = Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(coord, color) in pixels.into_iter() {
            if let Some(i) = self.index(coord.x, coord.y) {
                self.pixels[i] = match self.blend {
                    Some(alpha) => alpha.blend(color, self.src_alpha, self.pixels[i], self.alpha[i]),
                    None => color,
                };
                self.alpha[i] = self.src_alpha;
            }
        }

        Ok(())
    }
}

impl GsBackend for Framebuffer {
    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn clear(&mut self, color: Rgbaq) {
        self.pixels.fill(color.into());
        self.alpha.fill(color.a());
    }

    fn prim_sprite(&mut self, x1: f32, y1: f32, x2: f32, y2: f32, z: i32, color: Rgbaq) {
        let a = Vertex::new(x1, y1, z).to_point();
        let b = Vertex::new(x2, y2, z).to_point();
        let top_left = Point::new(a.x.min(b.x), a.y.min(b.y));
        let size = Size::new(a.x.abs_diff(b.x), a.y.abs_diff(b.y));

        let fill = self.with_alpha(color);
        done(
            Rectangle::new(top_left, size)
                .into_styled(PrimitiveStyle::with_fill(fill))
                .draw(self),
        );
    }

    fn prim_triangle(
        &mut self,
        x1: f32,
        y1: f32,
        z1: i32,
        x2: f32,
        y2: f32,
        z2: i32,
        x3: f32,
        y3: f32,
        z3: i32,
        color: Rgbaq,
    ) {
        let fill = self.with_alpha(color);
        done(
            Triangle::new(
                Vertex::new(x1, y1, z1).to_point(),
                Vertex::new(x2, y2, z2).to_point(),
                Vertex::new(x3, y3, z3).to_point(),
            )
            .into_styled(PrimitiveStyle::with_fill(fill))
            .draw(self),
        );
    }

    fn prim_line(&mut self, x1: f32, y1: f32, z1: i32, x2: f32, y2: f32, z2: i32, color: Rgbaq) {
        let stroke = self.with_alpha(color);
        done(
            Line::new(
                Vertex::new(x1, y1, z1).to_point(),
                Vertex::new(x2, y2, z2).to_point(),
            )
            .into_styled(PrimitiveStyle::with_stroke(stroke, 1))
            .draw(self),
        );
    }

    fn prim_point(&mut self, x: f32, y: f32, z: i32, color: Rgbaq) {
        let c = self.with_alpha(color);
        done(Pixel(Vertex::new(x, y, z).to_point(), c).draw(self));
    }

    fn flip(&mut self) {
        self.flips += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::Canvas;
    use crate::config::CLEAR_COLOR;
    use crate::scene::Scene;

    fn demo_frame() -> Framebuffer {
        let config = DisplayConfig::default();
        let mut canvas = Canvas::new(Framebuffer::from_config(&config).unwrap());
        let scene = Scene::for_canvas(&canvas, config.clear_color).unwrap();
        scene.render(&mut canvas);
        canvas.into_backend()
    }

    #[test]
    fn background_outside_rectangle() {
        let fb = demo_frame();
        let clear = Rgb888::from(CLEAR_COLOR);
        assert_eq!(fb.pixel(0, 0), Some(clear));
        assert_eq!(fb.pixel(639, 447), Some(clear));
        assert_eq!(fb.pixel(165, 224), Some(clear));
        assert_eq!(fb.flips(), 1);
    }

    #[test]
    fn rectangle_right_edge_is_exclusive() {
        let fb = demo_frame();
        assert_eq!(fb.pixel(469, 150), Some(Rgb888::new(127, 127, 127)));
        assert_eq!(fb.pixel(470, 150), Some(Rgb888::from(CLEAR_COLOR)));
        assert_eq!(fb.pixel(175, 200), Some(Rgb888::new(127, 127, 127)));
    }

    #[test]
    fn triangle_line_and_point() {
        let fb = demo_frame();
        assert_eq!(fb.pixel(320, 300), Some(Rgb888::new(0, 96, 24)));
        assert_eq!(fb.pixel(320, 224), Some(Rgb888::new(0, 0, 255)));

        let red = Rgb888::new(127, 0, 0);
        assert!((242..=248).any(|x| fb.pixel(x, 224) == Some(red)));
        assert!((242..=248).all(|x| fb.pixel(x, 150) != Some(red)));
    }

    #[test]
    fn translucent_sprite_blends_with_background() {
        let mut fb = Framebuffer::new(8, 8).unwrap();
        fb.set_blend(Some(Alpha::SOURCE_OVER));
        GsBackend::clear(&mut fb, Rgbaq::rgb(100, 50, 0));
        fb.prim_sprite(0.0, 0.0, 4.0, 4.0, 0, Rgbaq::new(200, 0, 0, 0x40, 0));

        assert_eq!(fb.pixel(1, 1), Some(Rgb888::new(150, 25, 0)));
        assert_eq!(fb.pixel_alpha(1, 1), Some(0x40));
        assert_eq!(fb.pixel(5, 5), Some(Rgb888::new(100, 50, 0)));
    }

    #[test]
    fn blending_off_overwrites() {
        let mut fb = Framebuffer::new(4, 4).unwrap();
        GsBackend::clear(&mut fb, Rgbaq::rgb(100, 50, 0));
        fb.prim_point(2.0, 2.0, 0, Rgbaq::new(200, 0, 0, 0x10, 0));
        assert_eq!(fb.pixel(2, 2), Some(Rgb888::new(200, 0, 0)));
    }

    #[test]
    fn out_of_bounds_is_clipped() {
        let mut fb = Framebuffer::new(4, 4).unwrap();
        fb.prim_sprite(-10.0, -10.0, 2.0, 2.0, 0, Rgbaq::rgb(9, 9, 9));
        fb.prim_point(100.0, 1.0, 0, Rgbaq::rgb(1, 1, 1));
        assert_eq!(fb.pixel(1, 1), Some(Rgb888::new(9, 9, 9)));
        assert_eq!(fb.pixel(2, 2), Some(Rgb888::BLACK));
        assert_eq!(fb.pixel(4, 0), None);
    }

    #[test]
    fn rejects_empty_framebuffer() {
        assert!(matches!(
            Framebuffer::new(0, 10),
            Err(Error::InvalidResolution { width: 0, height: 10 })
        ));
    }

    #[test]
    fn rgb_bytes_row_major() {
        let mut fb = Framebuffer::new(2, 2).unwrap();
        GsBackend::clear(&mut fb, Rgbaq::rgb(1, 2, 3));
        fb.prim_point(1.0, 0.0, 0, Rgbaq::rgb(9, 8, 7));

        let bytes = fb.rgb_bytes();
        assert_eq!(bytes.len(), 2 * 2 * 3);
        assert_eq!(&bytes[..6], &[1, 2, 3, 9, 8, 7]);
        assert_eq!(&bytes[6..], &[1, 2, 3, 1, 2, 3]);
    }
}
