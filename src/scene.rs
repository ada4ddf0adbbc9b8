//! The static picture: a grey rectangle centred on screen, a green triangle
//! inscribed in it, a red line along the triangle's left edge and a blue dot
//! in the middle.

use crate::backend::GsBackend;
use crate::canvas::Canvas;
use crate::color::Rgbaq;
use crate::error::Error;
use crate::vertex::Vertex;

pub const RECT_WIDTH: f32 = 300.0;
pub const RECT_HEIGHT: f32 = 200.0;

pub const RECT_COLOR: Rgbaq = Rgbaq::new(127, 127, 127, 0x80, 0);
pub const TRIANGLE_COLOR: Rgbaq = Rgbaq::new(0, 96, 24, 0x80, 0);
pub const LINE_COLOR: Rgbaq = Rgbaq::new(127, 0, 0, 0x80, 0);
pub const POINT_COLOR: Rgbaq = Rgbaq::new(0, 0, 255, 0x80, 0);

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Scene {
    pub clear_color: Rgbaq,
    pub rect_x: f32,
    pub rect_y: f32,
    /// Apex, bottom-right and bottom-left of the triangle.
    pub triangle: [Vertex; 3],
    pub center: Vertex,
}

impl Scene {
    pub fn new(width: u32, height: u32, clear_color: Rgbaq) -> Result<Self, Error> {
        if (width as f32) < RECT_WIDTH || (height as f32) < RECT_HEIGHT {
            return Err(Error::SceneDoesNotFit { width, height });
        }

        let (w, h) = (width as f32, height as f32);
        let rect_x = w / 2.0 - RECT_WIDTH / 2.0;
        let rect_y = h / 2.0 - RECT_HEIGHT / 2.0;

        let v1 = Vertex::new(rect_x + RECT_WIDTH / 2.0, rect_y, 0);
        let v2 = Vertex::new(rect_x + RECT_WIDTH, rect_y + RECT_HEIGHT, 0);
        let v3 = Vertex::new(rect_x, rect_y + RECT_HEIGHT, 0);
        let center = Vertex::new(w / 2.0, h / 2.0, 0);

        Ok(Self {
            clear_color,
            rect_x,
            rect_y,
            triangle: [v1, v2, v3],
            center,
        })
    }

    pub fn for_canvas<B: GsBackend>(canvas: &Canvas<B>, clear_color: Rgbaq) -> Result<Self, Error> {
        Self::new(canvas.width(), canvas.height(), clear_color)
    }

    /// Draws one full frame and flips.
    pub fn render<B: GsBackend>(&self, canvas: &mut Canvas<B>) {
        let [v1, v2, v3] = &self.triangle;

        canvas.clear(self.clear_color);
        canvas.rectangle(self.rect_x, self.rect_y, RECT_WIDTH, RECT_HEIGHT, 0, RECT_COLOR);
        canvas.triangle(v1, v2, v3, TRIANGLE_COLOR);
        canvas.line(v1, v3, LINE_COLOR);
        canvas.point(&self.center, POINT_COLOR);
        canvas.present();
    }
}
