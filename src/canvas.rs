use crate::backend::GsBackend;
use crate::color::Rgbaq;
use crate::vertex::Vertex;

/// Drawing context handed to everything that renders.
pub struct Canvas<B: GsBackend> {
    backend: B,
    frames: u64,
}

impl<B: GsBackend> Canvas<B> {
    pub fn new(backend: B) -> Self {
        Self { backend, frames: 0 }
    }

    pub fn width(&self) -> u32 {
        self.backend.width()
    }

    pub fn height(&self) -> u32 {
        self.backend.height()
    }

    /// Frames presented so far.
    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn into_backend(self) -> B {
        self.backend
    }

    pub fn clear(&mut self, color: Rgbaq) {
        self.backend.clear(color);
    }

    /// Draws a filled rectangle from its top-left corner and size.
    pub fn rectangle(&mut self, x: f32, y: f32, width: f32, height: f32, z: i32, color: Rgbaq) {
        self.backend.prim_sprite(x, y, x + width, y + height, z, color);
    }

    pub fn triangle(&mut self, v1: &Vertex, v2: &Vertex, v3: &Vertex, color: Rgbaq) {
        self.backend
            .prim_triangle(v1.x, v1.y, v1.z, v2.x, v2.y, v2.z, v3.x, v3.y, v3.z, color);
    }

    pub fn line(&mut self, start: &Vertex, end: &Vertex, color: Rgbaq) {
        self.backend
            .prim_line(start.x, start.y, start.z, end.x, end.y, end.z, color);
    }

    pub fn point(&mut self, point: &Vertex, color: Rgbaq) {
        self.backend.prim_point(point.x, point.y, point.z, color);
    }

    /// Submits the frame and blocks until the flip.
    pub fn present(&mut self) {
        self.backend.flip();
        self.frames += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::testing::{Call, Recorder};

    #[test]
    fn rectangle_becomes_sprite_corners() {
        let mut canvas = Canvas::new(Recorder::new(640, 448));
        let grey = Rgbaq::rgb(127, 127, 127);
        canvas.rectangle(170.0, 124.0, 300.0, 200.0, 3, grey);

        assert_eq!(
            canvas.backend().calls,
            vec![Call::Sprite([170.0, 124.0, 470.0, 324.0], 3, grey)]
        );
    }

    #[test]
    fn vertices_forwarded_in_order() {
        let mut canvas = Canvas::new(Recorder::new(640, 448));
        let v1 = Vertex::new(1.0, 2.0, 3);
        let v2 = Vertex::new(4.0, 5.0, 6);
        let v3 = Vertex::new(7.0, 8.0, 9);
        let red = Rgbaq::rgb(127, 0, 0);

        canvas.triangle(&v1, &v2, &v3, red);
        canvas.line(&v3, &v1, red);
        canvas.point(&v2, red);

        assert_eq!(
            canvas.backend().calls,
            vec![
                Call::Triangle([(1.0, 2.0, 3), (4.0, 5.0, 6), (7.0, 8.0, 9)], red),
                Call::Line([(7.0, 8.0, 9), (1.0, 2.0, 3)], red),
                Call::Point((4.0, 5.0, 6), red),
            ]
        );
    }

    #[test]
    fn present_counts_frames() {
        let mut canvas = Canvas::new(Recorder::new(640, 448));
        canvas.present();
        canvas.present();
        assert_eq!(canvas.frames(), 2);
        assert_eq!(canvas.into_backend().calls, vec![Call::Flip, Call::Flip]);
    }
}
