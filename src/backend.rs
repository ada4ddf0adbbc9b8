use crate::color::Rgbaq;

/// The slice of gsKit the demo draws through.
///
/// Coordinates are screen pixels with the origin at the top-left corner.
pub trait GsBackend {
    fn width(&self) -> u32;
    fn height(&self) -> u32;

    fn clear(&mut self, color: Rgbaq);

    /// Axis-aligned filled rectangle from `(x1, y1)` to `(x2, y2)`.
    fn prim_sprite(&mut self, x1: f32, y1: f32, x2: f32, y2: f32, z: i32, color: Rgbaq);

    #[allow(clippy::too_many_arguments)]
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
    );

    #[allow(clippy::too_many_arguments)]
    fn prim_line(&mut self, x1: f32, y1: f32, z1: i32, x2: f32, y2: f32, z2: i32, color: Rgbaq);

    fn prim_point(&mut self, x: f32, y: f32, z: i32, color: Rgbaq);

    /// Submits queued primitives and waits for the next vertical blank.
    fn flip(&mut self);
}
