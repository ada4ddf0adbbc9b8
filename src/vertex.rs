use embedded_graphics::prelude::Point;

/// A screen-space vertex as gsKit takes it.
///
/// (0, 0) is the top-left corner of the display and Y grows downward, unlike
/// OpenGL's centred origin.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vertex {
    pub x: f32,
    pub y: f32,
    pub z: i32,
}

impl Vertex {
    pub const fn new(x: f32, y: f32, z: i32) -> Self {
        Self { x, y, z }
    }

    /// Nearest pixel, for rasterising on the host.
    pub fn to_point(&self) -> Point {
        Point::new(libm::roundf(self.x) as i32, libm::roundf(self.y) as i32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rounds_to_nearest_pixel() {
        assert_eq!(Vertex::new(10.4, 20.6, 0).to_point(), Point::new(10, 21));
        assert_eq!(Vertex::new(-1.6, 0.5, 0).to_point(), Point::new(-2, 1));
    }

    #[test]
    fn just_below_half_rounds_down() {
        assert_eq!(Vertex::new(0.499_999_97, -0.499_999_97, 0).to_point(), Point::new(0, 0));
    }

    #[test]
    fn layout_matches_c_struct() {
        assert_eq!(core::mem::size_of::<Vertex>(), 12);
        assert_eq!(core::mem::align_of::<Vertex>(), 4);
    }
}
