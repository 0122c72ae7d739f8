/// A point on the canvas in pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    /// X in pixels, growing right.
    pub x: f32,
    /// Y in pixels, growing down.
    pub y: f32,
}

impl Point {
    /// Create a point.
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Opaque RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
}

impl Color {
    /// `#00ff00`
    pub const GREEN: Color = Color::rgb(0x00, 0xff, 0x00);
    /// `#ffffff`
    pub const WHITE: Color = Color::rgb(0xff, 0xff, 0xff);

    /// Create a color from channel values.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// 2D drawing surface the overlay is rendered onto.
///
/// Implementations decide how primitives are rasterized; the renderer only
/// issues pixel-space drawing commands.
pub trait Canvas {
    /// Surface width in pixels.
    fn width(&self) -> u32;

    /// Surface height in pixels.
    fn height(&self) -> u32;

    /// Match the surface to the video resolution. Clears the surface.
    fn resize(&mut self, width: u32, height: u32);

    /// Erase everything drawn so far.
    fn clear(&mut self);

    /// Stroke a straight line segment.
    fn stroke_line(&mut self, from: Point, to: Point, color: Color, line_width: f32);

    /// Fill a circle.
    fn fill_circle(&mut self, center: Point, radius: f32, color: Color);

    /// Draw a short text label with its baseline-left corner at `at`.
    fn fill_text(&mut self, text: &str, at: Point, color: Color);
}
