//! Drawing primitives the face is rendered through.
//!
//! The face never touches pixels itself. It sets a compositing mode and a fill
//! color, fills polygons and blits 1-bit images on a [`RenderSurface`]; the
//! [`Canvas`](super::canvas::Canvas) is the software implementation used by the
//! CLI, and tests substitute recording or mock surfaces.

use anyhow::{Context, Result};

use super::geometry::{Point, Rect};

/// The face's fixed palette. Greys are rendered as dither patterns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Color {
    Black,
    DarkGray,
    Gray,
    LightGray,
    White,
}

impl Color {
    /// Whether this color puts a white pixel at `(x, y)`.
    pub fn is_white_at(self, x: i32, y: i32) -> bool {
        match self {
            Color::Black => false,
            Color::White => true,
            Color::DarkGray => Tone::Dark.is_white_at(x, y),
            Color::Gray => Tone::Medium.is_white_at(x, y),
            Color::LightGray => Tone::Light.is_white_at(x, y),
        }
    }
}

/// How a blitted image combines with what is already on the surface.
///
/// Polygon fills always overwrite; only image blits honour the mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CompositingMode {
    /// Destination becomes the source.
    #[default]
    Assign,
    /// Source white pixels turn the destination white.
    Or,
    /// Source black pixels turn the destination black.
    And,
    /// Source white pixels turn the destination black.
    Clear,
}

impl CompositingMode {
    pub fn combine(self, dst: bool, src: bool) -> bool {
        match self {
            CompositingMode::Assign => src,
            CompositingMode::Or => dst || src,
            CompositingMode::And => dst && src,
            CompositingMode::Clear => dst && !src,
        }
    }
}

/// Grey level of a band's overlay texture.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    /// One pixel in four is white.
    Dark,
    /// Checkerboard.
    Medium,
    /// Three pixels in four are white.
    Light,
}

impl Tone {
    pub fn is_white_at(self, x: i32, y: i32) -> bool {
        let (odd_x, odd_y) = (x.rem_euclid(2) == 1, y.rem_euclid(2) == 1);
        match self {
            Tone::Dark => !odd_x && !odd_y,
            Tone::Medium => odd_x == odd_y,
            Tone::Light => !(odd_x && odd_y),
        }
    }
}

/// A 1-bit image; `true` is white.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Image {
    width: u16,
    height: u16,
    pixels: Vec<bool>,
}

impl Image {
    /// Allocate a black image.
    pub fn new(width: u16, height: u16) -> Result<Self> {
        if width == 0 || height == 0 {
            anyhow::bail!("image size must be non-zero (got {width}x{height})");
        }
        let len = width as usize * height as usize;
        let mut pixels = Vec::new();
        pixels
            .try_reserve_exact(len)
            .with_context(|| format!("failed to allocate {width}x{height} image"))?;
        pixels.resize(len, false);
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    /// A full image of the given grey tone.
    pub fn tone(tone: Tone, width: u16, height: u16) -> Result<Self> {
        let mut image = Self::new(width, height)?;
        for y in 0..height {
            for x in 0..width {
                image.set(x, y, tone.is_white_at(x as i32, y as i32));
            }
        }
        Ok(image)
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    pub fn get(&self, x: u16, y: u16) -> bool {
        self.pixels[y as usize * self.width as usize + x as usize]
    }

    pub fn set(&mut self, x: u16, y: u16, white: bool) {
        let index = y as usize * self.width as usize + x as usize;
        self.pixels[index] = white;
    }

    /// Sample the image stretched over a `dst_width` x `dst_height` rectangle.
    pub fn sample(&self, dx: i32, dy: i32, dst_width: i32, dst_height: i32) -> bool {
        let sx = (dx as i64 * self.width as i64 / dst_width.max(1) as i64) as u16;
        let sy = (dy as i64 * self.height as i64 / dst_height.max(1) as i64) as u16;
        self.get(sx.min(self.width - 1), sy.min(self.height - 1))
    }
}

/// A polygon realized for drawing: its points plus a drawing offset.
///
/// Built fresh from a point buffer for every draw and dropped afterwards;
/// moving it twice is never needed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Path {
    points: Vec<Point>,
    offset: Point,
}

impl Path {
    pub fn new(points: &[Point]) -> Result<Self> {
        if points.len() < 3 {
            anyhow::bail!("a path needs at least 3 points (got {})", points.len());
        }
        let mut owned = Vec::new();
        owned
            .try_reserve_exact(points.len())
            .context("failed to allocate path points")?;
        owned.extend_from_slice(points);
        Ok(Self {
            points: owned,
            offset: Point::default(),
        })
    }

    /// Place the path's origin at `origin` on the surface.
    pub fn move_to(&mut self, origin: Point) {
        self.offset = origin;
    }

    pub fn offset(&self) -> Point {
        self.offset
    }

    /// Points in surface coordinates.
    pub fn surface_points(&self) -> Vec<Point> {
        self.points.iter().map(|p| p.offset(self.offset)).collect()
    }
}

/// Something the face can be drawn onto.
#[cfg_attr(test, mockall::automock)]
pub trait RenderSurface {
    fn set_compositing_mode(&mut self, mode: CompositingMode);

    fn set_fill_color(&mut self, color: Color);

    /// Fill the closed polygon with the current fill color.
    fn fill_path(&mut self, path: &Path);

    /// Blit `image` stretched to `rect` using the current compositing mode.
    fn draw_image(&mut self, image: &Image, rect: Rect);
}

/// One call made on a [`RecordingSurface`].
#[cfg(any(test, feature = "testing-support"))]
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCall {
    Mode(CompositingMode),
    FillColor(Color),
    FillPath(Vec<Point>),
    Image { rect: Rect, width: u16, height: u16 },
}

/// Test surface that only records what was asked of it.
#[cfg(any(test, feature = "testing-support"))]
#[derive(Debug, Default)]
pub struct RecordingSurface {
    pub calls: Vec<DrawCall>,
}

#[cfg(any(test, feature = "testing-support"))]
impl RecordingSurface {
    /// The fill color in effect for each polygon fill, in order.
    pub fn fill_colors(&self) -> Vec<Color> {
        let mut current = None;
        let mut fills = Vec::new();
        for call in &self.calls {
            match call {
                DrawCall::FillColor(color) => current = Some(*color),
                DrawCall::FillPath(_) => fills.extend(current),
                _ => {}
            }
        }
        fills
    }

    pub fn filled_paths(&self) -> Vec<&[Point]> {
        self.calls
            .iter()
            .filter_map(|call| match call {
                DrawCall::FillPath(points) => Some(points.as_slice()),
                _ => None,
            })
            .collect()
    }
}

#[cfg(any(test, feature = "testing-support"))]
impl RenderSurface for RecordingSurface {
    fn set_compositing_mode(&mut self, mode: CompositingMode) {
        self.calls.push(DrawCall::Mode(mode));
    }

    fn set_fill_color(&mut self, color: Color) {
        self.calls.push(DrawCall::FillColor(color));
    }

    fn fill_path(&mut self, path: &Path) {
        self.calls.push(DrawCall::FillPath(path.surface_points()));
    }

    fn draw_image(&mut self, image: &Image, rect: Rect) {
        self.calls.push(DrawCall::Image {
            rect,
            width: image.width(),
            height: image.height(),
        });
    }
}
