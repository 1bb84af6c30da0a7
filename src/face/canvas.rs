//! Software 1-bit render surface.

use anyhow::{Context, Result};
use std::fs;
use std::path::Path as FsPath;

use super::geometry::{Point, Rect};
use super::surface::{Color, CompositingMode, Image, Path, RenderSurface};

/// Characters from darkest to brightest for terminal previews.
const ASCII_RAMP: &[u8] = b" .:-=+*#%@";

/// A black-and-white pixel buffer, initially all white.
#[derive(Debug, Clone)]
pub struct Canvas {
    width: i16,
    height: i16,
    pixels: Vec<bool>,
    mode: CompositingMode,
    fill: Color,
}

impl Canvas {
    pub fn new(width: i16, height: i16) -> Result<Self> {
        if width <= 0 || height <= 0 {
            anyhow::bail!("canvas size must be positive (got {width}x{height})");
        }
        let len = width as usize * height as usize;
        let mut pixels = Vec::new();
        pixels
            .try_reserve_exact(len)
            .context("failed to allocate canvas")?;
        pixels.resize(len, true);
        Ok(Self {
            width,
            height,
            pixels,
            mode: CompositingMode::default(),
            fill: Color::Black,
        })
    }

    pub fn bounds(&self) -> Rect {
        Rect::new(0, 0, self.width, self.height)
    }

    pub fn is_white(&self, x: i16, y: i16) -> bool {
        self.pixels[self.index(x, y)]
    }

    /// Number of white pixels, handy for coarse assertions.
    pub fn white_count(&self) -> usize {
        self.pixels.iter().filter(|white| **white).count()
    }

    fn index(&self, x: i16, y: i16) -> usize {
        y as usize * self.width as usize + x as usize
    }

    fn put(&mut self, x: i32, y: i32, white: bool) {
        if x >= 0 && y >= 0 && x < self.width as i32 && y < self.height as i32 {
            let index = self.index(x as i16, y as i16);
            self.pixels[index] = white;
        }
    }

    /// Binary PGM (P5) encoding of the canvas.
    pub fn to_pgm(&self) -> Vec<u8> {
        let mut out = format!("P5\n{} {}\n255\n", self.width, self.height).into_bytes();
        out.extend(self.pixels.iter().map(|white| if *white { 255u8 } else { 0 }));
        out
    }

    pub fn write_pgm(&self, path: &FsPath) -> Result<()> {
        fs::write(path, self.to_pgm())
            .with_context(|| format!("failed to write image to {}", path.display()))
    }

    /// Downsampled text rendering, `columns` characters wide.
    ///
    /// Each character covers a cell twice as tall as it is wide, which roughly
    /// matches terminal glyph proportions.
    pub fn to_ascii(&self, columns: u16) -> String {
        let columns = columns.clamp(1, self.width as u16) as i32;
        let cell_w = (self.width as i32 + columns - 1) / columns;
        let cell_h = cell_w * 2;
        let mut out = String::new();

        let mut y0 = 0;
        while y0 < self.height as i32 {
            let mut x0 = 0;
            while x0 < self.width as i32 {
                let (mut white, mut total) = (0usize, 0usize);
                for y in y0..(y0 + cell_h).min(self.height as i32) {
                    for x in x0..(x0 + cell_w).min(self.width as i32) {
                        total += 1;
                        if self.is_white(x as i16, y as i16) {
                            white += 1;
                        }
                    }
                }
                let level = white * (ASCII_RAMP.len() - 1) / total.max(1);
                out.push(ASCII_RAMP[level] as char);
                x0 += cell_w;
            }
            out.push('\n');
            y0 += cell_h;
        }
        out
    }
}

impl RenderSurface for Canvas {
    fn set_compositing_mode(&mut self, mode: CompositingMode) {
        self.mode = mode;
    }

    fn set_fill_color(&mut self, color: Color) {
        self.fill = color;
    }

    /// Even-odd scanline fill sampled at pixel centres.
    fn fill_path(&mut self, path: &Path) {
        let points = path.surface_points();
        let Some(min_y) = points.iter().map(|p| p.y).min() else {
            return;
        };
        let max_y = points.iter().map(|p| p.y).max().unwrap_or(min_y);

        let first_row = (min_y as i32).max(0);
        let last_row = (max_y as i32).min(self.height as i32 - 1);
        let mut crossings: Vec<f64> = Vec::with_capacity(points.len());

        for y in first_row..=last_row {
            let yc = y as f64 + 0.5;
            crossings.clear();

            for (i, a) in points.iter().enumerate() {
                let b: Point = points[(i + 1) % points.len()];
                let (ay, by) = (a.y as f64, b.y as f64);
                if (ay <= yc && yc < by) || (by <= yc && yc < ay) {
                    let t = (yc - ay) / (by - ay);
                    crossings.push(a.x as f64 + t * (b.x as f64 - a.x as f64));
                }
            }
            crossings.sort_by(|l, r| l.total_cmp(r));

            for span in crossings.chunks_exact(2) {
                let start = (span[0] - 0.5).ceil() as i32;
                let end = (span[1] - 0.5).ceil() as i32;
                for x in start.max(0)..end.min(self.width as i32) {
                    self.put(x, y, self.fill.is_white_at(x, y));
                }
            }
        }
    }

    fn draw_image(&mut self, image: &Image, rect: Rect) {
        let (w, h) = (rect.width as i32, rect.height as i32);
        for dy in 0..h {
            for dx in 0..w {
                let x = rect.origin.x as i32 + dx;
                let y = rect.origin.y as i32 + dy;
                if x < 0 || y < 0 || x >= self.width as i32 || y >= self.height as i32 {
                    continue;
                }
                let dst = self.is_white(x as i16, y as i16);
                let src = image.sample(dx, dy, w, h);
                self.put(x, y, self.mode.combine(dst, src));
            }
        }
    }
}
