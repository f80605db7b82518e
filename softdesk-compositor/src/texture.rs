//! Pixel buffers.
//!
//! A [`Texture`] is both the source and the destination of every blit: the
//! framebuffer, each window's content canvas, cursor sprites and title button
//! sprites are all textures. Pixels are packed `0xAARRGGBB`, row-major, with no
//! row padding.

use softdesk_core::types::{Color, Point};

use crate::error::AssetError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Texture {
    width: u32,
    height: u32,
    pixels: Vec<u32>,
    /// Offset subtracted from the draw position, so that `(x, y)` lands on this pixel.
    hotspot: Point,
}

impl Texture {
    /// A fully transparent texture.
    pub fn new(width: u32, height: u32) -> Self {
        Self::filled(width, height, Color::TRANSPARENT)
    }

    pub fn filled(width: u32, height: u32, color: Color) -> Self {
        Texture {
            width,
            height,
            pixels: vec![color.packed(); width as usize * height as usize],
            hotspot: Point::ORIGIN,
        }
    }

    /// Builds a texture by evaluating `f(x, y)` for every pixel.
    pub fn from_fn(width: u32, height: u32, mut f: impl FnMut(u32, u32) -> u32) -> Self {
        let mut pixels = Vec::with_capacity(width as usize * height as usize);
        for y in 0..height {
            for x in 0..width {
                pixels.push(f(x, y));
            }
        }
        Texture {
            width,
            height,
            pixels,
            hotspot: Point::ORIGIN,
        }
    }

    /// Wraps an existing pixel vector. Fails if the length is not `width * height`.
    pub fn from_pixels(width: u32, height: u32, pixels: Vec<u32>) -> Result<Self, AssetError> {
        let needed = width as usize * height as usize;
        if pixels.len() != needed {
            return Err(AssetError::Truncated {
                needed,
                actual: pixels.len(),
            });
        }
        Ok(Texture {
            width,
            height,
            pixels,
            hotspot: Point::ORIGIN,
        })
    }

    #[must_use]
    pub fn with_hotspot(mut self, hotspot: Point) -> Self {
        self.hotspot = hotspot;
        self
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn hotspot(&self) -> Point {
        self.hotspot
    }

    pub fn pixels(&self) -> &[u32] {
        &self.pixels
    }

    pub fn pixels_mut(&mut self) -> &mut [u32] {
        &mut self.pixels
    }

    /// The pixel at `(x, y)`, or `None` outside the texture.
    pub fn pixel(&self, x: i32, y: i32) -> Option<u32> {
        if x < 0 || y < 0 || x as u32 >= self.width || y as u32 >= self.height {
            return None;
        }
        self.pixels.get(y as usize * self.width as usize + x as usize).copied()
    }

    pub fn set_pixel(&mut self, x: i32, y: i32, value: u32) {
        if x < 0 || y < 0 || x as u32 >= self.width || y as u32 >= self.height {
            return;
        }
        let index = y as usize * self.width as usize + x as usize;
        if let Some(px) = self.pixels.get_mut(index) {
            *px = value;
        }
    }

    pub(crate) fn row(&self, y: usize) -> &[u32] {
        let stride = self.width as usize;
        &self.pixels[y * stride..(y + 1) * stride]
    }

    pub(crate) fn row_mut(&mut self, y: usize) -> &mut [u32] {
        let stride = self.width as usize;
        &mut self.pixels[y * stride..(y + 1) * stride]
    }
}
