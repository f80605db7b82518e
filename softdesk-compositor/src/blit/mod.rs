//! Rectangle fills, sprite blits and outlines into a destination [`Texture`].
//!
//! All routines clip to the destination, so callers may pass rectangles that
//! lie partly or wholly off-screen. The lane width only changes how many
//! pixels each kernel step handles; output is identical for every width.

mod lanes;

pub use lanes::blend_pixel;

use softdesk_core::error::CoreError;
use softdesk_core::types::{Color, Rectangle};

use crate::texture::Texture;

/// Pixels per kernel step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum LaneWidth {
    /// Scalar reference path.
    X1,
    X4,
    #[default]
    X8,
}

impl LaneWidth {
    pub const ALL: [LaneWidth; 3] = [LaneWidth::X1, LaneWidth::X4, LaneWidth::X8];

    pub const fn lanes(self) -> usize {
        match self {
            LaneWidth::X1 => 1,
            LaneWidth::X4 => 4,
            LaneWidth::X8 => 8,
        }
    }
}

impl TryFrom<u32> for LaneWidth {
    type Error = CoreError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(LaneWidth::X1),
            4 => Ok(LaneWidth::X4),
            8 => Ok(LaneWidth::X8),
            other => Err(CoreError::InvalidInput(format!(
                "Unsupported lane width {}; expected 1, 4 or 8",
                other
            ))),
        }
    }
}

/// Stateless drawing routines bound to one lane width.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Blitter {
    lanes: LaneWidth,
}

impl Blitter {
    pub const fn new(lanes: LaneWidth) -> Self {
        Blitter { lanes }
    }

    pub fn lanes(&self) -> LaneWidth {
        self.lanes
    }

    /// Sets every pixel of `dst` to `color`, ignoring alpha.
    pub fn clear(&self, dst: &mut Texture, color: Color) {
        self.fill_span(dst.pixels_mut(), color.packed());
    }

    /// Fills a rectangle. Opaque colours are stored as-is; translucent ones are
    /// composited over the existing pixels.
    pub fn draw_rect(&self, dst: &mut Texture, x: i32, y: i32, w: i32, h: i32, color: Color) {
        let Some(clip) = clip_to(dst, Rectangle::new(x, y, w, h)) else {
            return;
        };
        let (x0, x1) = (clip.x as usize, clip.right() as usize);
        let packed = color.packed();
        for row in clip.y as usize..clip.bottom() as usize {
            let span = &mut dst.row_mut(row)[x0..x1];
            if color.is_opaque() {
                self.fill_span(span, packed);
            } else {
                self.blend_color_span(span, packed);
            }
        }
    }

    /// Composites `src` at `(x, y)` minus its hotspot, drawing at most `w` by `h`
    /// source pixels. Each source pixel's own alpha weights the blend.
    pub fn draw_texture_bounded(&self, dst: &mut Texture, src: &Texture, x: i32, y: i32, w: i32, h: i32) {
        let hotspot = src.hotspot();
        let origin_x = x - hotspot.x;
        let origin_y = y - hotspot.y;
        let bounded = Rectangle::new(
            origin_x,
            origin_y,
            w.min(src.width() as i32),
            h.min(src.height() as i32),
        );
        let Some(clip) = clip_to(dst, bounded) else {
            return;
        };
        let src_x0 = (clip.x - origin_x) as usize;
        let span_len = clip.width as usize;
        let (x0, x1) = (clip.x as usize, clip.right() as usize);
        for row in clip.y as usize..clip.bottom() as usize {
            let src_row = (row as i32 - origin_y) as usize;
            let src_span = &src.row(src_row)[src_x0..src_x0 + span_len];
            let dst_span = &mut dst.row_mut(row)[x0..x1];
            self.blend_texture_span(dst_span, src_span);
        }
    }

    /// One-pixel frame along the inside edge of `rect`.
    pub fn draw_outline(&self, dst: &mut Texture, rect: Rectangle, color: Color) {
        let Rectangle { x, y, width, height } = rect;
        self.draw_rect(dst, x, y, width, 1, color);
        self.draw_rect(dst, x, y + height - 1, width, 1, color);
        self.draw_rect(dst, x, y, 1, height, color);
        self.draw_rect(dst, x + width - 1, y, 1, height, color);
    }

    fn fill_span(&self, span: &mut [u32], color: u32) {
        match self.lanes {
            LaneWidth::X1 => lanes::fill_span::<1>(span, color),
            LaneWidth::X4 => lanes::fill_span::<4>(span, color),
            LaneWidth::X8 => lanes::fill_span::<8>(span, color),
        }
    }

    fn blend_color_span(&self, span: &mut [u32], color: u32) {
        match self.lanes {
            LaneWidth::X1 => lanes::blend_color_span::<1>(span, color),
            LaneWidth::X4 => lanes::blend_color_span::<4>(span, color),
            LaneWidth::X8 => lanes::blend_color_span::<8>(span, color),
        }
    }

    fn blend_texture_span(&self, dst: &mut [u32], src: &[u32]) {
        match self.lanes {
            LaneWidth::X1 => lanes::blend_texture_span::<1>(dst, src),
            LaneWidth::X4 => lanes::blend_texture_span::<4>(dst, src),
            LaneWidth::X8 => lanes::blend_texture_span::<8>(dst, src),
        }
    }
}

/// Part of `rect` that lies inside `dst`, or `None` if nothing is visible.
fn clip_to(dst: &Texture, rect: Rectangle) -> Option<Rectangle> {
    Rectangle::new(0, 0, dst.width() as i32, dst.height() as i32).intersection(&rect)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use softdesk_core::types::Point;

    #[rstest]
    #[case(1, Ok(LaneWidth::X1))]
    #[case(4, Ok(LaneWidth::X4))]
    #[case(8, Ok(LaneWidth::X8))]
    #[case(2, Err(()))]
    fn test_lane_width_try_from(#[case] raw: u32, #[case] expected: Result<LaneWidth, ()>) {
        assert_eq!(LaneWidth::try_from(raw).map_err(|_| ()), expected);
    }

    #[test]
    fn test_clear_fills_everything() {
        let mut fb = Texture::new(5, 3);
        Blitter::new(LaneWidth::X4).clear(&mut fb, Color(0x12345678));
        assert!(fb.pixels().iter().all(|&p| p == 0x12345678));
    }

    #[test]
    fn test_draw_rect_clips_to_destination() {
        let mut fb = Texture::new(4, 4);
        Blitter::new(LaneWidth::X8).draw_rect(&mut fb, -2, 2, 4, 10, Color::WHITE);
        let painted: Vec<(i32, i32)> = (0..4)
            .flat_map(|y| (0..4).map(move |x| (x, y)))
            .filter(|&(x, y)| fb.pixel(x, y) == Some(0xFFFFFFFF))
            .collect();
        assert_eq!(painted, vec![(0, 2), (1, 2), (0, 3), (1, 3)]);
    }

    #[test]
    fn test_draw_rect_fully_outside_is_noop() {
        let mut fb = Texture::new(4, 4);
        let blitter = Blitter::new(LaneWidth::X1);
        blitter.draw_rect(&mut fb, 4, 0, 3, 3, Color::WHITE);
        blitter.draw_rect(&mut fb, 0, 0, -3, 3, Color::WHITE);
        assert!(fb.pixels().iter().all(|&p| p == 0));
    }

    #[test]
    fn test_draw_texture_applies_hotspot_and_bounds() {
        let sprite = Texture::filled(3, 3, Color::WHITE).with_hotspot(Point::new(1, 1));
        let mut fb = Texture::new(6, 6);
        Blitter::new(LaneWidth::X4).draw_texture_bounded(&mut fb, &sprite, 2, 2, 2, 10);
        // Origin lands at (1, 1); width bounded to 2, height limited by the sprite.
        for y in 0..6 {
            for x in 0..6 {
                let inside = (1..3).contains(&x) && (1..4).contains(&y);
                assert_eq!(fb.pixel(x, y) == Some(0xFFFFFFFF), inside, "pixel ({x}, {y})");
            }
        }
    }

    #[test]
    fn test_draw_texture_clips_source_offset() {
        let sprite = Texture::from_fn(4, 1, |x, _| 0xFF000000 | x);
        let mut fb = Texture::new(3, 1);
        Blitter::new(LaneWidth::X1).draw_texture_bounded(&mut fb, &sprite, -2, 0, 4, 1);
        assert_eq!(fb.pixels(), &[0xFF000002, 0xFF000003, 0]);
    }

    #[test]
    fn test_draw_outline() {
        let mut fb = Texture::new(5, 4);
        Blitter::new(LaneWidth::X4).draw_outline(&mut fb, Rectangle::new(0, 0, 5, 4), Color::WHITE);
        let border = |x: i32, y: i32| x == 0 || y == 0 || x == 4 || y == 3;
        for y in 0..4 {
            for x in 0..5 {
                assert_eq!(fb.pixel(x, y) == Some(0xFFFFFFFF), border(x, y));
            }
        }
    }
}
