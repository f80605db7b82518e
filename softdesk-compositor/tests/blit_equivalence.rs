//! Every lane width must produce exactly the pixels of the scalar path.

use pretty_assertions::assert_eq;
use rstest::rstest;
use softdesk_compositor::{Blitter, LaneWidth, Texture};
use softdesk_core::types::{Color, Point, Rectangle};

fn patterned(width: u32, height: u32) -> Texture {
    Texture::from_fn(width, height, |x, y| {
        let v = x.wrapping_mul(2654435761).wrapping_add(y.wrapping_mul(40503));
        0xFF000000 | (v & 0x00FF_FFFF)
    })
}

fn sprite(width: u32, height: u32) -> Texture {
    Texture::from_fn(width, height, |x, y| {
        let alpha = (x * 29 + y * 53) % 256;
        (alpha << 24) | ((x * 17) % 256) << 16 | ((y * 31) % 256) << 8 | 0x40
    })
}

#[rstest]
fn test_draw_rect_matches_scalar(
    #[values(LaneWidth::X4, LaneWidth::X8)] lanes: LaneWidth,
    #[values((0, 0, 37, 5), (3, 2, 1, 1), (-5, 4, 23, 9), (30, 10, 13, 40), (7, 7, 0, 3))] rect: (i32, i32, i32, i32),
    #[values(0xFF3366CC, 0x80FFFFFF, 0x01020304, 0xFE00FF00)] color: u32,
) {
    let (x, y, w, h) = rect;
    let mut reference = patterned(41, 23);
    let mut vectored = reference.clone();
    Blitter::new(LaneWidth::X1).draw_rect(&mut reference, x, y, w, h, Color(color));
    Blitter::new(lanes).draw_rect(&mut vectored, x, y, w, h, Color(color));
    assert_eq!(reference, vectored);
}

#[rstest]
fn test_draw_texture_matches_scalar(
    #[values(LaneWidth::X4, LaneWidth::X8)] lanes: LaneWidth,
    #[values((0, 0, 19, 11), (-3, 5, 19, 11), (30, 15, 7, 30), (5, 5, 100, 100))] rect: (i32, i32, i32, i32),
    #[values(Point::new(0, 0), Point::new(4, 2))] hotspot: Point,
) {
    let (x, y, w, h) = rect;
    let src = sprite(19, 11).with_hotspot(hotspot);
    let mut reference = patterned(41, 23);
    let mut vectored = reference.clone();
    Blitter::new(LaneWidth::X1).draw_texture_bounded(&mut reference, &src, x, y, w, h);
    Blitter::new(lanes).draw_texture_bounded(&mut vectored, &src, x, y, w, h);
    assert_eq!(reference, vectored);
}

#[rstest]
fn test_clear_and_outline_match_scalar(#[values(LaneWidth::X4, LaneWidth::X8)] lanes: LaneWidth) {
    let mut reference = patterned(29, 13);
    let mut vectored = reference.clone();
    for (blitter, fb) in [(Blitter::new(LaneWidth::X1), &mut reference), (Blitter::new(lanes), &mut vectored)] {
        blitter.clear(fb, Color(0xFF101010));
        blitter.draw_outline(fb, Rectangle::new(2, 1, 25, 11), Color(0x7FFF8000));
    }
    assert_eq!(reference, vectored);
}

#[rstest]
fn test_opaque_fill_is_exact(
    #[values(LaneWidth::X1, LaneWidth::X4, LaneWidth::X8)] lanes: LaneWidth,
    #[values(0xFF000000, 0xFFFFFFFF, 0xFF7F8081, 0xFF123456)] color: u32,
) {
    let mut fb = patterned(21, 9);
    let before = fb.clone();
    let area = Rectangle::new(3, 2, 13, 5);
    Blitter::new(lanes).draw_rect(&mut fb, area.x, area.y, area.width, area.height, Color(color));
    for y in 0..9 {
        for x in 0..21 {
            let expected = if area.contains(x, y) { color } else { before.pixel(x, y).unwrap() };
            assert_eq!(fb.pixel(x, y), Some(expected), "pixel ({x}, {y})");
        }
    }
}

#[test]
fn test_opaque_sprite_pixels_copy_exactly() {
    let src = Texture::from_fn(9, 3, |x, y| 0xFF000000 | (x << 8) | y);
    let mut fb = patterned(12, 4);
    Blitter::new(LaneWidth::X8).draw_texture_bounded(&mut fb, &src, 1, 1, 9, 3);
    for y in 0..3u32 {
        for x in 0..9u32 {
            assert_eq!(fb.pixel(x as i32 + 1, y as i32 + 1), Some(0xFF000000 | (x << 8) | y));
        }
    }
}
