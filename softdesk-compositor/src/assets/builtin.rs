//! Procedurally drawn fallback sprites, used when no asset directory is set
//! or a file is missing from it.

use softdesk_core::types::{Color, Point};

use crate::chrome::{ButtonKind, Theme, BUTTON_WIDTH, TITLEBAR_HEIGHT};
use crate::cursor::CursorKind;
use crate::texture::Texture;

const OUTLINE: u32 = 0xFF000000;
const FILL: u32 = 0xFFFFFFFF;

/// `#` outline, `.` fill, anything else transparent.
const ARROW: [&str; 17] = [
    "#",
    "##",
    "#.#",
    "#..#",
    "#...#",
    "#....#",
    "#.....#",
    "#......#",
    "#.......#",
    "#........#",
    "#.....#####",
    "#..#..#",
    "#.# #..#",
    "##  #..#",
    "#    #..#",
    "     #..#",
    "      ##",
];

fn from_art(rows: &[&str]) -> Texture {
    let width = rows.iter().map(|r| r.len()).max().unwrap_or(0) as u32;
    Texture::from_fn(width, rows.len() as u32, |x, y| {
        match rows[y as usize].as_bytes().get(x as usize) {
            Some(b'#') => OUTLINE,
            Some(b'.') => FILL,
            _ => 0,
        }
    })
}

/// White shape from `inside`, ringed by a one-pixel black outline.
fn outlined(width: i32, height: i32, inside: impl Fn(i32, i32) -> bool) -> Texture {
    Texture::from_fn(width as u32, height as u32, |x, y| {
        let (x, y) = (x as i32, y as i32);
        if inside(x, y) {
            return FILL;
        }
        let touches = (-1..=1).any(|dy| (-1..=1).any(|dx| inside(x + dx, y + dy)));
        if touches {
            OUTLINE
        } else {
            0
        }
    })
    .with_hotspot(Point::new(width / 2, height / 2))
}

/// Double-headed arrow along an axis of length `len`: `t` runs along the
/// axis, `s` is the signed offset across it.
fn double_arrow(t: i32, s: i32, len: i32) -> bool {
    if t < 1 || t > len - 2 {
        return false;
    }
    let from_tip = (t - 1).min(len - 2 - t);
    if from_tip <= 3 {
        s.abs() <= from_tip
    } else {
        s.abs() <= 1
    }
}

/// Diagonal double arrow from the top-left to the bottom-right of a `size` square.
fn diagonal_arrow(x: i32, y: i32, size: i32) -> bool {
    let far = size - 2;
    if x < 1 || y < 1 || x > far || y > far {
        return false;
    }
    let head = size / 2;
    (x - y).abs() <= 1 || x + y <= head || (far + 1 - x) + (far + 1 - y) <= head
}

pub(crate) fn cursor(kind: CursorKind) -> Texture {
    match kind {
        CursorKind::Arrow => from_art(&ARROW),
        CursorKind::ResizeNS => outlined(9, 15, |x, y| double_arrow(y, x - 4, 15)),
        CursorKind::ResizeEW => outlined(15, 9, |x, y| double_arrow(x, y - 4, 15)),
        CursorKind::Move => outlined(15, 15, |x, y| double_arrow(y, x - 7, 15) || double_arrow(x, y - 7, 15)),
        CursorKind::ResizeNWSE => outlined(13, 13, |x, y| diagonal_arrow(x, y, 13)),
        CursorKind::ResizeNESW => outlined(13, 13, |x, y| diagonal_arrow(12 - x, y, 13)),
    }
}

/// A filled disc in the button's theme colour, centred in a titlebar-sized cell.
pub(crate) fn button(kind: ButtonKind, theme: &Theme) -> Texture {
    let color: Color = theme.button(kind);
    let radius2 = 14 * 14;
    Texture::from_fn(BUTTON_WIDTH as u32, TITLEBAR_HEIGHT as u32, |x, y| {
        // Doubled coordinates keep the centre on a pixel corner.
        let dx = 2 * x as i32 + 1 - BUTTON_WIDTH;
        let dy = 2 * y as i32 + 1 - TITLEBAR_HEIGHT;
        if dx * dx + dy * dy <= radius2 {
            color.packed()
        } else {
            0
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_arrow_hotspot_is_tip() {
        let arrow = cursor(CursorKind::Arrow);
        assert_eq!(arrow.hotspot(), Point::ORIGIN);
        assert_eq!(arrow.pixel(0, 0), Some(OUTLINE));
        assert_eq!((arrow.width(), arrow.height()), (11, 17));
    }

    #[test]
    fn test_resize_cursors_are_centred_and_outlined() {
        for kind in CursorKind::ALL.into_iter().filter(|k| k.hotspot_centred()) {
            let sprite = cursor(kind);
            let centre = sprite.hotspot();
            assert_eq!(centre, Point::new(sprite.width() as i32 / 2, sprite.height() as i32 / 2));
            assert_eq!(sprite.pixel(centre.x, centre.y), Some(FILL), "{kind} centre");
            // The outermost ring never holds fill pixels.
            for x in 0..sprite.width() as i32 {
                assert_ne!(sprite.pixel(x, 0), Some(FILL), "{kind} top row");
            }
        }
    }

    #[test]
    fn test_button_is_disc_in_theme_colour() {
        let theme = Theme::LIGHT;
        let close = button(ButtonKind::Close, &theme);
        assert_eq!((close.width(), close.height()), (24, 24));
        assert_eq!(close.pixel(12, 12), Some(theme.close_button.packed()));
        assert_eq!(close.pixel(0, 0), Some(0));
    }
}
