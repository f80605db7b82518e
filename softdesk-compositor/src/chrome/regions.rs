//! Region geometry.
//!
//! Every region rectangle is derived on demand from a window's content
//! rectangle and the fixed chrome metrics. Nothing is cached, so the chrome
//! always follows the current content.

use softdesk_core::types::Rectangle;

use super::{
    BUTTON_WIDTH, CORNER_HALF, CORNER_SIZE, EDGE_HALF, EDGE_WIDTH, MIN_CONTENT_HEIGHT, MIN_CONTENT_WIDTH,
    TITLEBAR_HEIGHT,
};

/// The thirteen named areas of a decorated window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Region {
    Content,
    Titlebar,
    Close,
    Maximize,
    Minimize,
    North,
    South,
    West,
    East,
    NorthWest,
    NorthEast,
    SouthWest,
    SouthEast,
}

impl Region {
    /// All regions, in declaration order. `Region::ALL[r.index()] == r`.
    pub const ALL: [Region; 13] = [
        Region::Content,
        Region::Titlebar,
        Region::Close,
        Region::Maximize,
        Region::Minimize,
        Region::North,
        Region::South,
        Region::West,
        Region::East,
        Region::NorthWest,
        Region::NorthEast,
        Region::SouthWest,
        Region::SouthEast,
    ];

    /// Hit-test precedence: buttons, titlebar, content, corners, borders.
    pub const HIT_ORDER: [Region; 13] = [
        Region::Close,
        Region::Maximize,
        Region::Minimize,
        Region::Titlebar,
        Region::Content,
        Region::NorthWest,
        Region::NorthEast,
        Region::SouthWest,
        Region::SouthEast,
        Region::North,
        Region::South,
        Region::West,
        Region::East,
    ];

    pub const fn index(self) -> usize {
        self as usize
    }
}

/// The rectangle `region` occupies for a window whose content is `content`.
///
/// The content is first raised to the minimum size, so mid-drag undersized or
/// inverted windows still produce well-formed chrome.
pub fn region_rect(content: Rectangle, region: Region) -> Rectangle {
    let c = content.clamp_min_size(MIN_CONTENT_WIDTH, MIN_CONTENT_HEIGHT);
    let top = c.y - TITLEBAR_HEIGHT;
    match region {
        Region::Content => c,
        Region::Titlebar => Rectangle::new(c.x, top, c.width, TITLEBAR_HEIGHT),
        Region::Close => Rectangle::new(c.right() - BUTTON_WIDTH, top, BUTTON_WIDTH, TITLEBAR_HEIGHT),
        Region::Maximize => Rectangle::new(c.right() - 2 * BUTTON_WIDTH, top, BUTTON_WIDTH, TITLEBAR_HEIGHT),
        Region::Minimize => Rectangle::new(c.right() - 3 * BUTTON_WIDTH, top, BUTTON_WIDTH, TITLEBAR_HEIGHT),
        Region::North => Rectangle::new(c.x, top - EDGE_HALF, c.width, EDGE_WIDTH),
        Region::South => Rectangle::new(c.x, c.bottom() - EDGE_HALF, c.width, EDGE_WIDTH),
        Region::West => Rectangle::new(c.x - EDGE_HALF, top, EDGE_WIDTH, c.height + TITLEBAR_HEIGHT),
        Region::East => Rectangle::new(c.right() - EDGE_HALF, top, EDGE_WIDTH, c.height + TITLEBAR_HEIGHT),
        Region::NorthWest => Rectangle::new(c.x - CORNER_HALF, top - CORNER_HALF, CORNER_SIZE, CORNER_SIZE),
        Region::NorthEast => Rectangle::new(c.right() - CORNER_HALF, top - CORNER_HALF, CORNER_SIZE, CORNER_SIZE),
        Region::SouthWest => Rectangle::new(c.x - CORNER_HALF, c.bottom() - CORNER_HALF, CORNER_SIZE, CORNER_SIZE),
        Region::SouthEast => {
            Rectangle::new(c.right() - CORNER_HALF, c.bottom() - CORNER_HALF, CORNER_SIZE, CORNER_SIZE)
        }
    }
}

/// Outer bounds of content, titlebar and borders. Only used for the debug outline.
pub fn decorated_bounds(content: Rectangle) -> Rectangle {
    let c = content.clamp_min_size(MIN_CONTENT_WIDTH, MIN_CONTENT_HEIGHT);
    Rectangle::new(
        c.x - EDGE_HALF,
        c.y - TITLEBAR_HEIGHT - EDGE_HALF,
        c.width + EDGE_WIDTH,
        c.height + TITLEBAR_HEIGHT + EDGE_WIDTH,
    )
}
