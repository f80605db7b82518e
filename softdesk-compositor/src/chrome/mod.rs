//! Window decoration: metrics, region geometry, the per-region behaviour table
//! and the colour theme.

pub mod regions;
pub mod table;
pub mod theme;

pub use regions::{decorated_bounds, region_rect, Region};
pub use table::{ButtonKind, InteractionKind, RegionDraw, RegionInvariant, RegionTable, ResizeEdges};
pub use theme::Theme;

/// Height of the titlebar strip above the content.
pub const TITLEBAR_HEIGHT: i32 = 24;
pub const TITLEBAR_HALF: i32 = TITLEBAR_HEIGHT / 2;
/// Width of each titlebar button. Buttons are as tall as the titlebar.
pub const BUTTON_WIDTH: i32 = 24;
/// Thickness of the resize borders, centred on the window edge.
pub const EDGE_WIDTH: i32 = 6;
pub const EDGE_HALF: i32 = EDGE_WIDTH / 2;
/// Side of the square resize handles, centred on each outer corner.
pub const CORNER_SIZE: i32 = 16;
pub const CORNER_HALF: i32 = CORNER_SIZE / 2;

/// Content size enforced whenever the pointer is not dragging.
pub const MIN_CONTENT_WIDTH: i32 = 3 * BUTTON_WIDTH + CORNER_SIZE;
pub const MIN_CONTENT_HEIGHT: i32 = 2 * CORNER_SIZE;
