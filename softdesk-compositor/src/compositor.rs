//! The immutable drawing context: blitter, region table and theme.

use softdesk_core::config::DesktopConfig;
use softdesk_core::types::Point;

use crate::assets::AssetSet;
use crate::blit::{Blitter, LaneWidth};
use crate::chrome::{decorated_bounds, Region, RegionDraw, RegionTable, Theme};
use crate::cursor::CursorKind;
use crate::error::CompositorError;
use crate::texture::Texture;
use crate::windows::Window;

/// Regions with a draw behaviour, in painting order.
const DRAW_ORDER: [Region; 5] = [
    Region::Titlebar,
    Region::Content,
    Region::Close,
    Region::Maximize,
    Region::Minimize,
];

#[derive(Debug, Clone)]
pub struct Compositor {
    blitter: Blitter,
    regions: RegionTable,
    theme: Theme,
}

impl Compositor {
    pub fn new(lanes: LaneWidth, theme: Theme) -> Self {
        Compositor {
            blitter: Blitter::new(lanes),
            regions: RegionTable::new(),
            theme,
        }
    }

    pub fn from_config(config: &DesktopConfig) -> Result<Self, CompositorError> {
        let lanes = LaneWidth::try_from(config.lane_width)?;
        Ok(Self::new(lanes, Theme::for_mode(config.dark_mode)))
    }

    pub fn blitter(&self) -> &Blitter {
        &self.blitter
    }

    pub fn regions(&self) -> &RegionTable {
        &self.regions
    }

    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    pub fn clear_desktop(&self, target: &mut Texture) {
        self.blitter.clear(target, self.theme.desktop_background);
    }

    /// Paints one window's chrome and content. Borders and corners are invisible.
    pub fn draw_window(
        &self,
        target: &mut Texture,
        window: &Window,
        focused: bool,
        assets: &AssetSet,
        debug_outline: bool,
    ) {
        for region in DRAW_ORDER {
            let rect = window.region_rect(region);
            match self.regions.get(region).draw {
                RegionDraw::None => {}
                RegionDraw::Titlebar => {
                    self.blitter
                        .draw_rect(target, rect.x, rect.y, rect.width, rect.height, self.theme.titlebar(focused));
                }
                RegionDraw::Canvas => {
                    self.blitter
                        .draw_rect(target, rect.x, rect.y, rect.width, rect.height, self.theme.content_background);
                    self.blitter
                        .draw_texture_bounded(target, window.canvas(), rect.x, rect.y, rect.width, rect.height);
                }
                RegionDraw::Button(kind) => {
                    self.blitter
                        .draw_texture_bounded(target, assets.button(kind), rect.x, rect.y, rect.width, rect.height);
                }
            }
        }
        if debug_outline {
            self.blitter
                .draw_outline(target, decorated_bounds(window.content()), self.theme.debug_outline);
        }
    }

    /// Draws the cursor sprite with its hotspot on `pointer`.
    pub fn draw_cursor(&self, target: &mut Texture, assets: &AssetSet, kind: CursorKind, pointer: Point) {
        let sprite = assets.cursor(kind);
        self.blitter.draw_texture_bounded(
            target,
            sprite,
            pointer.x,
            pointer.y,
            sprite.width() as i32,
            sprite.height() as i32,
        );
    }
}
