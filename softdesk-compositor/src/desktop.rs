//! Frame orchestration.
//!
//! [`Desktop::frame`] runs one complete cycle:
//!
//! 1. clear the framebuffer to the desktop colour,
//! 2. hit-test and run the interaction state machine,
//! 3. unlink windows that were closed during step 2,
//! 4. resolve the active window,
//! 5. paint visible windows back to front,
//! 6. paint the cursor sprite on top.

use softdesk_core::config::DesktopConfig;
use softdesk_core::types::Rectangle;
use tracing::{debug, info};

use crate::assets::AssetSet;
use crate::compositor::Compositor;
use crate::cursor::CursorKind;
use crate::error::CompositorError;
use crate::input::FrameInput;
use crate::interaction::Interaction;
use crate::texture::Texture;
use crate::windows::{WindowId, WindowList, WindowListSettings};

/// What the host needs from a finished frame besides the framebuffer itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameOutput {
    pub cursor: CursorKind,
}

#[derive(Debug)]
pub struct Desktop {
    compositor: Compositor,
    assets: AssetSet,
    windows: WindowList,
    interaction: Interaction,
    screen_width: u32,
    screen_height: u32,
    debug_outline: bool,
}

impl Desktop {
    /// Builds a desktop from configuration, loading sprites from
    /// `config.asset_dir` when set.
    pub fn new(config: &DesktopConfig) -> Result<Self, CompositorError> {
        let compositor = Compositor::from_config(config)?;
        let assets = AssetSet::load(config.asset_dir.as_deref(), compositor.theme())?;
        Ok(Self::with_parts(config, compositor, assets))
    }

    /// Like [`new`](Self::new) but with an already loaded sprite set.
    pub fn with_assets(config: &DesktopConfig, assets: AssetSet) -> Result<Self, CompositorError> {
        let compositor = Compositor::from_config(config)?;
        Ok(Self::with_parts(config, compositor, assets))
    }

    fn with_parts(config: &DesktopConfig, compositor: Compositor, assets: AssetSet) -> Self {
        let windows = WindowList::new(WindowListSettings {
            capacity: config.window_capacity,
            focus_follows_mouse: config.focus_follows_mouse,
            default_width: config.default_window_width as i32,
            default_height: config.default_window_height as i32,
            screen_width: config.screen_width as i32,
            screen_height: config.screen_height as i32,
        });
        info!(
            "Desktop {}x{} ready: lanes={:?}, capacity={}, focus_follows_mouse={}",
            config.screen_width,
            config.screen_height,
            compositor.blitter().lanes(),
            config.window_capacity,
            config.focus_follows_mouse
        );
        Desktop {
            compositor,
            assets,
            windows,
            interaction: Interaction::new(),
            screen_width: config.screen_width,
            screen_height: config.screen_height,
            debug_outline: config.debug_outline,
        }
    }

    pub fn create(&mut self, title: &str, x: i32, y: i32) -> Result<WindowId, CompositorError> {
        Ok(self.windows.create(title, x, y)?)
    }

    pub fn create_sized(&mut self, title: &str, content: Rectangle) -> Result<WindowId, CompositorError> {
        Ok(self.windows.create_sized(title, content)?)
    }

    pub fn windows(&self) -> &WindowList {
        &self.windows
    }

    pub fn windows_mut(&mut self) -> &mut WindowList {
        &mut self.windows
    }

    pub fn interaction(&self) -> &Interaction {
        &self.interaction
    }

    /// A framebuffer matching the configured screen size.
    pub fn new_framebuffer(&self) -> Texture {
        Texture::new(self.screen_width, self.screen_height)
    }

    /// Runs one frame against `target`.
    pub fn frame(&mut self, input: &FrameInput, target: &mut Texture) -> FrameOutput {
        self.compositor.clear_desktop(target);

        let cursor = self
            .interaction
            .process(&mut self.windows, self.compositor.regions(), input);

        let swept = self.windows.sweep_closed();
        if swept > 0 {
            debug!("Swept {} closed window(s)", swept);
        }

        self.windows.resolve_focus(input.pointer);

        let active = self.windows.active();
        for (id, window) in self.windows.iter_back_to_front() {
            if !window.is_visible() {
                continue;
            }
            self.compositor
                .draw_window(target, window, active == Some(id), &self.assets, self.debug_outline);
        }

        self.compositor.draw_cursor(target, &self.assets, cursor, input.pointer);
        FrameOutput { cursor }
    }
}
