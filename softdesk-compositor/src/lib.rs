//! # softdesk Compositor (`softdesk-compositor`)
//!
//! A software-rendered desktop compositor. It keeps a z-ordered list of
//! decorated windows, resolves pointer input to window regions, drives
//! move/resize/raise/minimize/maximize/close from the primary button, and
//! paints chrome, content and the cursor into a packed-ARGB framebuffer.
//!
//! The host supplies one [`FrameInput`] per frame and presents the framebuffer
//! afterwards:
//!
//! ```
//! use softdesk_compositor::{Desktop, FrameInput, InputTracker, MouseButtons};
//! use softdesk_core::config::DesktopConfig;
//! use softdesk_core::types::Point;
//!
//! let config = DesktopConfig { screen_width: 640, screen_height: 480, ..DesktopConfig::default() };
//! let mut desktop = Desktop::new(&config).unwrap();
//! let window = desktop.create("notes", 40, 60).unwrap();
//!
//! let mut framebuffer = desktop.new_framebuffer();
//! let mut input = InputTracker::new(Point::new(0, 0));
//! let output = desktop.frame(&input.next(Point::new(100, 100), MouseButtons::empty()), &mut framebuffer);
//! assert_eq!(desktop.windows().active(), Some(window));
//! # let _ = output;
//! ```

pub mod assets;
pub mod blit;
pub mod chrome;
pub mod compositor;
pub mod cursor;
pub mod desktop;
pub mod error;
pub mod input;
pub mod interaction;
pub mod texture;
pub mod windows;

pub use assets::AssetSet;
pub use blit::{Blitter, LaneWidth};
pub use chrome::{Region, RegionTable, Theme};
pub use compositor::Compositor;
pub use cursor::CursorKind;
pub use desktop::{Desktop, FrameOutput};
pub use error::{AssetError, CompositorError, WindowError};
pub use hit_test::hit_test;
pub use input::{ButtonState, FrameInput, InputTracker, MouseButtons};
pub use interaction::{Interaction, Latch, Phase};
pub use texture::Texture;
pub use windows::{Window, WindowId, WindowList, WindowListSettings, WindowState};
