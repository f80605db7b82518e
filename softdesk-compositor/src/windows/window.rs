use std::fmt;

use softdesk_core::types::{Point, Rectangle};

use crate::chrome::{region_rect, Region, MIN_CONTENT_HEIGHT, MIN_CONTENT_WIDTH, TITLEBAR_HALF};
use crate::texture::Texture;

/// Index of a window slot. Stays the same for as long as the window is open;
/// a closed slot may be handed out again by a later create.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct WindowId(u32);

impl WindowId {
    /// Link terminator. Never a valid slot index.
    pub(crate) const NIL: WindowId = WindowId(u32::MAX);

    pub(crate) fn from_index(index: usize) -> Self {
        WindowId(index as u32)
    }

    pub(crate) fn index(self) -> usize {
        self.0 as usize
    }

    pub(crate) fn is_nil(self) -> bool {
        self == Self::NIL
    }

    pub fn raw(self) -> u32 {
        self.0
    }
}

impl fmt::Display for WindowId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "window#{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum WindowState {
    /// Waiting for the close sweep, or sitting on the free list.
    #[default]
    Closed,
    Normal,
    Minimized,
    Maximized,
}

#[derive(Debug)]
pub struct Window {
    title: String,
    state: WindowState,
    content: Rectangle,
    /// Pre-maximize content; meaningful only while maximized.
    saved: Rectangle,
    canvas: Texture,
    pub(super) prev: WindowId,
    pub(super) next: WindowId,
    /// Linked into the live list (as opposed to the free list).
    pub(super) live: bool,
}

impl Window {
    /// A fresh window with a newly allocated, transparent canvas sized to `content`.
    pub(super) fn open(title: &str, content: Rectangle) -> Self {
        let content = content.clamp_min_size(MIN_CONTENT_WIDTH, MIN_CONTENT_HEIGHT);
        Window {
            title: title.to_string(),
            state: WindowState::Normal,
            content,
            saved: Rectangle::ZERO,
            canvas: Texture::new(content.width as u32, content.height as u32),
            prev: WindowId::NIL,
            next: WindowId::NIL,
            live: true,
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn state(&self) -> WindowState {
        self.state
    }

    /// Shown on screen and eligible for hit testing.
    pub fn is_visible(&self) -> bool {
        matches!(self.state, WindowState::Normal | WindowState::Maximized)
    }

    pub fn content(&self) -> Rectangle {
        self.content
    }

    /// Position and size the window returns to when un-maximized.
    pub fn saved_rect(&self) -> Option<Rectangle> {
        (self.state == WindowState::Maximized).then_some(self.saved)
    }

    /// Moves or resizes the content. Sizes below the minimum are kept as given.
    pub fn set_content(&mut self, content: Rectangle) {
        self.content = content;
    }

    pub fn region_rect(&self, region: Region) -> Rectangle {
        region_rect(self.content, region)
    }

    pub fn canvas(&self) -> &Texture {
        &self.canvas
    }

    pub fn canvas_mut(&mut self) -> &mut Texture {
        &mut self.canvas
    }

    pub(crate) fn set_state(&mut self, state: WindowState) {
        self.state = state;
    }

    pub(crate) fn clamp_to_minimum(&mut self) {
        self.content = self.content.clamp_min_size(MIN_CONTENT_WIDTH, MIN_CONTENT_HEIGHT);
    }

    pub(super) fn maximize(&mut self, maximized: Rectangle) {
        self.saved = self.content;
        self.content = maximized;
        self.state = WindowState::Maximized;
    }

    /// Back to the saved rectangle. Only meaningful while maximized.
    pub(super) fn restore(&mut self) {
        self.content = self.saved;
        self.state = WindowState::Normal;
    }

    /// Restores a maximized window around `pointer`: centred horizontally, with
    /// the pointer in the vertical middle of the titlebar.
    pub(crate) fn restore_under_pointer(&mut self, pointer: Point) {
        let saved = self.saved;
        self.content = Rectangle::new(
            pointer.x - saved.width / 2,
            pointer.y + TITLEBAR_HALF,
            saved.width,
            saved.height,
        );
        self.state = WindowState::Normal;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use static_assertions::assert_impl_all;

    assert_impl_all!(WindowId: Copy, Send, Sync, std::hash::Hash);
    assert_impl_all!(Window: Send, Sync);

    #[test]
    fn test_open_clamps_and_allocates_canvas() {
        let window = Window::open("tiny", Rectangle::new(5, 6, 10, 10));
        assert_eq!(window.content(), Rectangle::new(5, 6, MIN_CONTENT_WIDTH, MIN_CONTENT_HEIGHT));
        assert_eq!(window.canvas().width() as i32, MIN_CONTENT_WIDTH);
        assert_eq!(window.canvas().height() as i32, MIN_CONTENT_HEIGHT);
        assert_eq!(window.state(), WindowState::Normal);
        assert_eq!(window.saved_rect(), None);
    }

    #[test]
    fn test_maximize_then_restore() {
        let mut window = Window::open("w", Rectangle::new(10, 40, 200, 100));
        window.maximize(Rectangle::new(0, 24, 800, 576));
        assert_eq!(window.state(), WindowState::Maximized);
        assert_eq!(window.saved_rect(), Some(Rectangle::new(10, 40, 200, 100)));
        window.restore();
        assert_eq!(window.content(), Rectangle::new(10, 40, 200, 100));
        assert_eq!(window.state(), WindowState::Normal);
    }

    #[test]
    fn test_restore_under_pointer_centres_on_titlebar() {
        let mut window = Window::open("w", Rectangle::new(10, 40, 200, 100));
        window.maximize(Rectangle::new(0, 24, 800, 576));
        window.restore_under_pointer(Point::new(400, 12));
        let titlebar = window.region_rect(Region::Titlebar);
        assert_eq!(window.content(), Rectangle::new(300, 24, 200, 100));
        assert_eq!(titlebar.y + TITLEBAR_HALF, 12);
        assert_eq!(window.state(), WindowState::Normal);
    }

    #[test]
    fn test_window_id_display() {
        assert_eq!(WindowId::from_index(3).to_string(), "window#3");
        assert!(WindowId::NIL.is_nil());
    }
}
