//! Z-ordered window list backed by a fixed-capacity slot arena.
//!
//! Live windows form a doubly-linked chain through `prev`/`next` indices, from
//! `first` (most recently raised) to `last`. Closed slots form a singly-linked
//! free list through `next`. [`WindowId::NIL`] terminates both chains.

use softdesk_core::types::{Point, Rectangle};
use tracing::{debug, info};

use super::window::{Window, WindowId, WindowState};
use crate::chrome::TITLEBAR_HEIGHT;
use crate::error::WindowError;
use crate::hit_test::hit_test;

/// Fixed parameters of a [`WindowList`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowListSettings {
    /// Maximum number of slots, live and free together.
    pub capacity: usize,
    pub focus_follows_mouse: bool,
    /// Content size used by [`WindowList::create`].
    pub default_width: i32,
    pub default_height: i32,
    pub screen_width: i32,
    pub screen_height: i32,
}

impl WindowListSettings {
    /// Content rectangle of a maximized window: the whole screen below one titlebar.
    pub fn maximized_rect(&self) -> Rectangle {
        Rectangle::new(0, TITLEBAR_HEIGHT, self.screen_width, self.screen_height - TITLEBAR_HEIGHT)
    }
}

impl Default for WindowListSettings {
    fn default() -> Self {
        WindowListSettings {
            capacity: 64,
            focus_follows_mouse: false,
            default_width: 320,
            default_height: 200,
            screen_width: 1280,
            screen_height: 720,
        }
    }
}

#[derive(Debug)]
pub struct WindowList {
    settings: WindowListSettings,
    slots: Vec<Window>,
    first: WindowId,
    last: WindowId,
    free: WindowId,
    active: Option<WindowId>,
    len: usize,
}

impl WindowList {
    pub fn new(settings: WindowListSettings) -> Self {
        WindowList {
            slots: Vec::with_capacity(settings.capacity),
            settings,
            first: WindowId::NIL,
            last: WindowId::NIL,
            free: WindowId::NIL,
            active: None,
            len: 0,
        }
    }

    /// Opens a window with the default content size at `(x, y)`.
    pub fn create(&mut self, title: &str, x: i32, y: i32) -> Result<WindowId, WindowError> {
        let content = Rectangle::new(x, y, self.settings.default_width, self.settings.default_height);
        self.create_sized(title, content)
    }

    /// Opens a window and raises it to the front. Recycles a closed slot if one
    /// exists; the canvas is always freshly allocated.
    pub fn create_sized(&mut self, title: &str, content: Rectangle) -> Result<WindowId, WindowError> {
        let id = if !self.free.is_nil() {
            let id = self.free;
            self.free = self.slots[id.index()].next;
            self.slots[id.index()] = Window::open(title, content);
            id
        } else if self.slots.len() < self.settings.capacity {
            self.slots.push(Window::open(title, content));
            WindowId::from_index(self.slots.len() - 1)
        } else {
            return Err(WindowError::CapacityExceeded {
                capacity: self.settings.capacity,
            });
        };

        self.link_front(id);
        self.len += 1;
        if !self.settings.focus_follows_mouse {
            self.active = Some(id);
        }
        info!("Opened {} '{}' at {:?}", id, title, self.slots[id.index()].content());
        Ok(id)
    }

    /// Moves `id` to the front of the z-order. Also activates it unless focus
    /// follows the mouse.
    pub fn raise(&mut self, id: WindowId) -> Result<(), WindowError> {
        self.check(id)?;
        if self.first != id {
            self.unlink(id);
            self.link_front(id);
        }
        if !self.settings.focus_follows_mouse {
            self.active = Some(id);
        }
        Ok(())
    }

    /// Marks `id` closed. It stays linked until the next [`sweep_closed`](Self::sweep_closed).
    pub fn request_close(&mut self, id: WindowId) -> Result<(), WindowError> {
        self.check(id)?;
        self.slots[id.index()].set_state(WindowState::Closed);
        Ok(())
    }

    /// Unlinks `id` immediately and pushes its slot onto the free list.
    ///
    /// Returns the window that preceded it in the z-order, so a caller walking
    /// the list can continue from there.
    pub fn close(&mut self, id: WindowId) -> Result<Option<WindowId>, WindowError> {
        self.check(id)?;
        let prev = self.slots[id.index()].prev;
        self.unlink(id);

        let window = &mut self.slots[id.index()];
        window.set_state(WindowState::Closed);
        window.live = false;
        window.next = self.free;
        self.free = id;
        self.len -= 1;

        if self.active == Some(id) {
            self.active = None;
        }
        info!("Closed {} '{}'", id, self.slots[id.index()].title());
        Ok((!prev.is_nil()).then_some(prev))
    }

    /// Unlinks every window whose state became [`WindowState::Closed`].
    /// Returns how many were removed.
    pub fn sweep_closed(&mut self) -> usize {
        let mut removed = 0;
        let mut cursor = self.first;
        while !cursor.is_nil() {
            if self.slots[cursor.index()].state() != WindowState::Closed {
                cursor = self.slots[cursor.index()].next;
                continue;
            }
            removed += 1;
            cursor = match self.close(cursor) {
                Ok(Some(prev)) => self.slots[prev.index()].next,
                Ok(None) | Err(_) => self.first,
            };
        }
        removed
    }

    /// Normal ⇄ Minimized. A maximized window is restored before it is minimized.
    /// Restoring from minimized raises the window.
    pub fn toggle_minimize(&mut self, id: WindowId) -> Result<(), WindowError> {
        self.check(id)?;
        match self.slots[id.index()].state() {
            WindowState::Minimized => {
                self.slots[id.index()].set_state(WindowState::Normal);
                self.raise(id)?;
                debug!("Restored {} from minimized", id);
            }
            WindowState::Normal | WindowState::Maximized => {
                let window = &mut self.slots[id.index()];
                if window.state() == WindowState::Maximized {
                    window.restore();
                }
                window.set_state(WindowState::Minimized);
                if self.active == Some(id) {
                    self.active = self.next_visible();
                }
                debug!("Minimized {}; active is now {:?}", id, self.active);
            }
            WindowState::Closed => {}
        }
        Ok(())
    }

    /// Normal ⇄ Maximized. Minimized and closing windows are left alone.
    pub fn toggle_maximize(&mut self, id: WindowId) -> Result<(), WindowError> {
        self.check(id)?;
        let maximized = self.settings.maximized_rect();
        let window = &mut self.slots[id.index()];
        match window.state() {
            WindowState::Normal => window.maximize(maximized),
            WindowState::Maximized => window.restore(),
            WindowState::Minimized | WindowState::Closed => {}
        }
        debug!("{} is now {:?} at {:?}", id, window.state(), window.content());
        Ok(())
    }

    pub fn get(&self, id: WindowId) -> Option<&Window> {
        self.slots.get(id.index()).filter(|w| w.live)
    }

    pub fn get_mut(&mut self, id: WindowId) -> Option<&mut Window> {
        self.slots.get_mut(id.index()).filter(|w| w.live)
    }

    /// The content canvas of `id`, for content producers to draw into.
    pub fn canvas_mut(&mut self, id: WindowId) -> Option<&mut crate::texture::Texture> {
        self.get_mut(id).map(Window::canvas_mut)
    }

    pub fn active(&self) -> Option<WindowId> {
        self.active
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn capacity(&self) -> usize {
        self.settings.capacity
    }

    /// Most recently raised window.
    pub fn front(&self) -> Option<WindowId> {
        (!self.first.is_nil()).then_some(self.first)
    }

    pub fn back(&self) -> Option<WindowId> {
        (!self.last.is_nil()).then_some(self.last)
    }

    /// The window behind `id` in the z-order.
    pub fn next_of(&self, id: WindowId) -> Option<WindowId> {
        self.get(id).map(|w| w.next).filter(|n| !n.is_nil())
    }

    /// Live windows from most to least recently raised.
    pub fn iter_front_to_back(&self) -> impl Iterator<Item = (WindowId, &Window)> + '_ {
        self.walk(self.first, |w| w.next)
    }

    /// Live windows from least to most recently raised, i.e. painting order.
    pub fn iter_back_to_front(&self) -> impl Iterator<Item = (WindowId, &Window)> + '_ {
        self.walk(self.last, |w| w.prev)
    }

    /// Re-evaluates the active window after interaction and the close sweep.
    ///
    /// With focus-follows-mouse the topmost visible window under `pointer`
    /// becomes active. Otherwise an active window that is no longer visible
    /// hands over to the frontmost visible window.
    pub fn resolve_focus(&mut self, pointer: Point) {
        if self.settings.focus_follows_mouse {
            let hovered = self
                .iter_front_to_back()
                .find(|(_, w)| hit_test(w, pointer.x, pointer.y).is_some())
                .map(|(id, _)| id);
            if hovered.is_some() {
                self.active = hovered;
            }
        } else if !self.active.and_then(|id| self.get(id)).is_some_and(Window::is_visible) {
            self.active = self.next_visible();
        }
    }

    fn next_visible(&self) -> Option<WindowId> {
        self.iter_front_to_back()
            .find(|(_, w)| w.is_visible())
            .map(|(id, _)| id)
    }

    fn walk(&self, start: WindowId, step: fn(&Window) -> WindowId) -> impl Iterator<Item = (WindowId, &Window)> + '_ {
        let mut cursor = start;
        std::iter::from_fn(move || {
            if cursor.is_nil() {
                return None;
            }
            let id = cursor;
            let window = &self.slots[id.index()];
            cursor = step(window);
            Some((id, window))
        })
    }

    fn check(&self, id: WindowId) -> Result<(), WindowError> {
        match self.get(id) {
            Some(_) => Ok(()),
            None => Err(WindowError::UnknownWindow(id)),
        }
    }

    fn link_front(&mut self, id: WindowId) {
        let old_first = self.first;
        {
            let window = &mut self.slots[id.index()];
            window.prev = WindowId::NIL;
            window.next = old_first;
        }
        if old_first.is_nil() {
            self.last = id;
        } else {
            self.slots[old_first.index()].prev = id;
        }
        self.first = id;
    }

    fn unlink(&mut self, id: WindowId) {
        let (prev, next) = {
            let window = &self.slots[id.index()];
            (window.prev, window.next)
        };
        if prev.is_nil() {
            self.first = next;
        } else {
            self.slots[prev.index()].next = next;
        }
        if next.is_nil() {
            self.last = prev;
        } else {
            self.slots[next.index()].prev = prev;
        }
        let window = &mut self.slots[id.index()];
        window.prev = WindowId::NIL;
        window.next = WindowId::NIL;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn list(capacity: usize) -> WindowList {
        WindowList::new(WindowListSettings {
            capacity,
            screen_width: 800,
            screen_height: 600,
            ..WindowListSettings::default()
        })
    }

    fn z_order(list: &WindowList) -> Vec<WindowId> {
        list.iter_front_to_back().map(|(id, _)| id).collect()
    }

    fn assert_consistent(list: &WindowList) {
        let forward = z_order(list);
        let mut backward: Vec<WindowId> = list.iter_back_to_front().map(|(id, _)| id).collect();
        backward.reverse();
        assert_eq!(forward, backward);
        assert_eq!(forward.len(), list.len());
    }

    #[test]
    fn test_create_puts_window_in_front() {
        let mut list = list(4);
        let a = list.create("a", 0, 30).unwrap();
        let b = list.create("b", 10, 40).unwrap();
        assert_eq!(z_order(&list), vec![b, a]);
        assert_eq!(list.active(), Some(b));
        assert_consistent(&list);
    }

    #[test]
    fn test_raise_moves_to_front() {
        let mut list = list(4);
        let a = list.create("a", 0, 30).unwrap();
        let b = list.create("b", 0, 30).unwrap();
        let c = list.create("c", 0, 30).unwrap();
        list.raise(a).unwrap();
        assert_eq!(z_order(&list), vec![a, c, b]);
        list.raise(b).unwrap();
        assert_eq!(z_order(&list), vec![b, a, c]);
        assert_eq!(list.active(), Some(b));
        assert_consistent(&list);
    }

    #[test]
    fn test_close_returns_previous_neighbour() {
        let mut list = list(4);
        let a = list.create("a", 0, 30).unwrap();
        let b = list.create("b", 0, 30).unwrap();
        let c = list.create("c", 0, 30).unwrap();
        assert_eq!(list.close(b).unwrap(), Some(c));
        assert_eq!(list.close(c).unwrap(), None);
        assert_eq!(z_order(&list), vec![a]);
        assert!(list.get(b).is_none());
        assert_eq!(list.close(b), Err(WindowError::UnknownWindow(b)));
        assert_consistent(&list);
    }

    #[test]
    fn test_capacity_exceeded() {
        let mut list = list(2);
        list.create("a", 0, 30).unwrap();
        list.create("b", 0, 30).unwrap();
        assert_eq!(
            list.create("c", 0, 30),
            Err(WindowError::CapacityExceeded { capacity: 2 })
        );
        assert_eq!(list.len(), 2);
        assert_consistent(&list);
    }

    #[test]
    fn test_free_list_is_lifo() {
        let mut list = list(3);
        let a = list.create("a", 0, 30).unwrap();
        let b = list.create("b", 0, 30).unwrap();
        list.close(a).unwrap();
        list.close(b).unwrap();
        assert_eq!(list.create("c", 0, 30).unwrap(), b);
        assert_eq!(list.create("d", 0, 30).unwrap(), a);
        assert_consistent(&list);
    }

    #[test]
    fn test_sweep_removes_only_closed_windows() {
        let mut list = list(4);
        let a = list.create("a", 0, 30).unwrap();
        let b = list.create("b", 0, 30).unwrap();
        let c = list.create("c", 0, 30).unwrap();
        list.request_close(c).unwrap();
        list.request_close(a).unwrap();
        assert_eq!(list.len(), 3);
        assert_eq!(list.sweep_closed(), 2);
        assert_eq!(z_order(&list), vec![b]);
        assert_consistent(&list);
    }

    #[test]
    fn test_toggle_maximize_saves_and_restores() {
        let mut list = list(2);
        let a = list.create_sized("a", Rectangle::new(50, 60, 200, 100)).unwrap();
        list.toggle_maximize(a).unwrap();
        let window = list.get(a).unwrap();
        assert_eq!(window.state(), WindowState::Maximized);
        assert_eq!(window.content(), Rectangle::new(0, TITLEBAR_HEIGHT, 800, 600 - TITLEBAR_HEIGHT));
        list.toggle_maximize(a).unwrap();
        assert_eq!(list.get(a).unwrap().content(), Rectangle::new(50, 60, 200, 100));
    }

    #[test]
    fn test_minimize_maximized_restores_first() {
        let mut list = list(2);
        let a = list.create_sized("a", Rectangle::new(50, 60, 200, 100)).unwrap();
        list.toggle_maximize(a).unwrap();
        list.toggle_minimize(a).unwrap();
        let window = list.get(a).unwrap();
        assert_eq!(window.state(), WindowState::Minimized);
        assert_eq!(window.content(), Rectangle::new(50, 60, 200, 100));
        list.toggle_minimize(a).unwrap();
        assert_eq!(list.get(a).unwrap().state(), WindowState::Normal);
    }

    #[test]
    fn test_minimize_active_hands_focus_to_next_visible() {
        let mut list = list(3);
        let a = list.create("a", 0, 30).unwrap();
        let b = list.create("b", 0, 30).unwrap();
        list.toggle_minimize(b).unwrap();
        assert_eq!(list.active(), Some(a));
        list.toggle_minimize(a).unwrap();
        assert_eq!(list.active(), None);
        list.toggle_minimize(b).unwrap();
        assert_eq!(list.active(), Some(b));
    }

    #[test]
    fn test_resolve_focus_follows_mouse() {
        let mut list = WindowList::new(WindowListSettings {
            focus_follows_mouse: true,
            ..WindowListSettings::default()
        });
        let a = list.create_sized("a", Rectangle::new(0, 30, 100, 100)).unwrap();
        let b = list.create_sized("b", Rectangle::new(300, 30, 100, 100)).unwrap();
        assert_eq!(list.active(), None);
        list.resolve_focus(Point::new(50, 50));
        assert_eq!(list.active(), Some(a));
        list.resolve_focus(Point::new(1000, 700));
        assert_eq!(list.active(), Some(a));
        list.resolve_focus(Point::new(350, 50));
        assert_eq!(list.active(), Some(b));
    }

    #[test]
    fn test_resolve_focus_after_close() {
        let mut list = list(3);
        let a = list.create("a", 0, 30).unwrap();
        let b = list.create("b", 0, 30).unwrap();
        list.request_close(b).unwrap();
        list.sweep_closed();
        assert_eq!(list.active(), None);
        list.resolve_focus(Point::ORIGIN);
        assert_eq!(list.active(), Some(a));
    }
}
