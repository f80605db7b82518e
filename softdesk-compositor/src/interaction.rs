//! Pointer-driven window interaction.
//!
//! A press or release on the primary button while idle latches the
//! `(window, region)` under the pointer. While the button stays down the latched
//! region drives the window: the titlebar moves it, borders and corners resize
//! it. Titlebar buttons act on release, and only if the pointer is still over
//! them. Any release clears the latch and re-clamps the window to its minimum
//! size; sizes below the minimum are allowed while dragging.

use softdesk_core::types::{Point, Rectangle};
use tracing::{debug, warn};

use crate::chrome::{InteractionKind, Region, RegionTable, ResizeEdges};
use crate::cursor::CursorKind;
use crate::hit_test::hit_test;
use crate::input::FrameInput;
use crate::windows::{WindowId, WindowList, WindowState};

/// The window and region captured when an interaction starts. The region is
/// `None` when the latch was taken with the pointer off the window's regions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Latch {
    pub window: WindowId,
    pub region: Option<Region>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    /// A latch is held but the button is up.
    Latched,
    /// A latch is held and the button is down.
    Dragging,
}

#[derive(Debug, Default)]
pub struct Interaction {
    latch: Option<Latch>,
    button_down: bool,
}

impl Interaction {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn latch(&self) -> Option<Latch> {
        self.latch
    }

    pub fn phase(&self) -> Phase {
        match (self.latch, self.button_down) {
            (None, _) => Phase::Idle,
            (Some(_), false) => Phase::Latched,
            (Some(_), true) => Phase::Dragging,
        }
    }

    /// Runs one frame of interaction and returns the cursor to display.
    ///
    /// Only the frontmost window that is either under the pointer or holding
    /// the latch sees input; windows behind it are not consulted.
    pub fn process(&mut self, windows: &mut WindowList, table: &RegionTable, input: &FrameInput) -> CursorKind {
        let pointer = input.pointer;
        let primary = input.primary();
        let was_down = self.button_down;
        self.button_down = primary.pressed;

        if let Some(latch) = self.latch {
            if windows.get(latch.window).is_none() {
                debug!("Dropping latch on vanished {}", latch.window);
                self.latch = None;
            }
        }
        // Only a latch carried over from a frame with the button down may commit a release.
        let dragging = was_down && self.latch.is_some();

        let latched_window = self.latch.map(|l| l.window);
        let target = windows.iter_front_to_back().find_map(|(id, window)| {
            let hit = hit_test(window, pointer.x, pointer.y);
            (hit.is_some() || latched_window == Some(id)).then_some((id, hit))
        });

        let mut cursor = CursorKind::Arrow;
        if let Some((id, hit)) = target {
            cursor = hit.map_or(CursorKind::Arrow, |r| table.get(r).cursor);

            if self.latch.is_none() && primary.changed {
                self.latch = Some(Latch { window: id, region: hit });
                debug!("Latched {} region {:?}", id, hit);
            }

            if let Some(latch) = self.latch.filter(|l| l.window == id) {
                if primary.changed && primary.pressed {
                    if let Err(e) = windows.raise(id) {
                        warn!("Failed to raise {}: {}", id, e);
                    }
                }
                let kind = latch.region.map(|r| table.get(r).interaction);
                if primary.pressed {
                    drag(windows, id, kind, input);
                } else if primary.changed && dragging {
                    release(windows, latch, kind, pointer);
                }
            }
        }

        if let Some(latch) = self.latch {
            cursor = latch.region.map_or(CursorKind::Arrow, |r| table.get(r).cursor);
            if primary.changed && !primary.pressed {
                self.latch = None;
                self.button_down = false;
                if let Some(window) = windows.get_mut(latch.window) {
                    window.clamp_to_minimum();
                }
                debug!("Released latch on {}", latch.window);
            }
        }

        cursor
    }
}

/// Continuous effect of a held button: moving and resizing.
fn drag(windows: &mut WindowList, id: WindowId, kind: Option<InteractionKind>, input: &FrameInput) {
    let delta = input.delta();
    if delta == Point::ORIGIN {
        return;
    }
    let Some(window) = windows.get_mut(id) else {
        return;
    };
    match kind {
        Some(InteractionKind::Move) => {
            if window.state() == WindowState::Maximized {
                window.restore_under_pointer(input.previous_pointer);
                debug!("Restored {} from maximized to start a move", id);
            }
            window.set_content(window.content().translate(delta.x, delta.y));
        }
        Some(InteractionKind::Resize(edges)) => {
            window.set_content(resize(window.content(), edges, delta));
        }
        Some(InteractionKind::Raise)
        | Some(InteractionKind::Close)
        | Some(InteractionKind::Maximize)
        | Some(InteractionKind::Minimize)
        | None => {}
    }
}

/// Effect of releasing the button. Buttons fire only when released over the
/// region that was latched.
fn release(windows: &mut WindowList, latch: Latch, kind: Option<InteractionKind>, pointer: Point) {
    let still_inside = match (latch.region, windows.get(latch.window)) {
        (Some(region), Some(window)) => window.region_rect(region).contains_point(pointer),
        _ => false,
    };
    if !still_inside {
        debug!("Release outside {:?} of {}; cancelled", latch.region, latch.window);
        return;
    }
    let result = match kind {
        Some(InteractionKind::Close) => windows.request_close(latch.window),
        Some(InteractionKind::Maximize) => windows.toggle_maximize(latch.window),
        Some(InteractionKind::Minimize) => windows.toggle_minimize(latch.window),
        _ => Ok(()),
    };
    if let Err(e) = result {
        warn!("Release action on {} failed: {}", latch.window, e);
    }
}

/// Moves the given edges by the pointer delta. The opposite edge stays put, so
/// the width or height may drop below the minimum or go negative.
pub fn resize(content: Rectangle, edges: ResizeEdges, delta: Point) -> Rectangle {
    let mut r = content;
    if edges.contains(ResizeEdges::NORTH) {
        r.y += delta.y;
        r.height -= delta.y;
    }
    if edges.contains(ResizeEdges::SOUTH) {
        r.height += delta.y;
    }
    if edges.contains(ResizeEdges::WEST) {
        r.x += delta.x;
        r.width -= delta.x;
    }
    if edges.contains(ResizeEdges::EAST) {
        r.width += delta.x;
    }
    r
}
