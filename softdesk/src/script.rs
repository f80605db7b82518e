//! Scripted pointer gestures for headless runs.

use softdesk_compositor::{Desktop, MouseButtons, Region, WindowId};
use softdesk_core::types::Point;

/// One frame's worth of pointer state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sample {
    pub pointer: Point,
    pub buttons: MouseButtons,
}

/// Hover at `from`, press, move to `from + delta` over `steps` frames, release.
pub fn drag(from: Point, delta: Point, steps: u32) -> Vec<Sample> {
    let steps = steps.max(1) as i32;
    let held = MouseButtons::LEFT;
    let mut samples = vec![
        Sample { pointer: from, buttons: MouseButtons::empty() },
        Sample { pointer: from, buttons: held },
    ];
    samples.extend((1..=steps).map(|i| Sample {
        pointer: Point::new(from.x + delta.x * i / steps, from.y + delta.y * i / steps),
        buttons: held,
    }));
    samples.push(Sample { pointer: from + delta, buttons: MouseButtons::empty() });
    samples
}

/// A drag starting at the centre of `region` of window `id`.
pub fn drag_region(desktop: &Desktop, id: WindowId, region: Region, delta: Point, steps: u32) -> Option<Vec<Sample>> {
    let window = desktop.windows().get(id)?;
    Some(drag(window.region_rect(region).center(), delta, steps))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_drag_ends_exactly_on_target() {
        let samples = drag(Point::new(10, 10), Point::new(7, -3), 3);
        assert_eq!(samples.len(), 6);
        assert_eq!(samples[0].buttons, MouseButtons::empty());
        assert_eq!(samples[1], Sample { pointer: Point::new(10, 10), buttons: MouseButtons::LEFT });
        assert_eq!(samples[4].pointer, Point::new(17, 7));
        assert_eq!(samples[5], Sample { pointer: Point::new(17, 7), buttons: MouseButtons::empty() });
    }
}
