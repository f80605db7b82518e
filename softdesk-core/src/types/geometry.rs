//! Screen-space geometry: points and axis-aligned rectangles.
//!
//! All coordinates are integer pixels. Rectangle extents are signed: during an
//! interactive resize a window's content may shrink below its minimum (or even
//! invert) before the size is clamped on release, and such a rectangle must stay
//! representable. A rectangle with a non-positive width or height contains no point.

use serde::{Deserialize, Serialize};
use std::ops::{Add, Sub};

/// A point in screen pixel space.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const ORIGIN: Point = Point::new(0, 0);

    pub const fn new(x: i32, y: i32) -> Self {
        Point { x, y }
    }
}

impl Add for Point {
    type Output = Self;
    fn add(self, other: Self) -> Self {
        Point::new(self.x + other.x, self.y + other.y)
    }
}

impl Sub for Point {
    type Output = Self;
    fn sub(self, other: Self) -> Self {
        Point::new(self.x - other.x, self.y - other.y)
    }
}

/// An axis-aligned rectangle `{x, y, width, height}` in screen pixel space.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Rectangle {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Rectangle {
    pub const ZERO: Rectangle = Rectangle::new(0, 0, 0, 0);

    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Rectangle { x, y, width, height }
    }

    /// One past the rightmost column.
    pub fn right(&self) -> i32 {
        self.x + self.width
    }

    /// One past the bottom row.
    pub fn bottom(&self) -> i32 {
        self.y + self.height
    }

    pub fn is_empty(&self) -> bool {
        self.width <= 0 || self.height <= 0
    }

    /// Half-open containment: `x ∈ [self.x, self.x + width)` and likewise for `y`.
    pub fn contains(&self, x: i32, y: i32) -> bool {
        x >= self.x && x < self.right() && y >= self.y && y < self.bottom()
    }

    pub fn contains_point(&self, point: Point) -> bool {
        self.contains(point.x, point.y)
    }

    /// Centre point, rounded towards the origin.
    pub fn center(&self) -> Point {
        Point::new(self.x + self.width / 2, self.y + self.height / 2)
    }

    pub fn intersects(&self, other: &Rectangle) -> bool {
        self.intersection(other).is_some()
    }

    /// Overlapping area of two rectangles, or `None` when they do not overlap.
    pub fn intersection(&self, other: &Rectangle) -> Option<Rectangle> {
        let x = self.x.max(other.x);
        let y = self.y.max(other.y);
        let r = self.right().min(other.right());
        let b = self.bottom().min(other.bottom());
        if r > x && b > y {
            Some(Rectangle::new(x, y, r - x, b - y))
        } else {
            None
        }
    }

    /// Bounding box of two rectangles. Empty rectangles are ignored.
    pub fn union(&self, other: &Rectangle) -> Rectangle {
        if self.is_empty() {
            return *other;
        }
        if other.is_empty() {
            return *self;
        }
        let x = self.x.min(other.x);
        let y = self.y.min(other.y);
        let r = self.right().max(other.right());
        let b = self.bottom().max(other.bottom());
        Rectangle::new(x, y, r - x, b - y)
    }

    /// Same size, shifted by `(dx, dy)`.
    pub fn translate(&self, dx: i32, dy: i32) -> Rectangle {
        Rectangle::new(self.x + dx, self.y + dy, self.width, self.height)
    }

    /// Grows the rectangle by `dw` on the left and right and `dh` on the top and bottom.
    /// Negative values shrink it; the extent never drops below zero.
    pub fn inflate(&self, dw: i32, dh: i32) -> Rectangle {
        Rectangle::new(
            self.x - dw,
            self.y - dh,
            (self.width + dw * 2).max(0),
            (self.height + dh * 2).max(0),
        )
    }

    /// Raises width and height to at least the given minimums, keeping the origin.
    pub fn clamp_min_size(&self, min_width: i32, min_height: i32) -> Rectangle {
        Rectangle::new(self.x, self.y, self.width.max(min_width), self.height.max(min_height))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use static_assertions::assert_impl_all;

    assert_impl_all!(Point: std::fmt::Debug, Clone, Copy, PartialEq, Eq, std::hash::Hash, Default, Send, Sync);
    assert_impl_all!(Rectangle: std::fmt::Debug, Clone, Copy, PartialEq, Eq, std::hash::Hash, Default, Send, Sync);

    #[rstest]
    #[case(10, 20, true)] // top-left corner is inside
    #[case(39, 49, true)] // last pixel
    #[case(40, 20, false)] // right edge is exclusive
    #[case(10, 50, false)] // bottom edge is exclusive
    #[case(9, 20, false)]
    #[case(10, 19, false)]
    fn rectangle_contains_is_half_open(#[case] x: i32, #[case] y: i32, #[case] expected: bool) {
        let rect = Rectangle::new(10, 20, 30, 30);
        assert_eq!(rect.contains(x, y), expected);
    }

    #[test]
    fn degenerate_rectangles_contain_nothing() {
        assert!(!Rectangle::new(0, 0, 0, 10).contains(0, 0));
        assert!(!Rectangle::new(0, 0, -5, 10).contains(-2, 2));
        assert!(Rectangle::new(0, 0, -5, 10).is_empty());
    }

    #[test]
    fn rectangle_intersection() {
        let a = Rectangle::new(0, 0, 10, 10);
        let b = Rectangle::new(5, 5, 10, 10);
        assert_eq!(a.intersection(&b), Some(Rectangle::new(5, 5, 5, 5)));
        assert_eq!(a.intersection(&Rectangle::new(10, 0, 5, 5)), None);
        assert!(!a.intersects(&Rectangle::new(10, 0, 5, 5)));
    }

    #[test]
    fn rectangle_union_ignores_empty() {
        let a = Rectangle::new(0, 0, 10, 10);
        assert_eq!(a.union(&Rectangle::ZERO), a);
        assert_eq!(a.union(&Rectangle::new(20, 20, 5, 5)), Rectangle::new(0, 0, 25, 25));
    }

    #[test]
    fn rectangle_translate_and_inflate() {
        let r = Rectangle::new(10, 10, 20, 20);
        assert_eq!(r.translate(5, -3), Rectangle::new(15, 7, 20, 20));
        assert_eq!(r.inflate(2, 4), Rectangle::new(8, 6, 24, 28));
        assert_eq!(r.inflate(-20, 0).width, 0);
    }

    #[test]
    fn rectangle_clamp_min_size_keeps_origin() {
        let r = Rectangle::new(-4, 7, 12, -3);
        assert_eq!(r.clamp_min_size(50, 40), Rectangle::new(-4, 7, 50, 40));
    }

    #[test]
    fn point_ops() {
        assert_eq!(Point::new(1, 2) + Point::new(3, 4), Point::new(4, 6));
        assert_eq!(Point::new(1, 2) - Point::new(3, 4), Point::new(-2, -2));
        assert_eq!(Rectangle::new(0, 0, 11, 11).center(), Point::new(5, 5));
    }

    #[test]
    fn rectangle_serde() {
        let r = Rectangle::new(1, 2, 3, 4);
        let json = serde_json::to_string(&r).unwrap();
        assert_eq!(json, r#"{"x":1,"y":2,"width":3,"height":4}"#);
        let back: Rectangle = serde_json::from_str(&json).unwrap();
        assert_eq!(back, r);
    }
}
