//! Fundamental value types shared across softdesk crates.

pub mod color;
pub mod geometry;

pub use color::{Color, ColorParseError};
pub use geometry::{Point, Rectangle};
