//! Error types for the compositor crate.
//!
//! Per-frame work (hit testing, interaction, drawing) cannot fail. Errors only
//! come from startup (asset decoding, configuration) and from window
//! management calls made by the embedding application.

use std::io;
use std::path::PathBuf;

use softdesk_core::error::CoreError;
use thiserror::Error;

use crate::windows::WindowId;

/// Failures while decoding or reading a bitmap asset.
#[derive(Debug, Error)]
pub enum AssetError {
    /// The buffer ends before the headers or pixel rows it announces.
    #[error("Bitmap data truncated: needed {needed} bytes, got {actual}")]
    Truncated { needed: usize, actual: usize },

    #[error("Bad bitmap magic: expected 0x4D42, found {0:#06x}")]
    BadMagic(u16),

    #[error("Unsupported bitmap bit depth: {0} (only 32 bpp is supported)")]
    UnsupportedBitDepth(u16),

    #[error("Unsupported bitmap compression: {0}")]
    UnsupportedCompression(u32),

    #[error("Invalid bitmap dimensions: {width}x{height}")]
    InvalidDimensions { width: i32, height: i32 },

    #[error("Failed to read asset {path:?}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Failures of window list operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WindowError {
    /// Every window slot is live; no slot can be allocated or recycled.
    #[error("Window capacity exceeded: all {capacity} slots are in use")]
    CapacityExceeded { capacity: usize },

    /// The id does not name a window currently in the live list.
    #[error("Unknown window: {0}")]
    UnknownWindow(WindowId),
}

/// Top-level error for the compositor crate.
#[derive(Debug, Error)]
pub enum CompositorError {
    #[error("Asset error: {0}")]
    Asset(#[from] AssetError),

    #[error("Window error: {0}")]
    Window(#[from] WindowError),

    #[error("Core error: {0}")]
    Core(#[from] CoreError),
}
