//! Configuration for softdesk.
//!
//! - [`types`]: [`CoreConfig`], [`LoggingConfig`] and [`DesktopConfig`].
//! - [`defaults`]: fallback values for every field.
//! - [`loader`]: [`ConfigLoader`], which reads TOML from disk and validates it.

pub mod defaults;
pub mod loader;
pub mod types;

pub use loader::{ConfigLoader, SUPPORTED_LANE_WIDTHS};
pub use types::{CoreConfig, DesktopConfig, LoggingConfig};
