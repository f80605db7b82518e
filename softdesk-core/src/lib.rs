//! # softdesk Core Library (`softdesk-core`)
//!
//! `softdesk-core` is the foundational library for the softdesk software compositor.
//! It carries the pieces every other crate in the workspace leans on:
//!
//! - **Error Handling**: [`CoreError`] and the more specific [`ConfigError`] and
//!   [`LoggingError`], all built with `thiserror`.
//! - **Core Data Types**: screen-space geometry ([`Point`], [`Rectangle`]) and the packed
//!   ARGB [`Color`] used by every pixel buffer.
//! - **Configuration Management**: TOML-backed [`CoreConfig`] with the desktop settings
//!   ([`DesktopConfig`]) read by the compositor, loaded through [`ConfigLoader`].
//! - **Logging**: a `tracing` subscriber set up from [`LoggingConfig`].
//!
//! ```rust,ignore
//! use softdesk_core::config::ConfigLoader;
//! use softdesk_core::logging::init_logging;
//! use softdesk_core::error::CoreError;
//!
//! fn main() -> Result<(), CoreError> {
//!     let core_config = ConfigLoader::load()?;
//!     init_logging(&core_config.logging, false)?;
//!     tracing::info!("softdesk core initialized.");
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod error;
pub mod logging;
pub mod types;
pub mod utils;

pub use config::{ConfigLoader, CoreConfig, DesktopConfig, LoggingConfig};
pub use error::{ConfigError, CoreError, LoggingError};
pub use logging::{init_logging, init_minimal_logging};
pub use types::{Color, ColorParseError, Point, Rectangle};
