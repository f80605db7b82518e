//! Windows and the z-ordered list that owns them.

mod list;
mod window;

pub use list::{WindowList, WindowListSettings};
pub use window::{Window, WindowId, WindowState};
