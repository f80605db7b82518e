//! Cursor and titlebar button sprites.
//!
//! Sprites are loaded once at startup. With an asset directory configured,
//! each sprite is read from its BMP file there; files that are absent fall
//! back to a built-in sprite, while a file that is present but malformed is an
//! error.

mod bmp;
mod builtin;

pub use bmp::{load_bitmap, load_bitmap_file, premultiply};

use std::path::Path;

use softdesk_core::types::Point;
use tracing::{info, warn};

use crate::chrome::{ButtonKind, Theme};
use crate::cursor::CursorKind;
use crate::error::AssetError;
use crate::texture::Texture;

pub fn cursor_file_name(kind: CursorKind) -> &'static str {
    match kind {
        CursorKind::Arrow => "cursor_arrow.bmp",
        CursorKind::Move => "cursor_move.bmp",
        CursorKind::ResizeNS => "cursor_ns.bmp",
        CursorKind::ResizeEW => "cursor_ew.bmp",
        CursorKind::ResizeNWSE => "cursor_nwse.bmp",
        CursorKind::ResizeNESW => "cursor_nesw.bmp",
    }
}

pub fn button_file_name(kind: ButtonKind) -> &'static str {
    match kind {
        ButtonKind::Close => "button_close.bmp",
        ButtonKind::Maximize => "button_maximize.bmp",
        ButtonKind::Minimize => "button_minimize.bmp",
    }
}

#[derive(Debug, Clone)]
pub struct AssetSet {
    cursors: [Texture; 6],
    buttons: [Texture; 3],
}

impl AssetSet {
    pub fn builtin(theme: &Theme) -> Self {
        AssetSet {
            cursors: CursorKind::ALL.map(builtin::cursor),
            buttons: ButtonKind::ALL.map(|kind| builtin::button(kind, theme)),
        }
    }

    /// Loads sprites from `dir`, using built-ins for missing files.
    pub fn load_dir(dir: &Path, theme: &Theme) -> Result<Self, AssetError> {
        let mut assets = Self::builtin(theme);
        for kind in CursorKind::ALL {
            if let Some(sprite) = load_optional(&dir.join(cursor_file_name(kind)))? {
                let hotspot = if kind.hotspot_centred() {
                    Point::new(sprite.width() as i32 / 2, sprite.height() as i32 / 2)
                } else {
                    Point::ORIGIN
                };
                assets.cursors[kind.index()] = sprite.with_hotspot(hotspot);
            }
        }
        for kind in ButtonKind::ALL {
            if let Some(sprite) = load_optional(&dir.join(button_file_name(kind)))? {
                assets.buttons[kind.index()] = sprite;
            }
        }
        Ok(assets)
    }

    /// Built-ins when `dir` is `None`, otherwise [`load_dir`](Self::load_dir).
    pub fn load(dir: Option<&Path>, theme: &Theme) -> Result<Self, AssetError> {
        match dir {
            Some(dir) => Self::load_dir(dir, theme),
            None => Ok(Self::builtin(theme)),
        }
    }

    pub fn cursor(&self, kind: CursorKind) -> &Texture {
        &self.cursors[kind.index()]
    }

    pub fn button(&self, kind: ButtonKind) -> &Texture {
        &self.buttons[kind.index()]
    }
}

fn load_optional(path: &Path) -> Result<Option<Texture>, AssetError> {
    if !path.exists() {
        warn!("Asset {} not found, using built-in sprite", path.display());
        return Ok(None);
    }
    let sprite = load_bitmap_file(path)?;
    info!("Loaded asset {} ({}x{})", path.display(), sprite.width(), sprite.height());
    Ok(Some(sprite))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_builtin_set_is_complete() {
        let assets = AssetSet::builtin(&Theme::DARK);
        for kind in CursorKind::ALL {
            assert!(assets.cursor(kind).width() > 0);
        }
        for kind in ButtonKind::ALL {
            assert_eq!(assets.button(kind).width(), 24);
        }
    }

    #[test]
    fn test_load_dir_overrides_present_files() {
        let dir = TempDir::new().unwrap();
        let rows = vec![vec![0xFFFFFFFF; 4]; 6];
        fs::write(dir.path().join("cursor_ns.bmp"), bmp::tests::encode(4, &rows, true)).unwrap();
        fs::write(dir.path().join("button_close.bmp"), bmp::tests::encode(4, &rows, false)).unwrap();

        let assets = AssetSet::load_dir(dir.path(), &Theme::LIGHT).unwrap();
        let ns = assets.cursor(CursorKind::ResizeNS);
        assert_eq!((ns.width(), ns.height()), (4, 6));
        assert_eq!(ns.hotspot(), Point::new(2, 3));
        assert_eq!(assets.button(ButtonKind::Close).width(), 4);
        // Absent files keep the built-in sprite.
        assert_eq!(assets.cursor(CursorKind::Arrow), &builtin::cursor(CursorKind::Arrow));
    }

    #[test]
    fn test_load_dir_rejects_malformed_file() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("cursor_arrow.bmp"), vec![0x41u8; 64]).unwrap();
        let result = AssetSet::load_dir(dir.path(), &Theme::LIGHT);
        assert!(matches!(result, Err(AssetError::BadMagic(_))));
    }

    #[test]
    fn test_load_without_dir_uses_builtins() {
        let assets = AssetSet::load(None, &Theme::LIGHT).unwrap();
        assert_eq!(assets.cursor(CursorKind::Move), &builtin::cursor(CursorKind::Move));
    }
}
