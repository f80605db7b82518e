//! Pointer cursor shapes.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CursorKind {
    #[default]
    Arrow,
    Move,
    ResizeNS,
    ResizeEW,
    ResizeNWSE,
    ResizeNESW,
}

impl CursorKind {
    pub const ALL: [CursorKind; 6] = [
        CursorKind::Arrow,
        CursorKind::Move,
        CursorKind::ResizeNS,
        CursorKind::ResizeEW,
        CursorKind::ResizeNWSE,
        CursorKind::ResizeNESW,
    ];

    pub const fn index(self) -> usize {
        self as usize
    }

    /// The arrow points with its top-left pixel; every other shape with its centre.
    pub const fn hotspot_centred(self) -> bool {
        !matches!(self, CursorKind::Arrow)
    }
}

impl fmt::Display for CursorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            CursorKind::Arrow => "arrow",
            CursorKind::Move => "move",
            CursorKind::ResizeNS => "resize-ns",
            CursorKind::ResizeEW => "resize-ew",
            CursorKind::ResizeNWSE => "resize-nwse",
            CursorKind::ResizeNESW => "resize-nesw",
        };
        f.write_str(name)
    }
}
