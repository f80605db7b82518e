//! Per-region behaviour: what a press does, which cursor shows, and how the
//! region is painted.

use bitflags::bitflags;

use super::regions::Region;
use crate::cursor::CursorKind;

bitflags! {
    /// Window edges moved by a resize drag. Corners combine two edges.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct ResizeEdges: u8 {
        const NORTH = 1 << 0;
        const SOUTH = 1 << 1;
        const WEST = 1 << 2;
        const EAST = 1 << 3;
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ButtonKind {
    Close,
    Maximize,
    Minimize,
}

impl ButtonKind {
    pub const ALL: [ButtonKind; 3] = [ButtonKind::Close, ButtonKind::Maximize, ButtonKind::Minimize];

    pub const fn index(self) -> usize {
        self as usize
    }
}

/// What a latched region does with the pointer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InteractionKind {
    /// Press raises; no geometry change.
    Raise,
    Move,
    /// Fires on release while still over the button.
    Close,
    Maximize,
    Minimize,
    Resize(ResizeEdges),
}

/// How a region is painted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RegionDraw {
    None,
    /// Solid fill in the focused or unfocused titlebar colour.
    Titlebar,
    /// The window's own content canvas.
    Canvas,
    Button(ButtonKind),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RegionInvariant {
    pub interaction: InteractionKind,
    pub cursor: CursorKind,
    pub draw: RegionDraw,
}

/// Immutable lookup from [`Region`] to its [`RegionInvariant`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegionTable {
    entries: [RegionInvariant; 13],
}

impl RegionTable {
    pub fn new() -> Self {
        RegionTable {
            entries: Region::ALL.map(invariant_for),
        }
    }

    pub fn get(&self, region: Region) -> &RegionInvariant {
        &self.entries[region.index()]
    }
}

impl Default for RegionTable {
    fn default() -> Self {
        Self::new()
    }
}

fn invariant_for(region: Region) -> RegionInvariant {
    let (interaction, cursor, draw) = match region {
        Region::Content => (InteractionKind::Raise, CursorKind::Arrow, RegionDraw::Canvas),
        Region::Titlebar => (InteractionKind::Move, CursorKind::Move, RegionDraw::Titlebar),
        Region::Close => (InteractionKind::Close, CursorKind::Arrow, RegionDraw::Button(ButtonKind::Close)),
        Region::Maximize => (
            InteractionKind::Maximize,
            CursorKind::Arrow,
            RegionDraw::Button(ButtonKind::Maximize),
        ),
        Region::Minimize => (
            InteractionKind::Minimize,
            CursorKind::Arrow,
            RegionDraw::Button(ButtonKind::Minimize),
        ),
        Region::North => resize(ResizeEdges::NORTH, CursorKind::ResizeNS),
        Region::South => resize(ResizeEdges::SOUTH, CursorKind::ResizeNS),
        Region::West => resize(ResizeEdges::WEST, CursorKind::ResizeEW),
        Region::East => resize(ResizeEdges::EAST, CursorKind::ResizeEW),
        Region::NorthWest => resize(ResizeEdges::NORTH | ResizeEdges::WEST, CursorKind::ResizeNWSE),
        Region::SouthEast => resize(ResizeEdges::SOUTH | ResizeEdges::EAST, CursorKind::ResizeNWSE),
        Region::NorthEast => resize(ResizeEdges::NORTH | ResizeEdges::EAST, CursorKind::ResizeNESW),
        Region::SouthWest => resize(ResizeEdges::SOUTH | ResizeEdges::WEST, CursorKind::ResizeNESW),
    };
    RegionInvariant {
        interaction,
        cursor,
        draw,
    }
}

fn resize(edges: ResizeEdges, cursor: CursorKind) -> (InteractionKind, CursorKind, RegionDraw) {
    (InteractionKind::Resize(edges), cursor, RegionDraw::None)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Region::Titlebar, InteractionKind::Move, CursorKind::Move)]
    #[case(Region::Content, InteractionKind::Raise, CursorKind::Arrow)]
    #[case(Region::Close, InteractionKind::Close, CursorKind::Arrow)]
    #[case(Region::North, InteractionKind::Resize(ResizeEdges::NORTH), CursorKind::ResizeNS)]
    #[case(Region::East, InteractionKind::Resize(ResizeEdges::EAST), CursorKind::ResizeEW)]
    #[case(
        Region::SouthEast,
        InteractionKind::Resize(ResizeEdges::SOUTH.union(ResizeEdges::EAST)),
        CursorKind::ResizeNWSE
    )]
    #[case(
        Region::NorthEast,
        InteractionKind::Resize(ResizeEdges::NORTH.union(ResizeEdges::EAST)),
        CursorKind::ResizeNESW
    )]
    fn test_region_table_entries(
        #[case] region: Region,
        #[case] interaction: InteractionKind,
        #[case] cursor: CursorKind,
    ) {
        let entry = *RegionTable::new().get(region);
        assert_eq!(entry.interaction, interaction);
        assert_eq!(entry.cursor, cursor);
    }

    #[test]
    fn test_only_titlebar_content_and_buttons_draw() {
        let table = RegionTable::new();
        let drawn: Vec<Region> = Region::ALL
            .into_iter()
            .filter(|&r| table.get(r).draw != RegionDraw::None)
            .collect();
        assert_eq!(
            drawn,
            vec![Region::Content, Region::Titlebar, Region::Close, Region::Maximize, Region::Minimize]
        );
    }
}
