//! Ship classes, per-segment hit state, and the ship record.

use core::fmt;

use crate::common::{BoardId, ShipId};
use crate::tile::Tile;

/// Class of ship, determined entirely by its length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShipKind {
    Submarine,
    Destroyer,
    Cruiser,
    Battleship,
}

impl ShipKind {
    /// Map a tile count to a ship class. `None` outside 1..=4.
    pub fn from_length(length: usize) -> Option<Self> {
        match length {
            1 => Some(ShipKind::Submarine),
            2 => Some(ShipKind::Destroyer),
            3 => Some(ShipKind::Cruiser),
            4 => Some(ShipKind::Battleship),
            _ => None,
        }
    }

    pub const fn length(self) -> usize {
        match self {
            ShipKind::Submarine => 1,
            ShipKind::Destroyer => 2,
            ShipKind::Cruiser => 3,
            ShipKind::Battleship => 4,
        }
    }

    /// How many ships of this class a full fleet holds.
    pub const fn quota(self) -> usize {
        match self {
            ShipKind::Submarine => 4,
            ShipKind::Destroyer => 3,
            ShipKind::Cruiser => 2,
            ShipKind::Battleship => 1,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            ShipKind::Submarine => "submarine",
            ShipKind::Destroyer => "destroyer",
            ShipKind::Cruiser => "cruiser",
            ShipKind::Battleship => "battleship",
        }
    }
}

impl fmt::Display for ShipKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One ship tile together with its hit state. Keeping the flag on the tile
/// makes the tile/hit correlation structural instead of two parallel arrays.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[derive(serde::Serialize, serde::Deserialize)]
pub struct Segment {
    pub tile: Tile,
    pub hit: bool,
}

impl Segment {
    pub const fn new(tile: Tile) -> Self {
        Segment { tile, hit: false }
    }
}

/// A ship placed on a board. Segments are in canonical tile order and form
/// a straight contiguous line; both are enforced at creation and never
/// re-checked afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
#[derive(serde::Serialize, serde::Deserialize)]
pub struct Ship {
    pub id: ShipId,
    pub board_id: BoardId,
    pub kind: ShipKind,
    pub segments: Vec<Segment>,
}

impl Ship {
    pub fn length(&self) -> usize {
        self.segments.len()
    }

    /// Index of the segment occupying `tile`, if any.
    pub fn segment_at(&self, tile: Tile) -> Option<usize> {
        self.segments.iter().position(|s| s.tile == tile)
    }

    pub fn contains(&self, tile: Tile) -> bool {
        self.segment_at(tile).is_some()
    }

    /// The ship's tiles without hit state.
    pub fn footprint(&self) -> Vec<Tile> {
        self.segments.iter().map(|s| s.tile).collect()
    }

    /// A ship is sunk once every segment has been hit.
    pub fn is_sunk(&self) -> bool {
        self.segments.iter().all(|s| s.hit)
    }
}
