//! Board record and its three-phase lifecycle.

use core::fmt;

use crate::common::{BoardId, Error};
use crate::config::{MAX_BOARD_SIZE, MIN_BOARD_SIZE};
use crate::tile::Tile;

/// Lifecycle phase of a board. Transitions are one-directional and happen
/// only as side effects of completing the fleet (to `Start`) and sinking
/// the last ship (to `End`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BoardPhase {
    /// Defender placing ships; attacks are rejected.
    Initialize,
    /// Fleet complete; attacks allowed, placement rejected.
    Start,
    /// Terminal; neither placement nor attacks allowed.
    End,
}

impl BoardPhase {
    pub const fn as_str(self) -> &'static str {
        match self {
            BoardPhase::Initialize => "initialize",
            BoardPhase::Start => "start",
            BoardPhase::End => "end",
        }
    }
}

impl fmt::Display for BoardPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A game board. Dimensions are fixed at creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[derive(serde::Serialize, serde::Deserialize)]
pub struct Board {
    pub id: BoardId,
    pub width: u16,
    pub height: u16,
    pub phase: BoardPhase,
}

impl Board {
    pub fn contains(&self, tile: Tile) -> bool {
        tile.x >= 0 && tile.x < self.width as i64 && tile.y >= 0 && tile.y < self.height as i64
    }
}

/// Check requested dimensions against the allowed range.
pub fn validate_dimensions(width: u16, height: u16) -> Result<(), Error> {
    let allowed = MIN_BOARD_SIZE..=MAX_BOARD_SIZE;
    if allowed.contains(&width) && allowed.contains(&height) {
        Ok(())
    } else {
        Err(Error::InvalidBoardSize)
    }
}
