//! Common types: record identifiers, attack outcomes, and engine errors.

use core::fmt;

use crate::ship::ShipKind;
use crate::storage::StorageError;
use crate::tile::Tile;

/// Identifier of a board record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[derive(serde::Serialize, serde::Deserialize)]
pub struct BoardId(pub u64);

/// Identifier of a ship record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[derive(serde::Serialize, serde::Deserialize)]
pub struct ShipId(pub u64);

/// Identifier of an attack record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[derive(serde::Serialize, serde::Deserialize)]
pub struct AttackId(pub u64);

impl fmt::Display for BoardId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Display for ShipId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Display for AttackId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Result of a resolved attack request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[derive(serde::Serialize, serde::Deserialize)]
pub enum AttackOutcome {
    /// The target tile held no ship; a miss record was appended.
    Miss,
    /// The target tile hit a ship segment without sinking it.
    Hit,
    /// The attack was the killing blow for one ship, others remain afloat.
    SankShip { kind: ShipKind },
    /// The attack destroyed the last afloat ship; the game is over.
    GameWon { total_attacks: u64, miss_count: u64 },
}

/// Errors returned by engine operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// No board exists with the requested id.
    NotFound,
    /// Ship placement attempted after the board left the initialize phase.
    NotInitializePhase,
    /// Attack attempted while the board is still in the initialize phase.
    GameNotStarted,
    /// Attack attempted after the game ended.
    GameAlreadyEnded,
    /// Tile input was absent or empty.
    InsufficientData,
    /// Tile input could not be parsed.
    MalformedInput,
    /// A coordinate was a number but not an integer.
    NonIntegerCoordinate,
    /// An attack tile was not a pair of coordinates.
    InvalidTile,
    /// Ship length outside 1..=4.
    InvalidShipLength,
    /// The fleet already holds the full allowance of this ship class.
    QuotaExceeded(ShipKind),
    /// A tile falls outside the board.
    OutOfBounds,
    /// Tiles do not form one contiguous straight line.
    InvalidShape,
    /// Placement overlaps or touches an existing ship.
    IllegalPlacement,
    /// The target ship segment was already hit by a prior attack.
    AlreadyHit(Tile),
    /// Auto-placement requires an empty board.
    NonEmptyBoard,
    /// Board dimensions outside the allowed range.
    InvalidBoardSize,
    /// Auto-placement gave up after too many rejected samples.
    PlacementExhausted,
    /// Failure surfaced by the storage collaborator.
    Storage(StorageError),
}

impl From<StorageError> for Error {
    fn from(err: StorageError) -> Self {
        Error::Storage(err)
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::NotFound => write!(f, "no board found"),
            Error::NotInitializePhase => {
                write!(f, "the board is no longer in the initialize phase")
            }
            Error::GameNotStarted => write!(f, "the game has not started yet"),
            Error::GameAlreadyEnded => write!(f, "the game has already ended"),
            Error::InsufficientData => write!(f, "insufficient data"),
            Error::MalformedInput => write!(f, "tile data could not be parsed"),
            Error::NonIntegerCoordinate => write!(f, "tile contains a non-integer coordinate"),
            Error::InvalidTile => write!(f, "a tile must be a pair of coordinates"),
            Error::InvalidShipLength => write!(f, "invalid ship length"),
            Error::QuotaExceeded(kind) => {
                write!(f, "you cannot place any more {} ships on the board", kind)
            }
            Error::OutOfBounds => write!(f, "tiles out of bound"),
            Error::InvalidShape => write!(f, "tiles do not form a valid ship"),
            Error::IllegalPlacement => write!(f, "illegal ship placement"),
            Error::AlreadyHit(tile) => {
                write!(f, "the tile {} already hit a ship prior to this attack", tile)
            }
            Error::NonEmptyBoard => {
                write!(f, "cannot auto-generate a fleet on a non-empty board")
            }
            Error::InvalidBoardSize => write!(f, "board dimensions out of range"),
            Error::PlacementExhausted => {
                write!(f, "unable to place the fleet within the sampling budget")
            }
            Error::Storage(err) => write!(f, "{}", err),
        }
    }
}

impl std::error::Error for Error {}
