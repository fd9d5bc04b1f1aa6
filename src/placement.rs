//! Placement validation: the full precondition pipeline for putting one
//! ship on a board, as a pure function over an immutable snapshot.

use crate::blackout;
use crate::board::{Board, BoardPhase};
use crate::common::Error;
use crate::fleet::FleetQuota;
use crate::ship::{Ship, ShipKind};
use crate::tile::{self, Tile};

/// A validated placement, ready to persist.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidPlacement {
    /// Tiles in canonical order.
    pub tiles: Vec<Tile>,
    pub kind: ShipKind,
    /// True when persisting this ship completes the fleet, which must
    /// advance the board to the start phase.
    pub completes_fleet: bool,
}

/// Validate a raw placement request against the current board snapshot.
/// Checks run in a fixed order and the first failure wins: phase, input,
/// length, quota, bounds, shape, then spatial exclusion.
pub fn validate(board: &Board, ships: &[Ship], raw_tiles: &str) -> Result<ValidPlacement, Error> {
    if board.phase != BoardPhase::Initialize {
        return Err(Error::NotInitializePhase);
    }
    let tiles = tile::canonical(tile::parse_tiles(raw_tiles)?);
    let kind = ShipKind::from_length(tiles.len()).ok_or(Error::InvalidShipLength)?;

    let mut quota = FleetQuota::from_ships(ships);
    if quota.would_exceed(kind) {
        return Err(Error::QuotaExceeded(kind));
    }
    if tiles.iter().any(|&t| !board.contains(t)) {
        return Err(Error::OutOfBounds);
    }
    tile::validate_shape(&tiles)?;

    let placed: Vec<Vec<Tile>> = ships.iter().map(Ship::footprint).collect();
    if blackout::is_blocked(&tiles, &placed, board.width, board.height) {
        return Err(Error::IllegalPlacement);
    }

    quota.add(kind);
    Ok(ValidPlacement {
        tiles,
        kind,
        completes_fleet: quota.is_complete(),
    })
}
