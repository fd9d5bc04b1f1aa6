//! Attack records and pure attack resolution over a fleet snapshot.

use crate::common::{AttackId, BoardId, Error, ShipId};
use crate::ship::Ship;
use crate::tile::Tile;

/// Hit-or-miss state of a recorded attack.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AttackResult {
    Hit,
    Miss,
}

/// One entry of the append-only attack log. Duplicate misses each append a
/// fresh record; re-attacking an already-hit segment appends nothing.
#[derive(Debug, Clone, PartialEq, Eq)]
#[derive(serde::Serialize, serde::Deserialize)]
pub struct Attack {
    pub id: AttackId,
    pub board_id: BoardId,
    pub ship_id: Option<ShipId>,
    pub tile: Tile,
    pub result: AttackResult,
    /// Whether this attack sank its ship.
    pub killing_blow: bool,
}

/// An attack log entry before the storage collaborator assigns its id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewAttack {
    pub board_id: BoardId,
    pub ship_id: Option<ShipId>,
    pub tile: Tile,
    pub result: AttackResult,
    pub killing_blow: bool,
}

/// What an attack on `tile` would do to the fleet, before any mutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    /// No ship occupies the tile.
    Miss,
    /// A fresh segment hit.
    Hit {
        ship_index: usize,
        segment_index: usize,
        /// This hit fills the ship's last unhit segment.
        sinks_ship: bool,
        /// This hit leaves no afloat segment anywhere on the board.
        destroys_fleet: bool,
    },
}

/// Resolve an attack against the current fleet snapshot. Fails with
/// `AlreadyHit` when the targeted segment was hit before, without touching
/// any state.
pub fn resolve(ships: &[Ship], tile: Tile) -> Result<Resolution, Error> {
    for (ship_index, ship) in ships.iter().enumerate() {
        let Some(segment_index) = ship.segment_at(tile) else {
            continue;
        };
        if ship.segments[segment_index].hit {
            return Err(Error::AlreadyHit(tile));
        }
        let sinks_ship = ship
            .segments
            .iter()
            .enumerate()
            .all(|(i, s)| s.hit || i == segment_index);
        let destroys_fleet = sinks_ship
            && ships
                .iter()
                .enumerate()
                .filter(|&(i, _)| i != ship_index)
                .all(|(_, other)| other.is_sunk());
        return Ok(Resolution::Hit {
            ship_index,
            segment_index,
            sinks_ship,
            destroys_fleet,
        });
    }
    Ok(Resolution::Miss)
}
