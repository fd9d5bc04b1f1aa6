//! Fleet quota bookkeeping: how many ships of each class a board holds.

use crate::ship::{Ship, ShipKind};

const KINDS: [ShipKind; 4] = [
    ShipKind::Submarine,
    ShipKind::Destroyer,
    ShipKind::Cruiser,
    ShipKind::Battleship,
];

/// Per-class ship counts for one board.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FleetQuota {
    // Indexed by length - 1.
    counts: [usize; 4],
}

impl FleetQuota {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_ships(ships: &[Ship]) -> Self {
        let mut quota = Self::new();
        for ship in ships {
            quota.add(ship.kind);
        }
        quota
    }

    pub fn count(&self, kind: ShipKind) -> usize {
        self.counts[kind.length() - 1]
    }

    pub fn add(&mut self, kind: ShipKind) {
        self.counts[kind.length() - 1] += 1;
    }

    /// Whether adding one more ship of `kind` would breach its cap.
    pub fn would_exceed(&self, kind: ShipKind) -> bool {
        self.count(kind) + 1 > kind.quota()
    }

    /// The fleet is complete when every cap is met exactly. This is the
    /// trigger for advancing the board out of the initialize phase.
    pub fn is_complete(&self) -> bool {
        KINDS.iter().all(|&kind| self.count(kind) == kind.quota())
    }
}
