use crate::ship::ShipKind;

/// Smallest board edge a client may request.
pub const MIN_BOARD_SIZE: u16 = 10;
/// Largest board edge a client may request.
pub const MAX_BOARD_SIZE: u16 = 25;

/// The fixed fleet every board must carry, in the order the auto-placer
/// samples it (longest first).
pub const FLEET: [ShipKind; 10] = [
    ShipKind::Battleship,
    ShipKind::Cruiser,
    ShipKind::Cruiser,
    ShipKind::Destroyer,
    ShipKind::Destroyer,
    ShipKind::Destroyer,
    ShipKind::Submarine,
    ShipKind::Submarine,
    ShipKind::Submarine,
    ShipKind::Submarine,
];

/// Resampling cap per ship during auto-placement; exceeding it surfaces
/// `PlacementExhausted` instead of spinning forever.
pub const AUTO_PLACE_MAX_ATTEMPTS: usize = 10_000;
