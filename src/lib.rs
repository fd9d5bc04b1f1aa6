//! Turn-based Battleship game engine behind a request/response API:
//! create a board, place a fixed fleet under adjacency rules, then attack
//! until the fleet is sunk. Durable state lives behind the [`Storage`]
//! trait; the engine itself is stateless between requests.

mod attack;
mod autoplace;
mod blackout;
mod board;
mod common;
pub mod config;
mod engine;
mod fleet;
mod logging;
mod placement;
mod ship;
mod storage;
mod tile;

pub use attack::{Attack, AttackResult, NewAttack, Resolution};
pub use autoplace::random_fleet;
pub use blackout::{blackout_tiles, is_blocked};
pub use board::{validate_dimensions, Board, BoardPhase};
pub use common::{AttackId, AttackOutcome, BoardId, Error, ShipId};
pub use engine::{AttackTally, BoardStatus, GameEngine, ShipStatus};
pub use fleet::FleetQuota;
pub use logging::init_logging;
pub use placement::{validate as validate_placement, ValidPlacement};
pub use ship::{Segment, Ship, ShipKind};
pub use storage::{InMemoryStore, Storage, StorageError};
pub use tile::{canonical, parse_tile, parse_tiles, validate_shape, Tile};

pub use attack::resolve as resolve_attack;
