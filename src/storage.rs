//! Storage collaborator trait and an in-memory reference implementation.

use core::fmt;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::attack::{Attack, AttackResult, NewAttack};
use crate::board::{Board, BoardPhase};
use crate::common::{AttackId, BoardId, ShipId};
use crate::ship::{Segment, Ship, ShipKind};
use crate::tile::Tile;

/// Failure surfaced by a storage backend. Propagated to callers verbatim;
/// the only engine error a caller might legitimately retry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorageError(String);

impl StorageError {
    pub fn new(message: impl Into<String>) -> Self {
        StorageError(message.into())
    }
}

impl fmt::Display for StorageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "storage error: {}", self.0)
    }
}

impl std::error::Error for StorageError {}

/// Durable state behind the engine. Implementations must serialize
/// mutations per board; the engine additionally holds a per-board lock for
/// its read-validate-write spans.
#[async_trait::async_trait]
pub trait Storage: Send + Sync {
    async fn create_board(&self, width: u16, height: u16) -> Result<Board, StorageError>;

    async fn find_board(&self, id: BoardId) -> Result<Option<Board>, StorageError>;

    async fn list_boards(&self) -> Result<Vec<Board>, StorageError>;

    async fn update_board_phase(&self, id: BoardId, phase: BoardPhase)
        -> Result<(), StorageError>;

    async fn find_ships(&self, board_id: BoardId) -> Result<Vec<Ship>, StorageError>;

    /// Persist one ship with all segments unhit.
    async fn create_ship(
        &self,
        board_id: BoardId,
        kind: ShipKind,
        tiles: Vec<Tile>,
    ) -> Result<Ship, StorageError>;

    /// Persist a whole fleet atomically: either every ship is stored or
    /// none are.
    async fn create_fleet(
        &self,
        board_id: BoardId,
        fleet: Vec<(ShipKind, Vec<Tile>)>,
    ) -> Result<Vec<Ship>, StorageError>;

    /// Replace the stored ship carrying `ship.id` with the given snapshot.
    async fn update_ship(&self, ship: &Ship) -> Result<(), StorageError>;

    async fn create_attack(&self, attack: NewAttack) -> Result<Attack, StorageError>;

    async fn find_attacks(&self, board_id: BoardId) -> Result<Vec<Attack>, StorageError>;

    /// Count attack records for a board, optionally restricted to one
    /// result state.
    async fn count_attacks(
        &self,
        board_id: BoardId,
        filter: Option<AttackResult>,
    ) -> Result<u64, StorageError>;
}

#[derive(Default)]
struct StoreInner {
    boards: HashMap<BoardId, Board>,
    ships: HashMap<BoardId, Vec<Ship>>,
    attacks: HashMap<BoardId, Vec<Attack>>,
    next_board: u64,
    next_ship: u64,
    next_attack: u64,
}

impl StoreInner {
    fn insert_ship(&mut self, board_id: BoardId, kind: ShipKind, tiles: Vec<Tile>) -> Ship {
        self.next_ship += 1;
        let ship = Ship {
            id: ShipId(self.next_ship),
            board_id,
            kind,
            segments: tiles.into_iter().map(Segment::new).collect(),
        };
        self.ships.entry(board_id).or_default().push(ship.clone());
        ship
    }
}

/// In-memory storage backend, suitable for tests and the demo binary.
/// A single mutex over the whole store makes every call atomic.
#[derive(Default)]
pub struct InMemoryStore {
    inner: Arc<Mutex<StoreInner>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait::async_trait]
impl Storage for InMemoryStore {
    async fn create_board(&self, width: u16, height: u16) -> Result<Board, StorageError> {
        let mut inner = self.inner.lock().unwrap();
        inner.next_board += 1;
        let board = Board {
            id: BoardId(inner.next_board),
            width,
            height,
            phase: BoardPhase::Initialize,
        };
        inner.boards.insert(board.id, board);
        Ok(board)
    }

    async fn find_board(&self, id: BoardId) -> Result<Option<Board>, StorageError> {
        let inner = self.inner.lock().unwrap();
        Ok(inner.boards.get(&id).copied())
    }

    async fn list_boards(&self) -> Result<Vec<Board>, StorageError> {
        let inner = self.inner.lock().unwrap();
        let mut boards: Vec<Board> = inner.boards.values().copied().collect();
        boards.sort_by_key(|b| b.id);
        Ok(boards)
    }

    async fn update_board_phase(
        &self,
        id: BoardId,
        phase: BoardPhase,
    ) -> Result<(), StorageError> {
        let mut inner = self.inner.lock().unwrap();
        match inner.boards.get_mut(&id) {
            Some(board) => {
                board.phase = phase;
                Ok(())
            }
            None => Err(StorageError::new(format!("board {} does not exist", id))),
        }
    }

    async fn find_ships(&self, board_id: BoardId) -> Result<Vec<Ship>, StorageError> {
        let inner = self.inner.lock().unwrap();
        Ok(inner.ships.get(&board_id).cloned().unwrap_or_default())
    }

    async fn create_ship(
        &self,
        board_id: BoardId,
        kind: ShipKind,
        tiles: Vec<Tile>,
    ) -> Result<Ship, StorageError> {
        let mut inner = self.inner.lock().unwrap();
        Ok(inner.insert_ship(board_id, kind, tiles))
    }

    async fn create_fleet(
        &self,
        board_id: BoardId,
        fleet: Vec<(ShipKind, Vec<Tile>)>,
    ) -> Result<Vec<Ship>, StorageError> {
        // One lock span for the whole batch keeps it all-or-nothing.
        let mut inner = self.inner.lock().unwrap();
        let ships = fleet
            .into_iter()
            .map(|(kind, tiles)| inner.insert_ship(board_id, kind, tiles))
            .collect();
        Ok(ships)
    }

    async fn update_ship(&self, ship: &Ship) -> Result<(), StorageError> {
        let mut inner = self.inner.lock().unwrap();
        let ships = inner
            .ships
            .get_mut(&ship.board_id)
            .ok_or_else(|| StorageError::new(format!("board {} has no ships", ship.board_id)))?;
        match ships.iter_mut().find(|s| s.id == ship.id) {
            Some(stored) => {
                *stored = ship.clone();
                Ok(())
            }
            None => Err(StorageError::new(format!("ship {} does not exist", ship.id))),
        }
    }

    async fn create_attack(&self, attack: NewAttack) -> Result<Attack, StorageError> {
        let mut inner = self.inner.lock().unwrap();
        inner.next_attack += 1;
        let record = Attack {
            id: AttackId(inner.next_attack),
            board_id: attack.board_id,
            ship_id: attack.ship_id,
            tile: attack.tile,
            result: attack.result,
            killing_blow: attack.killing_blow,
        };
        inner
            .attacks
            .entry(attack.board_id)
            .or_default()
            .push(record.clone());
        Ok(record)
    }

    async fn find_attacks(&self, board_id: BoardId) -> Result<Vec<Attack>, StorageError> {
        let inner = self.inner.lock().unwrap();
        Ok(inner.attacks.get(&board_id).cloned().unwrap_or_default())
    }

    async fn count_attacks(
        &self,
        board_id: BoardId,
        filter: Option<AttackResult>,
    ) -> Result<u64, StorageError> {
        let inner = self.inner.lock().unwrap();
        let attacks = inner.attacks.get(&board_id);
        let count = attacks
            .map(|records| {
                records
                    .iter()
                    .filter(|a| filter.map_or(true, |wanted| a.result == wanted))
                    .count()
            })
            .unwrap_or(0);
        Ok(count as u64)
    }
}
