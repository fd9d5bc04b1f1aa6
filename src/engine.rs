//! The game engine: orchestrates placement, auto-placement, attacks, and
//! status queries against the storage collaborator. Stateless between
//! requests apart from per-board locks.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use log::{debug, info};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::attack::{self, AttackResult, NewAttack, Resolution};
use crate::autoplace;
use crate::board::{self, Board, BoardPhase};
use crate::common::{AttackOutcome, BoardId, Error};
use crate::placement;
use crate::ship::{Ship, ShipKind};
use crate::storage::Storage;
use crate::tile::{self, Tile};

/// Attack totals for one board. Hits and misses are mutually exclusive, so
/// hits are derived from the other two counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[derive(serde::Serialize, serde::Deserialize)]
pub struct AttackTally {
    pub total: u64,
    pub hit: u64,
    pub miss: u64,
}

/// Per-ship view in a status report.
#[derive(Debug, Clone, PartialEq, Eq)]
#[derive(serde::Serialize, serde::Deserialize)]
pub struct ShipStatus {
    pub kind: ShipKind,
    pub tiles: Vec<Tile>,
    pub is_sunk: bool,
}

/// Full status report for one board.
#[derive(Debug, Clone, PartialEq, Eq)]
#[derive(serde::Serialize, serde::Deserialize)]
pub struct BoardStatus {
    pub board: Board,
    pub attacks: AttackTally,
    pub ships: Vec<ShipStatus>,
}

/// Request/response engine over a storage backend. Every mutating
/// operation runs its whole read-validate-write span under that board's
/// lock, so concurrent requests against one board serialize while other
/// boards proceed in parallel.
pub struct GameEngine {
    store: Arc<dyn Storage>,
    locks: Mutex<HashMap<BoardId, Arc<tokio::sync::Mutex<()>>>>,
}

impl GameEngine {
    pub fn new(store: Arc<dyn Storage>) -> Self {
        GameEngine {
            store,
            locks: Mutex::new(HashMap::new()),
        }
    }

    fn board_lock(&self, id: BoardId) -> Arc<tokio::sync::Mutex<()>> {
        let mut locks = self.locks.lock().unwrap();
        locks.entry(id).or_default().clone()
    }

    async fn require_board(&self, id: BoardId) -> Result<Board, Error> {
        self.store.find_board(id).await?.ok_or(Error::NotFound)
    }

    /// Create a board in the initialize phase.
    pub async fn create_board(&self, width: u16, height: u16) -> Result<Board, Error> {
        board::validate_dimensions(width, height)?;
        let board = self.store.create_board(width, height).await?;
        info!("created board {} ({}x{})", board.id, board.width, board.height);
        Ok(board)
    }

    pub async fn find_board(&self, id: BoardId) -> Result<Board, Error> {
        self.require_board(id).await
    }

    pub async fn list_boards(&self) -> Result<Vec<Board>, Error> {
        Ok(self.store.list_boards().await?)
    }

    /// Place one ship from raw tile input such as `[0,0],[1,0]`. Completing
    /// the fleet advances the board to the start phase.
    pub async fn place_ship(&self, board_id: BoardId, raw_tiles: &str) -> Result<Ship, Error> {
        let lock = self.board_lock(board_id);
        let _guard = lock.lock().await;

        let board = self.require_board(board_id).await?;
        let ships = self.store.find_ships(board_id).await?;
        let valid = placement::validate(&board, &ships, raw_tiles)?;

        let ship = self
            .store
            .create_ship(board_id, valid.kind, valid.tiles)
            .await?;
        debug!("board {}: placed {} {}", board_id, ship.kind, ship.id);
        if valid.completes_fleet {
            self.store
                .update_board_phase(board_id, BoardPhase::Start)
                .await?;
            info!("board {}: fleet complete, game started", board_id);
        }
        Ok(ship)
    }

    /// Place the full fleet at random positions. Only valid on an empty
    /// board in the initialize phase; on success the board advances to the
    /// start phase.
    pub async fn auto_place_fleet(&self, board_id: BoardId) -> Result<Vec<Ship>, Error> {
        let mut rng = SmallRng::from_rng(&mut rand::rng());
        self.auto_place_fleet_with(board_id, &mut rng).await
    }

    /// Auto-place with a caller-supplied RNG, for reproducible fleets.
    pub async fn auto_place_fleet_with<R: Rng + Send>(
        &self,
        board_id: BoardId,
        rng: &mut R,
    ) -> Result<Vec<Ship>, Error> {
        let lock = self.board_lock(board_id);
        let _guard = lock.lock().await;

        let board = self.require_board(board_id).await?;
        if board.phase != BoardPhase::Initialize {
            return Err(Error::NotInitializePhase);
        }
        let existing = self.store.find_ships(board_id).await?;
        if !existing.is_empty() {
            return Err(Error::NonEmptyBoard);
        }

        let fleet = autoplace::random_fleet(rng, board.width, board.height)?;
        let ships = self.store.create_fleet(board_id, fleet).await?;
        self.store
            .update_board_phase(board_id, BoardPhase::Start)
            .await?;
        info!(
            "board {}: auto-placed {} ships, game started",
            board_id,
            ships.len()
        );
        Ok(ships)
    }

    /// Attack one tile from raw input such as `[4,4]`.
    pub async fn attack(&self, board_id: BoardId, raw_tile: &str) -> Result<AttackOutcome, Error> {
        let lock = self.board_lock(board_id);
        let _guard = lock.lock().await;

        let board = self.require_board(board_id).await?;
        match board.phase {
            BoardPhase::Initialize => return Err(Error::GameNotStarted),
            BoardPhase::End => return Err(Error::GameAlreadyEnded),
            BoardPhase::Start => {}
        }
        let target = tile::parse_tile(raw_tile)?;
        if !board.contains(target) {
            return Err(Error::OutOfBounds);
        }

        let mut ships = self.store.find_ships(board_id).await?;
        match attack::resolve(&ships, target)? {
            Resolution::Miss => {
                self.store
                    .create_attack(NewAttack {
                        board_id,
                        ship_id: None,
                        tile: target,
                        result: AttackResult::Miss,
                        killing_blow: false,
                    })
                    .await?;
                debug!("board {}: attack {} missed", board_id, target);
                Ok(AttackOutcome::Miss)
            }
            Resolution::Hit {
                ship_index,
                segment_index,
                sinks_ship,
                destroys_fleet,
            } => {
                let ship = &mut ships[ship_index];
                ship.segments[segment_index].hit = true;
                self.store.update_ship(ship).await?;
                self.store
                    .create_attack(NewAttack {
                        board_id,
                        ship_id: Some(ship.id),
                        tile: target,
                        result: AttackResult::Hit,
                        killing_blow: sinks_ship,
                    })
                    .await?;

                if !sinks_ship {
                    debug!("board {}: attack {} hit {}", board_id, target, ship.kind);
                    return Ok(AttackOutcome::Hit);
                }
                let kind = ship.kind;
                if !destroys_fleet {
                    debug!("board {}: attack {} sank a {}", board_id, target, kind);
                    return Ok(AttackOutcome::SankShip { kind });
                }

                self.store
                    .update_board_phase(board_id, BoardPhase::End)
                    .await?;
                let total_attacks = self.store.count_attacks(board_id, None).await?;
                let miss_count = self
                    .store
                    .count_attacks(board_id, Some(AttackResult::Miss))
                    .await?;
                info!(
                    "board {}: fleet destroyed in {} attacks ({} missed)",
                    board_id, total_attacks, miss_count
                );
                Ok(AttackOutcome::GameWon {
                    total_attacks,
                    miss_count,
                })
            }
        }
    }

    /// Snapshot of a board, its attack tally, and its ships.
    pub async fn status(&self, board_id: BoardId) -> Result<BoardStatus, Error> {
        let board = self.require_board(board_id).await?;
        let ships = self.store.find_ships(board_id).await?;
        let total = self.store.count_attacks(board_id, None).await?;
        let miss = self
            .store
            .count_attacks(board_id, Some(AttackResult::Miss))
            .await?;
        Ok(BoardStatus {
            board,
            attacks: AttackTally {
                total,
                hit: total - miss,
                miss,
            },
            ships: ships
                .iter()
                .map(|ship| ShipStatus {
                    kind: ship.kind,
                    tiles: ship.footprint(),
                    is_sunk: ship.is_sunk(),
                })
                .collect(),
        })
    }

    /// Human-readable replay of the attack log. Only available once the
    /// game has started.
    pub async fn attack_history(&self, board_id: BoardId) -> Result<Vec<String>, Error> {
        let board = self.require_board(board_id).await?;
        if board.phase == BoardPhase::Initialize {
            return Err(Error::GameNotStarted);
        }
        let attacks = self.store.find_attacks(board_id).await?;

        let mut logs = vec!["Game started.".to_string()];
        for attack in &attacks {
            logs.push(format!("Attack on tile {}", attack.tile));
            if attack.result == AttackResult::Hit && attack.ship_id.is_some() {
                logs.push("It's a hit!".to_string());
            } else {
                logs.push("It's a miss.".to_string());
            }
        }
        if board.phase == BoardPhase::End {
            logs.push("Game ended.".to_string());
        }
        Ok(logs)
    }
}
