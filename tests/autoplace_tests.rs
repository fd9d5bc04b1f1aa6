use std::sync::Arc;

use battleship_engine::{
    is_blocked, random_fleet, BoardPhase, Error, GameEngine, InMemoryStore, Ship, Tile,
};
use proptest::prelude::*;
use rand::rngs::SmallRng;
use rand::SeedableRng;

fn fleet_lengths(ships: &[Ship]) -> Vec<usize> {
    let mut lengths: Vec<usize> = ships.iter().map(Ship::length).collect();
    lengths.sort_unstable_by(|a, b| b.cmp(a));
    lengths
}

fn assert_no_blackout_violations(footprints: &[Vec<Tile>], width: u16, height: u16) {
    for (i, candidate) in footprints.iter().enumerate() {
        let others: Vec<Vec<Tile>> = footprints
            .iter()
            .enumerate()
            .filter(|&(j, _)| j != i)
            .map(|(_, run)| run.clone())
            .collect();
        assert!(
            !is_blocked(candidate, &others, width, height),
            "ship {} overlaps or touches another",
            i
        );
    }
}

#[tokio::test]
async fn test_auto_place_fills_board_and_starts_game() {
    let engine = GameEngine::new(Arc::new(InMemoryStore::new()));
    let board = engine.create_board(10, 10).await.unwrap();

    let mut rng = SmallRng::seed_from_u64(7);
    let ships = engine
        .auto_place_fleet_with(board.id, &mut rng)
        .await
        .unwrap();

    assert_eq!(ships.len(), 10);
    assert_eq!(fleet_lengths(&ships), vec![4, 3, 3, 2, 2, 2, 1, 1, 1, 1]);
    assert!(ships.iter().all(|s| s.segments.iter().all(|seg| !seg.hit)));

    let footprints: Vec<Vec<Tile>> = ships.iter().map(Ship::footprint).collect();
    assert_no_blackout_violations(&footprints, 10, 10);

    let board = engine.find_board(board.id).await.unwrap();
    assert_eq!(board.phase, BoardPhase::Start);
}

#[tokio::test]
async fn test_auto_place_rejects_non_empty_board() {
    let engine = GameEngine::new(Arc::new(InMemoryStore::new()));
    let board = engine.create_board(10, 10).await.unwrap();
    engine.place_ship(board.id, "[0,0],[1,0]").await.unwrap();

    assert_eq!(
        engine.auto_place_fleet(board.id).await.unwrap_err(),
        Error::NonEmptyBoard
    );
}

#[tokio::test]
async fn test_auto_place_rejects_started_board() {
    let engine = GameEngine::new(Arc::new(InMemoryStore::new()));
    let board = engine.create_board(10, 10).await.unwrap();
    let mut rng = SmallRng::seed_from_u64(1);
    engine
        .auto_place_fleet_with(board.id, &mut rng)
        .await
        .unwrap();

    assert_eq!(
        engine.auto_place_fleet(board.id).await.unwrap_err(),
        Error::NotInitializePhase
    );
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// Any seed and any legal board size yields ten well-separated ships
    /// with the fixed length multiset.
    #[test]
    fn random_fleet_is_always_legal(
        seed in any::<u64>(),
        width in 10u16..=25,
        height in 10u16..=25,
    ) {
        let mut rng = SmallRng::seed_from_u64(seed);
        let fleet = random_fleet(&mut rng, width, height).unwrap();
        prop_assert_eq!(fleet.len(), 10);

        let mut lengths: Vec<usize> = fleet.iter().map(|(kind, _)| kind.length()).collect();
        lengths.sort_unstable_by(|a, b| b.cmp(a));
        prop_assert_eq!(lengths, vec![4, 3, 3, 2, 2, 2, 1, 1, 1, 1]);

        for (kind, tiles) in &fleet {
            prop_assert_eq!(tiles.len(), kind.length());
            // in bounds and in canonical order
            let mut sorted = tiles.clone();
            sorted.sort();
            prop_assert_eq!(&sorted, tiles);
            for tile in tiles {
                prop_assert!(tile.x >= 0 && tile.x < width as i64);
                prop_assert!(tile.y >= 0 && tile.y < height as i64);
            }
        }

        let footprints: Vec<Vec<Tile>> =
            fleet.iter().map(|(_, tiles)| tiles.clone()).collect();
        assert_no_blackout_violations(&footprints, width, height);
    }
}
