use battleship_engine::{is_blocked, Tile};
use proptest::prelude::*;

fn straight_run(x0: i64, y0: i64, len: usize, horizontal: bool) -> Vec<Tile> {
    (0..len as i64)
        .map(|i| {
            if horizontal {
                Tile::new(x0 + i, y0)
            } else {
                Tile::new(x0, y0 + i)
            }
        })
        .collect()
}

fn shifted(tiles: &[Tile], dx: i64, dy: i64) -> Vec<Tile> {
    tiles.iter().map(|t| Tile::new(t.x + dx, t.y + dy)).collect()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Shifting a placed ship and a candidate by the same vector preserves
    /// the blackout verdict, as long as everything stays on the board.
    #[test]
    fn blackout_verdict_is_translation_invariant(
        ship_x in 0i64..12,
        ship_y in 0i64..12,
        ship_len in 1usize..=4,
        ship_horizontal in any::<bool>(),
        cand_x in 0i64..12,
        cand_y in 0i64..12,
        cand_len in 1usize..=4,
        cand_horizontal in any::<bool>(),
        dx in 0i64..8,
        dy in 0i64..8,
    ) {
        // Runs of length <= 4 starting below 12 and shifted by < 8 stay
        // inside a 25x25 board, so clipping never enters the picture.
        let ship = straight_run(ship_x, ship_y, ship_len, ship_horizontal);
        let candidate = straight_run(cand_x, cand_y, cand_len, cand_horizontal);

        let before = is_blocked(&candidate, &[ship.clone()], 25, 25);
        let after = is_blocked(
            &shifted(&candidate, dx, dy),
            &[shifted(&ship, dx, dy)],
            25,
            25,
        );
        prop_assert_eq!(before, after);
    }

    /// A candidate sharing a tile with a placed ship is always blocked.
    #[test]
    fn overlap_is_always_blocked(
        x in 0i64..20,
        y in 0i64..20,
        len in 1usize..=4,
        horizontal in any::<bool>(),
    ) {
        let ship = straight_run(x, y, len, horizontal);
        let candidate = vec![ship[len - 1]];
        prop_assert!(is_blocked(&candidate, &[ship], 25, 25));
    }
}
