//! Blackout set computation: the coordinates a new ship may not touch
//! because they lie on or next to an existing ship.

use std::collections::HashSet;

use crate::tile::Tile;

/// Collect every tile forbidden for a new placement: each placed ship's
/// footprint dilated by one cell in all eight directions, clipped to the
/// board and deduplicated.
pub fn blackout_tiles(placed: &[Vec<Tile>], width: u16, height: u16) -> HashSet<Tile> {
    let mut tiles = HashSet::new();
    for run in placed {
        if run.is_empty() {
            continue;
        }
        let origin = run[0];
        let len = run.len() as i64;
        // Single tiles pad like a horizontal run of length one.
        let horizontal = run.len() == 1 || run[1].x - run[0].x == 1;
        for j in -1..=len {
            for cross in -1..=1 {
                let tile = if horizontal {
                    Tile::new(origin.x + j, origin.y + cross)
                } else {
                    Tile::new(origin.x + cross, origin.y + j)
                };
                if tile.x >= 0 && tile.x < width as i64 && tile.y >= 0 && tile.y < height as i64 {
                    tiles.insert(tile);
                }
            }
        }
    }
    tiles
}

/// Whether a candidate footprint overlaps or touches any placed ship.
/// Catches direct overlap and orthogonal or diagonal adjacency in one test.
pub fn is_blocked(candidate: &[Tile], placed: &[Vec<Tile>], width: u16, height: u16) -> bool {
    let blackout = blackout_tiles(placed, width, height);
    candidate.iter().any(|tile| blackout.contains(tile))
}
