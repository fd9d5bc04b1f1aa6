//! Random fleet generation for the auto-place path.

use rand::Rng;

use crate::blackout;
use crate::common::Error;
use crate::config::{AUTO_PLACE_MAX_ATTEMPTS, FLEET};
use crate::ship::ShipKind;
use crate::tile::Tile;

/// Generate a full random fleet for an empty `width`×`height` board.
/// Each ship samples a random orientation and in-bounds start, retrying
/// while the candidate touches ships placed earlier in the run. Returns
/// footprints in canonical tile order, paired with their class.
pub fn random_fleet<R: Rng>(
    rng: &mut R,
    width: u16,
    height: u16,
) -> Result<Vec<(ShipKind, Vec<Tile>)>, Error> {
    let mut fleet: Vec<(ShipKind, Vec<Tile>)> = Vec::with_capacity(FLEET.len());
    let mut placed: Vec<Vec<Tile>> = Vec::with_capacity(FLEET.len());

    for &kind in FLEET.iter() {
        let len = kind.length() as i64;
        let mut attempts = 0;
        loop {
            attempts += 1;
            if attempts > AUTO_PLACE_MAX_ATTEMPTS {
                return Err(Error::PlacementExhausted);
            }
            let tiles = if rng.random() {
                // horizontal
                let x0 = rng.random_range(0..=(width as i64 - len));
                let y0 = rng.random_range(0..height as i64);
                (0..len).map(|i| Tile::new(x0 + i, y0)).collect::<Vec<_>>()
            } else {
                // vertical
                let x0 = rng.random_range(0..width as i64);
                let y0 = rng.random_range(0..=(height as i64 - len));
                (0..len).map(|i| Tile::new(x0, y0 + i)).collect::<Vec<_>>()
            };
            if !blackout::is_blocked(&tiles, &placed, width, height) {
                placed.push(tiles.clone());
                fleet.push((kind, tiles));
                break;
            }
        }
    }
    Ok(fleet)
}
