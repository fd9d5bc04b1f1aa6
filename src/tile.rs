//! Tile coordinates, canonical ordering, raw tile-input parsing, and
//! straight-line shape validation.

use core::fmt;

use serde_json::Value;

use crate::common::Error;

/// A single board coordinate. Ordering is ascending by `x` then `y`, which
/// is also the canonical order for ship tiles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[derive(serde::Serialize, serde::Deserialize)]
pub struct Tile {
    pub x: i64,
    pub y: i64,
}

impl Tile {
    pub const fn new(x: i64, y: i64) -> Self {
        Tile { x, y }
    }
}

impl fmt::Display for Tile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.x, self.y)
    }
}

/// Sort tiles into canonical order (ascending x, then y).
pub fn canonical(mut tiles: Vec<Tile>) -> Vec<Tile> {
    tiles.sort();
    tiles
}

/// Parse raw placement input into tiles. Accepts both `[0,0],[1,0]` (bare
/// pair list, as posted by clients) and `[[0,0],[1,0]]`.
pub fn parse_tiles(raw: &str) -> Result<Vec<Tile>, Error> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(Error::InsufficientData);
    }
    // Wrapping in brackets turns the bare pair list into a JSON array.
    let value: Value =
        serde_json::from_str(&format!("[{}]", trimmed)).map_err(|_| Error::MalformedInput)?;
    let Value::Array(mut items) = value else {
        return Err(Error::MalformedInput);
    };
    // A client that sent the outer brackets itself ends up double-nested.
    if items.len() == 1 {
        if let Value::Array(inner) = &items[0] {
            if inner.is_empty() {
                return Err(Error::InsufficientData);
            }
            if inner.iter().all(Value::is_array) {
                items = inner.clone();
            }
        }
    }
    if items.is_empty() {
        return Err(Error::InsufficientData);
    }
    let mut tiles = Vec::with_capacity(items.len());
    for item in &items {
        let Value::Array(pair) = item else {
            return Err(Error::MalformedInput);
        };
        if pair.len() != 2 {
            return Err(Error::MalformedInput);
        }
        tiles.push(Tile::new(coordinate(&pair[0])?, coordinate(&pair[1])?));
    }
    Ok(tiles)
}

/// Parse raw attack input into a single tile, e.g. `[4,4]`.
pub fn parse_tile(raw: &str) -> Result<Tile, Error> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(Error::InsufficientData);
    }
    let value: Value = serde_json::from_str(trimmed).map_err(|_| Error::MalformedInput)?;
    let Value::Array(pair) = value else {
        return Err(Error::MalformedInput);
    };
    if pair.len() != 2 {
        return Err(Error::InvalidTile);
    }
    Ok(Tile::new(coordinate(&pair[0])?, coordinate(&pair[1])?))
}

fn coordinate(value: &Value) -> Result<i64, Error> {
    match value {
        Value::Number(n) => n.as_i64().ok_or(Error::NonIntegerCoordinate),
        _ => Err(Error::MalformedInput),
    }
}

/// Validate that canonically ordered tiles form one contiguous straight
/// line. The first two tiles establish the axis; the whole sequence must
/// then equal the generated run, which rejects gaps such as
/// `[0,0],[1,0],[3,0]`.
pub fn validate_shape(tiles: &[Tile]) -> Result<(), Error> {
    if tiles.len() == 1 {
        return Ok(());
    }
    let first = tiles[0];
    let second = tiles[1];
    let expected: Vec<Tile> = if second.x - first.x == 1 && second.y == first.y {
        (0..tiles.len() as i64)
            .map(|i| Tile::new(first.x + i, first.y))
            .collect()
    } else if second.y - first.y == 1 && second.x == first.x {
        (0..tiles.len() as i64)
            .map(|i| Tile::new(first.x, first.y + i))
            .collect()
    } else {
        return Err(Error::InvalidShape);
    };
    if tiles != expected.as_slice() {
        return Err(Error::InvalidShape);
    }
    Ok(())
}
