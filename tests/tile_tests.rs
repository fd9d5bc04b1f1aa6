use battleship_engine::{canonical, parse_tile, parse_tiles, validate_shape, Error, Tile};

#[test]
fn test_parse_bare_pair_list() {
    let tiles = parse_tiles("[0,0],[1,0]").unwrap();
    assert_eq!(tiles, vec![Tile::new(0, 0), Tile::new(1, 0)]);
}

#[test]
fn test_parse_bracketed_list() {
    let tiles = parse_tiles("[[0,0],[1,0],[2,0]]").unwrap();
    assert_eq!(
        tiles,
        vec![Tile::new(0, 0), Tile::new(1, 0), Tile::new(2, 0)]
    );
}

#[test]
fn test_parse_single_tile_placement() {
    assert_eq!(parse_tiles("[7,2]").unwrap(), vec![Tile::new(7, 2)]);
    assert_eq!(parse_tiles("[[7,2]]").unwrap(), vec![Tile::new(7, 2)]);
}

#[test]
fn test_parse_rejects_empty_input() {
    assert_eq!(parse_tiles("").unwrap_err(), Error::InsufficientData);
    assert_eq!(parse_tiles("   ").unwrap_err(), Error::InsufficientData);
    assert_eq!(parse_tiles("[]").unwrap_err(), Error::InsufficientData);
}

#[test]
fn test_parse_rejects_garbage() {
    assert_eq!(parse_tiles("not tiles").unwrap_err(), Error::MalformedInput);
    assert_eq!(parse_tiles("[0,0],[1]").unwrap_err(), Error::MalformedInput);
    assert_eq!(
        parse_tiles("[0,0],[\"a\",1]").unwrap_err(),
        Error::MalformedInput
    );
}

#[test]
fn test_parse_rejects_non_integer_coordinates() {
    assert_eq!(
        parse_tiles("[0.5,0],[1,0]").unwrap_err(),
        Error::NonIntegerCoordinate
    );
    assert_eq!(
        parse_tile("[4,4.25]").unwrap_err(),
        Error::NonIntegerCoordinate
    );
}

#[test]
fn test_parse_attack_tile() {
    assert_eq!(parse_tile("[4,4]").unwrap(), Tile::new(4, 4));
    assert_eq!(parse_tile("").unwrap_err(), Error::InsufficientData);
    assert_eq!(parse_tile("nope").unwrap_err(), Error::MalformedInput);
    assert_eq!(parse_tile("[1]").unwrap_err(), Error::InvalidTile);
    assert_eq!(parse_tile("[1,2,3]").unwrap_err(), Error::InvalidTile);
}

#[test]
fn test_canonical_sorts_by_x_then_y() {
    let tiles = canonical(vec![
        Tile::new(2, 0),
        Tile::new(3, 0),
        Tile::new(1, 0),
        Tile::new(0, 0),
    ]);
    assert_eq!(
        tiles,
        vec![
            Tile::new(0, 0),
            Tile::new(1, 0),
            Tile::new(2, 0),
            Tile::new(3, 0)
        ]
    );

    let tiles = canonical(vec![Tile::new(4, 5), Tile::new(4, 4)]);
    assert_eq!(tiles, vec![Tile::new(4, 4), Tile::new(4, 5)]);
}

#[test]
fn test_shape_single_tile_always_valid() {
    assert!(validate_shape(&[Tile::new(9, 9)]).is_ok());
}

#[test]
fn test_shape_straight_runs_valid() {
    let horizontal = [Tile::new(2, 3), Tile::new(3, 3), Tile::new(4, 3)];
    assert!(validate_shape(&horizontal).is_ok());
    let vertical = [Tile::new(7, 1), Tile::new(7, 2)];
    assert!(validate_shape(&vertical).is_ok());
}

#[test]
fn test_shape_rejects_diagonal() {
    let tiles = [Tile::new(0, 0), Tile::new(1, 1)];
    assert_eq!(validate_shape(&tiles).unwrap_err(), Error::InvalidShape);
}

#[test]
fn test_shape_rejects_gap() {
    let tiles = [Tile::new(0, 0), Tile::new(1, 0), Tile::new(3, 0)];
    assert_eq!(validate_shape(&tiles).unwrap_err(), Error::InvalidShape);
}

#[test]
fn test_shape_rejects_duplicate_tiles() {
    let tiles = [Tile::new(0, 0), Tile::new(0, 0)];
    assert_eq!(validate_shape(&tiles).unwrap_err(), Error::InvalidShape);
}

#[test]
fn test_shape_rejects_bent_run() {
    // Starts horizontal, then turns.
    let tiles = canonical(vec![Tile::new(0, 0), Tile::new(1, 0), Tile::new(1, 1)]);
    assert_eq!(validate_shape(&tiles).unwrap_err(), Error::InvalidShape);
}
