use battleship_engine::{
    create_standard_fleet, AttackResult, Board, BoardError, Cell, Coord, Orientation, Ship,
    TOTAL_SHIP_CELLS,
};
use rand::rngs::SmallRng;
use rand::SeedableRng;

#[test]
fn test_empty_board_is_never_all_sunk() {
    let board = Board::new();
    assert!(!board.all_ships_sunk());
    assert!(board.fleet().is_empty());
    assert!(board.attacked_cells().is_empty());
}

#[test]
fn test_manual_place_and_attack_sink() {
    let mut board = Board::new();
    let id = board
        .place_ship(Ship::new(3), Coord::new(0, 0), Orientation::Horizontal)
        .unwrap();
    for c in 0..3 {
        assert_eq!(board.cell(Coord::new(0, c)), Some(Cell::OccupiedBy(id)));
    }

    assert_eq!(board.receive_attack(Coord::new(0, 0)), AttackResult::Hit);
    assert_eq!(board.receive_attack(Coord::new(0, 1)), AttackResult::Hit);
    assert!(!board.all_ships_sunk());
    assert_eq!(board.receive_attack(Coord::new(0, 2)), AttackResult::Sunk);
    assert!(board.all_ships_sunk());
    assert!(board.ship(id).unwrap().is_sunk());
    assert_eq!(board.remaining_ships(), 0);
}

#[test]
fn test_overlap_is_rejected_without_writes() {
    let mut board = Board::new();
    board
        .place_ship(Ship::new(4), Coord::new(2, 3), Orientation::Vertical)
        .unwrap();
    let before = *board.cells();
    assert_eq!(
        board.place_ship(Ship::new(5), Coord::new(4, 0), Orientation::Horizontal),
        Err(BoardError::ShipOverlaps)
    );
    assert_eq!(*board.cells(), before);
    assert_eq!(board.fleet().len(), 1);
}

#[test]
fn test_out_of_bounds_placement_is_rejected_without_writes() {
    let mut board = Board::new();
    assert_eq!(
        board.place_ship(Ship::new(5), Coord::new(0, 6), Orientation::Horizontal),
        Err(BoardError::ShipOutOfBounds)
    );
    assert_eq!(
        board.place_ship(Ship::new(2), Coord::new(10, 0), Orientation::Vertical),
        Err(BoardError::ShipOutOfBounds)
    );
    assert!(board
        .cells()
        .iter()
        .flatten()
        .all(|cell| *cell == Cell::Empty));
    assert!(board.fleet().is_empty());
}

#[test]
fn test_miss_is_recorded() {
    let mut board = Board::new();
    board
        .place_ship(Ship::new(2), Coord::new(0, 0), Orientation::Horizontal)
        .unwrap();
    assert_eq!(board.receive_attack(Coord::new(9, 9)), AttackResult::Miss);
    assert!(board.missed_cells().contains(Coord::new(9, 9)));
    assert!(board.attacked_cells().contains(Coord::new(9, 9)));
    assert!(!board.is_legal_attack(Coord::new(9, 9)));
}

#[test]
fn test_repeated_attack_changes_nothing() {
    let mut board = Board::new();
    board
        .place_ship(Ship::new(3), Coord::new(4, 4), Orientation::Vertical)
        .unwrap();
    assert_eq!(board.receive_attack(Coord::new(4, 4)), AttackResult::Hit);
    let attacked = board.attacked_cells();
    let missed = board.missed_cells();
    assert_eq!(
        board.receive_attack(Coord::new(4, 4)),
        AttackResult::AlreadyAttacked
    );
    assert_eq!(board.attacked_cells(), attacked);
    assert_eq!(board.missed_cells(), missed);
    assert_eq!(board.fleet()[0].hits(), 1);
}

#[test]
fn test_out_of_bounds_attack_is_invalid() {
    let mut board = Board::new();
    for coord in [Coord::new(10, 0), Coord::new(0, 10), Coord::new(usize::MAX, 3)] {
        assert_eq!(board.receive_attack(coord), AttackResult::Invalid);
        assert!(!board.is_legal_attack(coord));
    }
    assert!(board.attacked_cells().is_empty());
    assert!(board.missed_cells().is_empty());
}

#[test]
fn test_ship_at_reports_owner() {
    let mut board = Board::new();
    let a = board
        .place_ship(Ship::new(2), Coord::new(1, 1), Orientation::Horizontal)
        .unwrap();
    let b = board
        .place_ship(Ship::new(3), Coord::new(3, 1), Orientation::Vertical)
        .unwrap();
    assert_ne!(a, b);
    assert_eq!(board.ship_at(Coord::new(1, 2)).map(|(id, _)| id), Some(a));
    assert_eq!(board.ship_at(Coord::new(5, 1)).map(|(id, _)| id), Some(b));
    assert!(board.ship_at(Coord::new(0, 0)).is_none());
    assert!(board.ship_at(Coord::new(12, 0)).is_none());
}

#[test]
fn test_place_standard_fleet_no_overlap() {
    let mut board = Board::new();
    let mut rng = SmallRng::seed_from_u64(42);
    let ids = board.place_fleet(&mut rng, create_standard_fleet()).unwrap();
    assert_eq!(ids.len(), 5);

    let occupied = board
        .cells()
        .iter()
        .flatten()
        .filter(|cell| matches!(cell, Cell::OccupiedBy(_)))
        .count();
    assert_eq!(occupied, TOTAL_SHIP_CELLS, "all ships should be placed without overlap");
}

#[test]
fn test_reproducible_placement() {
    let mut rng1 = SmallRng::seed_from_u64(7);
    let mut rng2 = SmallRng::seed_from_u64(7);
    let mut b1 = Board::new();
    let mut b2 = Board::new();
    b1.place_fleet(&mut rng1, create_standard_fleet()).unwrap();
    b2.place_fleet(&mut rng2, create_standard_fleet()).unwrap();
    assert_eq!(b1.cells(), b2.cells());
}

#[test]
fn test_sinking_every_ship_ends_fleet() {
    let mut board = Board::new();
    let mut rng = SmallRng::seed_from_u64(99);
    board.place_fleet(&mut rng, create_standard_fleet()).unwrap();
    let mut sunk = 0;
    for coord in Coord::all() {
        if board.receive_attack(coord) == AttackResult::Sunk {
            sunk += 1;
        }
    }
    assert_eq!(sunk, 5);
    assert!(board.all_ships_sunk());
    assert_eq!(board.attacked_cells().len(), 100);
    assert_eq!(board.missed_cells().len(), 100 - TOTAL_SHIP_CELLS);
}
