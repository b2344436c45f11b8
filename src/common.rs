//! Common types for Battleship: coordinates, attack results and errors.

use core::fmt;

use crate::config::BOARD_SIZE;

const GRID: usize = BOARD_SIZE as usize;

/// A cell on the board, addressed by row then column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Coord {
    pub row: usize,
    pub col: usize,
}

impl Coord {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Whether the coordinate lies inside the 10×10 grid.
    pub const fn in_bounds(&self) -> bool {
        self.row < GRID && self.col < GRID
    }

    /// Shift by a signed delta. `None` when the result would be negative.
    pub fn offset(&self, d_row: isize, d_col: isize) -> Option<Coord> {
        Some(Coord {
            row: self.row.checked_add_signed(d_row)?,
            col: self.col.checked_add_signed(d_col)?,
        })
    }

    /// The 4-connected neighbours in up, down, left, right order. Neighbours
    /// that would fall below zero are omitted; the upper bound is left to the
    /// board's legality check.
    pub fn neighbors(self) -> impl Iterator<Item = Coord> {
        const DIRECTIONS: [(isize, isize); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];
        DIRECTIONS
            .into_iter()
            .filter_map(move |(dr, dc)| self.offset(dr, dc))
    }

    /// Every in-bounds coordinate in row-major order.
    pub fn all() -> impl Iterator<Item = Coord> {
        (0..GRID).flat_map(|row| (0..GRID).map(move |col| Coord { row, col }))
    }
}

impl From<(usize, usize)> for Coord {
    fn from((row, col): (usize, usize)) -> Self {
        Coord { row, col }
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.row, self.col)
    }
}

/// Outcome of a single attack against a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "std", serde(rename_all = "snake_case"))]
pub enum AttackResult {
    /// Attack struck a ship that is still afloat.
    Hit,
    /// Attack landed on open water.
    Miss,
    /// Attack struck the last intact segment of a ship.
    Sunk,
    /// Coordinate lies outside the board.
    Invalid,
    /// Coordinate was attacked before.
    AlreadyAttacked,
}

impl AttackResult {
    /// `true` for results that consumed the attacker's turn.
    pub fn is_resolved(&self) -> bool {
        matches!(self, AttackResult::Hit | AttackResult::Miss | AttackResult::Sunk)
    }

    /// `true` when a ship was struck.
    pub fn is_hit(&self) -> bool {
        matches!(self, AttackResult::Hit | AttackResult::Sunk)
    }
}

impl fmt::Display for AttackResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            AttackResult::Hit => "hit",
            AttackResult::Miss => "miss",
            AttackResult::Sunk => "sunk",
            AttackResult::Invalid => "invalid",
            AttackResult::AlreadyAttacked => "already attacked",
        };
        f.write_str(s)
    }
}

/// Errors returned by Board placement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    /// At least one target cell lies outside the board.
    ShipOutOfBounds,
    /// Ship placement overlaps another ship.
    ShipOverlaps,
    /// Ships cannot be placed once the board has received an attack.
    PlacementAfterAttack,
    /// A ship of zero length cannot occupy any cell.
    EmptyShip,
    /// No free position remains for the ship.
    UnableToPlaceShip,
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoardError::ShipOutOfBounds => write!(f, "Ship placement is out of bounds"),
            BoardError::ShipOverlaps => write!(f, "Ship placement overlaps with another ship"),
            BoardError::PlacementAfterAttack => {
                write!(f, "Ships cannot be placed after the board was attacked")
            }
            BoardError::EmptyShip => write!(f, "Ship length must be positive"),
            BoardError::UnableToPlaceShip => write!(f, "Unable to place ship"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for BoardError {}

/// Errors returned when a match refuses to advance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TurnError {
    /// The match already has a winner.
    GameOver,
    /// The requesting side does not hold the turn.
    OutOfTurn,
    /// The board rejected the coordinate; carries `Invalid` or `AlreadyAttacked`.
    IllegalAttack(AttackResult),
    /// The automated attack entry point was called on a human-controlled player.
    NotAutomated,
    /// Every cell of the enemy board has already been attacked.
    NoLegalTarget,
    /// Fleets can only be placed before the first attack.
    PlacementClosed,
    /// That side's board already carries ships.
    FleetAlreadyPlaced,
    /// Placement failed on the board.
    Placement(BoardError),
}

impl From<BoardError> for TurnError {
    fn from(err: BoardError) -> Self {
        TurnError::Placement(err)
    }
}

impl fmt::Display for TurnError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TurnError::GameOver => write!(f, "Game over"),
            TurnError::OutOfTurn => write!(f, "Not your turn"),
            TurnError::IllegalAttack(res) => write!(f, "Invalid attack: {}", res),
            TurnError::NotAutomated => {
                write!(f, "Only automated players can choose their own attacks")
            }
            TurnError::NoLegalTarget => write!(f, "No legal attacks available"),
            TurnError::PlacementClosed => write!(f, "Ships can only be placed before play starts"),
            TurnError::FleetAlreadyPlaced => write!(f, "Fleet has already been placed"),
            TurnError::Placement(e) => write!(f, "Placement failed: {}", e),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for TurnError {}
