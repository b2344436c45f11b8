//! Game board state: ship occupancy, attacks received and the fleet.

use alloc::vec::Vec;
use core::fmt;

use log::{debug, warn};
use rand::Rng;

use crate::bitboard::BitBoard;
use crate::common::{AttackResult, BoardError, Coord};
use crate::config::{BOARD_SIZE, PLACEMENT_ATTEMPTS};
use crate::ship::{Orientation, Ship, ShipId};

/// Packed set of coordinates on the standard grid.
pub type CellSet = BitBoard<u128, { BOARD_SIZE as usize }>;

const GRID: usize = BOARD_SIZE as usize;

/// Content of a single board cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Cell {
    #[default]
    Empty,
    OccupiedBy(ShipId),
}

/// One player's 10×10 board: where the ships sit and what has been fired at it.
#[derive(Clone)]
pub struct Board {
    cells: [[Cell; GRID]; GRID],
    attacked: CellSet,
    missed: CellSet,
    fleet: Vec<Ship>,
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// Create an empty board (no ships placed, nothing attacked).
    pub fn new() -> Self {
        Board {
            cells: [[Cell::Empty; GRID]; GRID],
            attacked: CellSet::new(),
            missed: CellSet::new(),
            fleet: Vec::new(),
        }
    }

    /// Row-major view of every cell.
    pub fn cells(&self) -> &[[Cell; GRID]; GRID] {
        &self.cells
    }

    /// Content of the cell at `coord`, `None` when out of bounds.
    pub fn cell(&self, coord: Coord) -> Option<Cell> {
        if coord.in_bounds() {
            Some(self.cells[coord.row][coord.col])
        } else {
            None
        }
    }

    /// Every ship placed on this board, in placement order.
    pub fn fleet(&self) -> &[Ship] {
        &self.fleet
    }

    /// Look up a placed ship.
    pub fn ship(&self, id: ShipId) -> Option<&Ship> {
        self.fleet.get(id.0)
    }

    /// The ship occupying `coord`, if any.
    pub fn ship_at(&self, coord: Coord) -> Option<(ShipId, &Ship)> {
        match self.cell(coord)? {
            Cell::OccupiedBy(id) => self.ship(id).map(|ship| (id, ship)),
            Cell::Empty => None,
        }
    }

    /// Coordinates attacked so far.
    pub fn attacked_cells(&self) -> CellSet {
        self.attacked
    }

    /// Attacked coordinates that held no ship.
    pub fn missed_cells(&self) -> CellSet {
        self.missed
    }

    /// Number of placed ships still afloat.
    pub fn remaining_ships(&self) -> usize {
        self.fleet.iter().filter(|s| !s.is_sunk()).count()
    }

    /// Cells a ship of `length` would cover from `origin`, checked against
    /// bounds and existing ships.
    pub fn footprint(
        &self,
        length: usize,
        origin: Coord,
        orientation: Orientation,
    ) -> Result<Vec<Coord>, BoardError> {
        if length == 0 {
            return Err(BoardError::EmptyShip);
        }
        let (dr, dc) = orientation.step();
        let mut cells = Vec::with_capacity(length);
        for i in 0..length {
            let coord = Coord::new(
                origin.row.saturating_add(dr * i),
                origin.col.saturating_add(dc * i),
            );
            match self.cell(coord) {
                None => return Err(BoardError::ShipOutOfBounds),
                Some(Cell::OccupiedBy(_)) => return Err(BoardError::ShipOverlaps),
                Some(Cell::Empty) => cells.push(coord),
            }
        }
        Ok(cells)
    }

    /// Place `ship` starting at `origin`. Either every target cell is written
    /// or, on error, none is.
    pub fn place_ship(
        &mut self,
        ship: Ship,
        origin: Coord,
        orientation: Orientation,
    ) -> Result<ShipId, BoardError> {
        if !self.attacked.is_empty() {
            return Err(BoardError::PlacementAfterAttack);
        }
        let cells = self.footprint(ship.length(), origin, orientation)?;
        let id = ShipId(self.fleet.len());
        for coord in cells {
            self.cells[coord.row][coord.col] = Cell::OccupiedBy(id);
        }
        self.fleet.push(ship);
        debug!(
            "placed ship {:?} (length {}) at {} {:?}",
            ship.name(),
            ship.length(),
            origin,
            orientation
        );
        Ok(id)
    }

    /// Returns a random free `(origin, orientation)` for a ship of `length`.
    /// Falls back to a deterministic scan once `PLACEMENT_ATTEMPTS` random
    /// draws have been rejected.
    pub fn random_placement<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        length: usize,
    ) -> Result<(Coord, Orientation), BoardError> {
        if length == 0 {
            return Err(BoardError::EmptyShip);
        }
        if length > GRID {
            return Err(BoardError::ShipOutOfBounds);
        }
        for _ in 0..PLACEMENT_ATTEMPTS {
            let orient = if rng.random() {
                Orientation::Horizontal
            } else {
                Orientation::Vertical
            };
            let max_r = if orient == Orientation::Vertical {
                GRID - length
            } else {
                GRID - 1
            };
            let max_c = if orient == Orientation::Horizontal {
                GRID - length
            } else {
                GRID - 1
            };
            let origin = Coord::new(rng.random_range(0..=max_r), rng.random_range(0..=max_c));
            if self.footprint(length, origin, orient).is_ok() {
                return Ok((origin, orient));
            }
        }
        warn!(
            "random placement gave up after {} attempts, scanning for length {}",
            PLACEMENT_ATTEMPTS, length
        );
        for orient in [Orientation::Horizontal, Orientation::Vertical] {
            for origin in Coord::all() {
                if self.footprint(length, origin, orient).is_ok() {
                    return Ok((origin, orient));
                }
            }
        }
        Err(BoardError::UnableToPlaceShip)
    }

    /// Place every ship of `fleet` at random positions. Either the whole
    /// fleet lands or the board is left as it was.
    pub fn place_fleet<R, I>(&mut self, rng: &mut R, fleet: I) -> Result<Vec<ShipId>, BoardError>
    where
        R: Rng + ?Sized,
        I: IntoIterator<Item = Ship>,
    {
        let mut staged = self.clone();
        let mut ids = Vec::new();
        for ship in fleet {
            let (origin, orient) = staged.random_placement(rng, ship.length())?;
            ids.push(staged.place_ship(ship, origin, orient)?);
        }
        *self = staged;
        Ok(ids)
    }

    /// `true` iff `coord` is in bounds and has not been attacked yet.
    pub fn is_legal_attack(&self, coord: Coord) -> bool {
        coord.in_bounds() && !self.attacked.contains(coord)
    }

    /// Resolve an attack at `coord`. Illegal coordinates leave the board untouched.
    pub fn receive_attack(&mut self, coord: Coord) -> AttackResult {
        match self.attacked.insert(coord) {
            Err(_) => return AttackResult::Invalid,
            Ok(false) => return AttackResult::AlreadyAttacked,
            Ok(true) => {}
        }
        let result = match self.cells[coord.row][coord.col] {
            Cell::OccupiedBy(id) => {
                let ship = &mut self.fleet[id.0];
                ship.hit();
                if ship.is_sunk() {
                    AttackResult::Sunk
                } else {
                    AttackResult::Hit
                }
            }
            Cell::Empty => {
                let _ = self.missed.insert(coord);
                AttackResult::Miss
            }
        };
        debug!("attack at {} -> {}", coord, result);
        result
    }

    /// Returns `true` when at least one ship was placed and all are sunk.
    pub fn all_ships_sunk(&self) -> bool {
        !self.fleet.is_empty() && self.fleet.iter().all(Ship::is_sunk)
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Board {{\n  fleet: {:?},\n  attacked: {:?},\n  missed: {:?}\n}}",
            self.fleet, self.attacked, self.missed
        )
    }
}
