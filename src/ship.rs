//! Ship definitions: fixed length, running hit count.

use alloc::vec::Vec;
use core::fmt;

use crate::config::STANDARD_FLEET;

/// Orientation of a ship on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    /// Extends along increasing column.
    Horizontal,
    /// Extends along increasing row.
    Vertical,
}

impl Orientation {
    /// Row and column step from one segment to the next.
    pub const fn step(&self) -> (usize, usize) {
        match self {
            Orientation::Horizontal => (0, 1),
            Orientation::Vertical => (1, 0),
        }
    }
}

/// Type of ship: name and length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShipClass {
    name: &'static str,
    length: usize,
}

impl ShipClass {
    /// Create a new ship class.
    pub const fn new(name: &'static str, length: usize) -> Self {
        Self { name, length }
    }

    /// Class name.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Class length.
    pub fn length(&self) -> usize {
        self.length
    }
}

/// Index of a ship inside the fleet of the board it was placed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ShipId(pub(crate) usize);

impl ShipId {
    /// Position in the owning board's fleet.
    pub fn index(&self) -> usize {
        self.0
    }
}

/// A ship tracks its length and how many times it has been struck.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Ship {
    name: Option<&'static str>,
    length: usize,
    hits: usize,
}

impl Ship {
    /// An anonymous ship of `length` segments. `length` must be positive;
    /// boards reject zero-length ships with `BoardError::EmptyShip`.
    pub const fn new(length: usize) -> Self {
        debug_assert!(length > 0, "ship length must be positive");
        Self {
            name: None,
            length,
            hits: 0,
        }
    }

    /// Ship's length.
    pub fn length(&self) -> usize {
        self.length
    }

    /// Number of hits taken so far.
    pub fn hits(&self) -> usize {
        self.hits
    }

    /// Class name, when built from a [`ShipClass`].
    pub fn name(&self) -> Option<&'static str> {
        self.name
    }

    /// Register a hit. Hitting a sunk ship leaves the count unchanged.
    pub fn hit(&mut self) {
        if !self.is_sunk() {
            self.hits += 1;
        }
    }

    /// Check if the ship is sunk (hit count reached its length).
    pub fn is_sunk(&self) -> bool {
        self.hits >= self.length
    }
}

impl From<ShipClass> for Ship {
    fn from(class: ShipClass) -> Self {
        Self {
            name: Some(class.name()),
            length: class.length(),
            hits: 0,
        }
    }
}

impl fmt::Debug for Ship {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Ship {{ name: {:?}, length: {}, hits: {} }}",
            self.name, self.length, self.hits,
        )
    }
}

/// The five ships every player places before play begins, lengths 5, 4, 3, 3, 2.
pub fn create_standard_fleet() -> Vec<Ship> {
    STANDARD_FLEET.iter().copied().map(Ship::from).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "ship length must be positive")]
    fn zero_length_ship_panics_in_debug_builds() {
        let _ = Ship::new(0);
    }

    #[test]
    fn sinks_exactly_on_last_hit() {
        let mut ship = Ship::new(3);
        for _ in 0..2 {
            ship.hit();
            assert!(!ship.is_sunk());
        }
        ship.hit();
        assert!(ship.is_sunk());
        assert_eq!(ship.hits(), 3);
    }

    #[test]
    fn hits_past_sinking_are_ignored() {
        let mut ship = Ship::new(2);
        for _ in 0..5 {
            ship.hit();
        }
        assert_eq!(ship.hits(), 2);
        assert!(ship.is_sunk());
    }

    #[test]
    fn standard_fleet_lengths() {
        let fleet = create_standard_fleet();
        let lengths: Vec<_> = fleet.iter().map(Ship::length).collect();
        assert_eq!(lengths, [5, 4, 3, 3, 2]);
        assert_eq!(fleet[0].name(), Some("Carrier"));
        assert!(fleet.iter().all(|s| s.hits() == 0));
    }
}
