//! A fixed-size bitboard used as a set of board coordinates.
//!
//! The type is `no_std` friendly and avoids heap allocations. Cells of an
//! `N×N` grid are packed row-major into an unsigned integer `T`, so the
//! attacked and missed sets of a board are plain `Copy` values.

use core::ops::Not;
use core::{fmt, mem};
use num_traits::{PrimInt, Unsigned, Zero};

use crate::common::Coord;

/// Errors returned by bitboard operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BitBoardError {
    /// Row or column index is out of bounds [0..N).
    IndexOutOfBounds { row: usize, col: usize },
}

impl fmt::Display for BitBoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BitBoardError::IndexOutOfBounds { row, col } => {
                write!(f, "IndexOutOfBounds: row={}, col={}", row, col)
            }
        }
    }
}

/// A fixed-size N×N bitboard stored in the unsigned integer `T`.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct BitBoard<T, const N: usize>
where
    T: PrimInt + Unsigned + Zero,
{
    bits: T,
}

impl<T, const N: usize> BitBoard<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    /// Number of usable bits in the board (`N * N`).
    const BOARD_BITS: usize = N * N;

    #[inline]
    fn mask() -> T {
        if Self::BOARD_BITS == mem::size_of::<T>() * 8 {
            !T::zero()
        } else {
            (T::one() << Self::BOARD_BITS) - T::one()
        }
    }

    #[inline]
    fn index(coord: Coord) -> Result<usize, BitBoardError> {
        if coord.row >= N || coord.col >= N {
            Err(BitBoardError::IndexOutOfBounds {
                row: coord.row,
                col: coord.col,
            })
        } else {
            Ok(coord.row * N + coord.col)
        }
    }

    /// Create a new empty bitboard.
    #[inline]
    pub fn new() -> Self {
        BitBoard { bits: T::zero() }
    }

    /// Number of coordinates in the set.
    pub fn len(&self) -> usize {
        self.bits.count_ones() as usize
    }

    /// Returns true if no bits are set.
    pub fn is_empty(&self) -> bool {
        self.bits.is_zero()
    }

    /// Whether `coord` is in the set. Out-of-range coordinates are never members.
    pub fn contains(&self, coord: Coord) -> bool {
        match Self::index(coord) {
            Ok(idx) => ((self.bits >> idx) & T::one()) != T::zero(),
            Err(_) => false,
        }
    }

    /// Adds `coord`, returning `true` if it was not already present.
    pub fn insert(&mut self, coord: Coord) -> Result<bool, BitBoardError> {
        let bit = T::one() << Self::index(coord)?;
        let fresh = (self.bits & bit).is_zero();
        self.bits = self.bits | bit;
        Ok(fresh)
    }

    /// Iterator over the members in row-major order.
    #[inline]
    pub fn iter(&self) -> Cells<T, N> {
        Cells {
            bits: self.bits,
            idx: 0,
        }
    }
}

impl<T, const N: usize> Default for BitBoard<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T, const N: usize> fmt::Debug for BitBoard<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

/// Iterator over the members of a bitboard.
#[derive(Clone, Copy)]
pub struct Cells<T, const N: usize>
where
    T: PrimInt + Unsigned + Zero,
{
    bits: T,
    idx: usize,
}

impl<T, const N: usize> Iterator for Cells<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    type Item = Coord;
    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        while self.idx < N * N {
            let idx = self.idx;
            self.idx += 1;
            if ((self.bits >> idx) & T::one()) != T::zero() {
                return Some(Coord::new(idx / N, idx % N));
            }
        }
        None
    }
}

/// Complement within the board bounds.
impl<T, const N: usize> Not for BitBoard<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    type Output = Self;
    #[inline]
    fn not(self) -> Self {
        BitBoard {
            bits: !self.bits & Self::mask(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;

    type BB = BitBoard<u128, 10>;

    #[test]
    fn insert_reports_fresh_members() {
        let mut bb = BB::new();
        assert_eq!(bb.insert(Coord::new(3, 7)), Ok(true));
        assert_eq!(bb.insert(Coord::new(3, 7)), Ok(false));
        assert!(bb.contains(Coord::new(3, 7)));
        assert_eq!(bb.len(), 1);
    }

    #[test]
    fn out_of_range_is_rejected() {
        let mut bb = BB::new();
        assert_eq!(
            bb.insert(Coord::new(10, 0)),
            Err(BitBoardError::IndexOutOfBounds { row: 10, col: 0 })
        );
        assert!(!bb.contains(Coord::new(0, 10)));
        assert!(bb.is_empty());
    }

    #[test]
    fn iter_is_row_major() {
        let mut bb = BB::new();
        for coord in [Coord::new(9, 9), Coord::new(0, 4), Coord::new(2, 1)] {
            bb.insert(coord).unwrap();
        }
        let cells: Vec<_> = bb.iter().collect();
        assert_eq!(cells, [Coord::new(0, 4), Coord::new(2, 1), Coord::new(9, 9)]);
    }

    #[test]
    fn complement_stays_inside_the_grid() {
        let mut bb = BB::new();
        bb.insert(Coord::new(0, 0)).unwrap();
        let free = !bb;
        assert_eq!(free.len(), 99);
        assert!(!free.contains(Coord::new(0, 0)));
        assert_eq!(free.iter().next(), Some(Coord::new(0, 1)));
        assert_eq!(free.iter().last(), Some(Coord::new(9, 9)));
    }
}
