// Hunt/target guessing logic for the automated player.
// Random search until a hit, then a FIFO sweep of the hit's neighbours
// until the ship sinks.

use alloc::collections::VecDeque;
use alloc::vec::Vec;

use log::{debug, warn};
use rand::Rng;

use crate::{
    board::Board,
    common::{AttackResult, Coord},
    config::{BOARD_SIZE, SEARCH_ATTEMPTS},
};

const GRID_SIZE: usize = BOARD_SIZE as usize;

/// Which strategy picks the next target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TargetMode {
    /// Uniform random picks over the unattacked cells.
    Search,
    /// Draining the queue of cells adjacent to recent hits.
    Focus,
}

/// State of the hunt/target search against one enemy board.
#[derive(Debug, Clone)]
pub struct HuntTarget {
    mode: TargetMode,
    pending: VecDeque<Coord>,
    active_hits: Vec<Coord>,
    fallback_scans: usize,
}

impl Default for HuntTarget {
    fn default() -> Self {
        Self::new()
    }
}

impl HuntTarget {
    /// Fresh state: search mode, nothing queued.
    pub fn new() -> Self {
        Self {
            mode: TargetMode::Search,
            pending: VecDeque::new(),
            active_hits: Vec::new(),
            fallback_scans: 0,
        }
    }

    pub fn mode(&self) -> TargetMode {
        self.mode
    }

    /// Queued neighbour cells, next target first.
    pub fn pending_targets(&self) -> &VecDeque<Coord> {
        &self.pending
    }

    /// Hits scored on the ship currently being focused.
    pub fn active_hits(&self) -> &[Coord] {
        &self.active_hits
    }

    /// How many search picks had to fall back to the row-major scan.
    pub fn fallback_scans(&self) -> usize {
        self.fallback_scans
    }

    /// Drop all focus state and return to search mode.
    pub fn reset(&mut self) {
        self.mode = TargetMode::Search;
        self.pending.clear();
        self.active_hits.clear();
    }

    /// Choose the next coordinate to fire at on `enemy`. Returns `None` only
    /// when every cell has already been attacked.
    pub fn select_target<R: Rng + ?Sized>(&mut self, enemy: &Board, rng: &mut R) -> Option<Coord> {
        if self.mode == TargetMode::Focus {
            while let Some(coord) = self.pending.pop_front() {
                if enemy.is_legal_attack(coord) {
                    return Some(coord);
                }
            }
            debug!("target queue exhausted, returning to search");
            self.mode = TargetMode::Search;
        }
        self.search(enemy, rng)
    }

    fn search<R: Rng + ?Sized>(&mut self, enemy: &Board, rng: &mut R) -> Option<Coord> {
        for _ in 0..SEARCH_ATTEMPTS {
            let coord = Coord::new(
                rng.random_range(0..GRID_SIZE),
                rng.random_range(0..GRID_SIZE),
            );
            if enemy.is_legal_attack(coord) {
                return Some(coord);
            }
        }
        self.fallback_scans += 1;
        warn!(
            "no legal cell after {} random picks, scanning row-major",
            SEARCH_ATTEMPTS
        );
        (!enemy.attacked_cells()).iter().next()
    }

    /// Update the search state with the outcome of firing at `coord`.
    /// `enemy` is the board as it stands after the attack.
    pub fn record_result(&mut self, coord: Coord, result: AttackResult, enemy: &Board) {
        match result {
            AttackResult::Hit => {
                if self.mode == TargetMode::Search {
                    debug!("hit at {}, switching to focus", coord);
                    self.mode = TargetMode::Focus;
                }
                for next in coord.neighbors() {
                    if enemy.is_legal_attack(next) && !self.pending.contains(&next) {
                        self.pending.push_back(next);
                    }
                }
                self.active_hits.push(coord);
            }
            AttackResult::Sunk => {
                debug!("sank a ship at {}, back to search", coord);
                self.reset();
            }
            AttackResult::Miss | AttackResult::Invalid | AttackResult::AlreadyAttacked => {}
        }
    }
}
