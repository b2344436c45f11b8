//! Turn order and win detection for a human-versus-computer match.

use alloc::string::{String, ToString};

use log::{debug, info};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::{
    common::{AttackResult, Coord, TurnError},
    player::Player,
    ship::{create_standard_fleet, Orientation, Ship, ShipId},
};

/// The two seats of a match. `Human` moves first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "std", serde(rename_all = "snake_case"))]
pub enum Side {
    Human,
    Opponent,
}

impl Side {
    pub fn other(self) -> Side {
        match self {
            Side::Human => Side::Opponent,
            Side::Opponent => Side::Human,
        }
    }
}

/// Where the match stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchPhase {
    /// No attack made yet and at least one fleet still empty.
    Setup,
    HumanTurn,
    OpponentTurn,
    Over,
}

/// Successful outcome of one turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub struct TurnReport {
    pub side: Side,
    pub coord: Coord,
    pub result: AttackResult,
    /// Class name of the ship sent to the bottom, when `result` is `Sunk`.
    pub sunk_ship: Option<&'static str>,
    pub game_over: bool,
    pub winner: Option<Side>,
}

/// Flat `{success, result, message, game_over, winner}` view of a turn for
/// presentation layers.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub struct TurnOutcome {
    pub success: bool,
    pub coord: Option<Coord>,
    pub result: Option<AttackResult>,
    pub message: Option<String>,
    pub game_over: bool,
    pub winner: Option<Side>,
}

impl From<&Result<TurnReport, TurnError>> for TurnOutcome {
    fn from(turn: &Result<TurnReport, TurnError>) -> Self {
        match turn {
            Ok(report) => TurnOutcome {
                success: true,
                coord: Some(report.coord),
                result: Some(report.result),
                message: None,
                game_over: report.game_over,
                winner: report.winner,
            },
            Err(err) => TurnOutcome {
                success: false,
                coord: None,
                result: match err {
                    TurnError::IllegalAttack(res) => Some(*res),
                    _ => None,
                },
                message: Some(err.to_string()),
                game_over: matches!(err, TurnError::GameOver),
                winner: None,
            },
        }
    }
}

/// A full game between a human player and an automated opponent. The match
/// owns both players and the random source used for placement and for the
/// opponent's targeting.
pub struct Match<R = SmallRng> {
    human: Player,
    opponent: Player,
    active: Side,
    started: bool,
    winner: Option<Side>,
    turns: usize,
    rng: R,
}

impl Match<SmallRng> {
    /// Human versus computer with a reproducible random source.
    pub fn with_seed(seed: u64) -> Self {
        Self::new(SmallRng::seed_from_u64(seed))
    }
}

impl<R: Rng> Match<R> {
    /// Human versus computer, both boards empty, human to move.
    pub fn new(rng: R) -> Self {
        Self::with_players(Player::human(), Player::automated(), rng)
    }

    /// Seat two arbitrary players. `human` moves first; `opponent` must be
    /// automated for [`Match::opponent_turn`] to succeed.
    pub fn with_players(human: Player, opponent: Player, rng: R) -> Self {
        Self {
            human,
            opponent,
            active: Side::Human,
            started: false,
            winner: None,
            turns: 0,
            rng,
        }
    }

    pub fn human(&self) -> &Player {
        &self.human
    }

    pub fn opponent(&self) -> &Player {
        &self.opponent
    }

    pub fn player(&self, side: Side) -> &Player {
        match side {
            Side::Human => &self.human,
            Side::Opponent => &self.opponent,
        }
    }

    fn player_mut(&mut self, side: Side) -> &mut Player {
        match side {
            Side::Human => &mut self.human,
            Side::Opponent => &mut self.opponent,
        }
    }

    /// Side holding the turn. Once the match is over this is the side that
    /// fired the winning shot.
    pub fn active_player(&self) -> Side {
        self.active
    }

    pub fn is_over(&self) -> bool {
        self.winner.is_some()
    }

    pub fn winner(&self) -> Option<Side> {
        self.winner
    }

    /// Number of resolved turns so far.
    pub fn turn_count(&self) -> usize {
        self.turns
    }

    pub fn phase(&self) -> MatchPhase {
        if self.is_over() {
            MatchPhase::Over
        } else if !self.started
            && (self.human.board().fleet().is_empty() || self.opponent.board().fleet().is_empty())
        {
            MatchPhase::Setup
        } else {
            match self.active {
                Side::Human => MatchPhase::HumanTurn,
                Side::Opponent => MatchPhase::OpponentTurn,
            }
        }
    }

    fn ensure_placement_open(&self) -> Result<(), TurnError> {
        if self.started {
            Err(TurnError::PlacementClosed)
        } else {
            Ok(())
        }
    }

    fn place_standard_fleet(&mut self, side: Side) -> Result<(), TurnError> {
        self.ensure_placement_open()?;
        let player = match side {
            Side::Human => &mut self.human,
            Side::Opponent => &mut self.opponent,
        };
        if !player.board().fleet().is_empty() {
            return Err(TurnError::FleetAlreadyPlaced);
        }
        player
            .board_mut()
            .place_fleet(&mut self.rng, create_standard_fleet())?;
        info!("{:?} ships placed", side);
        Ok(())
    }

    /// Randomly place the standard fleet on the human board. Fails with
    /// `FleetAlreadyPlaced` if that board already carries ships.
    pub fn place_human_ships(&mut self) -> Result<(), TurnError> {
        self.place_standard_fleet(Side::Human)
    }

    /// Randomly place the standard fleet on the opponent board. Fails with
    /// `FleetAlreadyPlaced` if that board already carries ships.
    pub fn place_opponent_ships(&mut self) -> Result<(), TurnError> {
        self.place_standard_fleet(Side::Opponent)
    }

    /// Place a single ship by hand on the board of `side`.
    pub fn place_ship(
        &mut self,
        side: Side,
        ship: Ship,
        origin: Coord,
        orientation: Orientation,
    ) -> Result<ShipId, TurnError> {
        self.ensure_placement_open()?;
        let id = self
            .player_mut(side)
            .board_mut()
            .place_ship(ship, origin, orientation)?;
        Ok(id)
    }

    fn ensure_turn(&self, side: Side) -> Result<(), TurnError> {
        if self.is_over() {
            Err(TurnError::GameOver)
        } else if self.active != side {
            Err(TurnError::OutOfTurn)
        } else {
            Ok(())
        }
    }

    /// The human fires at `target` on the opponent board. Illegal targets
    /// fail without passing the turn.
    pub fn human_turn(&mut self, target: impl Into<Coord>) -> Result<TurnReport, TurnError> {
        self.ensure_turn(Side::Human)?;
        let coord = target.into();
        let result = self.human.attack(coord, self.opponent.board_mut());
        if !result.is_resolved() {
            debug!("human attack at {} rejected: {}", coord, result);
            return Err(TurnError::IllegalAttack(result));
        }
        Ok(self.finish_turn(Side::Human, coord, result))
    }

    /// The automated opponent picks and fires its attack on the human board.
    pub fn opponent_turn(&mut self) -> Result<TurnReport, TurnError> {
        self.ensure_turn(Side::Opponent)?;
        let (coord, result) = self
            .opponent
            .automated_attack(self.human.board_mut(), &mut self.rng)?;
        if !result.is_resolved() {
            return Err(TurnError::IllegalAttack(result));
        }
        Ok(self.finish_turn(Side::Opponent, coord, result))
    }

    fn finish_turn(&mut self, side: Side, coord: Coord, result: AttackResult) -> TurnReport {
        self.started = true;
        self.turns += 1;
        let defender = self.player(side.other()).board();
        let sunk_ship = match result {
            AttackResult::Sunk => defender.ship_at(coord).and_then(|(_, ship)| ship.name()),
            _ => None,
        };
        let game_over = defender.all_ships_sunk();
        if game_over {
            self.winner = Some(side);
            info!("match over after {} turns: {:?} wins", self.turns, side);
        } else {
            self.active = side.other();
        }
        TurnReport {
            side,
            coord,
            result,
            sunk_ship,
            game_over,
            winner: self.winner,
        }
    }
}
