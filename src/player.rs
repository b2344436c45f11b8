use log::error;
use rand::Rng;

use crate::{
    ai::HuntTarget,
    board::Board,
    common::{AttackResult, Coord, TurnError},
};

/// One side of a match: its own board and, when computer controlled, the
/// hunt/target state it uses to choose attacks.
#[derive(Debug, Clone)]
pub struct Player {
    board: Board,
    targeting: Option<HuntTarget>,
}

impl Player {
    /// A player whose attacks are chosen externally.
    pub fn human() -> Self {
        Self {
            board: Board::new(),
            targeting: None,
        }
    }

    /// A computer player that picks its own attacks.
    pub fn automated() -> Self {
        Self {
            board: Board::new(),
            targeting: Some(HuntTarget::new()),
        }
    }

    pub fn is_automated(&self) -> bool {
        self.targeting.is_some()
    }

    /// The player's own board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Mutable access to the player's board, for placement and for
    /// receiving the opponent's attacks.
    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    /// Hunt/target state, present only for automated players.
    pub fn targeting(&self) -> Option<&HuntTarget> {
        self.targeting.as_ref()
    }

    /// Fire at `coord` on the enemy board.
    pub fn attack(&self, coord: Coord, enemy: &mut Board) -> AttackResult {
        enemy.receive_attack(coord)
    }

    /// Let the automated player choose a target, fire at it and learn from
    /// the result. Human players get `TurnError::NotAutomated`.
    pub fn automated_attack<R: Rng + ?Sized>(
        &mut self,
        enemy: &mut Board,
        rng: &mut R,
    ) -> Result<(Coord, AttackResult), TurnError> {
        let Some(targeting) = self.targeting.as_mut() else {
            error!("automated attack requested for a human-controlled player");
            return Err(TurnError::NotAutomated);
        };
        let coord = targeting
            .select_target(enemy, rng)
            .ok_or(TurnError::NoLegalTarget)?;
        let result = enemy.receive_attack(coord);
        targeting.record_result(coord, result, enemy);
        Ok((coord, result))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    #[test]
    fn attack_forwards_to_enemy_board() {
        let player = Player::human();
        let mut enemy = Board::new();
        assert_eq!(player.attack(Coord::new(5, 5), &mut enemy), AttackResult::Miss);
        assert!(enemy.attacked_cells().contains(Coord::new(5, 5)));
    }

    #[test]
    fn human_players_carry_no_targeting_state() {
        let player = Player::human();
        assert!(!player.is_automated());
        assert!(player.targeting().is_none());
        assert!(Player::automated().targeting().is_some());
    }

    #[test]
    fn automated_attack_on_exhausted_board() {
        let mut player = Player::automated();
        let mut enemy = Board::new();
        for coord in Coord::all() {
            enemy.receive_attack(coord);
        }
        let mut rng = SmallRng::seed_from_u64(11);
        assert_eq!(
            player.automated_attack(&mut enemy, &mut rng),
            Err(TurnError::NoLegalTarget)
        );
        assert_eq!(player.targeting().unwrap().fallback_scans(), 1);
    }
}
