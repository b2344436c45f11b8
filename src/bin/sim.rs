use battleship_engine::{init_logging, HuntTarget, Match, MatchPhase, Player, Side};
use rand::{rngs::SmallRng, SeedableRng};
use serde_json::json;

/// Each side fires at most once per cell, so a match cannot outlast this.
const MAX_TURNS: usize = 200;

fn summary(player: &Player) -> serde_json::Value {
    let board = player.board();
    json!({
        "shots_taken": board.attacked_cells().len(),
        "misses_taken": board.missed_cells().len(),
        "ships_remaining": board.remaining_ships(),
    })
}

fn main() -> anyhow::Result<()> {
    init_logging();
    let args: Vec<String> = std::env::args().collect();
    if args.len() != 2 {
        eprintln!("Usage: {} <seed>", args[0]);
        std::process::exit(1);
    }
    let seed: u64 = args[1].parse()?;

    let mut game = Match::with_seed(seed);
    game.place_human_ships()?;
    game.place_opponent_ships()?;

    // The human seat is driven by its own hunt/target state and generator.
    let mut brain = HuntTarget::new();
    let mut rng = SmallRng::seed_from_u64(seed.wrapping_add(1));

    while !game.is_over() {
        if game.turn_count() > MAX_TURNS {
            anyhow::bail!("match did not finish within {} turns", MAX_TURNS);
        }
        match game.phase() {
            MatchPhase::HumanTurn | MatchPhase::Setup => {
                let coord = brain
                    .select_target(game.opponent().board(), &mut rng)
                    .ok_or_else(|| anyhow::anyhow!("no legal target left"))?;
                let report = game.human_turn(coord)?;
                brain.record_result(coord, report.result, game.opponent().board());
            }
            MatchPhase::OpponentTurn => {
                game.opponent_turn()?;
            }
            MatchPhase::Over => break,
        }
    }

    let winner = game.winner().map(|side| match side {
        Side::Human => "human",
        Side::Opponent => "opponent",
    });
    let result = json!({
        "seed": seed,
        "turns": game.turn_count(),
        "winner": winner,
        "human": summary(game.human()),
        "opponent": summary(game.opponent()),
    });

    println!("{}", serde_json::to_string(&result)?);
    Ok(())
}
