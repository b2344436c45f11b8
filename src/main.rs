use std::io::{self, BufRead, Write};

use battleship_engine::{
    cli::{describe_turn, parse_coord, render_board, render_match},
    init_logging, Match, MatchPhase, Side, TurnError,
};

use clap::Parser;
use rand::rngs::SmallRng;
use rand::SeedableRng;

#[derive(Parser)]
#[command(author, version, about = "Play Battleship against the computer", long_about = None)]
struct Cli {
    #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
    seed: Option<u64>,
    #[arg(long, help = "Show the computer's ships while playing")]
    reveal: bool,
}

fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    if let Some(s) = cli.seed {
        println!("Using fixed seed: {} (game will be reproducible)", s);
    }
    let rng = if let Some(s) = cli.seed {
        SmallRng::seed_from_u64(s)
    } else {
        let mut seed_rng = rand::rng();
        SmallRng::from_rng(&mut seed_rng)
    };

    let mut game = Match::new(rng);
    game.place_human_ships()?;
    game.place_opponent_ships()?;

    println!("=== BATTLESHIP ===");
    println!("Enter targets like B7. Type 'q' to quit.\n");

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    while !game.is_over() {
        match game.phase() {
            MatchPhase::HumanTurn | MatchPhase::Setup => {
                println!("{}", render_match(&game, cli.reveal));
                print!("Your target> ");
                io::stdout().flush()?;
                let Some(line) = lines.next() else {
                    return Ok(());
                };
                let line = line?;
                if line.trim().eq_ignore_ascii_case("q") {
                    println!("Bye.");
                    return Ok(());
                }
                let Some(coord) = parse_coord(&line) else {
                    println!("Could not read '{}', try something like B7.", line.trim());
                    continue;
                };
                match game.human_turn(coord) {
                    Ok(report) => println!("{}", describe_turn(&report)),
                    Err(e @ TurnError::IllegalAttack(_)) => {
                        println!("{}. Try again.", e);
                        continue;
                    }
                    Err(e) => return Err(e.into()),
                }
            }
            MatchPhase::OpponentTurn => {
                let report = game.opponent_turn()?;
                println!("{}", describe_turn(&report));
            }
            MatchPhase::Over => break,
        }
    }

    println!("\n=== GAME OVER ===");
    println!("Opponent board:\n{}", render_board(game.opponent().board(), true));
    println!("Your board:\n{}", render_board(game.human().board(), true));
    match game.winner() {
        Some(Side::Human) => println!("VICTORY! You have sunk all enemy ships!"),
        Some(Side::Opponent) => println!("DEFEAT. All your ships have been destroyed."),
        None => {}
    }
    Ok(())
}
