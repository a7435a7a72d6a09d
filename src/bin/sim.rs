use clap::{Parser, ValueEnum};
use rand::{rngs::SmallRng, SeedableRng};
use serde_json::json;
use tictactoe::{init_logging, AiPlayer, GameEngine, Player, RandomPlayer, HUMAN};

#[derive(ValueEnum, Clone, Copy, Debug)]
enum Strategy {
    Random,
    Heuristic,
}

/// Play batches of games against the engine's heuristic and report the score.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[arg(long, default_value_t = 100)]
    games: u32,
    #[arg(long, help = "Fix RNG seed for reproducible runs (e.g., --seed 12345)")]
    seed: Option<u64>,
    #[arg(long, value_enum, default_value_t = Strategy::Random)]
    x_strategy: Strategy,
}

fn main() -> anyhow::Result<()> {
    init_logging();
    let args = Args::parse();

    let (mut engine, mut rng) = match args.seed {
        Some(s) => (GameEngine::with_seed(s), SmallRng::seed_from_u64(s.wrapping_add(1))),
        None => {
            let mut seed_rng = rand::rng();
            (GameEngine::new(), SmallRng::from_rng(&mut seed_rng))
        }
    };
    let mut x: Box<dyn Player> = match args.x_strategy {
        Strategy::Random => Box::new(RandomPlayer::new()),
        Strategy::Heuristic => Box::new(AiPlayer::new()),
    };

    for _ in 0..args.games {
        engine.restart();
        while !engine.is_game_over() {
            let index = x
                .select_move(&mut rng, engine.board(), HUMAN)
                .ok_or_else(|| anyhow::anyhow!("no move available on a running game"))?;
            if engine.handle_cell_click(index).is_none() {
                anyhow::bail!("engine rejected move {}", index);
            }
        }
    }

    let score = engine.scoreboard();
    let result = json!({
        "games": args.games,
        "x_strategy": x.name(),
        "x_wins": score.x_wins,
        "o_wins": score.o_wins,
        "ties": score.ties,
    });
    println!("{}", serde_json::to_string(&result)?);
    Ok(())
}
