#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use tictactoe::{init_logging, run_session, GameEngine, RULES};

#[cfg(feature = "std")]
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[cfg(feature = "std")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
#[cfg(feature = "std")]
enum Commands {
    /// Play against the computer in the terminal.
    Play {
        #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
        seed: Option<u64>,
    },
    /// Print the rules and exit.
    Rules,
}

#[cfg(feature = "std")]
fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    match cli.command.unwrap_or(Commands::Play { seed: None }) {
        Commands::Play { seed } => {
            let mut engine = match seed {
                Some(s) => {
                    println!("Using fixed seed: {} (game will be reproducible)", s);
                    GameEngine::with_seed(s)
                }
                None => GameEngine::new(),
            };
            let stdin = std::io::stdin();
            run_session(&mut engine, stdin.lock(), std::io::stdout())?;
        }
        Commands::Rules => println!("{}", RULES),
    }
    Ok(())
}
