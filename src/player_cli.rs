#![cfg(feature = "std")]

//! Terminal front-end: renders the engine's board and forwards commands.

use std::io::{BufRead, Write};

use crate::{config::RULES, game::GameEngine, scoreboard::Scoreboard};

/// A single line of player input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Play the cell with this 0-based index.
    Play(usize),
    Undo,
    Restart,
    Score,
    Rules,
    Quit,
}

/// Parse one input line. Cells are entered 1-based, as printed on the board.
pub fn parse_command(input: &str) -> Option<Command> {
    let input = input.trim().to_ascii_lowercase();
    let cmd = match input.as_str() {
        "u" | "undo" => Command::Undo,
        "r" | "restart" => Command::Restart,
        "s" | "score" => Command::Score,
        "?" | "h" | "help" | "rules" => Command::Rules,
        "q" | "quit" | "exit" => Command::Quit,
        other => {
            let n: usize = other.parse().ok()?;
            if !(1..=9).contains(&n) {
                return None;
            }
            Command::Play(n - 1)
        }
    };
    Some(cmd)
}

fn write_score<W: Write>(out: &mut W, score: &Scoreboard) -> std::io::Result<()> {
    writeln!(
        out,
        "Score - X: {}  O: {}  Ties: {}",
        score.x_wins, score.o_wins, score.ties
    )
}

/// Print the board, the side to move and, once finished, the result.
pub fn print_game<W: Write>(out: &mut W, engine: &GameEngine) -> std::io::Result<()> {
    writeln!(out)?;
    write!(out, "{}", engine.board())?;
    writeln!(out)?;
    match engine.result_message() {
        Some(msg) => {
            writeln!(out, "{}", msg)?;
            writeln!(out, "Type 'r' to play again or 'q' to quit.")?;
        }
        None => writeln!(out, "Your move ({}), 1-9:", engine.current_player())?,
    }
    Ok(())
}

/// Drive an interactive game until the player quits or input ends. Returns
/// the final session score.
pub fn run_session<R: BufRead, W: Write>(
    engine: &mut GameEngine,
    input: R,
    mut out: W,
) -> anyhow::Result<Scoreboard> {
    writeln!(out, "Tic-Tac-Toe: you are X. Commands: 1-9, u(ndo), r(estart), s(core), ?, q(uit)")?;
    print_game(&mut out, engine)?;

    for line in input.lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        match parse_command(&line) {
            Some(Command::Play(index)) => match engine.handle_cell_click(index) {
                Some(turn) => {
                    if let Some(reply) = turn.computer {
                        writeln!(out, "Computer plays {}", reply + 1)?;
                    }
                    if turn.outcome.is_over() {
                        write_score(&mut out, engine.scoreboard())?;
                    }
                }
                None if engine.is_game_over() => {
                    writeln!(out, "The game is over. Type 'r' to restart.")?;
                    continue;
                }
                None => {
                    writeln!(out, "Cell {} is already taken.", index + 1)?;
                    continue;
                }
            },
            Some(Command::Undo) => {
                let before = engine.history().len();
                engine.undo();
                if engine.history().len() == before {
                    writeln!(out, "Nothing to undo.")?;
                    continue;
                }
            }
            Some(Command::Restart) => engine.restart(),
            Some(Command::Score) => {
                write_score(&mut out, engine.scoreboard())?;
                continue;
            }
            Some(Command::Rules) => {
                writeln!(out, "{}", RULES)?;
                continue;
            }
            Some(Command::Quit) => break,
            None => {
                writeln!(out, "Unrecognised input: {}", line.trim())?;
                continue;
            }
        }
        print_game(&mut out, engine)?;
    }

    writeln!(out, "Thanks for playing!")?;
    write_score(&mut out, engine.scoreboard())?;
    out.flush()?;
    Ok(*engine.scoreboard())
}
