#[cfg(feature = "std")]
#[cfg(test)]
mod cli_tests {
    use std::io::Cursor;
    use tictactoe::{parse_command, run_session, Command, GameEngine, Mark, RULES};

    fn run(engine: &mut GameEngine, script: &str) -> String {
        let mut out = Vec::new();
        run_session(engine, Cursor::new(script.to_string()), &mut out).unwrap();
        String::from_utf8(out).expect("non utf8 output")
    }

    #[test]
    fn test_parse_commands() {
        assert_eq!(parse_command("5"), Some(Command::Play(4)));
        assert_eq!(parse_command(" 1 \n"), Some(Command::Play(0)));
        assert_eq!(parse_command("U"), Some(Command::Undo));
        assert_eq!(parse_command("restart"), Some(Command::Restart));
        assert_eq!(parse_command("s"), Some(Command::Score));
        assert_eq!(parse_command("?"), Some(Command::Rules));
        assert_eq!(parse_command("Quit"), Some(Command::Quit));
        assert_eq!(parse_command("0"), None);
        assert_eq!(parse_command("10"), None);
        assert_eq!(parse_command("xyz"), None);
    }

    #[test]
    fn test_session_plays_and_undoes() {
        let mut engine = GameEngine::with_seed(21);
        let out = run(&mut engine, "5\nu\nq\n");
        assert!(out.contains("Computer plays"));
        assert!(out.contains("Thanks for playing!"));
        assert!(engine.history().is_empty());
        assert_eq!(engine.current_player(), Mark::X);
    }

    #[test]
    fn test_session_reports_bad_input() {
        let mut engine = GameEngine::with_seed(22);
        let out = run(&mut engine, "5\n5\nhello\nu\nu\n");
        assert!(out.contains("Cell 5 is already taken."));
        assert!(out.contains("Unrecognised input: hello"));
        assert!(out.contains("Nothing to undo."));
    }

    #[test]
    fn test_session_shows_rules_and_score() {
        let mut engine = GameEngine::with_seed(23);
        let out = run(&mut engine, "rules\ns\n");
        assert!(out.contains(RULES));
        assert!(out.contains("Score - X: 0  O: 0  Ties: 0"));
    }

    #[test]
    fn test_session_finishes_game_and_restarts() {
        let mut engine = GameEngine::with_seed(24);
        engine.place_move(0, Mark::X);
        engine.place_move(1, Mark::X);
        engine.place_move(4, Mark::O);
        let out = run(&mut engine, "3\n9\nr\n");
        assert!(out.contains("X won!"));
        assert!(out.contains("The game is over."));
        assert!(!engine.is_game_over());
        assert_eq!(engine.scoreboard().x_wins, 1);
    }
}
