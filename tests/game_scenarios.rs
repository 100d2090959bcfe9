//! End-to-end games played through the console collaborators.

use std::io::Cursor;

use four_in_a_row::config::AppConfig;
use four_in_a_row::controller::Controller;
use four_in_a_row::game::{is_winner, resolve, Board, Cell, GameStatus, MoveError, Player};
use four_in_a_row::input::LineInput;
use four_in_a_row::render::{Symbols, TextRenderer};

/// Play a full game from a script of input lines, returning the final status
/// and everything written to the console.
fn play_script(script: &str, config: &AppConfig) -> (GameStatus, Board, String) {
    let input = LineInput::new(Cursor::new(script.to_string()));
    let renderer = TextRenderer::new(Vec::new(), config.symbols, config.quit_token.clone());
    let mut controller = Controller::new(input, renderer, config);

    let status = controller.run().expect("in-memory I/O does not fail");
    let (state, _, renderer) = controller.into_parts();
    let output = String::from_utf8(renderer.into_inner()).unwrap();
    (status, *state.board(), output)
}

fn lines(labels: &[u8]) -> String {
    labels.iter().map(|label| format!("{label}\n")).collect()
}

#[test]
fn test_vertical_win_in_first_column() {
    let mut board = Board::new();
    for _ in 0..4 {
        let row = resolve(&board, 0).unwrap();
        board.set(0, row, Cell::X);
    }

    for row in [5, 4, 3, 2] {
        assert_eq!(board.get(0, row), Cell::X);
    }
    assert!(is_winner(Player::X, &board));
}

#[test]
fn test_horizontal_win_on_bottom_row() {
    let mut board = Board::new();
    for col in 0..4 {
        board.set(col, 5, Cell::X);
    }
    assert!(is_winner(Player::X, &board));
    assert!(!is_winner(Player::O, &board));
}

#[test]
fn test_rising_diagonal_win() {
    let mut board = Board::new();
    for (col, row) in [(0, 5), (1, 4), (2, 3), (3, 2)] {
        board.set(col, row, Cell::O);
    }
    assert!(is_winner(Player::O, &board));
}

#[test]
fn test_label_past_last_column() {
    let board = Board::new();
    assert_eq!(resolve(&board, 7), Err(MoveError::ColumnOutOfRange));

    let (status, board, output) = play_script("8\nquit\n", &AppConfig::default());
    assert_eq!(status, GameStatus::Quit);
    assert_eq!(board, Board::new());
    assert!(output.contains("Enter a number from 1 to 7."));
    assert_eq!(output.matches("Player X, enter 1 to 7").count(), 2);
    assert!(!output.contains("Player O"));
    assert!(output.ends_with("Thanks for playing!\n"));
}

#[test]
fn test_console_game_won_by_x() {
    let script = lines(&[4, 4, 5, 5, 6, 6, 7]);
    let (status, board, output) = play_script(&script, &AppConfig::default());

    assert_eq!(status, GameStatus::Won(Player::X));
    assert_eq!(board.get(6, 5), Cell::X);
    assert!(output.starts_with("Four-in-a-Row,"));
    assert!(output.contains("|...XXXX|"));
    assert!(output.contains("|...OOO.|"));
    assert!(output.ends_with("Player X has won!\n"));
}

#[test]
fn test_console_game_ends_in_tie() {
    let script = lines(&[
        4, 5, 5, 7, 1, 4, 6, 3, 7, 6, 1, 7, 6, 1, 4, 7, 6, 7, 2, 4, 2, 4, 7, 6, 3, 1, 6, 4, 5, 5,
        1, 2, 2, 2, 1, 2, 5, 3, 5, 3, 3, 3,
    ]);
    let (status, board, output) = play_script(&script, &AppConfig::default());

    assert_eq!(status, GameStatus::Tied);
    assert!(board.is_full());
    assert!(!is_winner(Player::X, &board));
    assert!(!is_winner(Player::O, &board));
    assert!(output.ends_with("It's a tie!\n"));
}

#[test]
fn test_console_game_with_custom_config() {
    let config = AppConfig {
        quit_token: "exit".to_string(),
        show_intro: false,
        symbols: Symbols {
            empty: '-',
            player_x: 'R',
            player_o: 'Y',
        },
    };
    let (status, _, output) = play_script("1\nEXIT\n", &config);

    assert_eq!(status, GameStatus::Quit);
    assert!(!output.contains("Four-in-a-Row,"));
    assert!(output.contains("|R------|"));
    assert!(output.contains("Player Y, enter 1 to 7 or 'exit' to quit:"));
}

#[test]
fn test_full_column_then_other_column() {
    let script = "1\n1\n1\n1\n1\n1\n1\n2\nquit\n";
    let (status, board, output) = play_script(script, &AppConfig::default());

    assert_eq!(status, GameStatus::Quit);
    assert!(output.contains("That column is full, choose another one."));
    // X's rejected seventh drop is retried in column 2
    assert_eq!(board.get(1, 5), Cell::X);
}

#[test]
fn test_padded_labels_are_not_moves() {
    let (status, board, output) = play_script("01\n+3\nquit\n", &AppConfig::default());

    assert_eq!(status, GameStatus::Quit);
    assert_eq!(board, Board::new());
    assert_eq!(output.matches("Enter a number from 1 to 7.").count(), 2);
    assert_eq!(output.matches("Player X, enter 1 to 7").count(), 3);
    assert!(!output.contains("Player O"));
}
