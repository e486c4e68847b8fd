//! Embedded rules engine: tic-tac-toe.
//!
//! The default oracle wired by `main` and the integration tests. The board is
//! encoded as nine cells in row-major order (`X`, `O`, or `-`); moves are
//! squares in the form `a1`..`c3` (column letter, row digit). White plays `X`
//! and moves first.

use crate::domain::game::Side;
use crate::domain::oracle::{MoveVerdict, RulesOracle, TerminalOutcome, TerminalReport};
use crate::errors::domain::DomainError;

const EMPTY_BOARD: &str = "---------";

const LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8], // rows
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8], // columns
    [0, 4, 8],
    [2, 4, 6], // diagonals
];

#[derive(Debug, Clone, Copy, Default)]
pub struct TicTacToeOracle;

impl TicTacToeOracle {
    pub fn new() -> Self {
        Self
    }
}

impl RulesOracle for TicTacToeOracle {
    fn initial_position(&self) -> String {
        EMPTY_BOARD.to_string()
    }

    fn validate(&self, position: &str, notation: &str) -> Result<MoveVerdict, DomainError> {
        let mut board = parse_board(position)?;
        let idx = parse_square(notation)?;

        if board[idx] != b'-' {
            return Err(DomainError::illegal_move(format!(
                "square {notation} is already occupied"
            )));
        }

        let symbol = symbol_to_move(&board);
        board[idx] = symbol;

        let position = String::from_utf8(board.to_vec())
            .map_err(|_| DomainError::validation("board encoding is not valid UTF-8"))?;

        let terminal = if let Some(winner) = winning_side(&board) {
            Some(TerminalReport {
                outcome: TerminalOutcome::Decisive { winner },
                reason: "three in a row".to_string(),
            })
        } else if board.iter().all(|&cell| cell != b'-') {
            Some(TerminalReport {
                outcome: TerminalOutcome::Draw,
                reason: "board full".to_string(),
            })
        } else {
            None
        };

        Ok(MoveVerdict { position, terminal })
    }
}

fn parse_board(position: &str) -> Result<[u8; 9], DomainError> {
    let bytes = position.as_bytes();
    if bytes.len() != 9 || bytes.iter().any(|&c| !matches!(c, b'X' | b'O' | b'-')) {
        return Err(DomainError::validation(format!(
            "corrupt position encoding '{position}'"
        )));
    }
    let x = bytes.iter().filter(|&&c| c == b'X').count();
    let o = bytes.iter().filter(|&&c| c == b'O').count();
    if x != o && x != o + 1 {
        return Err(DomainError::validation(format!(
            "corrupt position encoding '{position}': inconsistent piece counts"
        )));
    }
    let mut board = [0u8; 9];
    board.copy_from_slice(bytes);
    Ok(board)
}

fn parse_square(notation: &str) -> Result<usize, DomainError> {
    let bytes = notation.as_bytes();
    if bytes.len() == 2 {
        let col = bytes[0];
        let row = bytes[1];
        if (b'a'..=b'c').contains(&col) && (b'1'..=b'3').contains(&row) {
            return Ok((row - b'1') as usize * 3 + (col - b'a') as usize);
        }
    }
    Err(DomainError::illegal_move(format!(
        "unrecognized square '{notation}' (expected a1..c3)"
    )))
}

fn symbol_to_move(board: &[u8; 9]) -> u8 {
    let x = board.iter().filter(|&&c| c == b'X').count();
    let o = board.iter().filter(|&&c| c == b'O').count();
    if x == o {
        b'X'
    } else {
        b'O'
    }
}

fn winning_side(board: &[u8; 9]) -> Option<Side> {
    for line in &LINES {
        let [a, b, c] = *line;
        if board[a] != b'-' && board[a] == board[b] && board[b] == board[c] {
            return Some(if board[a] == b'X' {
                Side::White
            } else {
                Side::Black
            });
        }
    }
    None
}
