#![cfg(feature = "std")]

use std::fmt::Write;

use crate::{
    common::{Cell, Letter, Player},
    config::BOARD_SIZE,
    lines::Line,
    state::{MatchState, Outcome},
};

/// Text shown when the match is over.
pub fn outcome_message(outcome: Outcome) -> &'static str {
    match outcome {
        Outcome::Winner(Player::Blue) => "Blue Player wins!",
        Outcome::Winner(Player::Red) => "Red Player wins!",
        Outcome::Tie => "It's a tie!",
    }
}

fn describe_line(line: &Line) -> String {
    let name = |(r, c): (usize, usize)| format!("{}{}", (b'A' + c as u8) as char, r + 1);
    format!(
        "{}-{} ({:?}, {})",
        name(line.start),
        name(line.end),
        line.orientation,
        line.owner
    )
}

/// Render a snapshot: scores, grid, completed lines and the turn status.
pub fn render(state: &MatchState) -> String {
    let mut out = String::new();
    let scores = state.scores();
    let _ = writeln!(out, "    Blue: {}   VS   Red: {}", scores.blue, scores.red);
    let _ = writeln!(out, "    ╔═══════════════╗");
    let _ = write!(out, "    ║  ");
    for c in 0..BOARD_SIZE {
        let _ = write!(out, " {}", (b'A' + c as u8) as char);
    }
    let _ = writeln!(out, " ║");
    let _ = writeln!(out, "    ╠═══════════════╣");
    for r in 0..BOARD_SIZE {
        let _ = write!(out, "    ║ {}", r + 1);
        for c in 0..BOARD_SIZE {
            let ch = state
                .cell(r, c)
                .and_then(Cell::letter)
                .map_or('.', Letter::as_char);
            let _ = write!(out, " {}", ch);
        }
        let _ = writeln!(out, " ║");
    }
    let _ = writeln!(out, "    ╚═══════════════╝");

    if !state.lines().is_empty() {
        let _ = writeln!(out, "    Lines:");
        for line in state.lines() {
            let _ = writeln!(out, "      {}", describe_line(line));
        }
    }

    match state.outcome() {
        Some(outcome) => {
            let _ = write!(out, "    Game Over! {}", outcome_message(outcome));
        }
        None => {
            let _ = write!(
                out,
                "    {} to place {} ({}s)",
                state.current_player(),
                state.current_letter(),
                state.timer()
            );
        }
    }
    out
}
