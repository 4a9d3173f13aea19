use std::io::{self, Write};
use std::sync::Arc;

use tokio::io::{AsyncBufReadExt, AsyncRead, BufReader, Lines, Stdin};
use tokio::sync::Mutex;

use crate::{
    common::{Coord, MoveError, Player},
    config::{BOARD_SIZE, CELL_COUNT},
    engine::MoveReport,
    state::MatchState,
    ui,
};

use super::Participant;

/// Line reader shared by the participants sitting at one terminal.
pub type SharedInput<R> = Arc<Mutex<Lines<BufReader<R>>>>;

/// Human player typing moves at a terminal.
pub struct CliParticipant<R> {
    seat: Player,
    input: SharedInput<R>,
}

impl CliParticipant<Stdin> {
    /// Blue and Red taking turns at this process's stdin.
    pub fn hot_seat_stdin() -> (Self, Self) {
        Self::hot_seat(tokio::io::stdin())
    }
}

impl<R: AsyncRead + Unpin + Send> CliParticipant<R> {
    pub fn new(seat: Player, input: SharedInput<R>) -> Self {
        Self { seat, input }
    }

    /// Two participants reading alternately from `reader`.
    pub fn hot_seat(reader: R) -> (Self, Self) {
        let input = Arc::new(Mutex::new(BufReader::new(reader).lines()));
        (
            Self::new(Player::Blue, input.clone()),
            Self::new(Player::Red, input),
        )
    }
}

fn coord_to_string(r: usize, c: usize) -> String {
    let col = (b'A' + c as u8) as char;
    format!("{}{}", col, r + 1)
}

/// Parse `B4` style coordinates (column letter, row number) or a cell
/// number 1–36 counted row by row.
pub fn parse_coord(input: &str) -> Result<Coord, String> {
    let input = input.trim();
    if input.is_empty() {
        return Err("Empty input".to_string());
    }
    if let Ok(n) = input.parse::<usize>() {
        if n == 0 || n > CELL_COUNT {
            return Err(format!("Cell {} out of bounds - must be 1-{}", n, CELL_COUNT));
        }
        return Ok(((n - 1) / BOARD_SIZE, (n - 1) % BOARD_SIZE));
    }
    if input.len() < 2 {
        return Err("Too short - need column letter and row number (e.g., B4)".to_string());
    }
    let mut chars = input.chars();
    let col_ch = chars.next().ok_or("No column letter")?.to_ascii_uppercase();
    if !col_ch.is_ascii_alphabetic() {
        return Err(format!("Invalid column '{}' - must be a letter A-F", col_ch));
    }
    let col = (col_ch as u8).wrapping_sub(b'A') as usize;
    if col >= BOARD_SIZE {
        return Err(format!("Column '{}' out of bounds - must be A-F", col_ch));
    }
    let row_str: String = chars.collect();
    let row: usize = row_str
        .trim()
        .parse()
        .map_err(|_| format!("Invalid row '{}' - must be a number 1-6", row_str))?;
    if row == 0 || row > BOARD_SIZE {
        return Err(format!("Row {} out of bounds - must be 1-6", row));
    }
    Ok((row - 1, col))
}

fn print_help() {
    println!("  • Enter a cell as column letter + row number (e.g., B4)");
    println!("  • or as a cell number 1-36, counted left to right, top to bottom");
    println!("  • The letter you place is chosen for you; it alternates every move");
    println!("  • Complete S-O-S to score and move again");
    println!("  • Type 'quit' to leave the match");
}

#[async_trait::async_trait]
impl<R: AsyncRead + Unpin + Send> Participant for CliParticipant<R> {
    async fn select_move(&mut self, view: &MatchState) -> anyhow::Result<Option<Coord>> {
        println!("{}", ui::render(view));
        loop {
            print!(
                "{} places {} ({}s left) > ",
                self.seat,
                view.current_letter(),
                view.timer()
            );
            io::stdout().flush()?;

            let line = {
                let mut input = self.input.lock().await;
                input.next_line().await?
            };
            let Some(line) = line else {
                return Ok(None);
            };
            let line = line.trim();
            if line.eq_ignore_ascii_case("quit") || line.eq_ignore_ascii_case("q") {
                return Ok(None);
            }
            if line.eq_ignore_ascii_case("help") {
                print_help();
                continue;
            }
            match parse_coord(line) {
                Ok(coord) => return Ok(Some(coord)),
                Err(e) => println!("✗ {}", e),
            }
        }
    }

    fn handle_move(&mut self, report: &MoveReport) {
        // Hot-seat players share a screen; each announces the other side.
        if report.player == self.seat {
            return;
        }
        let (r, c) = report.coord;
        println!(
            "{} placed {} at {}",
            report.player,
            report.letter,
            coord_to_string(r, c)
        );
        for line in &report.new_lines {
            println!(
                "  ✓ {} scored {}-{}",
                report.player,
                coord_to_string(line.start.0, line.start.1),
                coord_to_string(line.end.0, line.end.1)
            );
        }
    }

    fn handle_rejected(&mut self, (r, c): Coord, err: MoveError) {
        println!("✗ {} refused: {}", coord_to_string(r, c), err);
    }

    fn handle_timeout(&mut self, view: &MatchState) {
        println!(
            "\n⏰ {} ran out of time. {} to move.",
            self.seat,
            view.current_player()
        );
    }
}
