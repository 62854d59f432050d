#![cfg(feature = "std")]

use std::io::{BufRead, Write};
use std::path::PathBuf;
use std::thread;
use std::time::Duration;

use crate::core::{
    board::{Mark, Pos},
    config::{GameMode, COMPUTER_MARK},
    game::{GameEngine, GameSnapshot, GameStatus, MoveOutcome, Outcome},
    GameError,
};
use crate::settings::{Settings, Theme};

/// One line of user input, decoded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Move(Pos),
    Undo,
    Reset,
    NewMatch,
    Hint,
    Help,
    Quit,
}

/// Interactive terminal match: draws the board, reads commands and drives
/// the computer's replies.
pub struct CliSession {
    engine: GameEngine,
    settings: Settings,
    save_to: Option<PathBuf>,
    reply_delay: Duration,
}

pub fn coord_to_string(pos: Pos) -> String {
    let col = (b'A' + pos.col as u8) as char;
    format!("{}{}", col, pos.row + 1)
}

/// Parse `A5`-style coordinates for a `board_size` board.
pub fn parse_coord(input: &str, board_size: usize) -> Result<Pos, String> {
    let last_col = (b'A' + board_size as u8 - 1) as char;
    if input.is_empty() {
        return Err("Empty input".to_string());
    }
    if input.len() < 2 {
        return Err("Too short - need column letter and row number (e.g., A1)".to_string());
    }
    let mut chars = input.chars();
    let col_ch = chars.next().ok_or("No column letter")?.to_ascii_uppercase();
    if !col_ch.is_ascii_alphabetic() {
        return Err(format!("Invalid column '{}' - must be a letter A-{}", col_ch, last_col));
    }
    let col = (col_ch as u8).wrapping_sub(b'A') as usize;
    if col >= board_size {
        return Err(format!("Column '{}' out of bounds - must be A-{}", col_ch, last_col));
    }
    let row_str: String = chars.collect();
    let row: usize = row_str
        .parse()
        .map_err(|_| format!("Invalid row '{}' - must be a number 1-{}", row_str, board_size))?;
    if row == 0 || row > board_size {
        return Err(format!("Row {} out of bounds - must be 1-{}", row, board_size));
    }
    Ok(Pos::new(row - 1, col))
}

/// Decode a command line. On a 3×3 board a single digit 1-9 picks a cell in
/// row-major order.
pub fn parse_command(input: &str, board_size: usize) -> Result<Command, String> {
    let line = input.trim();
    match line.to_ascii_lowercase().as_str() {
        "u" | "undo" => return Ok(Command::Undo),
        "r" | "reset" => return Ok(Command::Reset),
        "n" | "new" => return Ok(Command::NewMatch),
        "h" | "hint" => return Ok(Command::Hint),
        "q" | "quit" | "exit" => return Ok(Command::Quit),
        "help" | "?" => return Ok(Command::Help),
        _ => {}
    }
    if board_size == 3 && line.len() == 1 {
        if let Some(d) = line.chars().next().and_then(|c| c.to_digit(10)) {
            if (1..=9).contains(&d) {
                let idx = d as usize - 1;
                return Ok(Command::Move(Pos::new(idx / 3, idx % 3)));
            }
        }
    }
    parse_coord(line, board_size).map(Command::Move)
}

impl CliSession {
    /// `save_to` is where the settings get written when the player quits.
    pub fn new(
        engine: GameEngine,
        settings: Settings,
        save_to: Option<PathBuf>,
        reply_delay: Duration,
    ) -> Self {
        Self {
            engine,
            settings,
            save_to,
            reply_delay,
        }
    }

    pub fn engine(&self) -> &GameEngine {
        &self.engine
    }

    /// Play until the user quits or input runs out.
    pub fn run<R: BufRead, W: Write>(&mut self, input: &mut R, out: &mut W) -> anyhow::Result<()> {
        if !self.engine.is_active() {
            self.engine.reset();
        }
        print_banner(out, &self.engine)?;
        loop {
            let snapshot = self.engine.current_state();
            print_board(out, &snapshot, self.settings.theme)?;

            if snapshot.reply_pending {
                writeln!(out, "Computer is thinking...")?;
                out.flush()?;
                thread::sleep(self.reply_delay);
                match self.engine.play_opponent_turn() {
                    Ok(outcome) => {
                        if let Some(last) = self.engine.history().last() {
                            writeln!(out, "Computer plays {}", coord_to_string(last.pos))?;
                        }
                        self.report(out, &outcome)?;
                    }
                    Err(e) => writeln!(out, "✗ {}", e)?,
                }
                continue;
            }

            match &snapshot.status {
                GameStatus::Finished(_) => {
                    write!(out, "Match over. [r]eset, [n]ew match, [u]ndo or [q]uit: ")?
                }
                _ => write!(
                    out,
                    "{} to move (e.g. A1, or u/r/n/h/q/help): ",
                    snapshot.current_player
                )?,
            }
            out.flush()?;

            let mut line = String::new();
            if input.read_line(&mut line)? == 0 {
                writeln!(out)?;
                return self.quit(out);
            }
            let command = match parse_command(&line, self.engine.board().size()) {
                Ok(command) => command,
                Err(e) => {
                    writeln!(out, "✗ Invalid input: {}", e)?;
                    continue;
                }
            };

            match command {
                Command::Move(pos) => match self.engine.submit_move(pos.row, pos.col) {
                    Ok(outcome) => self.report(out, &outcome)?,
                    Err(e) => writeln!(out, "✗ {}", describe_error(&e))?,
                },
                Command::Undo => match self.engine.undo() {
                    Ok(()) => writeln!(out, "↶ Move taken back")?,
                    Err(e) => writeln!(out, "✗ {}", describe_error(&e))?,
                },
                Command::Reset => {
                    self.engine.reset();
                    writeln!(out, "Board cleared, score kept.")?;
                }
                Command::NewMatch => {
                    self.engine.new_match();
                    writeln!(out, "New match, score cleared.")?;
                }
                Command::Hint => match self.engine.hint() {
                    Ok(Some(pos)) => writeln!(out, "💡 Suggestion: {}", coord_to_string(pos))?,
                    Ok(None) => writeln!(out, "No move left to suggest.")?,
                    Err(e) => writeln!(out, "✗ {}", describe_error(&e))?,
                },
                Command::Help => print_help(out, self.engine.board().size())?,
                Command::Quit => return self.quit(out),
            }
        }
    }

    fn report<W: Write>(&self, out: &mut W, outcome: &MoveOutcome) -> anyhow::Result<()> {
        match outcome {
            MoveOutcome::Continued => {}
            MoveOutcome::Won(player, line) => {
                let cells: Vec<String> = line.iter().map(|&p| coord_to_string(p)).collect();
                let headline = match self.engine.config().mode() {
                    GameMode::HumanVsComputer if *player == COMPUTER_MARK => {
                        "🤖 Computer wins! Try again.".to_string()
                    }
                    GameMode::HumanVsComputer => "🎉 You beat the computer!".to_string(),
                    GameMode::HumanVsHuman => format!("🎉 Player {} wins!", player),
                };
                writeln!(out, "{} ({})", headline, cells.join(" "))?;
            }
            MoveOutcome::Drawn => writeln!(out, "🤝 Draw!")?,
        }
        Ok(())
    }

    fn quit<W: Write>(&mut self, out: &mut W) -> anyhow::Result<()> {
        if let Some(path) = &self.save_to {
            self.settings.save(path)?;
            writeln!(out, "Settings saved to {}", path.display())?;
        }
        let score = self.engine.score();
        writeln!(out, "Final score  X: {}  O: {}", score.x, score.o)?;
        Ok(())
    }
}

fn describe_error(e: &GameError) -> String {
    match e {
        GameError::OutOfBounds { .. } => "That cell is off the board.".to_string(),
        GameError::CellOccupied { row, col } => {
            format!("{} is already taken.", coord_to_string(Pos::new(*row, *col)))
        }
        other => {
            let mut msg = other.to_string();
            if let Some(first) = msg.get_mut(0..1) {
                first.make_ascii_uppercase();
            }
            msg
        }
    }
}

fn print_banner<W: Write>(out: &mut W, engine: &GameEngine) -> std::io::Result<()> {
    let config = engine.config();
    let mode = match config.mode() {
        GameMode::HumanVsComputer => format!("vs computer ({:?})", config.difficulty()),
        GameMode::HumanVsHuman => "two players".to_string(),
    };
    writeln!(out, "════════════════════════════════════════")?;
    writeln!(
        out,
        "  CARO {}x{}, {} in a row, {}",
        config.board_size(),
        config.board_size(),
        config.win_length(),
        mode
    )?;
    writeln!(out, "════════════════════════════════════════")
}

fn print_board<W: Write>(out: &mut W, snapshot: &GameSnapshot, theme: Theme) -> std::io::Result<()> {
    let n = snapshot.board.size();
    let (tl, tr, bl, br, h, v) = match theme {
        Theme::Default => ('╔', '╗', '╚', '╝', '═', '║'),
        Theme::Dark => ('┏', '┓', '┗', '┛', '━', '┃'),
        Theme::Colorful => ('╭', '╮', '╰', '╯', '─', '│'),
    };
    let highlight: &[Pos] = match &snapshot.status {
        GameStatus::Finished(Outcome::Win { line, .. }) => line.as_slice(),
        _ => &[],
    };
    let width = n * 2 + 4;
    let rule: String = std::iter::repeat(h).take(width).collect();

    writeln!(out)?;
    write!(out, "     ")?;
    for c in 0..n {
        write!(out, " {}", (b'A' + c as u8) as char)?;
    }
    writeln!(out)?;
    writeln!(out, "   {}{}{}", tl, rule, tr)?;
    for r in 0..n {
        write!(out, "   {} {:2}", v, r + 1)?;
        for c in 0..n {
            let pos = Pos::new(r, c);
            let ch = match snapshot.board.mark_at(pos) {
                Some(Mark::X) if highlight.contains(&pos) => 'Ⓧ',
                Some(Mark::O) if highlight.contains(&pos) => 'Ⓞ',
                Some(Mark::X) => 'X',
                Some(Mark::O) => 'O',
                None => '.',
            };
            write!(out, " {}", ch)?;
        }
        writeln!(out, " {}", v)?;
    }
    writeln!(out, "   {}{}{}", bl, rule, br)?;
    writeln!(
        out,
        "   Score  X: {}  O: {}   Moves: {}",
        snapshot.score.x, snapshot.score.o, snapshot.history_len
    )
}

fn print_help<W: Write>(out: &mut W, board_size: usize) -> std::io::Result<()> {
    let last_col = (b'A' + board_size as u8 - 1) as char;
    writeln!(out, "\nGet enough of your marks in a row (across, down or diagonal) to win.")?;
    writeln!(out, "X always moves first; the computer plays O.")?;
    writeln!(out, "  A1..{}{}  place a mark (column letter, row number)", last_col, board_size)?;
    if board_size == 3 {
        writeln!(out, "  1-9      place a mark, numbered left to right, top to bottom")?;
    }
    writeln!(out, "  u        undo (two moves against the computer)")?;
    writeln!(out, "  r        reset the board, keep the score")?;
    writeln!(out, "  n        new match, clear the score")?;
    writeln!(out, "  h        hint (against the computer, on your turn)")?;
    writeln!(out, "  q        quit")
}
