//! Go Text Protocol (GTP) front-end.
//!
//! Lets a GTP controller (GoGui, Sabaki, a regression script) set up a
//! position and ask the engine which stones are dead and who owns what.
//! Only one in-memory board is kept; there are no move generation or timing
//! commands.
//!
//! ## Supported Commands
//!
//! - `name`, `version`, `protocol_version`, `list_commands`, `known_command`, `quit`
//! - `boardsize <size>` - Resize and clear the board (1 to 25)
//! - `clear_board` - Reset the board to empty
//! - `play <color> <vertex>` - Place a stone, capturing as usual
//! - `showboard` - Print the current board
//! - `final_status_list dead|alive` - Stones judged dead/alive by Benson's test
//! - `estimate_territory` - Influence-based ownership map and counts
//!
//! ## Example
//!
//! ```ignore
//! use benson_go::gtp::GtpEngine;
//! let mut engine = GtpEngine::new();
//! engine.run();
//! ```

use std::io::{self, BufRead, Write};

use log::{debug, warn};

use crate::benson::{BensonConfig, Mark, resolve};
use crate::board::{Board, Color};
use crate::constants::{DEFAULT_SIZE, MAX_BOARD_SIZE};
use crate::grid::Point;
use crate::influence::{InfluenceConfig, estimate};

/// The list of known GTP commands.
const KNOWN_COMMANDS: &[&str] = &[
    "boardsize",
    "clear_board",
    "estimate_territory",
    "final_status_list",
    "known_command",
    "list_commands",
    "name",
    "play",
    "protocol_version",
    "quit",
    "showboard",
    "version",
];

/// Column letters; `I` is skipped by convention.
const COLUMNS: &[u8] = b"ABCDEFGHJKLMNOPQRSTUVWXYZ";

/// GTP engine state.
pub struct GtpEngine {
    board: Board,
    benson: BensonConfig,
    influence: InfluenceConfig,
}

impl Default for GtpEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl GtpEngine {
    /// Create an engine with an empty 19x19 board and default settings.
    pub fn new() -> Self {
        Self::with_config(BensonConfig::default(), InfluenceConfig::default())
    }

    pub fn with_config(benson: BensonConfig, influence: InfluenceConfig) -> Self {
        Self {
            board: empty_board(DEFAULT_SIZE),
            benson,
            influence,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Run the GTP command loop on stdin/stdout.
    pub fn run(&mut self) -> io::Result<()> {
        let stdin = io::stdin();
        let stdout = io::stdout();
        self.serve(stdin.lock(), stdout.lock())
    }

    /// Run the command loop over arbitrary streams.
    pub fn serve<R: BufRead, W: Write>(&mut self, input: R, mut output: W) -> io::Result<()> {
        for line in input.lines() {
            let line = line?;

            // Skip empty lines and comments
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let (id, command_line) = Self::parse_id(line);
            let parts: Vec<&str> = command_line.split_whitespace().collect();
            if parts.is_empty() {
                continue;
            }

            let command = parts[0].to_lowercase();
            let args = &parts[1..];
            debug!("gtp <- {command} {args:?}");

            let (success, message) = self.execute(&command, args);
            let prefix = if success { '=' } else { '?' };
            let id_str = id.map(|i| i.to_string()).unwrap_or_default();

            write!(output, "{prefix}{id_str} {message}\n\n")?;
            output.flush()?;

            if command == "quit" {
                break;
            }
        }
        Ok(())
    }

    /// Parse an optional numeric command ID from the beginning of the line.
    fn parse_id(line: &str) -> (Option<u32>, &str) {
        let trimmed = line.trim();
        let end = trimmed
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(trimmed.len());
        if end > 0 {
            if let Ok(id) = trimmed[..end].parse::<u32>() {
                return (Some(id), trimmed[end..].trim());
            }
        }
        (None, trimmed)
    }

    /// Execute a GTP command and return (success, response).
    fn execute(&mut self, command: &str, args: &[&str]) -> (bool, String) {
        match command {
            "name" => (true, env!("CARGO_PKG_NAME").to_string()),

            "version" => (true, env!("CARGO_PKG_VERSION").to_string()),

            "protocol_version" => (true, "2".to_string()),

            "list_commands" => (true, KNOWN_COMMANDS.join("\n")),

            "known_command" => {
                let Some(name) = args.first() else {
                    return (false, "missing argument".to_string());
                };
                let known = KNOWN_COMMANDS.contains(&name.to_lowercase().as_str());
                (true, known.to_string())
            }

            "quit" => (true, String::new()),

            "boardsize" => {
                let Some(arg) = args.first() else {
                    return (false, "missing argument".to_string());
                };
                match arg.parse::<usize>() {
                    Ok(size) if size > MAX_BOARD_SIZE => (false, "unacceptable size".to_string()),
                    Ok(size) => match Board::new(size) {
                        Ok(board) => {
                            self.board = board;
                            (true, String::new())
                        }
                        Err(_) => (false, "unacceptable size".to_string()),
                    },
                    Err(_) => (false, "invalid size".to_string()),
                }
            }

            "clear_board" => {
                self.board = empty_board(self.board.size());
                (true, String::new())
            }

            "play" => {
                if args.len() < 2 {
                    return (false, "missing arguments".to_string());
                }
                let Some(color) = parse_color(args[0]) else {
                    return (false, "invalid color".to_string());
                };
                if args[1].eq_ignore_ascii_case("pass") {
                    return (true, String::new());
                }
                let Some(pt) = parse_vertex(args[1], self.board.size()) else {
                    return (false, "invalid vertex".to_string());
                };
                match self.board.play(pt, color) {
                    Ok(outcome) => {
                        debug!("{color} {} captured {}", args[1], outcome.captured.len());
                        (true, String::new())
                    }
                    Err(e) => {
                        warn!("rejected {color} {}: {e}", args[1]);
                        (false, e.to_string())
                    }
                }
            }

            "showboard" => (true, format!("\n{}", self.board)),

            "final_status_list" => {
                let Some(status) = args.first() else {
                    return (false, "missing argument".to_string());
                };
                let want_dead = match status.to_lowercase().as_str() {
                    "dead" => true,
                    "alive" => false,
                    _ => return (false, "unsupported status".to_string()),
                };
                let outcome = resolve(&self.board, &self.benson);
                let size = self.board.size();
                let vertices: Vec<String> = outcome
                    .marks
                    .enumerate()
                    .filter(|(p, m)| {
                        let stone = self.board.grid()[*p].color().is_some();
                        stone && ((**m == Mark::Remove) == want_dead)
                    })
                    .filter_map(|(p, _)| str_vertex(p, size))
                    .collect();
                (true, vertices.join(" "))
            }

            "estimate_territory" => {
                let est = estimate(&self.board, &self.influence);
                (true, format!("\n{est}"))
            }

            _ => (false, format!("unknown command: {command}")),
        }
    }
}

fn empty_board(size: usize) -> Board {
    match Board::new(size) {
        Ok(b) => b,
        Err(_) => unreachable!("size {size} is within 1..={MAX_BOARD_SIZE}"),
    }
}

fn parse_color(s: &str) -> Option<Color> {
    match s.to_lowercase().as_str() {
        "b" | "black" => Some(Color::Black),
        "w" | "white" => Some(Color::White),
        _ => None,
    }
}

/// Parse a GTP vertex such as `D4`. Row 1 is the bottom row of the board.
pub fn parse_vertex(s: &str, size: usize) -> Option<Point> {
    let bytes = s.as_bytes();
    if bytes.len() < 2 || !bytes[0].is_ascii() {
        return None;
    }
    let col_char = bytes[0].to_ascii_uppercase();
    let x = COLUMNS.iter().position(|&c| c == col_char)?;
    let row: usize = s[1..].parse().ok()?;
    if x >= size || row == 0 || row > size {
        return None;
    }
    Some((x, size - row))
}

/// Format a point as a GTP vertex, or `None` past the last column letter.
pub fn str_vertex((x, y): Point, size: usize) -> Option<String> {
    let col = COLUMNS.get(x)?;
    Some(format!("{}{}", *col as char, size - y))
}
