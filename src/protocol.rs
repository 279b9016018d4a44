//! Line-oriented text protocol for driving the engine from another program.
//!
//! Framing follows GTP: a command may carry a numeric id, a success is
//! answered with `=id response`, a failure with `?id message`, and every
//! answer is terminated by a blank line. Empty lines and `#` comments are
//! ignored.
//!
//! ## Supported Commands
//!
//! - `name` - Return engine name
//! - `version` - Return engine version
//! - `protocol_version` - Return protocol version (1)
//! - `list_commands` - List all supported commands
//! - `known_command <cmd>` - Check if a command is supported
//! - `quit` - Exit the loop
//! - `boardsize <w> [h]` - Resize the board (and start a new game)
//! - `clear_board` / `reset` - Start a new game
//! - `place <x> <y>` - Place the next marker
//! - `legal <x> <y>` - Whether a marker may go at `(x, y)`
//! - `legal_moves` - All legal cells as `x,y`
//! - `status` - Game phase and move count
//! - `showboard` - Render the board
//! - `hint` - Suggest a move (Warnsdorff)
//! - `playout` - Finish the game with random moves
//!
//! ## Example
//!
//! ```ignore
//! use knight_trail::protocol::TrailProtocol;
//! let mut engine = TrailProtocol::new();
//! engine.run()?;
//! ```

use std::io::{self, BufRead, Write};

use anyhow::Context;
use fastrand::Rng;
use log::{trace, warn};

use crate::constants::{DEFAULT_SEED, HEIGHT, WIDTH};
use crate::engine::GameEngine;
use crate::playout::{random_playout, warnsdorff_move};
use crate::position::str_point;

/// The list of known protocol commands.
const KNOWN_COMMANDS: &[&str] = &[
    "boardsize",
    "clear_board",
    "hint",
    "known_command",
    "legal",
    "legal_moves",
    "list_commands",
    "name",
    "place",
    "playout",
    "protocol_version",
    "quit",
    "reset",
    "showboard",
    "status",
    "version",
];

/// Protocol session state.
pub struct TrailProtocol {
    /// Current game
    engine: GameEngine,
    /// Generator for `playout`
    rng: Rng,
}

impl Default for TrailProtocol {
    fn default() -> Self {
        Self::new()
    }
}

impl TrailProtocol {
    /// Create a session on the default board.
    pub fn new() -> Self {
        Self::with_seed(WIDTH, HEIGHT, DEFAULT_SEED)
    }

    /// Create a session on a `width`×`height` board with a seeded playout generator.
    pub fn with_seed(width: usize, height: usize, seed: u64) -> Self {
        Self {
            engine: GameEngine::with_size(width, height),
            rng: Rng::with_seed(seed),
        }
    }

    pub fn engine(&self) -> &GameEngine {
        &self.engine
    }

    /// Run the command loop on stdin/stdout.
    pub fn run(&mut self) -> anyhow::Result<()> {
        let stdin = io::stdin();
        let stdout = io::stdout();
        self.run_with(stdin.lock(), stdout.lock())
    }

    /// Run the command loop until `quit` or end of input.
    pub fn run_with<R: BufRead, W: Write>(&mut self, input: R, mut output: W) -> anyhow::Result<()> {
        for line in input.lines() {
            let line = line.context("failed to read command")?;

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
            trace!("command {command} {args:?}");

            let (success, message) = self.execute(&command, args);
            if !success {
                warn!("{command}: {message}");
            }

            let prefix = if success { '=' } else { '?' };
            let id_str = id.map(|i| i.to_string()).unwrap_or_default();

            writeln!(output, "{prefix}{id_str} {message}\n").context("failed to write response")?;
            output.flush().context("failed to flush response")?;

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
        if end > 0
            && let Ok(id) = trimmed[..end].parse::<u32>()
        {
            return (Some(id), trimmed[end..].trim());
        }
        (None, trimmed)
    }

    /// Parse `<x> <y>` arguments.
    fn parse_xy(args: &[&str]) -> Result<(usize, usize), String> {
        if args.len() < 2 {
            return Err("missing arguments".to_string());
        }
        let x = args[0].parse::<usize>().map_err(|_| format!("invalid coordinate: {}", args[0]))?;
        let y = args[1].parse::<usize>().map_err(|_| format!("invalid coordinate: {}", args[1]))?;
        Ok((x, y))
    }

    /// Execute a command and return (success, response).
    fn execute(&mut self, command: &str, args: &[&str]) -> (bool, String) {
        match command {
            "name" => (true, env!("CARGO_PKG_NAME").to_string()),

            "version" => (true, env!("CARGO_PKG_VERSION").to_string()),

            "protocol_version" => (true, "1".to_string()),

            "list_commands" => (true, KNOWN_COMMANDS.join("\n")),

            "known_command" => {
                if args.is_empty() {
                    return (false, "missing argument".to_string());
                }
                let known = KNOWN_COMMANDS.contains(&args[0].to_lowercase().as_str());
                (true, if known { "true" } else { "false" }.to_string())
            }

            "quit" => (true, String::new()),

            "boardsize" => {
                if args.is_empty() {
                    return (false, "missing argument".to_string());
                }
                if args.len() > 2 {
                    return (false, "too many arguments".to_string());
                }
                let sides: Result<Vec<usize>, _> = args.iter().map(|a| a.parse::<usize>()).collect();
                let sides = match sides {
                    Ok(sides) => sides,
                    Err(_) => return (false, "invalid size".to_string()),
                };
                let width = sides[0];
                let height = sides.get(1).copied().unwrap_or(width);
                match GameEngine::try_with_size(width, height) {
                    Ok(engine) => {
                        self.engine = engine;
                        (true, String::new())
                    }
                    Err(e) => (false, e.to_string()),
                }
            }

            "clear_board" | "reset" => {
                self.engine.reset();
                (true, String::new())
            }

            "place" => {
                let (x, y) = match Self::parse_xy(args) {
                    Ok(pt) => pt,
                    Err(e) => return (false, e),
                };
                match self.engine.place_marker(x, y) {
                    Ok(state) => (true, state.move_count.to_string()),
                    Err(e) => (false, e.to_string()),
                }
            }

            "legal" => match Self::parse_xy(args) {
                Ok((x, y)) => (true, self.engine.is_legal_move(x, y).to_string()),
                Err(e) => (false, e),
            },

            "legal_moves" => {
                let moves: Vec<String> = self.engine.legal_moves().into_iter().map(str_point).collect();
                (true, moves.join(" "))
            }

            "status" => {
                let state = self.engine.state();
                (true, format!("{} {}", state.phase(), state.move_count))
            }

            "showboard" => (true, format!("\n{}", self.engine.state().board.to_string().trim_end())),

            "hint" => match warnsdorff_move(self.engine.state()) {
                Some(pt) => (true, str_point(pt)),
                None => (true, "none".to_string()),
            },

            "playout" => {
                if self.engine.is_game_over() {
                    return (false, "game is over".to_string());
                }
                let finished = random_playout(self.engine.state(), &mut self.rng);
                // Replay through the engine so every marker goes through validation.
                let played = self.engine.state().move_count;
                let mut trail: Vec<_> = finished
                    .board
                    .markers()
                    .filter(|&(_, index)| index > played)
                    .collect();
                trail.sort_by_key(|&(_, index)| index);
                for ((x, y), _) in trail {
                    if let Err(e) = self.engine.place_marker(x, y) {
                        return (false, e.to_string());
                    }
                }
                (true, self.engine.state().move_count.to_string())
            }

            _ => (false, format!("unknown command: {command}")),
        }
    }
}
