//! Morris Text Protocol, a line-based command protocol modelled on GTP.
//!
//! A request is `[id] command [args...]`. Successful requests are answered
//! with `=[id] message`, malformed ones with `?[id] message`; every response
//! ends with a blank line. Rule violations are not protocol failures: a
//! `click` on an illegal point answers `= ignored: <reason>`.
//!
//! ## Supported Commands
//!
//! - `name`, `version`, `protocol_version`, `list_commands`
//! - `known_command <cmd>` - Check if a command is supported
//! - `quit` - Exit the loop
//! - `clear_board` - Start a new game
//! - `click <point>` - Activate a point (place, select or move)
//! - `deselect` - Drop the current selection
//! - `showboard` - Draw the board and the turn banner
//! - `turn`, `phase`, `pieces`, `selected` - Read back parts of the state
//! - `legal <point>` - Empty neighbours of a point
//! - `state` - JSON snapshot of the whole position
//!
//! ## Example
//!
//! ```
//! use morris_rust::protocol::MorrisEngine;
//!
//! let mut engine = MorrisEngine::new();
//! let mut out = Vec::new();
//! engine.run("1 click a7\n2 turn\n".as_bytes(), &mut out).unwrap();
//! let text = String::from_utf8(out).unwrap();
//! assert!(text.contains("=1 placed"));
//! assert!(text.contains("=2 2"));
//! ```

use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use derive_more::{Display, Error};
use tracing::{debug, info, warn};

use crate::board::{BoardView, CellParseError, banner, parse_point, point_name};
use crate::position::{
    Outcome, Phase, Player, Position, activate, deselect, empty_position, legal_destinations,
};

/// Protocol revision reported by `protocol_version`.
pub const PROTOCOL_VERSION: &str = "1";

/// The list of known commands.
const KNOWN_COMMANDS: &[&str] = &[
    "clear_board",
    "click",
    "deselect",
    "known_command",
    "legal",
    "list_commands",
    "name",
    "phase",
    "pieces",
    "protocol_version",
    "quit",
    "selected",
    "showboard",
    "state",
    "turn",
    "version",
];

/// Why a request could not be executed.
#[derive(Debug, Display, Error)]
pub enum CommandError {
    #[display("missing argument")]
    MissingArgument,
    #[display("{_0}")]
    InvalidPoint(CellParseError),
    #[display("unknown command: {_0}")]
    UnknownCommand(#[error(not(source))] String),
    #[display("cannot encode state: {_0}")]
    Encode(serde_json::Error),
}

impl From<CellParseError> for CommandError {
    fn from(err: CellParseError) -> Self {
        CommandError::InvalidPoint(err)
    }
}

/// Protocol engine state.
#[derive(Debug, Default)]
pub struct MorrisEngine {
    /// Current game position
    pos: Position,
}

impl MorrisEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current game position.
    pub fn position(&self) -> &Position {
        &self.pos
    }

    /// Run the command loop until `quit` or end of input.
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, mut output: W) -> Result<()> {
        info!("protocol session started");
        for line in input.lines() {
            let line = line.context("reading command")?;

            // Skip empty lines and comments
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let (id, command_line) = Self::parse_id(line);
            let parts: Vec<&str> = command_line.split_whitespace().collect();
            let Some((command, args)) = parts.split_first() else {
                continue;
            };
            let command = command.to_lowercase();

            let response = self.execute(&command, args);
            let id_str = id.map(|i| i.to_string()).unwrap_or_default();
            let written = match &response {
                Ok(message) => writeln!(output, "={id_str} {message}\n"),
                Err(err) => {
                    warn!(command = %command, error = %err, "command failed");
                    writeln!(output, "?{id_str} {err}\n")
                }
            };
            written.context("writing response")?;
            output.flush().context("flushing response")?;

            if command == "quit" {
                break;
            }
        }
        info!(moves = self.pos.n, "protocol session ended");
        Ok(())
    }

    /// Parse an optional numeric command ID from the beginning of the line.
    fn parse_id(line: &str) -> (Option<u32>, &str) {
        let trimmed = line.trim();
        let end = trimmed
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(trimmed.len());
        if end == 0 {
            return (None, trimmed);
        }
        match trimmed[..end].parse::<u32>() {
            Ok(id) => (Some(id), trimmed[end..].trim()),
            Err(_) => (None, trimmed),
        }
    }

    /// Execute a single command and return the response message.
    pub fn execute(&mut self, command: &str, args: &[&str]) -> Result<String, CommandError> {
        debug!(command, ?args, "execute");
        let arg = || args.first().copied().ok_or(CommandError::MissingArgument);

        match command {
            "name" => Ok(env!("CARGO_PKG_NAME").to_string()),

            "version" => Ok(env!("CARGO_PKG_VERSION").to_string()),

            "protocol_version" => Ok(PROTOCOL_VERSION.to_string()),

            "list_commands" => Ok(KNOWN_COMMANDS.join("\n")),

            "known_command" => {
                let known = KNOWN_COMMANDS.contains(&arg()?.to_lowercase().as_str());
                Ok(known.to_string())
            }

            "quit" => Ok(String::new()),

            "clear_board" => {
                empty_position(&mut self.pos);
                Ok(String::new())
            }

            "click" => {
                let pt = parse_point(arg()?)?;
                Ok(match activate(&mut self.pos, pt) {
                    Outcome::Placed(_) => "placed".to_string(),
                    Outcome::Selected(_) => "selected".to_string(),
                    Outcome::Moved { .. } => "moved".to_string(),
                    Outcome::Ignored(reason) => format!("ignored: {reason}"),
                })
            }

            "deselect" => {
                deselect(&mut self.pos);
                Ok(String::new())
            }

            "showboard" => Ok(format!(
                "\n{}\n{}",
                BoardView(&self.pos),
                banner(&self.pos)
            )),

            "turn" => Ok(self.pos.to_move.number().to_string()),

            "phase" => Ok(match self.pos.phase {
                Phase::Placing => "placing",
                Phase::Moving => "moving",
            }
            .to_string()),

            "pieces" => Ok(format!(
                "{} {}",
                self.pos.remaining.get(Player::One),
                self.pos.remaining.get(Player::Two)
            )),

            "selected" => Ok(self
                .pos
                .selected
                .map(point_name)
                .unwrap_or_else(|| "none".to_string())),

            "legal" => {
                let pt = parse_point(arg()?)?;
                let names: Vec<String> = legal_destinations(&self.pos, pt)
                    .into_iter()
                    .map(point_name)
                    .collect();
                Ok(names.join(" "))
            }

            "state" => serde_json::to_string(&self.pos).map_err(CommandError::Encode),

            _ => Err(CommandError::UnknownCommand(command.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_id_with_id() {
        let (id, cmd) = MorrisEngine::parse_id("123 name");
        assert_eq!(id, Some(123));
        assert_eq!(cmd, "name");
    }

    #[test]
    fn test_parse_id_without_id() {
        let (id, cmd) = MorrisEngine::parse_id("name");
        assert_eq!(id, None);
        assert_eq!(cmd, "name");
    }

    #[test]
    fn test_name_command() {
        let mut engine = MorrisEngine::new();
        assert_eq!(engine.execute("name", &[]).unwrap(), "morris-rust");
    }

    #[test]
    fn test_known_command() {
        let mut engine = MorrisEngine::new();
        assert_eq!(engine.execute("known_command", &["click"]).unwrap(), "true");
        assert_eq!(engine.execute("known_command", &["genmove"]).unwrap(), "false");
        assert!(matches!(
            engine.execute("known_command", &[]),
            Err(CommandError::MissingArgument)
        ));
    }

    #[test]
    fn test_click_and_clear() {
        let mut engine = MorrisEngine::new();
        assert_eq!(engine.execute("click", &["a7"]).unwrap(), "placed");
        assert_eq!(
            engine.execute("click", &["0"]).unwrap(),
            "ignored: point is not empty"
        );
        assert_eq!(engine.execute("pieces", &[]).unwrap(), "8 9");

        engine.execute("clear_board", &[]).unwrap();
        assert_eq!(engine.position().n, 0);
        assert_eq!(engine.execute("pieces", &[]).unwrap(), "9 9");
    }

    #[test]
    fn test_click_bad_point() {
        let mut engine = MorrisEngine::new();
        assert!(matches!(
            engine.execute("click", &["d4"]),
            Err(CommandError::InvalidPoint(_))
        ));
        assert_eq!(engine.position(), &Position::new());
    }

    #[test]
    fn test_unknown_command() {
        let mut engine = MorrisEngine::new();
        let err = engine.execute("genmove", &["red"]).unwrap_err();
        assert_eq!(err.to_string(), "unknown command: genmove");
    }
}
