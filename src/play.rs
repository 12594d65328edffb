//! Interactive two-player game in the terminal.
//!
//! Both players share one keyboard. Each line of input names a point to
//! activate; `deselect`, `new` and `quit` are also understood.

use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use tracing::info;

use crate::board::{BoardView, banner, parse_point, point_name};
use crate::position::{Outcome, Position, activate, deselect, empty_position};

const HELP: &str = "Enter a point (a1..g7 or 0..23), `deselect`, `new` or `quit`.";

/// Play a game reading moves from `input` until `quit` or end of input.
///
/// Returns the final position.
pub fn run<R: BufRead, W: Write>(input: R, mut output: W) -> Result<Position> {
    let mut pos = Position::new();
    let mut lines = input.lines();
    info!("interactive game started");
    writeln!(output, "Nine Men's Morris\n{HELP}")?;

    loop {
        writeln!(output, "\n{}\n{}", BoardView(&pos), banner(&pos))?;
        if let Some(pt) = pos.selected {
            writeln!(output, "Selected: {}", point_name(pt))?;
        }
        write!(output, "> ")?;
        output.flush().context("flushing prompt")?;

        let Some(line) = lines.next() else {
            writeln!(output)?;
            break;
        };
        let line = line.context("reading input")?;

        match line.trim().to_ascii_lowercase().as_str() {
            "" => {}
            "quit" | "exit" => break,
            "help" => writeln!(output, "{HELP}")?,
            "new" => empty_position(&mut pos),
            "deselect" => {
                deselect(&mut pos);
            }
            other => match parse_point(other) {
                Ok(pt) => match activate(&mut pos, pt) {
                    Outcome::Ignored(reason) => {
                        writeln!(output, "Ignored: {reason}")?;
                    }
                    Outcome::Moved { from, to } => {
                        writeln!(output, "Moved {} -> {}", point_name(from), point_name(to))?;
                    }
                    Outcome::Placed(_) | Outcome::Selected(_) => {}
                },
                Err(err) => writeln!(output, "{err}")?,
            },
        }
    }

    info!(moves = pos.n, "interactive game ended");
    Ok(pos)
}
