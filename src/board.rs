//! Text presentation of a position.
//!
//! Maps the 24 board points onto a 7x7 display grid, names points in the
//! usual `a1`..`g7` notation and draws the board for terminal front ends.
//! Nothing here touches game rules.

use std::fmt;

use derive_more::{Display, Error};

use crate::constants::{
    ADJACENCY, CELL_COUNT, GRID_SIZE, SYMBOL_EMPTY, SYMBOL_PLAYER_ONE, SYMBOL_PLAYER_TWO,
};
use crate::position::{Cell, Phase, Player, Point, Position};

/// Grid `(column, row)` of each point, row 0 at the top.
#[rustfmt::skip]
const GRID_COORDS: [(usize, usize); CELL_COUNT] = [
    (0, 0), (3, 0), (6, 0),
    (1, 1), (3, 1), (5, 1),
    (2, 2), (3, 2), (4, 2),
    (0, 3), (1, 3), (2, 3), (4, 3), (5, 3), (6, 3),
    (2, 4), (3, 4), (4, 4),
    (1, 5), (3, 5), (5, 5),
    (0, 6), (3, 6), (6, 6),
];

/// Characters between two neighbouring grid columns in the drawing.
const CELL_WIDTH: usize = 4;

/// Text rows between two neighbouring grid rows in the drawing.
const CELL_HEIGHT: usize = 2;

/// Error returned when a point name cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
#[display("invalid point: {input:?} (expected a1..g7 or 0..23)")]
pub struct CellParseError {
    pub input: String,
}

/// Grid position of a point, or `None` when the point is off the board.
pub fn grid_coord(pt: Point) -> Option<(usize, usize)> {
    GRID_COORDS.get(pt).copied()
}

/// Point drawn at a grid position, if any.
pub fn point_at(col: usize, row: usize) -> Option<Point> {
    GRID_COORDS.iter().position(|&c| c == (col, row))
}

/// Name of a point in board notation (`a7` for point 0, `g1` for point 23).
///
/// Off-board points are rendered as `"-"`.
pub fn point_name(pt: Point) -> String {
    match grid_coord(pt) {
        Some((col, row)) => {
            let file = (b'a' + col as u8) as char;
            format!("{file}{}", GRID_SIZE - row)
        }
        None => "-".to_string(),
    }
}

/// Parse a point from board notation (`d2`, case-insensitive) or from a
/// plain index (`0` to `23`).
pub fn parse_point(s: &str) -> Result<Point, CellParseError> {
    let err = || CellParseError {
        input: s.to_string(),
    };
    let trimmed = s.trim();

    if let Ok(index) = trimmed.parse::<usize>() {
        return if index < CELL_COUNT {
            Ok(index)
        } else {
            Err(err())
        };
    }

    let lower = trimmed.to_ascii_lowercase();
    let bytes = lower.as_bytes();
    if bytes.len() != 2 {
        return Err(err());
    }
    let (file, rank) = (bytes[0], bytes[1]);
    if !(b'a'..b'a' + GRID_SIZE as u8).contains(&file)
        || !(b'1'..b'1' + GRID_SIZE as u8).contains(&rank)
    {
        return Err(err());
    }
    let col = (file - b'a') as usize;
    let row = GRID_SIZE - 1 - (rank - b'1') as usize;
    point_at(col, row).ok_or_else(err)
}

/// Human-readable player label, as shown in the banner.
pub fn player_label(player: Player) -> &'static str {
    match player {
        Player::One => "Player 1 (Red)",
        Player::Two => "Player 2 (Blue)",
    }
}

/// Turn and phase line shown under the board.
pub fn banner(pos: &Position) -> String {
    let action = match pos.phase {
        Phase::Placing => "Place",
        Phase::Moving => "Move",
    };
    format!("{}'s Turn to {action} a Piece", player_label(pos.to_move))
}

fn symbol(cell: Cell) -> char {
    match cell {
        Cell::Empty => SYMBOL_EMPTY,
        Cell::Occupied(Player::One) => SYMBOL_PLAYER_ONE,
        Cell::Occupied(Player::Two) => SYMBOL_PLAYER_TWO,
    }
}

/// Borrowed view of a position that draws the board when displayed.
///
/// ```
/// use morris_rust::board::BoardView;
/// use morris_rust::position::{place_piece, Position};
///
/// let mut pos = Position::new();
/// place_piece(&mut pos, 0);
/// let text = BoardView(&pos).to_string();
/// assert!(text.starts_with("7  R"));
/// ```
pub struct BoardView<'a>(pub &'a Position);

impl fmt::Display for BoardView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let pos = self.0;
        // One column of margin on each side leaves room for selection brackets.
        let width = (GRID_SIZE - 1) * CELL_WIDTH + 3;
        let height = (GRID_SIZE - 1) * CELL_HEIGHT + 1;
        let mut canvas = vec![vec![' '; width]; height];
        let at = |pt: Point| {
            let (col, row) = GRID_COORDS[pt];
            (1 + col * CELL_WIDTH, row * CELL_HEIGHT)
        };

        for (a, ns) in ADJACENCY.iter().enumerate() {
            for &b in ns.iter().filter(|&&b| b > a) {
                let ((xa, ya), (xb, yb)) = (at(a), at(b));
                if ya == yb {
                    for x in xa.min(xb) + 1..xa.max(xb) {
                        canvas[ya][x] = '-';
                    }
                } else {
                    for y in ya.min(yb) + 1..ya.max(yb) {
                        canvas[y][xa] = '|';
                    }
                }
            }
        }

        for (pt, &cell) in pos.cells.iter().enumerate() {
            let (x, y) = at(pt);
            canvas[y][x] = symbol(cell);
            if pos.selected == Some(pt) {
                canvas[y][x - 1] = '[';
                canvas[y][x + 1] = ']';
            }
        }

        for (y, line) in canvas.iter().enumerate() {
            let label = if y % CELL_HEIGHT == 0 {
                (GRID_SIZE - y / CELL_HEIGHT).to_string()
            } else {
                " ".to_string()
            };
            let text: String = line.iter().collect();
            writeln!(f, "{label} {}", text.trim_end())?;
        }

        let files: String = (0..GRID_SIZE)
            .map(|col| format!("{:>width$}", (b'a' + col as u8) as char, width = CELL_WIDTH))
            .collect();
        write!(f, "{files}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::position::{place_piece, select_or_move};

    #[test]
    fn test_point_names() {
        assert_eq!(point_name(0), "a7");
        assert_eq!(point_name(4), "d6");
        assert_eq!(point_name(12), "e4");
        assert_eq!(point_name(23), "g1");
        assert_eq!(point_name(24), "-");
    }

    #[test]
    fn test_parse_point() {
        assert_eq!(parse_point("a7"), Ok(0));
        assert_eq!(parse_point("G1"), Ok(23));
        assert_eq!(parse_point(" d2 "), Ok(19));
        assert_eq!(parse_point("17"), Ok(17));
    }

    #[test]
    fn test_parse_point_rejects() {
        for bad in ["", "24", "d4", "h1", "a0", "a8", "a", "a77", "-1", "pass"] {
            assert!(parse_point(bad).is_err(), "{bad:?} should not parse");
        }
    }

    #[test]
    fn test_name_roundtrip_all_points() {
        for pt in 0..CELL_COUNT {
            assert_eq!(parse_point(&point_name(pt)), Ok(pt));
        }
    }

    #[test]
    fn test_banner() {
        let mut pos = Position::new();
        assert_eq!(banner(&pos), "Player 1 (Red)'s Turn to Place a Piece");
        place_piece(&mut pos, 0);
        assert_eq!(banner(&pos), "Player 2 (Blue)'s Turn to Place a Piece");
        pos.phase = Phase::Moving;
        assert_eq!(banner(&pos), "Player 2 (Blue)'s Turn to Move a Piece");
    }

    #[test]
    fn test_render_empty_board() {
        let text = BoardView(&Position::new()).to_string();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 14);
        assert_eq!(lines[0], "7  .-----------.-----------.");
        assert_eq!(lines[6], "4  .---.---.       .---.---.");
        assert_eq!(lines[13], "   a   b   c   d   e   f   g");
    }

    #[test]
    fn test_render_selection() {
        let mut pos = Position::new();
        for pt in 0..18 {
            place_piece(&mut pos, pt);
        }
        select_or_move(&mut pos, 0);
        let text = BoardView(&pos).to_string();
        assert!(text.starts_with("7 [R]----------B-----------R"));
    }
}
