//! Nine Men's Morris position representation and move execution.
//!
//! This module holds the whole rule set of the engine:
//! - Board state as a fixed array of 24 cells
//! - Piece placement and the switch from placing to moving
//! - Selection and adjacency-constrained movement
//!
//! Illegal actions are never errors. Every transition returns an [`Outcome`];
//! an [`Outcome::Ignored`] result leaves the position untouched and the same
//! player keeps the turn.

use derive_more::Display;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::constants::{ADJACENCY, CELL_COUNT, PIECES_PER_PLAYER};

/// A point on the board, represented as an index into the cell array.
pub type Point = usize;

/// One of the two players.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    /// First player (red), moves first.
    One,
    /// Second player (blue).
    Two,
}

impl Player {
    /// Returns the other player.
    pub fn opponent(self) -> Self {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }

    /// Player number as shown to humans (1 or 2).
    pub fn number(self) -> u8 {
        match self {
            Player::One => 1,
            Player::Two => 2,
        }
    }
}

/// Content of a single board point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Cell {
    #[default]
    Empty,
    Occupied(Player),
}

/// Game phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    /// Players drop their pieces onto empty points.
    Placing,
    /// Players slide pieces along board lines. Terminal.
    Moving,
}

/// Pieces each player still has to place.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PiecesRemaining {
    pub player_one: u8,
    pub player_two: u8,
}

impl Default for PiecesRemaining {
    fn default() -> Self {
        Self {
            player_one: PIECES_PER_PLAYER,
            player_two: PIECES_PER_PLAYER,
        }
    }
}

impl PiecesRemaining {
    pub fn get(&self, player: Player) -> u8 {
        match player {
            Player::One => self.player_one,
            Player::Two => self.player_two,
        }
    }

    /// Take one piece from the player's allowance. Never goes below zero.
    fn take(&mut self, player: Player) {
        let count = match player {
            Player::One => &mut self.player_one,
            Player::Two => &mut self.player_two,
        };
        *count = count.saturating_sub(1);
    }

    /// Both allowances are used up.
    pub fn exhausted(&self) -> bool {
        self.player_one == 0 && self.player_two == 0
    }

    /// Sum of both allowances.
    pub fn total(&self) -> usize {
        self.player_one as usize + self.player_two as usize
    }
}

/// Why an action was ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Serialize, Deserialize)]
pub enum Rejection {
    #[display("point is off the board")]
    OutOfRange,
    #[display("point is not empty")]
    Occupied,
    #[display("point is not adjacent to the selected piece")]
    NotAdjacent,
    #[display("point does not hold a piece of the player to move")]
    NotOwnPiece,
    #[display("action does not apply to the current phase")]
    WrongPhase,
}

/// Result of activating a point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    /// A piece was dropped on the point.
    Placed(Point),
    /// The piece on the point is now selected.
    Selected(Point),
    /// The selected piece slid to an adjacent point.
    Moved { from: Point, to: Point },
    /// Nothing changed.
    Ignored(Rejection),
}

impl Outcome {
    /// The action changed the position.
    pub fn is_applied(&self) -> bool {
        !matches!(self, Outcome::Ignored(_))
    }
}

/// A Nine Men's Morris position (full game state).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Position {
    /// Board cells, indexed by [`Point`]
    pub cells: [Cell; CELL_COUNT],
    /// Player whose turn it is
    pub to_move: Player,
    /// Current phase
    pub phase: Phase,
    /// Pieces still to be placed
    pub remaining: PiecesRemaining,
    /// Piece picked up by the player to move (moving phase only)
    pub selected: Option<Point>,
    /// Successful placements and moves so far
    pub n: usize,
}

impl Default for Position {
    fn default() -> Self {
        Self::new()
    }
}

impl Position {
    pub fn new() -> Self {
        Position {
            cells: [Cell::Empty; CELL_COUNT],
            to_move: Player::One,
            phase: Phase::Placing,
            remaining: PiecesRemaining::default(),
            selected: None,
            n: 0,
        }
    }

    /// Cell at a point, or `None` when the point is off the board.
    pub fn get(&self, pt: Point) -> Option<Cell> {
        self.cells.get(pt).copied()
    }

    /// Owner of the piece on a point.
    pub fn owner(&self, pt: Point) -> Option<Player> {
        match self.get(pt) {
            Some(Cell::Occupied(player)) => Some(player),
            _ => None,
        }
    }

    pub fn is_empty(&self, pt: Point) -> bool {
        self.get(pt) == Some(Cell::Empty)
    }

    /// Number of pieces on the board.
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|c| **c != Cell::Empty).count()
    }

    /// Number of pieces a player has on the board.
    pub fn pieces_on_board(&self, player: Player) -> usize {
        self.cells
            .iter()
            .filter(|c| **c == Cell::Occupied(player))
            .count()
    }
}

/// Reset a position to the start of a new game.
pub fn empty_position(pos: &mut Position) {
    *pos = Position::new();
    info!("new game");
}

/// Points directly connected to `pt`. Empty for points off the board.
pub fn neighbors(pt: Point) -> &'static [Point] {
    ADJACENCY.get(pt).copied().unwrap_or(&[])
}

/// Check whether two points are joined by a board line.
pub fn is_adjacent(from: Point, to: Point) -> bool {
    neighbors(from).contains(&to)
}

/// Empty points the piece on `pt` could slide to.
pub fn legal_destinations(pos: &Position, pt: Point) -> Vec<Point> {
    neighbors(pt)
        .iter()
        .copied()
        .filter(|&n| pos.is_empty(n))
        .collect()
}

/// Pieces of `player` that have at least one empty neighbour.
pub fn movable_pieces(pos: &Position, player: Player) -> Vec<Point> {
    (0..CELL_COUNT)
        .filter(|&pt| pos.owner(pt) == Some(player))
        .filter(|&pt| !legal_destinations(pos, pt).is_empty())
        .collect()
}

/// Drop a piece of the player to move on an empty point.
///
/// Decrements the player's allowance and passes the turn. The game enters
/// the moving phase as soon as both allowances are used up.
pub fn place_piece(pos: &mut Position, pt: Point) -> Outcome {
    if pos.phase != Phase::Placing {
        return ignore(pos, pt, Rejection::WrongPhase);
    }
    match pos.get(pt) {
        None => return ignore(pos, pt, Rejection::OutOfRange),
        Some(Cell::Occupied(_)) => return ignore(pos, pt, Rejection::Occupied),
        Some(Cell::Empty) => {}
    }

    let player = pos.to_move;
    pos.cells[pt] = Cell::Occupied(player);
    pos.remaining.take(player);
    pos.n += 1;
    debug!(
        point = pt,
        player = player.number(),
        remaining = pos.remaining.get(player),
        "placed"
    );

    if pos.remaining.exhausted() {
        pos.phase = Phase::Moving;
        info!(placements = pos.n, "all pieces placed, entering moving phase");
    }
    pos.to_move = player.opponent();
    Outcome::Placed(pt)
}

/// Select a piece of the player to move, or move the selected one.
///
/// With a piece of the player to move selected, `pt` is treated as the
/// destination: the move succeeds only onto an empty adjacent point, and a
/// failed attempt keeps the selection so the player can try another target.
/// Without a selection, activating one of the player's own pieces selects it.
pub fn select_or_move(pos: &mut Position, pt: Point) -> Outcome {
    if pos.phase != Phase::Moving {
        return ignore(pos, pt, Rejection::WrongPhase);
    }
    let player = pos.to_move;

    match pos.selected.filter(|&from| pos.owner(from) == Some(player)) {
        Some(from) => {
            match pos.get(pt) {
                None => return ignore(pos, pt, Rejection::OutOfRange),
                Some(Cell::Occupied(_)) => return ignore(pos, pt, Rejection::Occupied),
                Some(Cell::Empty) => {}
            }
            if !is_adjacent(from, pt) {
                return ignore(pos, pt, Rejection::NotAdjacent);
            }

            pos.cells[from] = Cell::Empty;
            pos.cells[pt] = Cell::Occupied(player);
            pos.selected = None;
            pos.to_move = player.opponent();
            pos.n += 1;
            debug!(from, to = pt, player = player.number(), "moved");
            Outcome::Moved { from, to: pt }
        }
        None if pos.owner(pt) == Some(player) => {
            pos.selected = Some(pt);
            debug!(point = pt, player = player.number(), "selected");
            Outcome::Selected(pt)
        }
        None if pt >= CELL_COUNT => ignore(pos, pt, Rejection::OutOfRange),
        None => ignore(pos, pt, Rejection::NotOwnPiece),
    }
}

/// Handle a click on a point: place during the placing phase, select or
/// move during the moving phase.
pub fn activate(pos: &mut Position, pt: Point) -> Outcome {
    match pos.phase {
        Phase::Placing => place_piece(pos, pt),
        Phase::Moving => select_or_move(pos, pt),
    }
}

/// Drop the current selection. Returns the point that was selected.
pub fn deselect(pos: &mut Position) -> Option<Point> {
    let previous = pos.selected.take();
    if let Some(pt) = previous {
        debug!(point = pt, "deselected");
    }
    previous
}

fn ignore(pos: &Position, pt: Point, reason: Rejection) -> Outcome {
    debug!(
        point = pt,
        player = pos.to_move.number(),
        %reason,
        "ignored"
    );
    Outcome::Ignored(reason)
}
