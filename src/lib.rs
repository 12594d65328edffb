//! Morris-Rust: a Nine Men's Morris game engine.
//!
//! Two players take turns dropping nine pieces each onto the 24 points of
//! the board, then slide them along the board lines to adjacent empty
//! points. Mills and captures are not part of this rule set.
//!
//! ## Modules
//!
//! - [`constants`] - Board graph and game parameters
//! - [`position`] - Core game logic (state, placement, selection, movement)
//! - [`board`] - Point names, grid layout and text rendering
//! - [`protocol`] - Line-based command protocol for GUIs and scripts
//! - [`play`] - Interactive terminal game
//!
//! ## Example
//!
//! ```
//! use morris_rust::position::{Outcome, Player, Position, activate};
//!
//! let mut pos = Position::new();
//! assert_eq!(activate(&mut pos, 0), Outcome::Placed(0));
//! assert_eq!(pos.to_move, Player::Two);
//!
//! // Occupied points are ignored and the turn stays with the same player.
//! assert!(!activate(&mut pos, 0).is_applied());
//! assert_eq!(pos.to_move, Player::Two);
//! ```

pub mod board;
pub mod constants;
pub mod play;
pub mod position;
pub mod protocol;
