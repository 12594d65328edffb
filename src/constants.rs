//! Board geometry and game constants.
//!
//! The 24 points of the board are numbered row by row from the top-left
//! corner of the outer square:
//!
//! ```text
//!  0-----------1-----------2
//!  |           |           |
//!  |   3-------4-------5   |
//!  |   |       |       |   |
//!  |   |   6---7---8   |   |
//!  |   |   |       |   |   |
//!  9--10--11      12--13--14
//!  |   |   |       |   |   |
//!  |   |  15--16--17   |   |
//!  |   |       |       |   |
//!  |  18------19------20   |
//!  |           |           |
//! 21----------22----------23
//! ```

// =============================================================================
// Board Geometry
// =============================================================================

/// Number of points on the board.
pub const CELL_COUNT: usize = 24;

/// Width and height of the display grid the points are laid out on.
pub const GRID_SIZE: usize = 7;

/// Points directly connected to each point by a board line.
///
/// Indexed by cell. The graph is undirected: every pair appears in both lists.
pub const ADJACENCY: [&[usize]; CELL_COUNT] = [
    &[1, 9],           // 0
    &[0, 2, 4],        // 1
    &[1, 14],          // 2
    &[4, 10],          // 3
    &[1, 3, 5, 7],     // 4
    &[4, 13],          // 5
    &[7, 11],          // 6
    &[4, 6, 8],        // 7
    &[7, 12],          // 8
    &[0, 10, 21],      // 9
    &[3, 9, 11, 18],   // 10
    &[6, 10, 15],      // 11
    &[8, 13, 17],      // 12
    &[5, 12, 14, 20],  // 13
    &[2, 13, 23],      // 14
    &[11, 16],         // 15
    &[15, 17, 19],     // 16
    &[12, 16],         // 17
    &[10, 19],         // 18
    &[16, 18, 20, 22], // 19
    &[13, 19],         // 20
    &[9, 22],          // 21
    &[19, 21, 23],     // 22
    &[14, 22],         // 23
];

// =============================================================================
// Game Parameters
// =============================================================================

/// Pieces each player drops onto the board during the placing phase.
pub const PIECES_PER_PLAYER: u8 = 9;

/// Total placements before the game switches to the moving phase.
pub const TOTAL_PLACEMENTS: usize = 2 * PIECES_PER_PLAYER as usize;

// =============================================================================
// Display Symbols
// =============================================================================

/// Piece of the first player (red).
pub const SYMBOL_PLAYER_ONE: char = 'R';

/// Piece of the second player (blue).
pub const SYMBOL_PLAYER_TWO: char = 'B';

/// Empty point.
pub const SYMBOL_EMPTY: char = '.';
