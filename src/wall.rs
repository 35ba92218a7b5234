// Wall-hugging move selection
//
// The snake runs for the closest edge of the board and, once it is on an
// edge, circles the perimeter clockwise: rightward along the top row,
// downward along the right column, leftward along the bottom row and upward
// along the left column.
//
// Every rule below is an ordered guard chain. Later guards are only reached
// when earlier ones fail, so the order is the tie-break policy.

use serde::{Deserialize, Serialize};

use crate::types::{Battlesnake, Board, Coord, Direction};

/// Which half of the strategy produced a move
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    /// Head is strictly inside the board, heading for the nearest edge
    TowardWall,
    /// Head is on an edge, following the perimeter
    HugWall,
}

impl Phase {
    pub fn as_str(&self) -> &'static str {
        match self {
            Phase::TowardWall => "toward_wall",
            Phase::HugWall => "hug_wall",
        }
    }
}

/// Picks the next move for `you`. Only the head and the board size are read.
pub fn next_move(board: &Board, you: &Battlesnake) -> Direction {
    decide(board, you).0
}

/// Same as [`next_move`] but also reports which phase made the decision.
pub fn decide(board: &Board, you: &Battlesnake) -> (Direction, Phase) {
    let head = you.head_cell();
    debug_assert!(
        board.contains(&head),
        "head ({}, {}) is outside the {}x{} board",
        head.x,
        head.y,
        board.width,
        board.height
    );

    if against_wall(&head, board) {
        (hug_wall(&head, board), Phase::HugWall)
    } else {
        (toward_nearest_wall(&head, board), Phase::TowardWall)
    }
}

/// True when the head sits on any boundary cell.
/// A board one cell wide (or tall) is all wall in that dimension.
pub fn against_wall(head: &Coord, board: &Board) -> bool {
    head.x == 0 || head.x == board.max_x() || head.y == 0 || head.y == board.max_y()
}

/// Direction of the closest edge. Distances count the head's own cell, so a
/// head on an edge is at distance 1 from it.
///
/// Left and right win ties against up and down: right only has to match
/// top/bottom while up and down must be strictly closer, and left is the
/// fallback.
pub fn toward_nearest_wall(head: &Coord, board: &Board) -> Direction {
    let from_left = head.x + 1;
    let from_right = board.width - head.x;
    let from_top = head.y + 1;
    let from_bottom = board.height - head.y;

    if from_right < from_left && from_right <= from_top && from_right <= from_bottom {
        Direction::Right
    } else if from_top < from_left && from_top < from_bottom && from_top < from_right {
        Direction::Up
    } else if from_bottom < from_left && from_bottom < from_top && from_bottom < from_right {
        Direction::Down
    } else {
        Direction::Left
    }
}

/// Next clockwise step along the perimeter.
///
/// Corners fall out of the guard order: the top-right corner fails the
/// top-row guard and turns down, the bottom-right corner fails the
/// right-column guard and turns left. On boards one cell wide or tall the
/// same order makes the snake shuttle back and forth instead of circling.
pub fn hug_wall(head: &Coord, board: &Board) -> Direction {
    let (wix, hix) = (board.max_x(), board.max_y());

    if head.y == 0 && head.x < wix {
        Direction::Right
    } else if head.x == wix && head.y < hix {
        Direction::Down
    } else if head.y == hix && head.x > 0 && head.x <= wix {
        Direction::Left
    } else {
        // Left column, including the bottom cell of a one-cell-wide board and
        // the single cell of a 1x1 board
        Direction::Up
    }
}
