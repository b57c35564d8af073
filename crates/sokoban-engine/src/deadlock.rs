//! Deadlock detection.
//!
//! Each rule is a standalone predicate over `(board, state)`; a state is
//! deadlocked when any rule fires. Every rule is sound: it only fires on
//! states from which no sequence of actions can reach a solution. Rules
//! may miss deadlocks.

use sokoban_board::BoardModel;
use sokoban_core::{Action, CellIndex};

use crate::state::LocalState;

/// Whether any deadlock rule fires.
pub fn is_deadlocked(board: &BoardModel, state: &LocalState) -> bool {
    goal_unreachable(board, state) || corner(board, state) || frozen_pair(board, state)
}

/// A goal no box can ever reach, or a box that can never reach a goal.
///
/// Uses the per-goal pull tables of the board. An empty goal is dead when
/// no box, on a goal or not, sits in its table: boxes already on goals
/// may still be moved off to fill it. An off-goal box is dead when no
/// goal's table contains its cell.
pub fn goal_unreachable(board: &BoardModel, state: &LocalState) -> bool {
    let reach = board.reach();
    for (goal, from) in reach.iter() {
        if state.boxes.contains(goal) {
            continue;
        }
        if !state.boxes.cells().iter().any(|&c| from.contains(c)) {
            tracing::trace!(goal = goal.0, "no box can reach goal");
            return true;
        }
    }
    for &cell in state.boxes.cells() {
        if !board.is_goal(cell) && !reach.reaches_any_goal(cell) {
            tracing::trace!(cell = cell.0, "box cannot reach any goal");
            return true;
        }
    }
    false
}

/// An off-goal box wedged against a vertical and a horizontal obstacle.
///
/// Obstacles are walls and the grid edge. Other boxes do not count: they
/// might move away.
pub fn corner(board: &BoardModel, state: &LocalState) -> bool {
    let blocked = |cell: CellIndex, action: Action| {
        board
            .grid()
            .step(cell, action)
            .is_none_or(|n| board.is_wall(n))
    };
    for &cell in state.boxes.cells() {
        if board.is_goal(cell) {
            continue;
        }
        let vertical = blocked(cell, Action::Up) || blocked(cell, Action::Down);
        let horizontal = blocked(cell, Action::Left) || blocked(cell, Action::Right);
        if vertical && horizontal {
            tracing::trace!(cell = cell.0, "box in corner");
            return true;
        }
    }
    false
}

/// Two diagonally adjacent boxes locked into a full 2x2 block.
///
/// For boxes at `(r, c)` and `(r + dr, c + dc)`, the block is closed by
/// `(r, c + dc)` and `(r + dr, c)`. When both closing cells hold a wall
/// or a box, no box in the block can ever be pushed, so the state is
/// dead unless every box in the block already rests on a goal.
pub fn frozen_pair(board: &BoardModel, state: &LocalState) -> bool {
    let grid = board.grid();
    let solid = |cell: CellIndex| board.is_wall(cell) || state.boxes.contains(cell);
    let stuck_off_goal = |cell: CellIndex| state.boxes.contains(cell) && !board.is_goal(cell);

    for &cell in state.boxes.cells() {
        // Looking downwards only visits each diagonal pair once.
        for side in [Action::Left, Action::Right] {
            let Some(below) = grid.step(cell, Action::Down) else {
                continue;
            };
            let Some(diagonal) = grid.step(below, side) else {
                continue;
            };
            if !state.boxes.contains(diagonal) {
                continue;
            }
            let Some(beside) = grid.step(cell, side) else {
                continue;
            };
            if !(solid(beside) && solid(below)) {
                continue;
            }
            let block = [cell, beside, below, diagonal];
            if block.iter().any(|&c| stuck_off_goal(c)) {
                tracing::trace!(a = cell.0, b = diagonal.0, "frozen box pair");
                return true;
            }
        }
    }
    false
}
