//! Move and push resolution with incremental hash maintenance.

use sokoban_board::BoardModel;
use sokoban_core::{Action, CellIndex, HashKind, RewardSignal, Terrain};

use crate::state::{full_hash, LocalState};

/// Whether the agent or a box may enter `cell`: not a wall, no box.
#[inline]
pub fn is_traversible(board: &BoardModel, state: &LocalState, cell: CellIndex) -> bool {
    !board.is_wall(cell) && !state.boxes.contains(cell)
}

/// Whether every box rests on a goal.
pub fn is_solution(board: &BoardModel, state: &LocalState) -> bool {
    state.boxes.cells().iter().all(|&c| board.is_goal(c))
}

/// Resolve one agent action. Total: an action that cannot be carried
/// out leaves everything but the reward signal untouched.
///
/// 1. The reward signal is cleared.
/// 2. A destination off the grid or on a wall is a no-op.
/// 3. A free destination moves the agent.
/// 4. A box on the destination is pushed if the cell behind it is free;
///    the box moves first, then the agent. Landing the box on a goal
///    raises [`RewardSignal::BOX_IN_GOAL`], and
///    [`RewardSignal::ALL_BOXES_IN_GOAL`] when that completes the board.
/// 5. Anything else is a no-op.
pub fn apply_action(board: &BoardModel, state: &mut LocalState, action: Action) {
    state.reward = RewardSignal::NONE;
    let grid = board.grid();
    let Some(dest) = grid.step(state.agent, action) else {
        return;
    };

    if is_traversible(board, state, dest) {
        move_agent(board, state, dest);
        return;
    }

    let Some(id) = state.boxes.id_at(dest) else {
        return;
    };
    let Some(beyond) = grid.step(dest, action) else {
        return;
    };
    if !is_traversible(board, state, beyond) {
        return;
    }

    let basis = board.basis();
    state.hash ^= basis.get(HashKind::Box, dest);
    state.boxes.relocate(id, beyond);
    state.hash ^= basis.get(HashKind::Box, beyond);
    if board.terrain(beyond) == Terrain::Goal {
        state.reward.insert(RewardSignal::BOX_IN_GOAL);
        if is_solution(board, state) {
            state.reward.insert(RewardSignal::ALL_BOXES_IN_GOAL);
        }
    }
    tracing::trace!(
        box_id = id.0,
        from = dest.0,
        to = beyond.0,
        reward = state.reward.bits(),
        "pushed box"
    );
    move_agent(board, state, dest);
}

fn move_agent(board: &BoardModel, state: &mut LocalState, to: CellIndex) {
    let basis = board.basis();
    state.hash ^= basis.get(HashKind::Agent, state.agent);
    state.agent = to;
    state.hash ^= basis.get(HashKind::Agent, to);
}

/// The hash of `state` recomputed from scratch, ignoring the
/// incrementally maintained value.
pub fn recompute_hash(board: &BoardModel, state: &LocalState) -> u64 {
    full_hash(board, state.agent, &state.boxes)
}
