//! Trace header and frame types.

use sokoban_core::{Action, RewardSignal};

/// Header of an action trace.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TraceHeader {
    /// Hash seed the episode was played with.
    pub seed: u64,
    /// [`layout_hash`](crate::layout_hash) of the board.
    pub layout_hash: u64,
}

/// One recorded step.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Frame {
    /// 1-based step number within the episode.
    pub step: u64,
    /// Action applied at this step.
    pub action: Action,
    /// State hash after the action.
    pub hash: u64,
    /// Reward signal raised by the action.
    pub reward: RewardSignal,
}
