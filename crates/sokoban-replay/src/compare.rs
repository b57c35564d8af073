//! Trace verification.
//!
//! Replays recorded actions and compares each resulting hash and reward
//! with the recording, stopping at the first step that disagrees.

use std::io::Read;

use sokoban_core::{Action, RewardSignal};
use sokoban_engine::SokobanState;

use crate::error::CodecError;
use crate::hash::layout_hash;
use crate::reader::TraceReader;

/// The first step at which a replay disagreed with its recording.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Divergence {
    /// Step number from the trace.
    pub step: u64,
    /// Action applied at that step.
    pub action: Action,
    /// Hash stored in the trace.
    pub recorded_hash: u64,
    /// Hash produced by the replay.
    pub replayed_hash: u64,
    /// Reward stored in the trace.
    pub recorded_reward: RewardSignal,
    /// Reward produced by the replay.
    pub replayed_reward: RewardSignal,
}

/// Replay a trace through a caller-provided step function.
///
/// `step_fn` applies one action and returns the hash and reward of the
/// resulting state. Returns `Ok(None)` when every step matches.
pub fn replay_and_compare<R: Read>(
    mut reader: TraceReader<R>,
    step_fn: &mut dyn FnMut(Action) -> (u64, RewardSignal),
) -> Result<Option<Divergence>, CodecError> {
    while let Some(frame) = reader.next_frame()? {
        let (hash, reward) = step_fn(frame.action);
        if hash != frame.hash || reward != frame.reward {
            tracing::debug!(step = frame.step, "trace diverged");
            return Ok(Some(Divergence {
                step: frame.step,
                action: frame.action,
                recorded_hash: frame.hash,
                replayed_hash: hash,
                recorded_reward: frame.reward,
                replayed_reward: reward,
            }));
        }
    }
    Ok(None)
}

/// Replay a trace on `state`'s board.
///
/// The state is reset to its initial placement with the trace's seed,
/// so hashes are comparable. Fails with [`CodecError::LayoutMismatch`]
/// when the trace was recorded on a different board.
pub fn verify_trace<R: Read>(
    reader: TraceReader<R>,
    state: &mut SokobanState,
) -> Result<Option<Divergence>, CodecError> {
    let header = *reader.header();
    let current = layout_hash(state.board());
    if header.layout_hash != current {
        return Err(CodecError::LayoutMismatch {
            recorded: header.layout_hash,
            current,
        });
    }
    state.reset_with_seed(header.seed);
    replay_and_compare(reader, &mut |action| {
        state.apply_action(action);
        (state.hash(), state.reward_signal())
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Frame;
    use crate::writer::TraceWriter;

    const BOARD: &str = "1|6|0|2|3|4|2|3";

    fn record(seed: u64, actions: &[Action]) -> Vec<u8> {
        let mut state = SokobanState::with_seed(BOARD, seed).unwrap();
        let mut buf = Vec::new();
        let mut writer = TraceWriter::new(&mut buf, &state).unwrap();
        for &a in actions {
            state.apply_action(a);
            writer.record(a, &state).unwrap();
        }
        drop(writer);
        buf
    }

    #[test]
    fn faithful_replay_matches() {
        let actions = [Action::Right, Action::Left, Action::Right, Action::Right];
        let bytes = record(11, &actions);
        let mut state = SokobanState::new(BOARD).unwrap();
        let reader = TraceReader::open(bytes.as_slice()).unwrap();
        assert_eq!(verify_trace(reader, &mut state).unwrap(), None);
        assert_eq!(state.seed(), 11);
    }

    #[test]
    fn reports_first_divergent_step() {
        let bytes = record(0, &[Action::Left, Action::Right, Action::Right]);
        let reader = TraceReader::open(bytes.as_slice()).unwrap();
        let mut state = SokobanState::new(BOARD).unwrap();
        let mut step = 0;
        let report = replay_and_compare(reader, &mut |action| {
            step += 1;
            // Replace the second action with a wall bump.
            let action = if step == 2 { Action::Up } else { action };
            state.apply_action(action);
            (state.hash(), state.reward_signal())
        })
        .unwrap()
        .unwrap();
        assert_eq!(report.step, 2);
        assert_eq!(report.action, Action::Right);
        assert_ne!(report.recorded_hash, report.replayed_hash);
    }

    #[test]
    fn reward_difference_counts_as_divergence() {
        let mut state = SokobanState::new(BOARD).unwrap();
        let mut buf = Vec::new();
        let mut writer = TraceWriter::new(&mut buf, &state).unwrap();
        state.apply_action(Action::Right);
        writer
            .write_raw_frame(&Frame {
                step: 1,
                action: Action::Right,
                hash: state.hash(),
                reward: RewardSignal::NONE,
            })
            .unwrap();
        drop(writer);

        let mut replay = SokobanState::new(BOARD).unwrap();
        let reader = TraceReader::open(buf.as_slice()).unwrap();
        let report = verify_trace(reader, &mut replay).unwrap().unwrap();
        assert_eq!(report.replayed_reward, RewardSignal::BOX_IN_GOAL);
    }

    #[test]
    fn rejects_other_layouts() {
        let bytes = record(0, &[Action::Right]);
        let mut other = SokobanState::new("2|3|1|1|1|0|2|3").unwrap();
        let reader = TraceReader::open(bytes.as_slice()).unwrap();
        assert!(matches!(
            verify_trace(reader, &mut other),
            Err(CodecError::LayoutMismatch { .. })
        ));
    }
}
