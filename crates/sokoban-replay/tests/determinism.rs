//! End-to-end determinism: serialized states and recorded traces
//! reproduce the original run exactly.

use proptest::prelude::*;
use sokoban_core::Action;
use sokoban_engine::SokobanState;
use sokoban_replay::{deserialize, serialize, verify_trace, TraceReader, TraceWriter};
use sokoban_test_utils::fixtures::{TEN_BY_TEN, TWO_BOX_ROOM, TWO_BOX_WIDE};
use sokoban_test_utils::WALKTHROUGHS;

fn arb_actions(max: usize) -> impl Strategy<Value = Vec<Action>> {
    prop::collection::vec((0u8..4).prop_map(|c| Action::ALL[c as usize]), 0..max)
}

fn arb_board() -> impl Strategy<Value = &'static str> {
    prop_oneof![Just(TEN_BY_TEN), Just(TWO_BOX_ROOM), Just(TWO_BOX_WIDE)]
}

#[test]
fn walkthrough_traces_verify() {
    for walk in WALKTHROUGHS {
        let mut state = walk.state();
        let mut buf = Vec::new();
        let mut writer = TraceWriter::new(&mut buf, &state).unwrap();
        for &action in walk.solution {
            state.apply_action(action);
            writer.record(action, &state).unwrap();
        }
        assert_eq!(writer.frames_written(), walk.solution.len() as u64);
        drop(writer);

        let mut replay = walk.state();
        let reader = TraceReader::open(buf.as_slice()).unwrap();
        assert_eq!(verify_trace(reader, &mut replay).unwrap(), None, "{}", walk.name);
        assert!(replay.is_solution());
    }
}

proptest! {
    #[test]
    fn serialize_roundtrip_is_exact(
        board in arb_board(),
        seed in any::<u64>(),
        actions in arb_actions(80),
    ) {
        let mut state = SokobanState::with_seed(board, seed).unwrap();
        for a in actions {
            state.apply_action(a);
        }
        let bytes = serialize(&state);
        let back = deserialize(&bytes).unwrap();
        prop_assert_eq!(&back, &state);
        prop_assert_eq!(back.hash(), state.hash());
        prop_assert_eq!(back.reward_signal(), state.reward_signal());
        prop_assert_eq!(back.box_cells(), state.box_cells());
        prop_assert_eq!(serialize(&back), bytes);
    }

    #[test]
    fn decoded_state_continues_identically(
        board in arb_board(),
        prefix in arb_actions(40),
        suffix in arb_actions(40),
    ) {
        let mut original = SokobanState::with_seed(board, 99).unwrap();
        for a in prefix {
            original.apply_action(a);
        }
        let mut copy = deserialize(&serialize(&original)).unwrap();
        for a in suffix {
            original.apply_action(a);
            copy.apply_action(a);
            prop_assert_eq!(original.hash(), copy.hash());
            prop_assert_eq!(original.reward_signal(), copy.reward_signal());
        }
    }
}
