//! Known solutions: every state on a solving path is live, the final
//! state is solved, and the reward fires only where boxes land on goals.

use sokoban_core::RewardSignal;
use sokoban_test_utils::{init_tracing, WALKTHROUGHS};

#[test]
fn solutions_solve() {
    init_tracing();
    for walk in WALKTHROUGHS {
        let states = walk.states();
        let last = states.last().unwrap();
        assert!(last.is_solution(), "{} not solved", walk.name);
        assert!(
            last.reward_signal().contains(RewardSignal::ALL_BOXES_IN_GOAL),
            "{} final push did not report completion",
            walk.name
        );
        for earlier in &states[..states.len() - 1] {
            assert!(!earlier.is_solution(), "{} solved early", walk.name);
        }
    }
}

#[test]
fn no_state_on_a_solution_is_deadlocked() {
    for walk in WALKTHROUGHS {
        for (step, state) in walk.states().iter().enumerate() {
            assert!(
                !state.is_deadlocked(),
                "{} flagged deadlocked at step {step}:\n{state}",
                walk.name
            );
        }
    }
}

#[test]
fn solution_moves_survive_deadlock_filter() {
    for walk in WALKTHROUGHS {
        let mut state = walk.state();
        for &action in walk.solution {
            assert!(
                state.legal_actions_no_deadlocks().contains(&action),
                "{}: {action} filtered out",
                walk.name
            );
            state.apply_action(action);
        }
    }
}

#[test]
fn hash_stays_consistent_along_solutions() {
    for walk in WALKTHROUGHS {
        for state in walk.states() {
            assert_eq!(state.hash(), state.recompute_hash(), "{}", walk.name);
        }
    }
}

#[test]
fn ten_by_ten_box_queries() {
    let walk = WALKTHROUGHS
        .iter()
        .find(|w| w.name == "ten_by_ten")
        .unwrap();
    let state = walk.state();
    assert_eq!(state.box_count(), 4);
    assert_eq!(state.all_goal_cells().len(), 4);
    assert_eq!(state.all_box_ids().len(), 4);
    assert_eq!(
        state.solved_box_ids().len() + state.unsolved_box_ids().len(),
        4
    );
    assert_eq!(
        state.solved_goal_cells().len() + state.empty_goal_cells().len(),
        4
    );
}
