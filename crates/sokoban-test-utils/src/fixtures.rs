//! Board fixtures.

use sokoban_core::Action;
use sokoban_engine::SokobanState;

use Action::{Down as D, Left as L, Right as R, Up as U};

/// Two rows: walls above, `agent | box | goal` below. Right solves it.
pub const SCENARIO: &str = "2|3|1|1|1|0|2|3";

/// The 10x10 four-box level used by the interactive play harness.
pub const TEN_BY_TEN: &str = "10|10|\
    01|01|01|01|01|01|01|01|01|01|\
    01|03|04|04|01|01|01|01|01|01|\
    01|04|02|02|04|01|01|01|01|01|\
    01|04|03|03|04|01|01|01|01|01|\
    01|04|02|03|01|01|01|01|01|01|\
    01|04|04|04|01|01|01|01|01|01|\
    01|04|01|01|01|01|01|01|01|01|\
    01|02|00|01|01|01|01|01|01|01|\
    01|04|04|01|01|01|01|01|01|01|\
    01|01|01|01|01|01|01|01|01|01";

/// A 3x3 room with one box one push from the goal's row.
pub const SMALL_ROOM: &str = "5|5|\
    1|1|1|1|1|\
    1|4|4|4|1|\
    1|4|2|3|1|\
    1|4|0|4|1|\
    1|1|1|1|1";

/// Two boxes side by side in an open 4x4 room.
pub const TWO_BOX_ROOM: &str = "6|6|\
    1|1|1|1|1|1|\
    1|4|4|4|4|1|\
    1|4|2|2|4|1|\
    1|3|4|0|3|1|\
    1|4|4|4|4|1|\
    1|1|1|1|1|1";

/// Two boxes in a 3x5 room with goals at opposite ends.
pub const TWO_BOX_WIDE: &str = "5|7|\
    1|1|1|1|1|1|1|\
    1|3|4|2|4|4|1|\
    1|4|2|0|4|3|1|\
    1|4|4|4|4|4|1|\
    1|1|1|1|1|1|1";

/// Boards small enough for [`crate::oracle::reachable_states`] to
/// enumerate completely.
pub const SMALL_BOARDS: &[&str] = &[SCENARIO, SMALL_ROOM, TWO_BOX_ROOM, TWO_BOX_WIDE];

/// A board together with an action sequence that solves it.
#[derive(Clone, Copy, Debug)]
pub struct Walkthrough {
    pub name: &'static str,
    pub board: &'static str,
    pub solution: &'static [Action],
}

impl Walkthrough {
    pub fn state(&self) -> SokobanState {
        match SokobanState::new(self.board) {
            Ok(state) => state,
            Err(e) => panic!("fixture {} does not parse: {e}", self.name),
        }
    }

    /// Every state along the solution, starting with the initial one.
    pub fn states(&self) -> Vec<SokobanState> {
        let mut state = self.state();
        let mut out = vec![state.clone()];
        for &action in self.solution {
            state.apply_action(action);
            out.push(state.clone());
        }
        out
    }
}

pub const WALKTHROUGHS: &[Walkthrough] = &[
    Walkthrough {
        name: "scenario",
        board: SCENARIO,
        solution: &[R],
    },
    Walkthrough {
        name: "small_room",
        board: SMALL_ROOM,
        solution: &[L, U, R],
    },
    Walkthrough {
        name: "two_box_room",
        board: TWO_BOX_ROOM,
        solution: &[R, U, U, L, D, L, U, L, D, R, D, R],
    },
    Walkthrough {
        name: "two_box_wide",
        board: TWO_BOX_WIDE,
        solution: &[D, L, L, U, R, R, R, U, L, L],
    },
    Walkthrough {
        name: "ten_by_ten",
        board: TEN_BY_TEN,
        solution: &[
            D, L, U, U, U, R, R, U, U, L, L, U, U, R, R, D, R, D, L, D, D, L, L, U, R, L, U, U,
            R, U, R, D,
        ],
    },
];
