//! Channel-major observation tensors.
//!
//! Layout is `(channel, row, col)`: element `[k][r][c]` lives at
//! `k * rows * cols + r * cols + c`. Every element is 0.0 or 1.0.
//!
//! [`ObsDensity::Compact`] has four channels (agent 0, wall 1, box 2,
//! goal 3). An agent or box on a goal sets both its own channel and the
//! goal channel; plain floor sets none. [`ObsDensity::Expanded`]
//! has one channel per [`Element`] code, and exactly one is set per cell.

use sokoban_core::{CellFlags, Element};
use sokoban_engine::{ObsDensity, SokobanState};

use crate::error::ObsError;

/// Shape `[channels, rows, cols]` of the tensor for `density`.
pub fn observation_shape(state: &SokobanState, density: ObsDensity) -> [usize; 3] {
    [
        density.channels(),
        state.rows() as usize,
        state.cols() as usize,
    ]
}

/// Number of `f32` elements in the tensor for `density`.
pub fn observation_len(state: &SokobanState, density: ObsDensity) -> usize {
    observation_shape(state, density).iter().product()
}

/// Allocate and fill an observation tensor.
///
/// # Examples
///
/// ```
/// use sokoban_engine::{ObsDensity, SokobanState};
/// use sokoban_obs::{get_observation, observation_shape};
///
/// let state = SokobanState::new("2|3|1|1|1|0|2|3").unwrap();
/// let obs = get_observation(&state, ObsDensity::Compact);
/// assert_eq!(observation_shape(&state, ObsDensity::Compact), [4, 2, 3]);
/// assert_eq!(obs.len(), 24);
/// // Agent channel, row 1, col 0.
/// assert_eq!(obs[3], 1.0);
/// ```
pub fn get_observation(state: &SokobanState, density: ObsDensity) -> Vec<f32> {
    let mut out = vec![0.0; observation_len(state, density)];
    fill(state, density, &mut out);
    out
}

/// Fill a caller-owned tensor, overwriting all of it.
pub fn write_observation(
    state: &SokobanState,
    density: ObsDensity,
    out: &mut [f32],
) -> Result<(), ObsError> {
    let expected = observation_len(state, density);
    if out.len() != expected {
        return Err(ObsError::BufferSizeMismatch {
            expected,
            found: out.len(),
        });
    }
    out.fill(0.0);
    fill(state, density, out);
    Ok(())
}

fn fill(state: &SokobanState, density: ObsDensity, out: &mut [f32]) {
    let plane = state.board().cell_count();
    for cell in state.board().grid().cells() {
        let flags = state.cell_flags(cell);
        let i = cell.get();
        match density {
            ObsDensity::Compact => {
                for (channel, flag) in COMPACT_CHANNELS.iter().enumerate() {
                    if flags.contains(*flag) {
                        out[channel * plane + i] = 1.0;
                    }
                }
            }
            ObsDensity::Expanded => {
                let channel = expanded_element(flags).code() as usize;
                out[channel * plane + i] = 1.0;
            }
        }
    }
}

const COMPACT_CHANNELS: [CellFlags; 4] = [
    CellFlags::AGENT,
    CellFlags::WALL,
    CellFlags::BOX,
    CellFlags::GOAL,
];

fn expanded_element(flags: CellFlags) -> Element {
    let goal = flags.contains(CellFlags::GOAL);
    if flags.contains(CellFlags::WALL) {
        Element::Wall
    } else if flags.contains(CellFlags::AGENT) {
        if goal {
            Element::AgentOnGoal
        } else {
            Element::Agent
        }
    } else if flags.contains(CellFlags::BOX) {
        if goal {
            Element::BoxOnGoal
        } else {
            Element::Box
        }
    } else if goal {
        Element::Goal
    } else {
        Element::Empty
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sokoban_core::Action;

    const SCENARIO: &str = "2|3|1|1|1|0|2|3";

    fn channel(obs: &[f32], plane: usize, k: usize) -> &[f32] {
        &obs[k * plane..(k + 1) * plane]
    }

    #[test]
    fn compact_overlays_set_two_channels() {
        let mut state = SokobanState::new(SCENARIO).unwrap();
        state.apply_action(Action::Right);
        let obs = get_observation(&state, ObsDensity::Compact);
        assert_eq!(channel(&obs, 6, 0), &[0.0, 0.0, 0.0, 0.0, 1.0, 0.0]);
        assert_eq!(channel(&obs, 6, 1), &[1.0, 1.0, 1.0, 0.0, 0.0, 0.0]);
        assert_eq!(channel(&obs, 6, 2), &[0.0, 0.0, 0.0, 0.0, 0.0, 1.0]);
        assert_eq!(channel(&obs, 6, 3), &[0.0, 0.0, 0.0, 0.0, 0.0, 1.0]);
    }

    #[test]
    fn expanded_sets_exactly_one_channel() {
        let mut state = SokobanState::new(SCENARIO).unwrap();
        state.apply_action(Action::Right);
        let obs = get_observation(&state, ObsDensity::Expanded);
        assert_eq!(obs.len(), 7 * 6);
        for cell in 0..6 {
            let set: f32 = (0..7).map(|k| obs[k * 6 + cell]).sum();
            assert_eq!(set, 1.0, "cell {cell}");
        }
        assert_eq!(obs[Element::Empty.code() as usize * 6 + 3], 1.0);
        assert_eq!(obs[Element::Agent.code() as usize * 6 + 4], 1.0);
        assert_eq!(obs[Element::BoxOnGoal.code() as usize * 6 + 5], 1.0);
    }

    #[test]
    fn write_observation_overwrites_and_checks_len() {
        let state = SokobanState::new(SCENARIO).unwrap();
        let mut buf = vec![9.0; 24];
        write_observation(&state, ObsDensity::Compact, &mut buf).unwrap();
        assert_eq!(buf, get_observation(&state, ObsDensity::Compact));

        let mut short = vec![0.0; 23];
        assert_eq!(
            write_observation(&state, ObsDensity::Compact, &mut short),
            Err(ObsError::BufferSizeMismatch {
                expected: 24,
                found: 23
            })
        );
    }

    #[test]
    fn expanded_element_covers_reachable_flags() {
        let cases = [
            (CellFlags::EMPTY, Element::Empty),
            (CellFlags::AGENT, Element::Agent),
            (CellFlags::WALL, Element::Wall),
            (CellFlags::BOX, Element::Box),
            (CellFlags::GOAL, Element::Goal),
            (CellFlags::AGENT | CellFlags::GOAL, Element::AgentOnGoal),
            (CellFlags::BOX | CellFlags::GOAL, Element::BoxOnGoal),
        ];
        for (flags, element) in cases {
            assert_eq!(expanded_element(flags), element);
        }
    }
}
