//! Exhaustive breadth-first search over board states.
//!
//! Only meant for boards small enough to enumerate. States are keyed by
//! agent cell and the sorted box cells, so box identities never split
//! one position into several.

use std::collections::{HashMap, HashSet, VecDeque};

use sokoban_core::{Action, CellIndex};
use sokoban_engine::SokobanState;

/// Outcome of [`solve`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Solvability {
    /// A shortest solving action sequence.
    Solvable(Vec<Action>),
    /// Every reachable state was visited and none is solved.
    Unsolvable,
    /// The search hit the state limit first.
    Unknown,
}

type Key = (CellIndex, Vec<CellIndex>);

fn key(state: &SokobanState) -> Key {
    let mut boxes = state.box_cells().to_vec();
    boxes.sort_unstable();
    (state.agent_cell(), boxes)
}

/// Breadth-first search for a solution from `start`.
pub fn solve(start: &SokobanState, limit: usize) -> Solvability {
    let mut parents: HashMap<Key, Option<(Key, Action)>> = HashMap::new();
    let mut queue = VecDeque::new();
    parents.insert(key(start), None);
    queue.push_back(start.clone());

    while let Some(state) = queue.pop_front() {
        let here = key(&state);
        if state.is_solution() {
            let mut path = Vec::new();
            let mut cursor = here;
            while let Some(Some((prev, action))) = parents.get(&cursor).cloned() {
                path.push(action);
                cursor = prev;
            }
            path.reverse();
            return Solvability::Solvable(path);
        }
        for action in Action::ALL {
            let mut next = state.clone();
            next.apply_action(action);
            let k = key(&next);
            if parents.contains_key(&k) {
                continue;
            }
            parents.insert(k, Some((here.clone(), action)));
            if parents.len() > limit {
                return Solvability::Unknown;
            }
            queue.push_back(next);
        }
    }
    Solvability::Unsolvable
}

/// Every distinct state reachable from `start`, up to `limit` states.
pub fn reachable_states(start: &SokobanState, limit: usize) -> Vec<SokobanState> {
    let mut seen = HashSet::new();
    let mut queue = VecDeque::new();
    seen.insert(key(start));
    queue.push_back(start.clone());
    let mut out = Vec::new();

    while let Some(state) = queue.pop_front() {
        for action in Action::ALL {
            let mut next = state.clone();
            next.apply_action(action);
            if seen.len() < limit && seen.insert(key(&next)) {
                queue.push_back(next);
            }
        }
        out.push(state);
    }
    out
}
