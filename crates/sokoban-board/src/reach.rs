//! Per-goal box reachability.
//!
//! For each goal, the set of cells from which a box could in principle be
//! pushed onto that goal if it were the only box on the board. Computed
//! by a breadth-first "pull" from the goal: a box can arrive at `c` from
//! `n = c + d` only if the agent can stand at `n + d` to push it, so `n`
//! is admitted only when both `n` and `n + d` are not walls.

use std::collections::VecDeque;

use sokoban_core::{CellIndex, CellSet, Terrain};
use sokoban_space::Grid;

/// Reachability tables for every goal on a board.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GoalReach {
    goals: Vec<CellIndex>,
    sets: Vec<CellSet>,
    any: CellSet,
}

impl GoalReach {
    /// Build the table for every goal cell of `terrain`.
    pub fn compute(grid: &Grid, terrain: &[Terrain]) -> Self {
        let goals: Vec<CellIndex> = grid
            .cells()
            .filter(|c| terrain[c.get()] == Terrain::Goal)
            .collect();
        let sets: Vec<CellSet> = goals
            .iter()
            .map(|&g| pull_reach(grid, terrain, g))
            .collect();
        let any = sets
            .iter()
            .fold(CellSet::with_capacity(grid.cell_count()), |acc, s| {
                acc.union(s)
            });
        Self { goals, sets, any }
    }

    /// Goal cells, in row-major order.
    pub fn goals(&self) -> &[CellIndex] {
        &self.goals
    }

    /// Iterate `(goal, reachable-from set)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (CellIndex, &CellSet)> {
        self.goals.iter().copied().zip(self.sets.iter())
    }

    /// The reachable-from set of a goal, if `goal` is one.
    pub fn for_goal(&self, goal: CellIndex) -> Option<&CellSet> {
        self.goals
            .binary_search(&goal)
            .ok()
            .map(|i| &self.sets[i])
    }

    /// Whether a box at `cell` could reach at least one goal.
    #[inline]
    pub fn reaches_any_goal(&self, cell: CellIndex) -> bool {
        self.any.contains(cell)
    }
}

fn pull_reach(grid: &Grid, terrain: &[Terrain], goal: CellIndex) -> CellSet {
    let open = |c: CellIndex| terrain[c.get()] != Terrain::Wall;
    let mut reach = CellSet::with_capacity(grid.cell_count());
    let mut queue = VecDeque::new();

    reach.insert(goal);
    queue.push_back(goal);
    while let Some(cell) = queue.pop_front() {
        for (dir, n) in grid.neighbours(cell) {
            if !open(n) || reach.contains(n) {
                continue;
            }
            let pusher_open = grid.step(n, dir).is_some_and(open);
            if pusher_open && reach.insert(n) {
                queue.push_back(n);
            }
        }
    }
    reach
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse_board;
    use proptest::prelude::*;

    fn arb_layout() -> impl Strategy<Value = (Grid, Vec<Terrain>)> {
        (1u32..8, 1u32..8).prop_flat_map(|(rows, cols)| {
            let terrain = prop::sample::select(vec![Terrain::Wall, Terrain::Goal, Terrain::Empty]);
            prop::collection::vec(terrain, (rows * cols) as usize)
                .prop_map(move |t| (Grid::new(rows, cols).unwrap(), t))
        })
    }

    fn reach_for(encoding: &str) -> (Grid, GoalReach) {
        let parsed = parse_board(encoding).unwrap();
        let reach = GoalReach::compute(&parsed.grid, &parsed.terrain);
        (parsed.grid, reach)
    }

    #[test]
    fn corridor_reaches_only_pushable_cells() {
        // 1x5 open corridor, goal at col 0.
        // A box at col 3 can be pushed left (agent at col 4).
        // A box at col 4 cannot: the pusher would need col 5.
        let (grid, reach) = reach_for("1|5|3|4|4|2|0");
        let set = reach.for_goal(CellIndex(0)).unwrap();
        let cols: Vec<u32> = set.iter().map(|c| grid.coord(c).1).collect();
        assert_eq!(cols, vec![0, 1, 2, 3]);
        assert!(!reach.reaches_any_goal(CellIndex(4)));
    }

    #[test]
    fn walls_cut_reach() {
        // 1x5: goal | empty | wall | box | agent
        let (_, reach) = reach_for("1|5|3|4|1|2|0");
        let set = reach.for_goal(CellIndex(0)).unwrap();
        assert!(set.contains(CellIndex(0)));
        assert!(!set.contains(CellIndex(1)));
        assert!(!set.contains(CellIndex(3)));
    }

    #[test]
    fn goal_reaches_itself() {
        let (_, reach) = reach_for("2|3|1|1|1|0|2|3");
        assert!(reach.for_goal(CellIndex(5)).unwrap().contains(CellIndex(5)));
        assert!(reach.for_goal(CellIndex(0)).is_none());
    }

    #[test]
    fn open_room_interior_reaches_goal() {
        let board = "5|5|\
            1|1|1|1|1|\
            1|4|4|4|1|\
            1|4|2|3|1|\
            1|0|4|4|1|\
            1|1|1|1|1";
        let (grid, reach) = reach_for(board);
        let set = reach.for_goal(grid.index(2, 3).unwrap()).unwrap();
        assert!(set.contains(grid.index(2, 2).unwrap()));
        // Interior corners are never pushable away from.
        assert!(!set.contains(grid.index(1, 1).unwrap()));
        assert!(!set.contains(grid.index(3, 1).unwrap()));
    }

    proptest! {
        #[test]
        fn reach_sets_stay_off_walls((grid, terrain) in arb_layout()) {
            let reach = GoalReach::compute(&grid, &terrain);
            for (goal, set) in reach.iter() {
                prop_assert!(set.contains(goal));
                for cell in set.iter() {
                    prop_assert!(grid.contains(cell));
                    prop_assert_ne!(terrain[cell.get()], Terrain::Wall);
                }
            }
        }

        #[test]
        fn every_goal_has_a_table((grid, terrain) in arb_layout()) {
            let reach = GoalReach::compute(&grid, &terrain);
            let goals = terrain.iter().filter(|&&t| t == Terrain::Goal).count();
            prop_assert_eq!(reach.goals().len(), goals);
            for &goal in reach.goals() {
                prop_assert!(reach.for_goal(goal).is_some());
            }
        }

        #[test]
        fn any_goal_is_union_of_tables((grid, terrain) in arb_layout()) {
            let reach = GoalReach::compute(&grid, &terrain);
            for cell in grid.cells() {
                let in_some = reach.iter().any(|(_, set)| set.contains(cell));
                prop_assert_eq!(reach.reaches_any_goal(cell), in_some);
            }
        }
    }
}
