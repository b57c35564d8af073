//! [`SokobanState`]: the public face of the engine.

use std::fmt;
use std::sync::Arc;

use smallvec::SmallVec;
use sokoban_board::{BoardError, BoardModel};
use sokoban_core::{Action, BoxId, CellFlags, CellIndex, RewardSignal, StateError, Terrain};

use crate::config::{ConfigError, GameConfig};
use crate::deadlock;
use crate::state::LocalState;
use crate::transition;

/// One Sokoban game state.
///
/// The static board is held behind an `Arc` and shared by every clone;
/// cloning a state copies only the agent cell, the boxes, the hash and
/// the reward signal, which makes branching in a search cheap.
///
/// Two states are equal when they have the same layout, the same agent
/// cell and boxes on the same cells. Box identities and hash seeds are
/// ignored.
///
/// # Examples
///
/// ```
/// use sokoban_engine::SokobanState;
/// use sokoban_core::Action;
///
/// let mut state = SokobanState::new("2|3|1|1|1|0|2|3").unwrap();
/// assert!(!state.is_solution());
/// state.apply_action(Action::Right);
/// assert!(state.is_solution());
/// assert!(!state.reward_signal().is_empty());
/// ```
#[derive(Clone, Debug)]
pub struct SokobanState {
    board: Arc<BoardModel>,
    local: LocalState,
}

impl SokobanState {
    // ── Construction ───────────────────────────────────────────────

    /// Parse `encoding` and start at its initial placement with hash
    /// seed 0.
    pub fn new(encoding: &str) -> Result<Self, BoardError> {
        Self::with_seed(encoding, 0)
    }

    /// Parse `encoding` and draw the hash basis from `seed`.
    pub fn with_seed(encoding: &str, seed: u64) -> Result<Self, BoardError> {
        Ok(Self::from_board(Arc::new(BoardModel::new(encoding, seed)?)))
    }

    /// Build from a validated [`GameConfig`].
    pub fn from_config(config: &GameConfig) -> Result<Self, ConfigError> {
        Ok(Self::with_seed(&config.board, config.seed)?)
    }

    /// Start a new game on a shared board, at its initial placement.
    pub fn from_board(board: Arc<BoardModel>) -> Self {
        let local = LocalState::initial(&board);
        Self { board, local }
    }

    /// Rebuild a state whose last transition raised `reward`.
    ///
    /// Used by decoders: the board's initial placement is the decoded
    /// position.
    pub fn restore(board: Arc<BoardModel>, reward: RewardSignal) -> Self {
        let mut state = Self::from_board(board);
        state.local.reward = reward;
        state
    }

    /// Return to the initial placement, keeping the hash basis.
    pub fn reset(&mut self) {
        self.local = LocalState::initial(&self.board);
    }

    /// Return to the initial placement with a basis drawn from `seed`.
    ///
    /// The new board is not shared with states cloned before the call.
    pub fn reset_with_seed(&mut self, seed: u64) {
        self.board = Arc::new(self.board.reseeded(seed));
        self.reset();
    }

    // ── Transitions ────────────────────────────────────────────────

    /// Apply one action. Illegal moves leave the position unchanged and
    /// clear the reward signal.
    pub fn apply_action(&mut self, action: Action) {
        transition::apply_action(&self.board, &mut self.local, action);
    }

    /// Every action. Moves into walls or immovable boxes are accepted
    /// and resolve to no-ops.
    pub fn legal_actions(&self) -> [Action; Action::COUNT] {
        Action::ALL
    }

    /// Actions whose successor is not detectably deadlocked.
    pub fn legal_actions_no_deadlocks(&self) -> SmallVec<[Action; 4]> {
        Action::ALL
            .iter()
            .copied()
            .filter(|&a| {
                let mut next = self.local.clone();
                transition::apply_action(&self.board, &mut next, a);
                !deadlock::is_deadlocked(&self.board, &next)
            })
            .collect()
    }

    // ── Predicates ─────────────────────────────────────────────────

    /// Whether every box rests on a goal.
    pub fn is_solution(&self) -> bool {
        transition::is_solution(&self.board, &self.local)
    }

    /// Whether the state provably cannot be solved.
    pub fn is_deadlocked(&self) -> bool {
        deadlock::is_deadlocked(&self.board, &self.local)
    }

    // ── Queries ────────────────────────────────────────────────────

    /// The shared board.
    pub fn board(&self) -> &Arc<BoardModel> {
        &self.board
    }

    /// Read-only view of the dynamic part.
    pub fn local(&self) -> &LocalState {
        &self.local
    }

    /// Incrementally maintained Zobrist hash.
    pub fn hash(&self) -> u64 {
        self.local.hash
    }

    /// Hash recomputed from scratch; always equal to [`hash`](Self::hash).
    pub fn recompute_hash(&self) -> u64 {
        transition::recompute_hash(&self.board, &self.local)
    }

    /// Events raised by the last action.
    pub fn reward_signal(&self) -> RewardSignal {
        self.local.reward
    }

    /// Seed of the hash basis.
    pub fn seed(&self) -> u64 {
        self.board.seed()
    }

    /// Number of rows.
    pub fn rows(&self) -> u32 {
        self.board.rows()
    }

    /// Number of columns.
    pub fn cols(&self) -> u32 {
        self.board.cols()
    }

    /// Agent cell.
    pub fn agent_cell(&self) -> CellIndex {
        self.local.agent
    }

    /// Box cells in identity order.
    pub fn box_cells(&self) -> &[CellIndex] {
        self.local.boxes.cells()
    }

    /// Number of boxes.
    pub fn box_count(&self) -> usize {
        self.local.boxes.len()
    }

    /// Cell of box `id`.
    pub fn box_cell(&self, id: BoxId) -> Result<CellIndex, StateError> {
        self.local
            .boxes
            .cell(id)
            .ok_or(StateError::UnknownBoxIdentity {
                id,
                box_count: self.local.boxes.len(),
            })
    }

    /// Every box id.
    pub fn all_box_ids(&self) -> Vec<BoxId> {
        self.local.boxes.iter().map(|(id, _)| id).collect()
    }

    /// Ids of boxes on goals.
    pub fn solved_box_ids(&self) -> Vec<BoxId> {
        self.box_ids_where(true)
    }

    /// Ids of boxes off goals.
    pub fn unsolved_box_ids(&self) -> Vec<BoxId> {
        self.box_ids_where(false)
    }

    fn box_ids_where(&self, on_goal: bool) -> Vec<BoxId> {
        self.local
            .boxes
            .iter()
            .filter(|&(_, c)| self.board.is_goal(c) == on_goal)
            .map(|(id, _)| id)
            .collect()
    }

    /// Every goal cell, row-major.
    pub fn all_goal_cells(&self) -> &[CellIndex] {
        self.board.goal_cells()
    }

    /// Goal cells holding a box.
    pub fn solved_goal_cells(&self) -> Vec<CellIndex> {
        self.goal_cells_where(true)
    }

    /// Goal cells without a box.
    pub fn empty_goal_cells(&self) -> Vec<CellIndex> {
        self.goal_cells_where(false)
    }

    fn goal_cells_where(&self, filled: bool) -> Vec<CellIndex> {
        self.board
            .goal_cells()
            .iter()
            .copied()
            .filter(|&g| self.local.boxes.contains(g) == filled)
            .collect()
    }

    /// What occupies `cell`.
    pub fn cell_flags(&self, cell: CellIndex) -> CellFlags {
        let mut flags = match self.board.terrain(cell) {
            Terrain::Wall => CellFlags::WALL,
            Terrain::Goal => CellFlags::GOAL,
            Terrain::Empty => CellFlags::EMPTY,
        };
        if cell == self.local.agent {
            flags |= CellFlags::AGENT;
        }
        if self.local.boxes.contains(cell) {
            flags |= CellFlags::BOX;
        }
        flags
    }
}

impl PartialEq for SokobanState {
    fn eq(&self, other: &Self) -> bool {
        self.board.layout_eq(&other.board)
            && self.local.agent == other.local.agent
            && self.local.boxes.same_cells(&other.local.boxes)
    }
}

impl Eq for SokobanState {}

impl fmt::Display for SokobanState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let grid = self.board.grid();
        for cell in grid.cells() {
            let glyph = self.cell_flags(cell).glyph().unwrap_or('?');
            write!(f, "{glyph}")?;
            if grid.coord(cell).1 + 1 == grid.cols() {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SCENARIO: &str = "2|3|1|1|1|0|2|3";

    #[test]
    fn scenario_push_solves() {
        let mut state = SokobanState::new(SCENARIO).unwrap();
        assert!(state.reward_signal().is_empty());
        assert_eq!(state.unsolved_box_ids(), vec![BoxId(0)]);
        assert_eq!(state.empty_goal_cells(), vec![CellIndex(5)]);
        state.apply_action(Action::Right);
        assert!(state.is_solution());
        assert!(!state.reward_signal().is_empty());
        assert_eq!(state.solved_box_ids(), vec![BoxId(0)]);
        assert_eq!(state.solved_goal_cells(), vec![CellIndex(5)]);
        assert!(state.empty_goal_cells().is_empty());
    }

    #[test]
    fn unknown_box_identity() {
        let state = SokobanState::new(SCENARIO).unwrap();
        assert_eq!(state.box_cell(BoxId(0)), Ok(CellIndex(4)));
        assert_eq!(
            state.box_cell(BoxId(1)),
            Err(StateError::UnknownBoxIdentity {
                id: BoxId(1),
                box_count: 1
            })
        );
    }

    #[test]
    fn display_renders_glyphs() {
        let mut state = SokobanState::new(SCENARIO).unwrap();
        assert_eq!(state.to_string(), "###\n@*$\n");
        state.apply_action(Action::Right);
        assert_eq!(state.to_string(), "###\n @!\n");
    }

    #[test]
    fn reset_restores_initial_placement() {
        let mut state = SokobanState::with_seed(SCENARIO, 9).unwrap();
        let start = state.clone();
        state.apply_action(Action::Right);
        assert_ne!(state, start);
        state.reset();
        assert_eq!(state, start);
        assert_eq!(state.hash(), start.hash());
    }

    #[test]
    fn reset_with_seed_changes_hash_not_equality() {
        let mut state = SokobanState::with_seed(SCENARIO, 1).unwrap();
        let start = state.clone();
        state.reset_with_seed(2);
        assert_eq!(state, start);
        assert_ne!(state.hash(), start.hash());
        assert_eq!(state.seed(), 2);
        assert_eq!(start.seed(), 1);
    }

    #[test]
    fn equality_ignores_box_identity() {
        let a = SokobanState::new("3|3|2|4|2|4|0|4|3|4|3").unwrap();
        let board = Arc::clone(a.board());
        let mut b = SokobanState::from_board(board);
        assert_eq!(a, b);
        b.local.boxes = crate::state::BoxSet::from_cells(&[CellIndex(2), CellIndex(0)]);
        assert_eq!(a, b);
    }

    #[test]
    fn clones_share_the_board() {
        let a = SokobanState::new(SCENARIO).unwrap();
        let b = a.clone();
        assert!(Arc::ptr_eq(a.board(), b.board()));
    }

    #[test]
    fn legal_actions_filter_deadlocks() {
        // Pushing the box up pins it to the top wall, away from the goal row.
        let board = "5|5|\
            1|1|1|1|1|\
            1|4|4|4|1|\
            1|4|2|3|1|\
            1|4|0|4|1|\
            1|1|1|1|1";
        let state = SokobanState::new(board).unwrap();
        assert_eq!(state.legal_actions().len(), 4);
        assert!(!state.is_deadlocked());
        let safe = state.legal_actions_no_deadlocks();
        assert!(!safe.contains(&Action::Up));
        assert!(safe.contains(&Action::Right));
    }
}
