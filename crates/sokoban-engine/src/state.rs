//! Per-instance dynamic state: agent cell, boxes, hash, reward.

use indexmap::IndexMap;
use smallvec::SmallVec;
use sokoban_board::BoardModel;
use sokoban_core::{BoxId, CellIndex, HashKind, RewardSignal};

// ── BoxSet ─────────────────────────────────────────────────────────

/// The boxes on the board, addressable by identity and by cell.
///
/// `slots[id]` is the cell of box `id`; `index[cell]` is the id of the
/// box on `cell`. The two views always describe the same boxes:
/// [`relocate`](BoxSet::relocate) is the only way to move a box, and it
/// updates both.
#[derive(Clone, Debug, Default)]
pub struct BoxSet {
    slots: SmallVec<[CellIndex; 8]>,
    index: IndexMap<CellIndex, BoxId>,
}

impl BoxSet {
    /// Build from box cells in identity order.
    pub fn from_cells(cells: &[CellIndex]) -> Self {
        let slots: SmallVec<[CellIndex; 8]> = cells.iter().copied().collect();
        let index = slots
            .iter()
            .enumerate()
            .map(|(i, &c)| (c, BoxId(i as u32)))
            .collect();
        Self { slots, index }
    }

    /// Number of boxes.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Whether the board has no boxes.
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Cell of box `id`.
    #[inline]
    pub fn cell(&self, id: BoxId) -> Option<CellIndex> {
        self.slots.get(id.get()).copied()
    }

    /// Id of the box on `cell`.
    #[inline]
    pub fn id_at(&self, cell: CellIndex) -> Option<BoxId> {
        self.index.get(&cell).copied()
    }

    /// Whether a box sits on `cell`.
    #[inline]
    pub fn contains(&self, cell: CellIndex) -> bool {
        self.index.contains_key(&cell)
    }

    /// Box cells in identity order.
    pub fn cells(&self) -> &[CellIndex] {
        &self.slots
    }

    /// `(id, cell)` pairs in identity order.
    pub fn iter(&self) -> impl Iterator<Item = (BoxId, CellIndex)> + '_ {
        self.slots
            .iter()
            .enumerate()
            .map(|(i, &c)| (BoxId(i as u32), c))
    }

    /// Move box `id` to the free cell `to`.
    ///
    /// # Panics
    ///
    /// Panics if `id` is not a box on this board. Callers look the id up
    /// with [`id_at`](BoxSet::id_at) first.
    pub fn relocate(&mut self, id: BoxId, to: CellIndex) {
        debug_assert!(!self.index.contains_key(&to), "box pushed onto box");
        let from = self.slots[id.get()];
        self.index.swap_remove(&from);
        self.index.insert(to, id);
        self.slots[id.get()] = to;
    }

    /// Whether both sets cover the same cells, ignoring identities.
    pub fn same_cells(&self, other: &BoxSet) -> bool {
        self.len() == other.len() && self.slots.iter().all(|c| other.contains(*c))
    }
}

// ── LocalState ─────────────────────────────────────────────────────

/// Everything a transition can change.
///
/// Cloning copies only this; the board is shared separately.
#[derive(Clone, Debug)]
pub struct LocalState {
    /// Cell the agent stands on.
    pub agent: CellIndex,
    /// Box positions and identities.
    pub boxes: BoxSet,
    /// Zobrist hash of the whole state, maintained incrementally.
    pub hash: u64,
    /// Events raised by the most recent transition.
    pub reward: RewardSignal,
}

impl LocalState {
    /// State at the board's initial placement.
    pub fn initial(board: &BoardModel) -> Self {
        let placement = board.initial();
        Self::at(board, placement.agent, &placement.boxes)
    }

    /// State with the agent and boxes at the given cells and a freshly
    /// computed hash. Placement validity is the caller's concern.
    pub fn at(board: &BoardModel, agent: CellIndex, boxes: &[CellIndex]) -> Self {
        let boxes = BoxSet::from_cells(boxes);
        let hash = full_hash(board, agent, &boxes);
        Self {
            agent,
            boxes,
            hash,
            reward: RewardSignal::NONE,
        }
    }
}

/// Hash of a placement computed from scratch.
pub fn full_hash(board: &BoardModel, agent: CellIndex, boxes: &BoxSet) -> u64 {
    let basis = board.basis();
    boxes
        .cells()
        .iter()
        .fold(board.static_hash() ^ basis.get(HashKind::Agent, agent), |h, &c| {
            h ^ basis.get(HashKind::Box, c)
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn relocate_keeps_views_in_lockstep() {
        let mut set = BoxSet::from_cells(&[CellIndex(4), CellIndex(9)]);
        set.relocate(BoxId(0), CellIndex(5));
        assert_eq!(set.cell(BoxId(0)), Some(CellIndex(5)));
        assert_eq!(set.id_at(CellIndex(5)), Some(BoxId(0)));
        assert_eq!(set.id_at(CellIndex(4)), None);
        assert_eq!(set.id_at(CellIndex(9)), Some(BoxId(1)));
        assert_eq!(set.cells(), &[CellIndex(5), CellIndex(9)]);
    }

    #[test]
    fn same_cells_ignores_identity() {
        let a = BoxSet::from_cells(&[CellIndex(1), CellIndex(2)]);
        let b = BoxSet::from_cells(&[CellIndex(2), CellIndex(1)]);
        let c = BoxSet::from_cells(&[CellIndex(2), CellIndex(3)]);
        assert!(a.same_cells(&b));
        assert!(!a.same_cells(&c));
    }

    #[test]
    fn initial_hash_matches_parts() {
        let board = BoardModel::new("2|3|1|1|1|0|2|3", 5).unwrap();
        let state = LocalState::initial(&board);
        let b = board.basis();
        let expected = board.static_hash()
            ^ b.get(HashKind::Agent, CellIndex(3))
            ^ b.get(HashKind::Box, CellIndex(4));
        assert_eq!(state.hash, expected);
        assert!(state.reward.is_empty());
    }
}
