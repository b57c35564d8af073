//! The immutable board shared by every state of an episode.

use sokoban_core::{CellIndex, HashKind, MalformedBoard, Terrain};
use sokoban_space::Grid;

use crate::error::BoardError;
use crate::parser::{parse_board, InitialPlacement};
use crate::reach::GoalReach;
use crate::zobrist::HashBasis;

/// Static layout of a Sokoban board.
///
/// Holds everything that never changes during an episode: geometry,
/// terrain, the Zobrist basis, the per-goal reachability tables, and the
/// initial placement used by reset. States share one model through an
/// `Arc` and never mutate it.
#[derive(Clone, Debug)]
pub struct BoardModel {
    grid: Grid,
    terrain: Vec<Terrain>,
    basis: HashBasis,
    reach: GoalReach,
    initial: InitialPlacement,
    static_hash: u64,
}

impl BoardModel {
    /// Parse a textual board and draw its hash basis from `seed`.
    pub fn new(encoding: &str, seed: u64) -> Result<Self, BoardError> {
        let parsed = parse_board(encoding)?;
        Self::from_parts(parsed.grid, parsed.terrain, parsed.initial, seed)
    }

    /// Assemble a board from already-decoded parts.
    ///
    /// Checks that the terrain covers the grid, that every placement is
    /// on a distinct non-wall cell, and that boxes and goals balance.
    pub fn from_parts(
        grid: Grid,
        terrain: Vec<Terrain>,
        initial: InitialPlacement,
        seed: u64,
    ) -> Result<Self, BoardError> {
        if terrain.len() != grid.cell_count() {
            return Err(MalformedBoard::TerrainLength {
                expected: grid.cell_count(),
                found: terrain.len(),
            }
            .into());
        }
        let mut occupied = vec![false; grid.cell_count()];
        for &cell in std::iter::once(&initial.agent).chain(initial.boxes.iter()) {
            let ok = grid.contains(cell)
                && terrain[cell.get()] != Terrain::Wall
                && !occupied[cell.get()];
            if !ok {
                return Err(MalformedBoard::InvalidPlacement { cell: cell.get() }.into());
            }
            occupied[cell.get()] = true;
        }
        let goals = terrain.iter().filter(|&&t| t == Terrain::Goal).count();
        if goals != initial.boxes.len() {
            return Err(MalformedBoard::BoxGoalMismatch {
                boxes: initial.boxes.len(),
                goals,
            }
            .into());
        }

        let basis = HashBasis::generate(grid.cell_count(), seed);
        let reach = GoalReach::compute(&grid, &terrain);
        let static_hash = terrain_hash(&grid, &terrain, &basis);
        tracing::debug!(
            rows = grid.rows(),
            cols = grid.cols(),
            boxes = initial.boxes.len(),
            seed,
            "built sokoban board"
        );
        Ok(Self {
            grid,
            terrain,
            basis,
            reach,
            initial,
            static_hash,
        })
    }

    /// The same layout with a hash basis drawn from a different seed.
    pub fn reseeded(&self, seed: u64) -> Self {
        let basis = HashBasis::generate(self.grid.cell_count(), seed);
        let static_hash = terrain_hash(&self.grid, &self.terrain, &basis);
        tracing::debug!(seed, "reseeded sokoban board");
        Self {
            grid: self.grid,
            terrain: self.terrain.clone(),
            basis,
            reach: self.reach.clone(),
            initial: self.initial.clone(),
            static_hash,
        }
    }

    /// Board geometry.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Number of rows.
    pub fn rows(&self) -> u32 {
        self.grid.rows()
    }

    /// Number of columns.
    pub fn cols(&self) -> u32 {
        self.grid.cols()
    }

    /// Total number of cells.
    pub fn cell_count(&self) -> usize {
        self.grid.cell_count()
    }

    /// Terrain of one cell.
    #[inline]
    pub fn terrain(&self, cell: CellIndex) -> Terrain {
        self.terrain[cell.get()]
    }

    /// Terrain of every cell, row-major.
    pub fn terrain_cells(&self) -> &[Terrain] {
        &self.terrain
    }

    /// Whether `cell` is a wall.
    #[inline]
    pub fn is_wall(&self, cell: CellIndex) -> bool {
        self.terrain[cell.get()] == Terrain::Wall
    }

    /// Whether `cell` is a goal.
    #[inline]
    pub fn is_goal(&self, cell: CellIndex) -> bool {
        self.terrain[cell.get()] == Terrain::Goal
    }

    /// Goal cells, row-major.
    pub fn goal_cells(&self) -> &[CellIndex] {
        self.reach.goals()
    }

    /// Zobrist basis.
    pub fn basis(&self) -> &HashBasis {
        &self.basis
    }

    /// Seed the basis was drawn from.
    pub fn seed(&self) -> u64 {
        self.basis.seed()
    }

    /// Per-goal reachability tables.
    pub fn reach(&self) -> &GoalReach {
        &self.reach
    }

    /// Placement a state starts from and resets to.
    pub fn initial(&self) -> &InitialPlacement {
        &self.initial
    }

    /// XOR of the wall and goal terrain keys; the part of every state
    /// hash that no move can change.
    pub fn static_hash(&self) -> u64 {
        self.static_hash
    }

    /// Whether two boards share dimensions and terrain. Seeds and initial
    /// placement are ignored.
    pub fn layout_eq(&self, other: &BoardModel) -> bool {
        self.grid == other.grid && self.terrain == other.terrain
    }
}

fn terrain_hash(grid: &Grid, terrain: &[Terrain], basis: &HashBasis) -> u64 {
    grid.cells()
        .filter_map(|c| match terrain[c.get()].hash_kind() {
            kind @ (HashKind::Wall | HashKind::Goal) => Some(basis.get(kind, c)),
            _ => None,
        })
        .fold(0, |h, k| h ^ k)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SCENARIO: &str = "2|3|1|1|1|0|2|3";

    #[test]
    fn builds_from_text() {
        let board = BoardModel::new(SCENARIO, 11).unwrap();
        assert_eq!(board.rows(), 2);
        assert_eq!(board.cols(), 3);
        assert_eq!(board.goal_cells(), &[CellIndex(5)]);
        assert!(board.is_wall(CellIndex(0)));
        assert!(board.is_goal(CellIndex(5)));
        assert_eq!(board.seed(), 11);
    }

    #[test]
    fn static_hash_covers_walls_and_goals() {
        let board = BoardModel::new(SCENARIO, 3).unwrap();
        let b = board.basis();
        let expected = b.get(HashKind::Wall, CellIndex(0))
            ^ b.get(HashKind::Wall, CellIndex(1))
            ^ b.get(HashKind::Wall, CellIndex(2))
            ^ b.get(HashKind::Goal, CellIndex(5));
        assert_eq!(board.static_hash(), expected);
    }

    #[test]
    fn reseeding_keeps_layout() {
        let board = BoardModel::new(SCENARIO, 1).unwrap();
        let other = board.reseeded(2);
        assert!(board.layout_eq(&other));
        assert_ne!(board.static_hash(), other.static_hash());
        assert_eq!(other.seed(), 2);
        assert_eq!(other.initial(), board.initial());
    }

    #[test]
    fn from_parts_rejects_bad_placements() {
        let parsed = parse_board(SCENARIO).unwrap();
        let on_wall = InitialPlacement {
            agent: CellIndex(0),
            boxes: parsed.initial.boxes.clone(),
        };
        assert_eq!(
            BoardModel::from_parts(parsed.grid, parsed.terrain.clone(), on_wall, 0).unwrap_err(),
            BoardError::Malformed(MalformedBoard::InvalidPlacement { cell: 0 })
        );

        let stacked = InitialPlacement {
            agent: CellIndex(4),
            boxes: vec![CellIndex(4)],
        };
        assert!(BoardModel::from_parts(parsed.grid, parsed.terrain.clone(), stacked, 0).is_err());

        let short = parsed.terrain[..5].to_vec();
        assert_eq!(
            BoardModel::from_parts(parsed.grid, short, parsed.initial, 0).unwrap_err(),
            BoardError::Malformed(MalformedBoard::TerrainLength {
                expected: 6,
                found: 5
            })
        );
    }

    #[test]
    fn board_is_shareable() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<BoardModel>();
    }
}
