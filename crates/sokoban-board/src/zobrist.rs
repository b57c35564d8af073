//! Zobrist hash basis.
//!
//! One random 64-bit key per `(HashKind, cell)`. A state hash is the XOR
//! of the keys for everything present, so moving one entity costs two
//! XORs: the key of the old cell out, the key of the new cell in.

use rand_chacha::rand_core::{RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;
use sokoban_core::{CellIndex, HashKind};

/// Per-board table of Zobrist keys, drawn from a seeded ChaCha8 stream.
///
/// The same seed and cell count always produce the same table, so
/// hashes are reproducible across processes and a serialized state only
/// needs to carry its seed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HashBasis {
    cells: usize,
    seed: u64,
    keys: Vec<u64>,
}

impl HashBasis {
    /// Draw a basis for `cells` cells from `seed`.
    ///
    /// Keys are drawn kind-major: every cell of [`HashKind::Agent`]
    /// first, then every cell of the next kind.
    pub fn generate(cells: usize, seed: u64) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let keys = (0..HashKind::COUNT * cells)
            .map(|_| rng.next_u64())
            .collect();
        Self { cells, seed, keys }
    }

    /// The key for `kind` at `cell`.
    #[inline]
    pub fn get(&self, kind: HashKind, cell: CellIndex) -> u64 {
        self.keys[kind.row() * self.cells + cell.get()]
    }

    /// Seed the basis was drawn from.
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Number of cells covered.
    pub fn cell_count(&self) -> usize {
        self.cells
    }
}
