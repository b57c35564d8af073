//! FNV-1a fingerprint of a board layout.
//!
//! Traces carry this fingerprint so a replay can refuse to run against a
//! different board. It covers dimensions and terrain only: the hash seed
//! and the placement of movable pieces are deliberately left out.

use sokoban_board::BoardModel;

/// FNV-1a offset basis for 64-bit.
const FNV_OFFSET: u64 = 0xcbf29ce484222325;
/// FNV-1a prime for 64-bit.
const FNV_PRIME: u64 = 0x00000100000001B3;

#[inline]
fn fnv1a_byte(hash: u64, byte: u8) -> u64 {
    (hash ^ byte as u64).wrapping_mul(FNV_PRIME)
}

#[inline]
fn fnv1a_u32(mut hash: u64, v: u32) -> u64 {
    for &b in &v.to_le_bytes() {
        hash = fnv1a_byte(hash, b);
    }
    hash
}

/// Fingerprint of `board`'s rows, columns and terrain codes.
pub fn layout_hash(board: &BoardModel) -> u64 {
    let mut hash = FNV_OFFSET;
    hash = fnv1a_u32(hash, board.rows());
    hash = fnv1a_u32(hash, board.cols());
    for t in board.terrain_cells() {
        hash = fnv1a_byte(hash, t.code());
    }
    hash
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ignores_seed_and_placement() {
        let a = BoardModel::new("1|4|0|2|3|4", 1).unwrap();
        let moved = BoardModel::new("1|4|4|2|3|0", 9).unwrap();
        assert_eq!(layout_hash(&a), layout_hash(&moved));
        let other_goal = BoardModel::new("1|4|3|2|0|4", 1).unwrap();
        assert_ne!(layout_hash(&a), layout_hash(&other_goal));
    }

    #[test]
    fn dimensions_matter() {
        let wide = BoardModel::new("1|4|0|2|3|4", 0).unwrap();
        let tall = BoardModel::new("4|1|0|2|3|4", 0).unwrap();
        assert_ne!(layout_hash(&wide), layout_hash(&tall));
    }
}
