//! Benchmark profiles and utilities for the Sokoban state engine.
//!
//! - [`open_room`]: a walled rectangular room of any size with a row of
//!   boxes and a row of goals, for scaling benchmarks
//! - [`action_sequence`]: a deterministic pseudo-random action stream

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use sokoban_core::{Action, Element};

/// Build a `rows x cols` room encoding.
///
/// The border is wall. Goals run along the first interior row, boxes
/// along the middle row (one column in from the walls), and the agent
/// starts in the bottom-right interior corner. `boxes` is clamped to
/// what fits. `rows` is raised to 5 and `cols` to 4 if smaller.
pub fn open_room(rows: u32, cols: u32, boxes: u32) -> String {
    let rows = rows.max(5);
    let cols = cols.max(4);
    let boxes = boxes.min(cols.saturating_sub(4)).max(1);
    let middle = rows / 2;

    let mut codes = Vec::with_capacity((rows * cols) as usize);
    for r in 0..rows {
        for c in 0..cols {
            let border = r == 0 || c == 0 || r == rows - 1 || c == cols - 1;
            let element = if border {
                Element::Wall
            } else if r == 1 && c <= boxes {
                Element::Goal
            } else if r == middle && (2..2 + boxes).contains(&c) {
                Element::Box
            } else if r == rows - 2 && c == cols - 2 {
                Element::Agent
            } else {
                Element::Empty
            };
            codes.push(element.code().to_string());
        }
    }
    format!("{rows}|{cols}|{}", codes.join("|"))
}

/// Generate `n` deterministic pseudo-random actions from `seed`.
pub fn action_sequence(n: usize, seed: u64) -> Vec<Action> {
    let mut x = seed.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
    (0..n)
        .map(|_| {
            x = x
                .wrapping_mul(6364136223846793005)
                .wrapping_add(1442695040888963407);
            Action::ALL[(x >> 62) as usize]
        })
        .collect()
}
