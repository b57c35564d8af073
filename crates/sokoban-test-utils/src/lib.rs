//! Test utilities for Sokoban development.
//!
//! Provides board fixtures with known solutions ([`fixtures`]), an
//! exhaustive breadth-first solvability oracle ([`oracle`]) for checking
//! deadlock soundness on small boards, and [`init_tracing`] for tests
//! that want to see engine logs.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;
pub mod oracle;

pub use fixtures::{Walkthrough, SMALL_BOARDS, WALKTHROUGHS};
pub use oracle::{reachable_states, solve, Solvability};

/// Install a test subscriber honouring `RUST_LOG`. Safe to call from
/// every test; only the first call has an effect.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}
